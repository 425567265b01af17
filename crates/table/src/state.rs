use super::PlayerId;
use super::Visibility;
use ct_core::Degrees;
use ct_core::Point;
use ct_core::ZIndex;

/// Mutable per-card attributes. The identity (suit, rank) is the map key;
/// this is everything that changes underneath it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardState {
    pub position: Point,
    pub rotation: Degrees,
    pub flipped: bool,
    pub visibility: Visibility,
    pub selected_by: Option<PlayerId>,
    pub z_index: ZIndex,
}

impl CardState {
    /// A card at the staging position: face down, shared, unselected.
    pub fn staged(staging: Point, rotation: Degrees, z_index: ZIndex) -> Self {
        Self {
            position: staging,
            rotation,
            flipped: true,
            visibility: Visibility::All,
            selected_by: None,
            z_index,
        }
    }
    /// Whether the given player holds this card in their private hand.
    pub fn held_by(&self, player: PlayerId) -> bool {
        self.visibility == Visibility::Only(player)
    }
}
