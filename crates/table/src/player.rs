use ct_core::ID;
use ct_core::Ordinal;
use ct_core::Point;
use ct_core::Rect;

/// Opaque per-connection identity. Minted on connect, never reused.
pub type PlayerId = ID<Player>;

/// A connected player's presence at the table.
///
/// Exists from connect to disconnect only; nothing persists past the
/// session. The ordinal is the room's join counter, used for the generated
/// display name and to space the player's hand-band z window.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub ordinal: Ordinal,
    pub cursor_position: Point,
    pub cursor_pressed: bool,
    pub selection: Option<Rect>,
}

impl Player {
    pub fn new(ordinal: Ordinal) -> Self {
        Self {
            name: format!("Player {}", ordinal),
            ordinal,
            cursor_position: Point::default(),
            cursor_pressed: false,
            selection: None,
        }
    }
}
