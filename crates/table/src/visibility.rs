use super::PlayerId;
use super::Table;
use ct_cards::Card;

/// Who may see a card's face position. Exactly one of: everyone, or one
/// connected player (the card is "claimed" into that player's hand).
///
/// Wire form is the sentinel string `"all"` or the owner's id, matching the
/// reference client's `visibleOnlyTo` field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    All,
    Only(PlayerId),
}

impl Visibility {
    /// Whether the given player may see (and therefore select) the card.
    pub fn seen_by(&self, player: PlayerId) -> bool {
        match self {
            Visibility::All => true,
            Visibility::Only(owner) => *owner == player,
        }
    }
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Visibility::All => None,
            Visibility::Only(owner) => Some(*owner),
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::All => write!(f, "all"),
            Visibility::Only(owner) => write!(f, "{}", owner),
        }
    }
}

impl serde::Serialize for Visibility {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Visibility::All => serializer.serialize_str("all"),
            Visibility::Only(owner) => owner.serialize(serializer),
        }
    }
}
impl<'de> serde::Deserialize<'de> for Visibility {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        match s.as_str() {
            "all" => Ok(Visibility::All),
            id => id
                .parse::<uuid::Uuid>()
                .map(|uuid| Visibility::Only(PlayerId::from(uuid)))
                .map_err(serde::de::Error::custom),
        }
    }
}

impl Table {
    /// Re-resolves a card's visibility from its position after a move.
    ///
    /// Above the hand threshold the card returns to shared space
    /// unconditionally. Below it, an unowned card is claimed by the mover;
    /// a card already claimed keeps its owner, so position alone never
    /// transfers a card between two private hands.
    pub(crate) fn resolve_visibility(&mut self, mover: PlayerId, card: Card) {
        let geometry = self.geometry();
        let Some(state) = self.state_mut(&card) else {
            return;
        };
        if geometry.on_table(&state.position) {
            state.visibility = Visibility::All;
        } else if state.visibility == Visibility::All {
            log::debug!("[table] {} claimed by {}", card, mover);
            state.visibility = Visibility::Only(mover);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn wire_sentinel() {
        let json = serde_json::to_string(&Visibility::All).unwrap();
        assert_eq!(json, r#""all""#);
        assert_eq!(
            serde_json::from_str::<Visibility>(&json).unwrap(),
            Visibility::All
        );
    }
    #[test]
    fn wire_owner_round_trip() {
        let owner = PlayerId::default();
        let json = serde_json::to_string(&Visibility::Only(owner)).unwrap();
        assert_eq!(
            serde_json::from_str::<Visibility>(&json).unwrap(),
            Visibility::Only(owner)
        );
    }
}
