use ct_cards::Card;
use ct_core::Point;
use ct_core::Rect;
use serde::Deserialize;
use serde::Serialize;

/// A client's request to mutate shared state. Not guaranteed to be applied
/// verbatim: positions clamp, selection claims can lose races, ownership
/// rules override intent.
///
/// The wire format is the `type`-discriminated JSON the reference client
/// speaks; the closed enum makes "unknown type" a decode error rather than
/// a fallback branch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Intent {
    /// Cursor position and button state, sent on every pointer event.
    Cursor {
        cursor_position: Point,
        cursor_pressed: bool,
    },
    /// Relative move of a single card.
    Card { card: Card, movement: Point },
    /// Group-aware move: carries the sender's whole selection when the
    /// named card belongs to it.
    CardAll { card: Card, movement: Point },
    /// Toggle a card face up or down (selection-aware).
    CardFlip { card: Card },
    /// Selection rectangle drag update; `null` clears the rectangle
    /// without touching selections.
    Selection { selection: Option<Rect> },
    /// End of a selection drag.
    EndSelection,
    /// Release everything the sender has selected.
    Deselect,
    /// Change display name.
    Name { name: String },
    /// Chat line, relayed immediately rather than snapshotted.
    Chat { message: String },
    /// Return the whole deck to the staging pile.
    Reset,
    /// Sort the sender's hand by suit, then rank.
    SortSuit,
    /// Sort the sender's hand by rank, then suit.
    SortRank,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Cursor { cursor_position, .. } => write!(f, "cursor {}", cursor_position),
            Intent::Card { card, movement } => write!(f, "card {} by {}", card, movement),
            Intent::CardAll { card, movement } => write!(f, "cardAll {} by {}", card, movement),
            Intent::CardFlip { card } => write!(f, "cardFlip {}", card),
            Intent::Selection { selection: Some(_) } => write!(f, "selection"),
            Intent::Selection { selection: None } => write!(f, "selection cleared"),
            Intent::EndSelection => write!(f, "endSelection"),
            Intent::Deselect => write!(f, "deselect"),
            Intent::Name { name } => write!(f, "name {:?}", name),
            Intent::Chat { .. } => write!(f, "chat"),
            Intent::Reset => write!(f, "reset"),
            Intent::SortSuit => write!(f, "sortSuit"),
            Intent::SortRank => write!(f, "sortRank"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn cursor_wire_shape() {
        let json = r#"{"type":"cursor","cursorPosition":{"x":12.0,"y":34.0},"cursorPressed":true}"#;
        let intent = serde_json::from_str::<Intent>(json).unwrap();
        assert_eq!(
            intent,
            Intent::Cursor {
                cursor_position: Point::new(12.0, 34.0),
                cursor_pressed: true,
            }
        );
    }
    #[test]
    fn card_move_wire_shape() {
        let json = r#"{"type":"card","card":"HEART=12-QUEEN","movement":{"x":3.0,"y":-4.0}}"#;
        let intent = serde_json::from_str::<Intent>(json).unwrap();
        match intent {
            Intent::Card { card, movement } => {
                assert_eq!(card.to_string(), "HEART=12-QUEEN");
                assert_eq!(movement, Point::new(3.0, -4.0));
            }
            other => panic!("decoded {:?}", other),
        }
    }
    #[test]
    fn selection_null_clears() {
        let json = r#"{"type":"selection","selection":null}"#;
        let intent = serde_json::from_str::<Intent>(json).unwrap();
        assert_eq!(intent, Intent::Selection { selection: None });
    }
    #[test]
    fn bare_variants_decode() {
        for (json, intent) in [
            (r#"{"type":"endSelection"}"#, Intent::EndSelection),
            (r#"{"type":"deselect"}"#, Intent::Deselect),
            (r#"{"type":"reset"}"#, Intent::Reset),
            (r#"{"type":"sortSuit"}"#, Intent::SortSuit),
            (r#"{"type":"sortRank"}"#, Intent::SortRank),
        ] {
            assert_eq!(serde_json::from_str::<Intent>(json).unwrap(), intent);
        }
    }
    #[test]
    fn round_trips_through_serde() {
        let intent = Intent::CardAll {
            card: Card::try_from("SPADE=2").unwrap(),
            movement: Point::new(1.0, 2.0),
        };
        let json = serde_json::to_string(&intent).unwrap();
        assert_eq!(serde_json::from_str::<Intent>(&json).unwrap(), intent);
    }
}
