use ct_cards::Card;
use ct_cards::Rank;
use ct_cards::Suit;
use ct_core::Degrees;
use ct_core::Point;
use ct_core::Rect;
use ct_core::ZIndex;
use ct_table::PlayerId;
use ct_table::Table;
use ct_table::Visibility;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// One card's full attribute set as it crosses the wire. Suit and value are
/// repeated inside the record (the reference client reads them for face
/// art) even though the map key already encodes them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub suit: Suit,
    pub value: Rank,
    pub position: Point,
    pub rotation: Degrees,
    pub flipped: bool,
    pub visible_only_to: Visibility,
    pub selected_by: Option<PlayerId>,
    pub z_index: ZIndex,
}

/// One player's full attribute set as it crosses the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub cursor_position: Point,
    pub cursor_pressed: bool,
    pub selection: Option<Rect>,
}

/// Messages sent from server to clients over WebSocket.
///
/// `fullupdate` is the whole room every time: self-describing and
/// idempotent to apply, so clients need no delta bookkeeping and a missed
/// tick costs nothing. Identical bytes go to every connection; visibility
/// is a cooperative-client boundary, not a wire filter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Fullupdate {
        players: HashMap<PlayerId, PlayerRecord>,
        cards: BTreeMap<Card, CardRecord>,
    },
    Chat {
        id: PlayerId,
        name: String,
        message: String,
    },
}

impl ServerMessage {
    /// Snapshots the settled table. Only called between mutations, so the
    /// captured state is always consistent.
    pub fn fullupdate(table: &Table) -> Self {
        let players = table
            .players()
            .iter()
            .map(|(id, player)| {
                let record = PlayerRecord {
                    id: *id,
                    name: player.name.clone(),
                    cursor_position: player.cursor_position,
                    cursor_pressed: player.cursor_pressed,
                    selection: player.selection,
                };
                (*id, record)
            })
            .collect();
        let cards = table
            .cards()
            .iter()
            .map(|(card, state)| {
                let record = CardRecord {
                    suit: card.suit,
                    value: card.rank,
                    position: state.position,
                    rotation: state.rotation,
                    flipped: state.flipped,
                    visible_only_to: state.visibility,
                    selected_by: state.selected_by,
                    z_index: state.z_index,
                };
                (*card, record)
            })
            .collect();
        Self::Fullupdate { players, cards }
    }
    pub fn chat(id: PlayerId, name: &str, message: &str) -> Self {
        Self::Chat {
            id,
            name: name.to_string(),
            message: message.to_string(),
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_core::Geometry;

    #[test]
    fn fullupdate_covers_whole_room() {
        let mut table = Table::new(Geometry::default());
        let id = PlayerId::default();
        table.connect(id);
        let json = ServerMessage::fullupdate(&table).to_json();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        assert_eq!(value["type"], "fullupdate");
        assert_eq!(value["cards"].as_object().unwrap().len(), 52);
        assert_eq!(value["players"].as_object().unwrap().len(), 1);
    }
    #[test]
    fn card_record_wire_keys() {
        let mut table = Table::new(Geometry::default());
        table.connect(PlayerId::default());
        let json = ServerMessage::fullupdate(&table).to_json();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        let card = &value["cards"]["CLUB=3"];
        assert_eq!(card["suit"], "CLUB");
        assert_eq!(card["value"], "3");
        assert_eq!(card["visibleOnlyTo"], "all");
        assert_eq!(card["flipped"], true);
        assert!(card["zIndex"].is_i64());
        assert!(card["selectedBy"].is_null());
        assert!(card["position"]["x"].is_number());
    }
    #[test]
    fn player_record_wire_keys() {
        let mut table = Table::new(Geometry::default());
        let id = PlayerId::default();
        table.connect(id);
        let json = ServerMessage::fullupdate(&table).to_json();
        let value = serde_json::from_str::<serde_json::Value>(&json).unwrap();
        let player = &value["players"][id.to_string()];
        assert_eq!(player["name"], "Player 1");
        assert_eq!(player["id"], id.to_string());
        assert_eq!(player["cursorPressed"], false);
        assert!(player["selection"].is_null());
    }
    #[test]
    fn snapshot_round_trips() {
        let mut table = Table::new(Geometry::default());
        table.connect(PlayerId::default());
        let message = ServerMessage::fullupdate(&table);
        let json = message.to_json();
        assert_eq!(serde_json::from_str::<ServerMessage>(&json).unwrap(), message);
    }
}
