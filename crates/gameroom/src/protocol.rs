use crate::Intent;

/// Why an inbound frame was rejected. Bad frames are logged and dropped;
/// they never tear down the connection or the room.
#[derive(Debug)]
pub enum ProtocolError {
    Malformed(String),
    UnknownType(String),
}

impl std::fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Malformed(detail) => write!(f, "malformed frame: {}", detail),
            Self::UnknownType(detail) => write!(f, "unknown intent type: {}", detail),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Decodes inbound WebSocket text frames into intents.
pub struct Protocol;

impl Protocol {
    /// Wire tokens of every intent the room understands. Kept in sync with
    /// the [`Intent`] serde tags (covered by test).
    pub const TYPES: [&'static str; 12] = [
        "cursor",
        "card",
        "cardAll",
        "cardFlip",
        "selection",
        "endSelection",
        "deselect",
        "name",
        "chat",
        "reset",
        "sortSuit",
        "sortRank",
    ];
    /// The `type` discriminator is inspected before the full decode, so an
    /// unrecognized intent is distinguishable from a recognized one with a
    /// bad payload without parsing serde's error wording.
    pub fn decode(text: &str) -> Result<Intent, ProtocolError> {
        let value = serde_json::from_str::<serde_json::Value>(text)
            .map_err(|e| ProtocolError::Malformed(e.to_string()))?;
        match value.get("type").and_then(serde_json::Value::as_str) {
            None => Err(ProtocolError::Malformed("no type discriminator".to_string())),
            Some(kind) if !Self::TYPES.contains(&kind) => {
                Err(ProtocolError::UnknownType(kind.to_string()))
            }
            Some(_) => {
                serde_json::from_value(value).map_err(|e| ProtocolError::Malformed(e.to_string()))
            }
        }
    }
}
