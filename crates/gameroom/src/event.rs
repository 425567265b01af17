use ct_table::PlayerId;
use tokio::sync::mpsc::UnboundedSender;

/// Everything that can happen to a room, funneled through one inbox so the
/// room task is the only writer of table state.
pub enum Event {
    /// A WebSocket connection opened. The outbox carries encoded frames
    /// back toward the socket.
    Join {
        id: PlayerId,
        outbox: UnboundedSender<String>,
    },
    /// An inbound text frame, still undecoded.
    Intent { id: PlayerId, text: String },
    /// The connection closed, cleanly or not.
    Leave { id: PlayerId },
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Join { id, .. } => write!(f, "join {}", id),
            Self::Intent { id, .. } => write!(f, "intent {}", id),
            Self::Leave { id } => write!(f, "leave {}", id),
        }
    }
}
