//! Transport layer between WebSocket sessions and room tasks.
//!
//! [`Lobby`] is the room registry: rooms are keyed by name, created on
//! first entry, and evicted once their task ends. `Lobby::bridge` adapts
//! one `actix_ws` session into a room's event vocabulary, so the room
//! itself never touches a socket.
mod lobby;

pub use lobby::*;
