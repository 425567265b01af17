//! Client-side state for a card-table connection.
//!
//! The server is authoritative and speaks in whole-room snapshots, so the
//! client keeps no delta machinery: [`Cache`] swallows each `fullupdate`
//! wholesale and re-derives everything per frame. The one piece of local
//! intelligence is hand layout: [`Layout`] spaces slots along the player's
//! hand band and [`Cache::reconcile`] solves a card-to-slot assignment each
//! frame, nudging every card a decaying fraction of the way to its slot.
//! The nudges go out as ordinary relative `card` moves, so a reconciling
//! client is indistinguishable from a careful human to the room.
mod cache;
mod layout;

pub use cache::*;
pub use layout::*;
