//! Card identity for the shared table.
//!
//! A card is a (suit, rank) pair with a stable wire key of the form
//! `"SUIT=VALUE"` (e.g. `"HEART=12-QUEEN"`). The full 52-card deck is
//! created once per room and never grows or shrinks; only per-card table
//! state (position, visibility, ...) ever mutates, and that state lives
//! elsewhere. This crate knows nothing about rooms.
mod card;
mod rank;
mod suit;

pub use card::*;
pub use rank::*;
pub use suit::*;
