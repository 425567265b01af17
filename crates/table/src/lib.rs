//! Authoritative state for one shared card table.
//!
//! [`Table`] owns every card and player in a room and exposes one mutation
//! per client intent. Mutations are plain synchronous methods: the room
//! actor that owns the table applies them one at a time, so each runs
//! atomically with respect to every other mutation and to the broadcast
//! reads between them. Nothing here is async and nothing here touches the
//! wire.
//!
//! ## Components
//!
//! - [`Table`] — entity store plus the mutation entry points
//! - [`CardState`] — mutable per-card attributes (identity lives in `ct-cards`)
//! - [`Player`] — per-connection presence, cursor, and selection rectangle
//! - [`Visibility`] — the `all`-or-one-owner visibility state and its
//!   position-driven transitions
//!
//! ## Invariants
//!
//! - `visibility` is `All` or names a currently connected player
//! - `selected_by` is empty or names a currently connected player
//! - z-indices are pairwise distinct across all 52 cards at every settle
mod player;
mod selection;
mod state;
mod table;
mod visibility;
mod zorder;

pub use player::*;
pub use state::*;
pub use table::*;
pub use visibility::*;
