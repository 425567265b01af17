//! Async runtime for live card-table rooms.
//!
//! This crate turns the synchronous [`ct_table::Table`] into a running
//! room: a tokio task that exclusively owns the table, drains an intent
//! queue, and fans settled snapshots out to every connection on a fixed
//! tick. The transport (WebSocket bridging) lives a crate up in
//! `ct-hosting`; this crate only ever sees strings in and strings out.
//!
//! ## Architecture
//!
//! - [`Room`] — per-room actor: one inbox, serialized mutations, owned state
//! - [`Event`] — envelope from the transport: join, raw intent text, leave
//! - [`Intent`] — the decoded client wire message (tagged JSON)
//! - [`ServerMessage`] — outbound wire messages (`fullupdate`, `chat`)
//! - [`Protocol`] — decode/classify layer between text and [`Intent`]
//! - [`TickConfig`] — broadcast cadence for the dirty-flag scheduler
mod event;
mod intent;
mod message;
mod protocol;
mod room;
mod tick;

pub use event::*;
pub use intent::*;
pub use message::*;
pub use protocol::*;
pub use room::*;
pub use tick::*;
