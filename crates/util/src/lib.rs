//! Core type aliases, traits, and constants for the card table.
//!
//! This crate provides the foundational types and configuration parameters
//! used throughout the card-table workspace.
#![allow(dead_code)]

mod geometry;

pub use geometry::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Table-space coordinates and distances, in CSS pixels.
pub type Pixels = f32;
/// Card rotation. Currently always zero, carried for wire compatibility.
pub type Degrees = f32;
/// Stacking order. Higher values draw (and hit-test) on top.
pub type ZIndex = i32;
/// Per-room join counter, used for display names and hand-band spacing.
pub type Ordinal = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

// ============================================================================
// IDENTITY TYPES
// ============================================================================
use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Generic ID wrapper providing compile-time type safety over uuid::Uuid.
///
/// Connection ids are minted fresh (uuid v7) per session and never reused,
/// so an `ID<Player>` observed after its disconnect refers to nothing.
pub struct ID<T> {
    inner: uuid::Uuid,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> uuid::Uuid {
        self.inner
    }
    /// Cast ID<T> to ID<U> while preserving the underlying UUID.
    pub fn cast<U>(self) -> ID<U> {
        ID {
            inner: self.inner,
            marker: PhantomData,
        }
    }
}

impl<T> From<ID<T>> for uuid::Uuid {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<uuid::Uuid> for ID<T> {
    fn from(inner: uuid::Uuid) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Default for ID<T> {
    fn default() -> Self {
        Self {
            inner: uuid::Uuid::now_v7(),
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

/// Wire representation is the bare UUID string, so ids double as JSON map keys.
impl<T> serde::Serialize for ID<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.inner.serialize(serializer)
    }
}
impl<'de, T> serde::Deserialize<'de> for ID<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        uuid::Uuid::deserialize(deserializer).map(Self::from)
    }
}

// ============================================================================
// Z-ORDER BANDS
// Three disjoint numeric bands partition the stacking space. Table cards
// climb from the table base; each player's hand occupies its own window
// above the hand base; reset cards sink into the (negative) reset band.
// ============================================================================
/// First z-index handed out for table-band cards.
pub const Z_TABLE_BASE: ZIndex = 10_000;
/// Counter advance per move operation, regardless of cards touched.
/// Leaves headroom so concurrently issued batches never collide.
pub const Z_STRIDE: ZIndex = 52;
/// First z-index of the per-player hand band.
pub const Z_HAND_BASE: ZIndex = 1_000_000;
/// Width of one player's hand-band window.
pub const Z_HAND_SPAN: ZIndex = 1_000;
/// Inclusive lower bound of the randomized reset band.
pub const Z_RESET_MIN: ZIndex = -20_000;
/// Exclusive upper bound of the randomized reset band.
pub const Z_RESET_MAX: ZIndex = -10_000;
/// Initial deck z-indices are drawn (without replacement) below the table base.
pub const Z_DEAL_RANGE: ZIndex = 10_000;

// ============================================================================
// BROADCAST SCHEDULING
// ============================================================================
/// Broadcast tick rate in Hz. One snapshot per tick at most, none when idle.
pub const BROADCAST_HZ: u32 = 240;

// ============================================================================
// HAND LAYOUT RECONCILIATION
// ============================================================================
/// Exponential decay constant for corrective move intents (per second).
/// Each frame covers `1 - exp(-LAYOUT_DECAY * dt)` of the residual.
pub const LAYOUT_DECAY: f32 = 25.0;
/// Residual displacement (pixels) under which a card is considered seated.
pub const LAYOUT_SNAP: Pixels = 2.0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate (non-graceful) termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.unwrap();
        println!();
        log::warn!("violent interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
