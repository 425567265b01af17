//! Minimum-cost bipartite assignment.
//!
//! This crate solves the rectangular linear assignment problem: match M
//! items to N slots (M <= N) one-to-one so that the total ground cost is
//! minimal. The hand layout loop feeds it squared Euclidean distances every
//! animation frame, so the solver must be exact, allocation-light, and
//! comfortable with membership that changes between calls.
//!
//! ## Core Types
//!
//! - [`Costs`] — A dense row-major ground cost matrix
//! - [`Matching`] — The solved item -> slot mapping and its total cost
//!
//! ## Algorithm
//!
//! Shortest augmenting path over reduced costs (the Jonker–Volgenant
//! family): one Dijkstra-like sweep per row maintains dual potentials so
//! that every augmentation is optimal. O(M * N^2) on dense inputs.
mod costs;
mod matching;

pub use costs::*;
pub use matching::*;
