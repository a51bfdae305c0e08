//! Reachability of a fixed edge from a moving interval.
//!
//! Pipeline
//! - `interval_range`: shoot the four bounding rays (two interval endpoints ×
//!   two cone directions) at the edge's line and bound their footprint.
//! - `clip_range`: cut that footprint down to the edge's own extent.
//! - `reachability`: the decision, `Unreachable` or `Reachable(sub-segment)`.
//!
//! The evaluator computes only; it never prints. Formatting is the caller's
//! concern (see the cli crate).

mod eval;

pub use eval::{clip_range, interval_range, reachability, Reachability};
