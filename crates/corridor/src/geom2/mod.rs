//! 2D primitives and line solvers.
//!
//! Purpose
//! - Provide the segment value type with its canonical endpoint ordering,
//!   the centralized tolerances (`GeomCfg`), and the closed-form solvers the
//!   reachability pipeline is built from: vector/line determinant, ray/line
//!   intersection, and the per-axis linear solves.
//!
//! Conventions
//! - A `Segment` is a pair of points. Some consumers treat it as a bounded
//!   range, others as the infinite line through its endpoints; every function
//!   taking the line view says so in its docs.
//! - Numeric edge cases are explicit: parallelism is a first-class `RayHit`
//!   variant, degenerate-axis solves are `GeomError`s. No Inf/NaN leaks out
//!   of this module's solvers.

pub mod rand;
mod solvers;
mod types;

pub use solvers::{determinant, intersect, solve_x, solve_y, RayHit};
pub use types::{GeomCfg, GeomError, Segment};

#[cfg(test)]
mod tests;
