//! Motion-corridor reachability in the plane.
//!
//! Given a reference interval of starting positions, two bounding travel
//! directions, and a fixed target edge, decide which part of the edge (if any)
//! some trajectory inside the directional cone can reach.
//!
//! Layout
//! - `geom2`: primitives (segments, tolerances), the ray/line solvers, and a
//!   reproducible random scenario sampler for tests and benches.
//! - `reach`: the projection/clip/decision pipeline built on `geom2`.

pub mod geom2;
pub mod reach;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{Point2, Vector2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_scenario, ReplayToken, Scenario, ScenarioCfg};
    pub use crate::geom2::{
        determinant, intersect, solve_x, solve_y, GeomCfg, GeomError, RayHit, Segment,
    };
    pub use crate::reach::{clip_range, interval_range, reachability, Reachability};
    pub use nalgebra::{Point2, Vector2};
}
