//! Basic 2D types: tolerances, the segment value type, and solver errors.
//!
//! - `GeomCfg`: centralizes the parallelism epsilon used by the intersection
//!   solver.
//! - `Segment`: two points, doing double duty as a bounded range and as the
//!   infinite line through its endpoints (see `geom2` module docs).
//! - `GeomError`: the explicit failures of the linear solvers.

use nalgebra::Point2;
use thiserror::Error;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Determinants with absolute value at or below this count as parallel.
    pub eps_det: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_det: 1e-12 }
    }
}

/// Explicit solver failures. Parallel rays are not an error; see `RayHit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeomError {
    /// A linear solve was asked for a coordinate the line cannot determine:
    /// `solve_y` on a horizontal line or `solve_x` on a vertical one.
    #[error("line is degenerate in the solved axis")]
    DegenerateLine,
    /// A zero-length direction vector was passed to the intersection solver.
    #[error("direction vector has zero length")]
    InvalidDirection,
}

/// A pair of points in the plane.
///
/// Dual role: the bounded segment between `p1` and `p2` (the moving interval,
/// the target edge), or the infinite line through them (inputs to
/// `intersect`/`solve_x`/`solve_y`). Bounded consumers that compare endpoint
/// coordinates require the canonical ordering established by [`canonical`].
///
/// [`canonical`]: Segment::canonical
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point2<f64>,
    pub p2: Point2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(p1: Point2<f64>, p2: Point2<f64>) -> Self {
        Self { p1, p2 }
    }

    /// Construct from raw coordinates `(x1, y1)-(x2, y2)`.
    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// Reorder the endpoints as whole points: `p1` gets the lower x, ties
    /// broken by lower y. Idempotent. The endpoints are swapped together, so
    /// the point pairing is preserved.
    #[inline]
    pub fn canonical(self) -> Self {
        let swap = self.p1.x > self.p2.x || (self.p1.x == self.p2.x && self.p1.y > self.p2.y);
        if swap {
            Self::new(self.p2, self.p1)
        } else {
            self
        }
    }

    /// True when both endpoints share an x coordinate (the line view is
    /// vertical, or the segment is a single point).
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.p1.x == self.p2.x
    }

    /// True when both endpoints share a y coordinate.
    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.p1.y == self.p2.y
    }
}
