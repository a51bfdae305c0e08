//! Closed-form line solvers: determinant, ray/line intersection, and the
//! per-axis linear solves.
//!
//! All functions here take the *line* view of a `Segment`: the infinite line
//! through its two endpoints. Boundedness is ignored; clipping against the
//! segment's own extent is the caller's job (`reach::clip_range`).

use nalgebra::{Point2, Vector2};

use super::types::{GeomCfg, GeomError, Segment};

/// Result of shooting a ray at a line: either the unique meeting point of the
/// two lines, or `Parallel` when the direction is parallel to the target
/// (collinear included). Deliberately not a magic point value, so it can never
/// be confused with a finite intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RayHit {
    Hit(Point2<f64>),
    Parallel,
}

impl RayHit {
    /// The finite intersection point, if any.
    #[inline]
    pub fn point(self) -> Option<Point2<f64>> {
        match self {
            RayHit::Hit(p) => Some(p),
            RayHit::Parallel => None,
        }
    }

    #[inline]
    pub fn is_parallel(self) -> bool {
        matches!(self, RayHit::Parallel)
    }
}

/// Cross-product-like pairing of a direction with the line through `e`.
/// Zero means `v` is parallel to that line. Line view: `e`'s bounds are
/// ignored.
#[inline]
pub fn determinant(v: Vector2<f64>, e: &Segment) -> f64 {
    v.y * (e.p1.x - e.p2.x) - v.x * (e.p1.y - e.p2.y)
}

/// Where the line through `origin` with direction `v` meets the line through
/// `e` (line view). Returns `RayHit::Parallel` when the determinant is within
/// `cfg.eps_det` of zero; the closed form is never evaluated in that case, so
/// no division by (near-)zero happens.
///
/// A zero-length `v` is a precondition violation, reported as
/// `GeomError::InvalidDirection`.
pub fn intersect(
    origin: Point2<f64>,
    v: Vector2<f64>,
    e: &Segment,
    cfg: GeomCfg,
) -> Result<RayHit, GeomError> {
    if v.x == 0.0 && v.y == 0.0 {
        return Err(GeomError::InvalidDirection);
    }
    let d = determinant(v, e);
    if d.abs() <= cfg.eps_det {
        return Ok(RayHit::Parallel);
    }
    // Solve the 2x2 system formed by the ray's line `v.y*x - v.x*y = v×origin`
    // and the two-point line equation of `e`.
    let ex = e.p1.x - e.p2.x;
    let ey = e.p2.y - e.p1.y;
    let ray_c = v.y * origin.x - v.x * origin.y;
    let edge_c = ey * e.p1.x + ex * e.p1.y;
    let x = (ex * ray_c + v.x * edge_c) / d;
    let y = (v.y * edge_c - ey * ray_c) / d;
    Ok(RayHit::Hit(Point2::new(x, y)))
}

/// y at the given x on the line through `l` (line view). Fails with
/// `DegenerateLine` when the line is vertical, where y is not a function of x.
#[inline]
pub fn solve_y(x: f64, l: &Segment) -> Result<f64, GeomError> {
    if l.is_vertical() {
        return Err(GeomError::DegenerateLine);
    }
    Ok(l.p1.y + (x - l.p1.x) * (l.p2.y - l.p1.y) / (l.p2.x - l.p1.x))
}

/// x at the given y on the line through `l` (line view). Fails with
/// `DegenerateLine` when the line is horizontal.
#[inline]
pub fn solve_x(y: f64, l: &Segment) -> Result<f64, GeomError> {
    if l.is_horizontal() {
        return Err(GeomError::DegenerateLine);
    }
    Ok(l.p1.x + (y - l.p1.y) * (l.p2.x - l.p1.x) / (l.p2.y - l.p1.y))
}
