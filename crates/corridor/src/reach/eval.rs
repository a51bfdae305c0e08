//! Cone projection, clipping, and the reachable/unreachable decision.

use nalgebra::{Point2, Vector2};

use crate::geom2::{intersect, solve_x, solve_y, GeomCfg, GeomError, RayHit, Segment};

/// Outcome of a reachability evaluation. Two terminal states, nothing else.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reachability {
    Unreachable,
    /// The sub-segment of the edge that some trajectory in the cone reaches.
    Reachable(Segment),
}

/// Project the directional cone onto the line carrying `edge`.
///
/// Shoots rays from both interval endpoints along both bounding directions,
/// then bounds the four results componentwise. Rays parallel to the edge's
/// line count as +inf in the minimum and are rebound to -inf before the
/// maximum, so a ray that never meets the line cannot win either bound.
///
/// The output lies on `edge`'s infinite line and is not clipped to `edge`'s
/// own extent. Its endpoints are ordered along the primary axis (x when the
/// footprint has any horizontal spread, y otherwise). When the whole cone is
/// parallel to the edge the footprint is empty; the returned segment is the
/// degenerate `(-inf,-inf)-(-inf,-inf)`, which `reachability` classifies as
/// unreachable.
pub fn interval_range(
    interval: Segment,
    a: Vector2<f64>,
    b: Vector2<f64>,
    edge: Segment,
    cfg: GeomCfg,
) -> Result<Segment, GeomError> {
    let hits: [RayHit; 4] = [
        intersect(interval.p1, a, &edge, cfg)?,
        intersect(interval.p1, b, &edge, cfg)?,
        intersect(interval.p2, a, &edge, cfg)?,
        intersect(interval.p2, b, &edge, cfg)?,
    ];
    if hits.iter().all(|h| h.is_parallel()) {
        let far = Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        return Ok(Segment::new(far, far));
    }

    // Parallel hits must not influence the bounds: they count as +inf in the
    // minimum and -inf in the maximum, so neither fold can pick them.
    let for_min = hits.map(|h| h.point().unwrap_or(Point2::new(f64::INFINITY, f64::INFINITY)));
    let for_max = hits.map(|h| {
        h.point()
            .unwrap_or(Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY))
    });
    let xmin = for_min.iter().fold(f64::INFINITY, |m, p| m.min(p.x));
    let ymin = for_min.iter().fold(f64::INFINITY, |m, p| m.min(p.y));
    let xmax = for_max.iter().fold(f64::NEG_INFINITY, |m, p| m.max(p.x));
    let ymax = for_max.iter().fold(f64::NEG_INFINITY, |m, p| m.max(p.y));

    if xmin < xmax {
        // Horizontal spread: parameterize by x. The spread implies the edge's
        // line is not vertical, so solve_y is well-defined.
        Ok(Segment::from_coords(
            xmin,
            solve_y(xmin, &edge)?,
            xmax,
            solve_y(xmax, &edge)?,
        ))
    } else {
        // Vertical footprint (including all four x coinciding).
        Ok(Segment::from_coords(
            solve_x(ymin, &edge)?,
            ymin,
            solve_x(ymax, &edge)?,
            ymax,
        ))
    }
}

/// Clip a projected footprint to the bounded extent of `edge`.
///
/// Works along the footprint's primary axis: max of the lower bounds, min of
/// the upper bounds, with the other coordinate recovered by a linear solve on
/// the *footprint's* line. `edge` must be canonically ordered or the bound
/// comparisons are meaningless.
pub fn clip_range(projected: Segment, edge: Segment) -> Result<Segment, GeomError> {
    if projected.p1.x < projected.p2.x {
        let lo = projected.p1.x.max(edge.p1.x);
        let hi = projected.p2.x.min(edge.p2.x);
        Ok(Segment::from_coords(
            lo,
            solve_y(lo, &projected)?,
            hi,
            solve_y(hi, &projected)?,
        ))
    } else {
        let lo = projected.p1.y.max(edge.p1.y);
        let hi = projected.p2.y.min(edge.p2.y);
        Ok(Segment::from_coords(
            solve_x(lo, &projected)?,
            lo,
            solve_x(hi, &projected)?,
            hi,
        ))
    }
}

/// Decide whether `edge` is reachable from `interval` within the cone spanned
/// by `a` and `b`, and return the reachable sub-segment if so.
///
/// Both the interval and the edge are canonicalized here; callers may pass
/// them in any endpoint order. The overlap test compares the projected
/// footprint against the edge along the footprint's primary axis.
pub fn reachability(
    interval: Segment,
    a: Vector2<f64>,
    b: Vector2<f64>,
    edge: Segment,
    cfg: GeomCfg,
) -> Result<Reachability, GeomError> {
    let interval = interval.canonical();
    let edge = edge.canonical();
    let ir = interval_range(interval, a, b, edge, cfg)?;
    let disjoint = if ir.p1.x != ir.p2.x {
        ir.p1.x > edge.p2.x || ir.p2.x < edge.p1.x
    } else {
        ir.p1.y > edge.p2.y || ir.p2.y < edge.p1.y
    };
    if disjoint {
        Ok(Reachability::Unreachable)
    } else {
        Ok(Reachability::Reachable(clip_range(ir, edge)?))
    }
}
