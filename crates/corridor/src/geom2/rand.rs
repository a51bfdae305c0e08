//! Random reachability scenarios (deterministic, replayable).
//!
//! Purpose
//! - Provide a small, reproducible sampler of (interval, cone, edge) inputs
//!   for property tests and benches. Determinism uses a replay token
//!   `(seed, index)` mixed into a single RNG, so a failing case can be
//!   re-drawn from its token alone.

use nalgebra::{Point2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Segment;

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScenarioCfg {
    /// Coordinates are drawn uniformly from `[-pos_range, pos_range]`.
    pub pos_range: f64,
    /// Minimum endpoint separation for the edge (rejects near-degenerate
    /// edges the linear solves cannot parameterize).
    pub min_edge_len: f64,
}

impl Default for ScenarioCfg {
    fn default() -> Self {
        Self {
            pos_range: 100.0,
            min_edge_len: 1e-3,
        }
    }
}

/// One full evaluator input: interval, bounding directions, target edge.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    pub interval: Segment,
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub edge: Segment,
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn draw_point<R: Rng>(rng: &mut R, range: f64) -> Point2<f64> {
    Point2::new(rng.gen_range(-range..=range), rng.gen_range(-range..=range))
}

/// Draw a random scenario. Directions are unit vectors from uniform angles,
/// so they are never zero; the edge is resampled until its endpoints are at
/// least `min_edge_len` apart.
pub fn draw_scenario(cfg: ScenarioCfg, tok: ReplayToken) -> Scenario {
    let mut rng = tok.to_std_rng();
    let range = cfg.pos_range.max(1e-9);
    let interval = Segment::new(draw_point(&mut rng, range), draw_point(&mut rng, range));
    let theta_a: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
    let theta_b: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
    let a = Vector2::new(theta_a.cos(), theta_a.sin());
    let b = Vector2::new(theta_b.cos(), theta_b.sin());
    let edge = loop {
        let e = Segment::new(draw_point(&mut rng, range), draw_point(&mut rng, range));
        if (e.p2 - e.p1).norm() >= cfg.min_edge_len {
            break e;
        }
    };
    Scenario {
        interval,
        a,
        b,
        edge,
    }
}
