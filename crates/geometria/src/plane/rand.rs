//! Random shapes of a given kind (replayable).
//!
//! Purpose
//! - Provide small, deterministic samplers that produce vertex sets valid for
//!   each `ShapeKind`. Used by tests, benchmarks, and the CLI `sample` command.
//!
//! Model
//! - Draw a canonical vertex set (axis-aligned rectangle, base-on-x-axis
//!   isosceles, etc.), then apply a random rotation and translation.
//! - Right triangles use integer Pythagorean triples with integer offsets and
//!   quarter-turn rotations only, so their edge lengths are exact and the
//!   one-sided right-angle check always passes.
//! - Every candidate is validated through `Shape::new`; a failed candidate is
//!   redrawn from the same RNG stream, up to `max_attempts` times.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::f64::consts::TAU;

use nalgebra::{Rotation2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::point::Point;
use super::shape::{Shape, ShapeKind};

const PYTHAGOREAN_TRIPLES: [(f64, f64); 4] = [(3.0, 4.0), (5.0, 12.0), (8.0, 15.0), (7.0, 24.0)];

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Smallest characteristic side length.
    pub size_min: f64,
    /// Largest characteristic side length.
    pub size_max: f64,
    /// Translations are drawn from `[-max_offset, max_offset]²`.
    pub max_offset: f64,
    /// Apply a random rotation (ignored for right triangles, which only turn by quarter turns).
    pub rotate: bool,
    pub max_attempts: usize,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            size_min: 0.5,
            size_max: 4.0,
            max_offset: 10.0,
            rotate: true,
            max_attempts: 16,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
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

/// Draw a validated shape of `kind`. `None` only if every attempt was rejected.
pub fn draw_shape(kind: ShapeKind, cfg: SampleCfg, tok: ReplayToken) -> Option<Shape> {
    let mut rng = tok.to_std_rng();
    let is_regular = kind.required_regularity().unwrap_or(false);
    for _ in 0..cfg.max_attempts.max(1) {
        let vertices = candidate(kind, &cfg, &mut rng);
        if let Ok(shape) = Shape::new(kind, is_regular, vertices) {
            return Some(shape);
        }
    }
    tracing::debug!(%kind, seed = tok.seed, index = tok.index, "sampler exhausted attempts");
    None
}

fn candidate<R: Rng>(kind: ShapeKind, cfg: &SampleCfg, rng: &mut R) -> Vec<Point> {
    let lo = cfg.size_min.max(1e-6);
    let hi = cfg.size_max.max(lo * 1.5);
    let canon: Vec<Vector2<f64>> = match kind {
        ShapeKind::Rectangle => {
            let w = rng.gen_range(lo..hi);
            let h = rng.gen_range(lo..hi);
            axis_rect(w, h)
        }
        ShapeKind::Square => {
            let s = rng.gen_range(lo..hi);
            axis_rect(s, s)
        }
        ShapeKind::Equilateral => {
            let r = rng.gen_range(lo..hi);
            (0..3)
                .map(|k| {
                    let th = (k as f64) * TAU / 3.0;
                    Vector2::new(r * th.cos(), r * th.sin())
                })
                .collect()
        }
        ShapeKind::Isosceles => {
            // Height in [0.2, 0.7]·base keeps the legs well away from the base length.
            let b = rng.gen_range(lo..hi);
            let h = b * rng.gen_range(0.2..0.7);
            vec![
                Vector2::new(-b / 2.0, 0.0),
                Vector2::new(b / 2.0, 0.0),
                Vector2::new(0.0, h),
            ]
        }
        ShapeKind::Triangle | ShapeKind::Scalene => (0..3)
            .map(|_| Vector2::new(rng.gen_range(-hi..hi), rng.gen_range(-hi..hi)))
            .collect(),
        ShapeKind::RightTriangle => return right_triangle(cfg, rng),
    };
    let rot = if cfg.rotate {
        Rotation2::new(rng.gen::<f64>() * TAU)
    } else {
        Rotation2::identity()
    };
    let t = offset(cfg, rng);
    canon.into_iter().map(|v| Point::from(rot * v + t)).collect()
}

fn right_triangle<R: Rng>(cfg: &SampleCfg, rng: &mut R) -> Vec<Point> {
    let (mut a, mut b) = PYTHAGOREAN_TRIPLES[rng.gen_range(0..PYTHAGOREAN_TRIPLES.len())];
    if rng.gen::<bool>() {
        std::mem::swap(&mut a, &mut b);
    }
    let k = rng.gen_range(1..=3u32) as f64;
    let mut pts = [
        Vector2::new(0.0, 0.0),
        Vector2::new(k * a, 0.0),
        Vector2::new(0.0, k * b),
    ];
    for _ in 0..rng.gen_range(0..4u32) {
        for p in pts.iter_mut() {
            *p = Vector2::new(-p.y, p.x);
        }
    }
    let t = offset(cfg, rng).map(f64::round);
    pts.iter().map(|&v| Point::from(v + t)).collect()
}

#[inline]
fn axis_rect(w: f64, h: f64) -> Vec<Vector2<f64>> {
    vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(w, 0.0),
        Vector2::new(w, h),
        Vector2::new(0.0, h),
    ]
}

#[inline]
fn offset<R: Rng>(cfg: &SampleCfg, rng: &mut R) -> Vector2<f64> {
    let m = cfg.max_offset.abs();
    if m == 0.0 {
        return Vector2::zeros();
    }
    Vector2::new(rng.gen_range(-m..=m), rng.gen_range(-m..=m))
}
