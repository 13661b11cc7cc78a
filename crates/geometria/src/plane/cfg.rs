//! Tolerances for shape validation.
//!
//! Policy
//! - Defaults match the classic `isclose` convention (relative 1e-9, absolute 0)
//!   so acceptance boundaries are predictable. Callers that need looser checks
//!   pass an explicit `ShapeCfg` to `Shape::with_cfg`.

/// Shape validation configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeCfg {
    /// Relative tolerance for the regular-polygon edge check and for the
    /// all-edges-equal checks of squares and equilateral triangles.
    pub regular_rel_tol: f64,
    /// Relative tolerance for pairwise edge comparisons (isosceles, scalene).
    pub isclose_rel_tol: f64,
    /// Absolute floor for pairwise edge comparisons.
    pub isclose_abs_tol: f64,
    /// Lower slack in `c² - eps < a² + b² <= c²` for right triangles.
    pub right_angle_eps: f64,
    /// Squares and equilateral triangles require bit-identical edge lengths.
    /// Off by default: `(0,0),(2,0),(1,√3)` has edges `2` and `1.9999999999999998`.
    pub exact_equal_edges: bool,
}

impl Default for ShapeCfg {
    fn default() -> Self {
        Self {
            regular_rel_tol: 1e-9,
            isclose_rel_tol: 1e-9,
            isclose_abs_tol: 0.0,
            right_angle_eps: 1e-9,
            exact_equal_edges: false,
        }
    }
}

impl ShapeCfg {
    /// Pairwise edge comparison used by the triangle subtype checks.
    #[inline]
    pub fn edges_close(&self, a: f64, b: f64) -> bool {
        isclose(a, b, self.isclose_rel_tol, self.isclose_abs_tol)
    }

    /// Edge comparison used for regularity and all-equal checks.
    #[inline]
    pub fn edges_equal(&self, a: f64, b: f64) -> bool {
        isclose(a, b, self.regular_rel_tol, 0.0)
    }
}

/// `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`.
///
/// Equal infinities are close; an infinity is never close to anything else,
/// and `NaN` is close to nothing.
#[inline]
pub fn isclose(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    let diff = (a - b).abs();
    diff <= (rel_tol * a.abs().max(b.abs())).max(abs_tol)
}
