//! Shape kinds over the shared polygon core.
//!
//! Model
//! - `ShapeKind` is a closed tag; `Shape` pairs it with a validated `Polygon`
//!   and the inner angles derived at construction.
//! - Each kind narrows the vertex count and adds geometric checks. Triangle
//!   subtypes run the plain triangle path first (edges, degeneracy, angles)
//!   and then their own check, so a subtype is always also a valid triangle.
//!
//! Formulas
//! - Rectangle/Square: area `edges[0] * edges[1]`; angles fixed at 90°. The
//!   vertex order is trusted (no right-angle or opposite-side check).
//! - Triangle family: Heron's formula on edge lengths in edge order; the i-th
//!   inner angle is the one opposite `edges[i]` (law of cosines, degrees).
//! - Right triangle: sorted `a <= b <= c` must satisfy
//!   `c² - eps < a² + b² <= c²`. The slack is one-sided, so a sum that
//!   rounds slightly above `c²` is rejected.

use std::fmt;
use std::str::FromStr;

use super::cfg::ShapeCfg;
use super::line::Line;
use super::point::Point;
use super::polygon::Polygon;

/// Closed set of supported polygon kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Square,
    Triangle,
    Equilateral,
    Isosceles,
    Scalene,
    RightTriangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Equilateral,
        ShapeKind::Isosceles,
        ShapeKind::Scalene,
        ShapeKind::RightTriangle,
    ];

    /// Number of vertices a shape of this kind must have.
    #[inline]
    pub fn vertex_count(self) -> usize {
        if self.is_triangle() {
            3
        } else {
            4
        }
    }

    #[inline]
    pub fn is_triangle(self) -> bool {
        !matches!(self, ShapeKind::Rectangle | ShapeKind::Square)
    }

    /// Value the `is_regular` flag must take, if the kind constrains it.
    pub fn required_regularity(self) -> Option<bool> {
        match self {
            ShapeKind::Rectangle | ShapeKind::Triangle => None,
            ShapeKind::Square | ShapeKind::Equilateral => Some(true),
            ShapeKind::Isosceles | ShapeKind::Scalene | ShapeKind::RightTriangle => Some(false),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Equilateral => "equilateral",
            ShapeKind::Isosceles => "isosceles",
            ShapeKind::Scalene => "scalene",
            ShapeKind::RightTriangle => "right-triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        let kind = match key.as_str() {
            "rectangle" => ShapeKind::Rectangle,
            "square" => ShapeKind::Square,
            "triangle" => ShapeKind::Triangle,
            "equilateral" => ShapeKind::Equilateral,
            "isosceles" => ShapeKind::Isosceles,
            "scalene" => ShapeKind::Scalene,
            "right-triangle" | "right" | "trirectangle" => ShapeKind::RightTriangle,
            _ => {
                return Err(ShapeError::UnknownKind {
                    name: s.to_string(),
                })
            }
        };
        Ok(kind)
    }
}

/// Construction failures. No partially-built shape is ever returned.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    UnknownKind {
        name: String,
    },
    TooFewVertices {
        found: usize,
    },
    WrongVertexCount {
        kind: ShapeKind,
        expected: usize,
        found: usize,
    },
    /// `is_regular` was asserted but edge `edge` differs from edge 0.
    NotRegular {
        edge: usize,
    },
    RegularityMismatch {
        kind: ShapeKind,
        required: bool,
    },
    /// Edge lengths do not satisfy the kind's geometric condition.
    EdgeMismatch {
        kind: ShapeKind,
        lengths: Vec<f64>,
    },
    DegenerateEdge {
        edge: usize,
    },
    /// Vertex `vertex` has a NaN or infinite coordinate.
    NonFiniteVertex {
        vertex: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::UnknownKind { name } => write!(f, "unknown shape kind `{name}`"),
            ShapeError::TooFewVertices { found } => {
                write!(f, "a polygon needs at least 3 vertices, got {found}")
            }
            ShapeError::WrongVertexCount {
                kind,
                expected,
                found,
            } => write!(f, "{kind} must have exactly {expected} vertices, got {found}"),
            ShapeError::NotRegular { edge } => write!(
                f,
                "polygon is not regular as specified (edge {edge} differs from edge 0)"
            ),
            ShapeError::RegularityMismatch { kind, required } => {
                if *required {
                    write!(f, "{kind} must be regular")
                } else {
                    write!(f, "{kind} cannot be regular")
                }
            }
            ShapeError::EdgeMismatch { kind, lengths } => write!(
                f,
                "vertices do not form a {kind} (edge lengths {lengths:?})"
            ),
            ShapeError::DegenerateEdge { edge } => write!(f, "edge {edge} has zero length"),
            ShapeError::NonFiniteVertex { vertex } => {
                write!(f, "vertex {vertex} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// A validated polygon of a known kind.
///
/// Invariants:
/// - `polygon.vertices().len() == kind.vertex_count()`.
/// - The kind's regularity and edge-length conditions held at construction;
///   the vertex snapshot never changes afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    polygon: Polygon,
    inner_angles: Vec<f64>,
}

impl Shape {
    /// Build with default tolerances.
    pub fn new(kind: ShapeKind, is_regular: bool, vertices: Vec<Point>) -> Result<Self, ShapeError> {
        Self::with_cfg(kind, is_regular, vertices, &ShapeCfg::default())
    }

    pub fn with_cfg(
        kind: ShapeKind,
        is_regular: bool,
        vertices: Vec<Point>,
        cfg: &ShapeCfg,
    ) -> Result<Self, ShapeError> {
        build(kind, is_regular, vertices, cfg).map_err(|err| {
            tracing::debug!(%kind, is_regular, error = %err, "shape rejected");
            err
        })
    }

    pub fn rectangle(is_regular: bool, vertices: Vec<Point>) -> Result<Self, ShapeError> {
        Self::new(ShapeKind::Rectangle, is_regular, vertices)
    }

    pub fn square(vertices: Vec<Point>) -> Result<Self, ShapeError> {
        Self::new(ShapeKind::Square, true, vertices)
    }

    pub fn triangle(is_regular: bool, vertices: Vec<Point>) -> Result<Self, ShapeError> {
        Self::new(ShapeKind::Triangle, is_regular, vertices)
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[inline]
    pub fn is_regular(&self) -> bool {
        self.polygon.is_regular()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        self.polygon.vertices()
    }

    #[inline]
    pub fn edges(&self) -> &[Line] {
        self.polygon.edges()
    }

    pub fn edge_lengths(&self) -> Vec<f64> {
        self.polygon.edge_lengths()
    }

    /// Inner angles (degrees) derived at construction.
    #[inline]
    pub fn inner_angles(&self) -> &[f64] {
        &self.inner_angles
    }

    pub fn compute_perimeter(&self) -> f64 {
        self.polygon.compute_perimeter()
    }

    pub fn compute_area(&self) -> f64 {
        let e = self.edges();
        if self.kind.is_triangle() {
            heron(e[0].length(), e[1].length(), e[2].length())
        } else {
            e[0].length() * e[1].length()
        }
    }

    /// Inner angles in degrees, recomputed from the edges.
    pub fn compute_inner_angles(&self) -> Vec<f64> {
        inner_angles(self.kind, self.edges())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with vertices ", self.kind)?;
        for (i, v) in self.vertices().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

fn build(
    kind: ShapeKind,
    is_regular: bool,
    vertices: Vec<Point>,
    cfg: &ShapeCfg,
) -> Result<Shape, ShapeError> {
    let expected = kind.vertex_count();
    if vertices.len() != expected {
        return Err(ShapeError::WrongVertexCount {
            kind,
            expected,
            found: vertices.len(),
        });
    }
    let polygon = Polygon::with_cfg(is_regular, vertices, cfg)?;
    if kind.is_triangle() {
        if let Some(edge) = polygon.edges().iter().position(|e| e.length() == 0.0) {
            return Err(ShapeError::DegenerateEdge { edge });
        }
    }
    let inner_angles = inner_angles(kind, polygon.edges());

    if let Some(required) = kind.required_regularity() {
        if is_regular != required {
            return Err(ShapeError::RegularityMismatch { kind, required });
        }
    }
    let lengths = polygon.edge_lengths();
    if !edges_fit(kind, &lengths, cfg) {
        return Err(ShapeError::EdgeMismatch { kind, lengths });
    }

    Ok(Shape {
        kind,
        polygon,
        inner_angles,
    })
}

/// Per-kind edge-length condition (vertex count already checked).
fn edges_fit(kind: ShapeKind, l: &[f64], cfg: &ShapeCfg) -> bool {
    match kind {
        ShapeKind::Rectangle | ShapeKind::Triangle => true,
        // Both kinds require `is_regular`, so the polygon core already checked
        // every edge against edge 0 with `regular_rel_tol`. Only the exact mode
        // can still reject here.
        ShapeKind::Square | ShapeKind::Equilateral => {
            !cfg.exact_equal_edges || l.iter().all(|&x| x == l[0])
        }
        ShapeKind::Isosceles => {
            let (a, b, c) = (l[0], l[1], l[2]);
            let close = |x, y| cfg.edges_close(x, y);
            (close(a, b) && !close(b, c))
                || (close(b, c) && !close(c, a))
                || (close(a, c) && !close(a, b))
        }
        ShapeKind::Scalene => {
            let (a, b, c) = (l[0], l[1], l[2]);
            !cfg.edges_close(a, b) && !cfg.edges_close(b, c) && !cfg.edges_close(a, c)
        }
        ShapeKind::RightTriangle => {
            let mut s = [l[0], l[1], l[2]];
            s.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
            let [a, b, c] = s;
            let legs = a * a + b * b;
            let hyp = c * c;
            hyp - cfg.right_angle_eps < legs && legs <= hyp
        }
    }
}

fn inner_angles(kind: ShapeKind, edges: &[Line]) -> Vec<f64> {
    if !kind.is_triangle() {
        return vec![90.0; 4];
    }
    let (a, b, c) = (edges[0].length(), edges[1].length(), edges[2].length());
    vec![
        opposite_angle(a, b, c),
        opposite_angle(b, a, c),
        opposite_angle(c, a, b),
    ]
}

/// Angle (degrees) opposite side `opp`, between sides `s1` and `s2`.
#[inline]
fn opposite_angle(opp: f64, s1: f64, s2: f64) -> f64 {
    let cos = (s1 * s1 + s2 * s2 - opp * opp) / (2.0 * s1 * s2);
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Heron's formula via the semiperimeter.
#[inline]
fn heron(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    let r = s * (s - a) * (s - b) * (s - c);
    // Rounding can push a collinear radicand below zero; NaN passes through.
    if r < 0.0 {
        0.0
    } else {
        r.sqrt()
    }
}
