//! Vertex/edge core shared by every shape kind.

use super::cfg::ShapeCfg;
use super::line::Line;
use super::point::Point;
use super::shape::ShapeError;

/// Closed polygon as an ordered vertex list plus derived edges.
///
/// Invariants:
/// - `vertices.len() >= 3` and `edges.len() == vertices.len()`.
/// - Every coordinate is finite.
/// - `edges[i]` runs from `vertices[i]` to `vertices[(i + 1) % n]`.
/// - If `is_regular`, all edge lengths agree within `cfg.regular_rel_tol`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    is_regular: bool,
    vertices: Vec<Point>,
    edges: Vec<Line>,
}

impl Polygon {
    /// Build with default tolerances.
    pub fn new(is_regular: bool, vertices: Vec<Point>) -> Result<Self, ShapeError> {
        Self::with_cfg(is_regular, vertices, &ShapeCfg::default())
    }

    pub fn with_cfg(
        is_regular: bool,
        vertices: Vec<Point>,
        cfg: &ShapeCfg,
    ) -> Result<Self, ShapeError> {
        if vertices.len() < 3 {
            return Err(ShapeError::TooFewVertices {
                found: vertices.len(),
            });
        }
        if let Some(vertex) = vertices
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(ShapeError::NonFiniteVertex { vertex });
        }
        let edges = compute_edges(is_regular, &vertices, cfg)?;
        Ok(Self {
            is_regular,
            vertices,
            edges,
        })
    }

    #[inline]
    pub fn is_regular(&self) -> bool {
        self.is_regular
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Line] {
        &self.edges
    }

    /// Edge lengths in edge order.
    pub fn edge_lengths(&self) -> Vec<f64> {
        self.edges.iter().map(Line::length).collect()
    }

    /// Rebuild the edge list from the vertex snapshot (no regularity check).
    pub fn compute_edges(&self) -> Vec<Line> {
        cyclic_edges(&self.vertices)
    }

    /// Sum of edge lengths.
    pub fn compute_perimeter(&self) -> f64 {
        self.edges.iter().map(Line::length).sum()
    }
}

fn cyclic_edges(vertices: &[Point]) -> Vec<Line> {
    let n = vertices.len();
    (0..n)
        .map(|i| Line::new(vertices[i], vertices[(i + 1) % n]))
        .collect()
}

fn compute_edges(
    is_regular: bool,
    vertices: &[Point],
    cfg: &ShapeCfg,
) -> Result<Vec<Line>, ShapeError> {
    let edges = cyclic_edges(vertices);
    if is_regular {
        let reference = edges[0].length();
        if let Some(index) = edges
            .iter()
            .position(|e| !cfg.edges_equal(reference, e.length()))
        {
            return Err(ShapeError::NotRegular { edge: index });
        }
    }
    Ok(edges)
}
