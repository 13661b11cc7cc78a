//! Serializable views of shapes and lines for JSON output.

use geometria::plane::{Line, Point, Shape};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ShapeReport {
    pub kind: String,
    pub regular: bool,
    pub vertices: Vec<[f64; 2]>,
    pub edge_lengths: Vec<f64>,
    pub perimeter: f64,
    pub area: f64,
    pub inner_angles: Vec<f64>,
}

impl From<&Shape> for ShapeReport {
    fn from(s: &Shape) -> Self {
        Self {
            kind: s.kind().to_string(),
            regular: s.is_regular(),
            vertices: s.vertices().iter().map(|&p| xy(p)).collect(),
            edge_lengths: s.edge_lengths(),
            perimeter: s.compute_perimeter(),
            area: s.compute_area(),
            inner_angles: s.inner_angles().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LineReport {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub length: f64,
    /// `None` for vertical lines.
    pub slope: Option<f64>,
    pub horizontal_crossing: Option<[f64; 2]>,
    pub vertical_crossing: Option<[f64; 2]>,
}

impl From<&Line> for LineReport {
    fn from(l: &Line) -> Self {
        Self {
            from: xy(l.start()),
            to: xy(l.end()),
            length: l.length(),
            slope: l.slope().ok(),
            horizontal_crossing: l.horizontal_crossing().map(xy),
            vertical_crossing: l.vertical_crossing().map(xy),
        }
    }
}

/// One evaluated CSV row: either a shape report or the rejection reason.
#[derive(Debug, Serialize)]
pub struct RowReport {
    pub row: usize,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<ShapeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[inline]
fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}
