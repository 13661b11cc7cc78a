//! Plane (2D) geometry with construction-time shape validation.
//!
//! Purpose
//! - Model points, line segments, and a closed set of polygon kinds
//!   (rectangle, square, triangle and its subtypes) with derived metrics:
//!   length, perimeter, area, inner angles.
//! - Reject vertex sets that do not form the requested kind, eagerly, inside
//!   the constructor.
//!
//! Layout
//! - `point`, `line`: leaf value types.
//! - `polygon`: vertex/edge core shared by every kind (edges, perimeter, regularity).
//! - `shape`: `ShapeKind` tag, per-kind checks, area and angle formulas.
//! - `cfg`: tolerances (`ShapeCfg`) and the `isclose` predicate.
//! - `rand`: deterministic samplers producing valid vertex sets per kind.

mod cfg;
mod line;
mod point;
mod polygon;
pub mod rand;
mod shape;

pub use cfg::{isclose, ShapeCfg};
pub use line::{Line, LineError};
pub use point::Point;
pub use polygon::Polygon;
pub use shape::{Shape, ShapeError, ShapeKind};

#[cfg(test)]
mod tests;
