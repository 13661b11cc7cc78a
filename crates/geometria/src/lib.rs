//! Plane geometry: points, segments, and validated polygon shapes.
//!
//! Overview
//! - `plane::Point` and `plane::Line` are small `Copy`/owned value types.
//! - `plane::Shape` is a closed tagged variant (`ShapeKind`) over a shared
//!   vertex/edge core (`plane::Polygon`). Construction is the single
//!   validation point; a `Shape` that exists satisfies its kind's invariants.
//!
//! API Policy
//! - Shapes store coordinate snapshots and expose no mutators. Moving a caller's
//!   `Point` after building a shape from it never changes that shape.

pub mod plane;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::plane::rand::{draw_shape, ReplayToken, SampleCfg};
    pub use crate::plane::{
        Line, LineError, Point, Polygon, Shape, ShapeCfg, ShapeError, ShapeKind,
    };
    pub use nalgebra::Vector2 as Vec2;
}
