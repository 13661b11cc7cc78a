use std::fmt;

use nalgebra::Vector2;

/// A location in the plane.
///
/// Points are plain values. Lines and shapes copy the points they are built
/// from, so `move_to`/`reset` only ever affect this value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0,0)`.
    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }

    /// Overwrite both coordinates.
    #[inline]
    pub fn move_to(&mut self, new_x: f64, new_y: f64) {
        self.x = new_x;
        self.y = new_y;
    }

    /// Move back to the origin.
    #[inline]
    pub fn reset(&mut self) {
        self.move_to(0.0, 0.0);
    }

    /// Euclidean distance `sqrt(dx² + dy²)`.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.to_vec2() - other.to_vec2()).norm()
    }

    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
