use std::fmt;

use super::point::Point;

/// Errors from line measurements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineError {
    /// `start.x == end.x`: the slope is undefined.
    VerticalSlope,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::VerticalSlope => write!(f, "slope is undefined for a vertical line"),
        }
    }
}

impl std::error::Error for LineError {}

/// Segment between two points.
///
/// Invariants:
/// - `start`/`end` are snapshots taken at construction.
/// - `length == start.distance_to(&end)`, computed once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
    length: f64,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            length: start.distance_to(&end),
        }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Cached length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Length recomputed from the endpoints (equal to `length()`).
    #[inline]
    pub fn compute_length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    /// Rise over run, `(start.y - end.y) / (start.x - end.x)`.
    pub fn slope(&self) -> Result<f64, LineError> {
        let run = self.start.x - self.end.x;
        if run == 0.0 {
            return Err(LineError::VerticalSlope);
        }
        Ok((self.start.y - self.end.y) / run)
    }

    /// Where the segment meets the x-axis (`y = 0`).
    ///
    /// `None` when both endpoints lie strictly on the same side of the axis
    /// or the segment is horizontal.
    pub fn horizontal_crossing(&self) -> Option<Point> {
        let (s, e) = (self.start, self.end);
        if s.y * e.y > 0.0 || s.y == e.y {
            return None;
        }
        let x_cross = s.x - s.y * (e.x - s.x) / (e.y - s.y);
        Some(Point::new(x_cross, 0.0))
    }

    /// Where the segment meets the y-axis (`x = 0`).
    ///
    /// `None` when both endpoints lie strictly on the same side of the axis
    /// or the segment is vertical.
    pub fn vertical_crossing(&self) -> Option<Point> {
        let (s, e) = (self.start, self.end);
        if s.x * e.x > 0.0 || s.x == e.x {
            return None;
        }
        let y_cross = s.y - s.x * (e.y - s.y) / (e.x - s.x);
        Some(Point::new(0.0, y_cross))
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line instance defined between {} and {} points.",
            self.start, self.end
        )
    }
}
