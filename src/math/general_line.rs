use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// An infinite 2D line in general form: `a·x + b·y + c = 0`.
///
/// Unlike slope-intercept form this stays well-defined for vertical lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl GeneralLine {
    /// Creates a line from its coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Builds the line through `p1` and `p2`.
    ///
    /// Coincident points yield the degenerate line `0·x + 0·y + 0 = 0`.
    #[must_use]
    pub fn through(p1: &Point2, p2: &Point2) -> Self {
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        Self {
            a: dy,
            b: -dx,
            c: p1.y * dx - p1.x * dy,
        }
    }

    /// Evaluates `a·x + b·y + c` at `p`. Zero means `p` lies on the line.
    #[must_use]
    pub fn evaluate(&self, p: &Point2) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Shifts the line by `offset` without changing its slope.
    #[must_use]
    pub fn translate(&self, offset: &Vector2) -> Self {
        Self {
            a: self.a,
            b: self.b,
            c: self.c - self.a * offset.x - self.b * offset.y,
        }
    }

    /// Intersects two lines by solving the 2×2 system.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateIntersection` when the lines are
    /// parallel or either is degenerate. The determinant is compared relative
    /// to both normals' lengths, so it tests the angle between the lines, not
    /// their scale.
    pub fn intersect(&self, other: &Self) -> Result<Point2> {
        let det = self.a * other.b - other.a * self.b;
        let scale = self.a.hypot(self.b) * other.a.hypot(other.b);
        if det.abs() <= TOLERANCE * scale {
            return Err(GeometryError::DegenerateIntersection.into());
        }
        let x = (self.b * other.c - other.b * self.c) / det;
        let y = (other.a * self.c - self.a * other.c) / det;
        Ok(Point2::new(x, y))
    }
}
