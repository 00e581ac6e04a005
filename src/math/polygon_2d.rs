use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroLengthEdge` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroLengthEdge {
            x1: a.x,
            y1: a.y,
            x2: b.x,
            y2: b.y,
        }
        .into());
    }
    Ok(d / len)
}

/// Returns the left-pointing normal of a direction vector (rotated +90°).
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Unit normal of the edge `a → b` pointing away from a clockwise polygon.
///
/// Rotating a clockwise edge by +90° points outside, so this is the left normal.
///
/// # Errors
///
/// Returns `GeometryError::ZeroLengthEdge` if `a` and `b` coincide.
pub fn outward_normal(a: &Point2, b: &Point2) -> Result<Vector2> {
    segment_direction(a, b).map(left_normal)
}

/// Unit direction of axis `index` out of `corner_count`, clockwise from "up".
///
/// Evaluated in `f64` so high corner counts do not visibly facet.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn axis_direction(index: usize, corner_count: usize) -> Vector2 {
    let step = std::f64::consts::TAU / corner_count as f64;
    let angle = -(index as f64) * step + std::f64::consts::FRAC_PI_2;
    Vector2::new(angle.cos(), angle.sin())
}
