use crate::math::polygon_2d::outward_normal;
use crate::math::{GeneralLine, Point2, Vector2};

use super::{OutlineMode, OutlineStyle};

/// Which offset ring to read from an [`EdgeLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Inner,
    Outer,
}

/// Offset vectors an edge line carries, depending on the outline mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineOffsets {
    Inner(Vector2),
    Outer(Vector2),
    Both { inner: Vector2, outer: Vector2 },
}

/// A polygon edge in general form plus its configured offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeLine {
    pub line: GeneralLine,
    pub offsets: LineOffsets,
}

impl EdgeLine {
    /// Builds the line for edge `from → to` of a clockwise polygon.
    ///
    /// A zero-length edge has no direction; it gets a zero normal and so
    /// contributes no offset.
    #[must_use]
    pub fn new(from: &Point2, to: &Point2, style: &OutlineStyle) -> Self {
        let normal = match outward_normal(from, to) {
            Ok(normal) => normal,
            Err(err) => {
                tracing::debug!(%err, "outline edge has no direction, leaving it unshifted");
                Vector2::zeros()
            }
        };
        let offsets = match style.mode {
            OutlineMode::Inner => LineOffsets::Inner(-normal * style.thickness),
            OutlineMode::Outer => LineOffsets::Outer(normal * style.thickness),
            OutlineMode::Center => {
                let half = style.thickness * 0.5;
                LineOffsets::Both {
                    inner: -normal * half,
                    outer: normal * half,
                }
            }
        };
        Self {
            line: GeneralLine::through(from, to),
            offsets,
        }
    }

    /// The offset toward `side`, or `None` if this line's mode has no such ring.
    #[must_use]
    pub fn offset(&self, side: Side) -> Option<Vector2> {
        match (self.offsets, side) {
            (LineOffsets::Inner(v), Side::Inner) | (LineOffsets::Outer(v), Side::Outer) => Some(v),
            (LineOffsets::Both { inner, .. }, Side::Inner) => Some(inner),
            (LineOffsets::Both { outer, .. }, Side::Outer) => Some(outer),
            _ => None,
        }
    }

    /// The line shifted toward `side`.
    #[must_use]
    pub fn translated(&self, side: Side) -> Option<GeneralLine> {
        self.offset(side).map(|v| self.line.translate(&v))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::mesh::Color32;

    fn style(mode: OutlineMode) -> OutlineStyle {
        OutlineStyle::new(2.0, Color32::BLACK, mode)
    }

    #[test]
    fn outer_mode_has_only_outer_offset() {
        // Top edge of a clockwise square, walking right: outside is +y.
        let edge = EdgeLine::new(
            &Point2::new(-1.0, 1.0),
            &Point2::new(1.0, 1.0),
            &style(OutlineMode::Outer),
        );
        let outer = edge.offset(Side::Outer).unwrap();
        assert_abs_diff_eq!(outer.x, 0.0);
        assert_abs_diff_eq!(outer.y, 2.0);
        assert!(edge.offset(Side::Inner).is_none());
        assert!(edge.translated(Side::Inner).is_none());
    }

    #[test]
    fn inner_mode_points_inside() {
        let edge = EdgeLine::new(
            &Point2::new(-1.0, 1.0),
            &Point2::new(1.0, 1.0),
            &style(OutlineMode::Inner),
        );
        let inner = edge.offset(Side::Inner).unwrap();
        assert_abs_diff_eq!(inner.y, -2.0);
        assert!(edge.offset(Side::Outer).is_none());
    }

    #[test]
    fn center_mode_splits_thickness() {
        let edge = EdgeLine::new(
            &Point2::new(-1.0, 1.0),
            &Point2::new(1.0, 1.0),
            &style(OutlineMode::Center),
        );
        assert_abs_diff_eq!(edge.offset(Side::Inner).unwrap().y, -1.0);
        assert_abs_diff_eq!(edge.offset(Side::Outer).unwrap().y, 1.0);

        let shifted = edge.translated(Side::Outer).unwrap();
        assert_abs_diff_eq!(shifted.evaluate(&Point2::new(5.0, 2.0)), 0.0);
    }

    #[test]
    fn zero_length_edge_has_no_offset() {
        let p = Point2::new(3.0, 3.0);
        let edge = EdgeLine::new(&p, &p, &style(OutlineMode::Outer));
        assert_abs_diff_eq!(edge.offset(Side::Outer).unwrap().norm(), 0.0);
    }
}
