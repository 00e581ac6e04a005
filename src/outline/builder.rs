use std::any::Any;

use crate::chart::{ChartConfig, MeshModifier, RectSize};
use crate::math::{Point2, Vector2};
use crate::mesh::{MeshBuffer, MeshPoint};

use super::{EdgeLine, OutlineMode, OutlineStyle, Side};

/// Appends an outline ribbon around the radar polygon.
///
/// Each edge becomes a [`EdgeLine`]; consecutive edge lines are shifted by
/// their offsets and intersected to get the corners of the offset ring.
/// Inner/Outer modes pair the original boundary with one offset ring, Center
/// mode pairs an inset ring with an outset ring. Either way the ribbon has
/// `2n` vertices and `2n` triangles for `n` corners.
///
/// When two consecutive edges are parallel their offset lines have no single
/// intersection. The corner is then placed at the shared boundary vertex
/// moved by the mean of both edges' offsets, which is exact for collinear
/// edges and keeps every coordinate finite.
#[derive(Debug)]
pub struct OutlineBuilder {
    style: OutlineStyle,
    enabled: bool,
    corners: Vec<Point2>,
    lines: Vec<EdgeLine>,
}

impl OutlineBuilder {
    /// Creates an enabled builder.
    #[must_use]
    pub fn new(style: OutlineStyle) -> Self {
        Self {
            style,
            enabled: true,
            corners: Vec::new(),
            lines: Vec::new(),
        }
    }

    #[must_use]
    pub fn style(&self) -> &OutlineStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: OutlineStyle) {
        self.style = style;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Appends the ribbon for `perimeter` (clockwise, center excluded).
    /// Outline UVs are positions divided by the `rect` extents.
    ///
    /// Fewer than 3 perimeter vertices produce nothing.
    #[allow(clippy::cast_possible_truncation)]
    pub fn build(&mut self, buffer: &mut MeshBuffer, perimeter: &[MeshPoint], rect: &RectSize) {
        let n = perimeter.len();
        if n < 3 {
            tracing::warn!(corners = n, "outline needs at least 3 corners");
            return;
        }

        self.corners.clear();
        self.corners.extend(
            perimeter
                .iter()
                .map(|p| Point2::new(f64::from(p.x), f64::from(p.y))),
        );

        // Edge i runs from corner i-1 to corner i.
        self.lines.clear();
        for i in 0..n {
            let prev = (i + n - 1) % n;
            self.lines
                .push(EdgeLine::new(&self.corners[prev], &self.corners[i], &self.style));
        }

        let base = buffer.vertex_count() as u32;
        match self.style.mode {
            OutlineMode::Inner | OutlineMode::Outer => {
                let side = if self.style.mode == OutlineMode::Inner {
                    Side::Inner
                } else {
                    Side::Outer
                };
                for i in 0..n {
                    self.emit(buffer, self.corners[i], rect);
                }
                for i in 0..n {
                    self.emit(buffer, self.offset_corner(i, side), rect);
                }
            }
            OutlineMode::Center => {
                for side in [Side::Inner, Side::Outer] {
                    for i in 0..n {
                        self.emit(buffer, self.offset_corner(i, side), rect);
                    }
                }
            }
        }

        let n = n as u32;
        for i in 0..n {
            let inline = base + i;
            let inline_next = base + (i + 1) % n;
            let outline = inline + n;
            let outline_next = inline_next + n;
            buffer.add_triangle(outline, inline, outline_next);
            buffer.add_triangle(outline_next, inline, inline_next);
        }
    }

    /// Corner `i` of the ring on `side`: where edges `i` and `i+1` meet once
    /// both are shifted.
    fn offset_corner(&self, i: usize, side: Side) -> Point2 {
        let n = self.lines.len();
        let incoming = &self.lines[i];
        let outgoing = &self.lines[(i + 1) % n];
        // Lines are built for the current mode, so the side is always configured.
        let shifted_in = incoming.translated(side).unwrap_or(incoming.line);
        let shifted_out = outgoing.translated(side).unwrap_or(outgoing.line);
        match shifted_in.intersect(&shifted_out) {
            Ok(p) => p,
            Err(err) => {
                tracing::warn!(corner = i, %err, "parallel outline edges, shifting vertex instead");
                let offset_in = incoming.offset(side).unwrap_or_else(Vector2::zeros);
                let offset_out = outgoing.offset(side).unwrap_or_else(Vector2::zeros);
                self.corners[i] + (offset_in + offset_out) * 0.5
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn emit(&self, buffer: &mut MeshBuffer, p: Point2, rect: &RectSize) {
        let uv = MeshPoint::new((p.x / rect.width) as f32, (p.y / rect.height) as f32);
        buffer.add_vertex(MeshPoint::new(p.x as f32, p.y as f32), self.style.color, uv);
    }
}

impl MeshModifier for OutlineBuilder {
    fn modify_mesh(&mut self, buffer: &mut MeshBuffer, vertices: &[MeshPoint], config: &ChartConfig) {
        self.build(buffer, vertices.get(1..).unwrap_or_default(), &config.rect);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::chart::{ChartConfig, RadarChart};
    use crate::mesh::Color32;

    const RED: Color32 = Color32::new(255, 0, 0, 255);

    fn builder(mode: OutlineMode, thickness: f64) -> OutlineBuilder {
        OutlineBuilder::new(OutlineStyle::new(thickness, RED, mode))
    }

    fn rect() -> RectSize {
        RectSize::new(20.0, 20.0)
    }

    fn diamond() -> Vec<MeshPoint> {
        // values [0.5, 1, 0.5, 1] on radius 10.
        vec![
            MeshPoint::new(0.0, 5.0),
            MeshPoint::new(10.0, 0.0),
            MeshPoint::new(0.0, -5.0),
            MeshPoint::new(-10.0, 0.0),
        ]
    }

    fn positions(buffer: &MeshBuffer, range: std::ops::Range<usize>) -> Vec<MeshPoint> {
        buffer.vertices()[range].iter().map(|v| v.position).collect()
    }

    #[test]
    fn outer_ribbon_counts_and_reuses_boundary() {
        let perimeter = diamond();
        let mut buffer = MeshBuffer::new();
        builder(OutlineMode::Outer, 1.0).build(&mut buffer, &perimeter, &rect());

        assert_eq!(buffer.vertex_count(), 8);
        assert_eq!(buffer.triangle_count(), 8);
        assert_eq!(positions(&buffer, 0..4), perimeter);
        assert!(buffer.vertices().iter().all(|v| v.color == RED));
    }

    #[test]
    fn outer_ring_lies_outside() {
        let perimeter = diamond();
        let mut buffer = MeshBuffer::new();
        builder(OutlineMode::Outer, 1.0).build(&mut buffer, &perimeter, &rect());

        for (base, ring) in perimeter.iter().zip(positions(&buffer, 4..8)) {
            assert!(ring.coords.norm() > base.coords.norm());
        }
    }

    #[test]
    fn inner_ring_lies_inside() {
        let perimeter = diamond();
        let mut buffer = MeshBuffer::new();
        builder(OutlineMode::Inner, 1.0).build(&mut buffer, &perimeter, &rect());

        for (base, ring) in perimeter.iter().zip(positions(&buffer, 4..8)) {
            assert!(ring.coords.norm() < base.coords.norm());
        }
    }

    #[test]
    fn offset_ring_is_parallel_at_thickness() {
        let perimeter = diamond();
        let mut buffer = MeshBuffer::new();
        builder(OutlineMode::Outer, 1.5).build(&mut buffer, &perimeter, &rect());
        let ring = positions(&buffer, 4..8);

        // Corner i and i+1 of the ring span the offset copy of edge i+1.
        for i in 0..4 {
            let j = (i + 1) % 4;
            let a = Point2::new(f64::from(perimeter[i].x), f64::from(perimeter[i].y));
            let b = Point2::new(f64::from(perimeter[j].x), f64::from(perimeter[j].y));
            let dir = (b - a).normalize();
            let normal = Vector2::new(-dir.y, dir.x);
            for p in [ring[i], ring[j]] {
                let p = Point2::new(f64::from(p.x), f64::from(p.y));
                let dist = (p - a).dot(&normal);
                assert_abs_diff_eq!(dist, 1.5, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn axis_aligned_square_with_vertical_edges() {
        let square = vec![
            MeshPoint::new(-5.0, 5.0),
            MeshPoint::new(5.0, 5.0),
            MeshPoint::new(5.0, -5.0),
            MeshPoint::new(-5.0, -5.0),
        ];
        let mut buffer = MeshBuffer::new();
        builder(OutlineMode::Outer, 1.0).build(&mut buffer, &square, &rect());

        let expected = [(-6.0, 6.0), (6.0, 6.0), (6.0, -6.0), (-6.0, -6.0)];
        for (p, (x, y)) in positions(&buffer, 4..8).into_iter().zip(expected) {
            assert_abs_diff_eq!(p.x, x, epsilon = 1e-5);
            assert_abs_diff_eq!(p.y, y, epsilon = 1e-5);
        }
    }

    #[test]
    fn center_ribbon_straddles_boundary() {
        let perimeter = diamond();
        let mut buffer = MeshBuffer::new();
        builder(OutlineMode::Center, 2.0).build(&mut buffer, &perimeter, &rect());

        assert_eq!(buffer.vertex_count(), 8);
        assert_eq!(buffer.triangle_count(), 8);

        let inner = positions(&buffer, 0..4);
        let outer = positions(&buffer, 4..8);
        for ((base, i), o) in perimeter.iter().zip(&inner).zip(&outer) {
            assert_ne!(base, i);
            assert_ne!(base, o);
            assert!(i.coords.norm() < base.coords.norm());
            assert!(o.coords.norm() > base.coords.norm());
            assert_abs_diff_eq!((i.x + o.x) * 0.5, base.x, epsilon = 1e-4);
            assert_abs_diff_eq!((i.y + o.y) * 0.5, base.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn ribbon_indices_start_after_existing_vertices() {
        let perimeter = vec![
            MeshPoint::new(0.0, 10.0),
            MeshPoint::new(8.66, -5.0),
            MeshPoint::new(-8.66, -5.0),
        ];
        let mut buffer = MeshBuffer::new();
        for _ in 0..4 {
            buffer.add_vertex(MeshPoint::origin(), Color32::WHITE, MeshPoint::origin());
        }
        builder(OutlineMode::Inner, 1.0).build(&mut buffer, &perimeter, &rect());

        assert_eq!(
            buffer.indices(),
            &[[7, 4, 8], [8, 4, 5], [8, 5, 9], [9, 5, 6], [9, 6, 7], [7, 6, 4]]
        );
    }

    #[test]
    fn outline_uvs_normalise_by_rect() {
        let perimeter = diamond();
        let mut buffer = MeshBuffer::new();
        builder(OutlineMode::Outer, 1.0).build(&mut buffer, &perimeter, &rect());

        let right = buffer.vertices()[1];
        assert_abs_diff_eq!(right.uv.x, 0.5);
        assert_abs_diff_eq!(right.uv.y, 0.0);
    }

    #[test]
    fn collinear_edges_shift_the_shared_vertex() {
        // values [1, 0, 1, 0]: the polygon collapses onto the y axis.
        let perimeter = vec![
            MeshPoint::new(0.0, 10.0),
            MeshPoint::new(0.0, 0.0),
            MeshPoint::new(0.0, -10.0),
            MeshPoint::new(0.0, 0.0),
        ];
        let mut buffer = MeshBuffer::new();
        builder(OutlineMode::Outer, 1.0).build(&mut buffer, &perimeter, &rect());

        assert_eq!(buffer.vertex_count(), 8);
        assert!(buffer
            .vertices()
            .iter()
            .all(|v| v.position.x.is_finite() && v.position.y.is_finite()));

        // Corner 1 sits between two downward edges; outside is +x.
        let corner = buffer.vertices()[5].position;
        assert_abs_diff_eq!(corner.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(corner.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn collapsed_polygon_stays_finite() {
        let perimeter = vec![MeshPoint::origin(); 5];
        let mut buffer = MeshBuffer::new();
        builder(OutlineMode::Center, 3.0).build(&mut buffer, &perimeter, &rect());

        assert_eq!(buffer.vertex_count(), 10);
        assert_eq!(buffer.triangle_count(), 10);
        assert!(buffer
            .vertices()
            .iter()
            .all(|v| v.position == MeshPoint::origin()));
    }

    #[test]
    fn zero_size_rect_gives_nan_uvs_without_panicking() {
        let mut outline = OutlineBuilder::new(OutlineStyle::default());
        let mut buffer = MeshBuffer::new();
        outline.build(&mut buffer, &diamond(), &RectSize::new(0.0, 0.0));
        assert!(buffer.vertices()[1].uv.x.is_infinite());
        assert!(buffer.vertices()[0].uv.x.is_nan());
    }

    #[test]
    fn tiny_polygon_still_gets_a_full_miter() {
        // Equilateral triangle of radius 1e-6; edges meet at 60°, so the outer
        // corner sits 2 × thickness out along the bisector.
        let r = 1e-6_f32;
        let half_sqrt3 = 3.0_f32.sqrt() * 0.5;
        let perimeter = vec![
            MeshPoint::new(0.0, r),
            MeshPoint::new(half_sqrt3 * r, -0.5 * r),
            MeshPoint::new(-half_sqrt3 * r, -0.5 * r),
        ];
        let mut buffer = MeshBuffer::new();
        builder(OutlineMode::Outer, 1.0).build(&mut buffer, &perimeter, &rect());

        let top = buffer.vertices()[3].position;
        assert_abs_diff_eq!(top.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(top.y, 2.0, epsilon = 1e-4);
        let left = buffer.vertices()[5].position;
        assert_abs_diff_eq!(left.coords.norm(), 2.0, epsilon = 1e-4);
    }

    #[test]
    fn too_few_corners_appends_nothing() {
        let mut buffer = MeshBuffer::new();
        builder(OutlineMode::Outer, 1.0).build(&mut buffer, &diamond()[..2], &rect());
        assert!(buffer.is_empty());
    }

    #[test]
    fn chart_appends_ribbon_after_polygon() {
        let rect = RectSize::new(20.0, 20.0);
        let mut chart = RadarChart::new(ChartConfig {
            corner_count: 4,
            rect,
            fill_color: Color32::WHITE,
        });
        chart.update_values(&[0.5, 1.0, 0.5, 1.0]).unwrap();
        let id = chart.add_modifier(Box::new(builder(OutlineMode::Outer, 1.0)));

        let mut buffer = MeshBuffer::new();
        chart.rebuild(&mut buffer).unwrap();
        assert_eq!(buffer.vertex_count(), 5 + 8);
        assert_eq!(buffer.triangle_count(), 4 + 8);
        assert_eq!(buffer.indices()[4], [9, 5, 10]);
        for (base, ring) in buffer.vertices()[1..5].iter().zip(&buffer.vertices()[9..13]) {
            assert!(ring.position.coords.norm() > base.position.coords.norm());
        }

        chart.modifier_mut::<OutlineBuilder>(id).unwrap().set_enabled(false);
        chart.rebuild(&mut buffer).unwrap();
        assert_eq!(buffer.vertex_count(), 5);
        assert_eq!(buffer.triangle_count(), 4);
    }

    #[test]
    fn outline_uvs_follow_chart_resize() {
        let mut chart = RadarChart::new(ChartConfig {
            corner_count: 4,
            rect: rect(),
            fill_color: Color32::WHITE,
        });
        chart.add_modifier(Box::new(builder(OutlineMode::Outer, 1.0)));
        let mut buffer = MeshBuffer::new();
        chart.rebuild(&mut buffer).unwrap();

        chart.set_rect(RectSize::new(200.0, 200.0));
        chart.rebuild(&mut buffer).unwrap();

        // Boundary copy of the right-hand axis, at (100, 0).
        let right = buffer.vertices()[6];
        assert_abs_diff_eq!(right.position.x, 100.0, epsilon = 1e-4);
        assert_abs_diff_eq!(right.uv.x, 0.5, epsilon = 1e-6);
        assert_abs_diff_eq!(right.uv.y, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn switching_mode_through_the_chart() {
        let mut chart = RadarChart::default();
        let id = chart.add_modifier(Box::new(builder(OutlineMode::Outer, 1.0)));
        let outline = chart.modifier_mut::<OutlineBuilder>(id).unwrap();
        outline.set_style(OutlineStyle::new(2.0, RED, OutlineMode::Center));
        assert_eq!(outline.style().mode, OutlineMode::Center);

        let mut buffer = MeshBuffer::new();
        chart.rebuild(&mut buffer).unwrap();
        assert_eq!(buffer.vertex_count(), 4 + 6);
    }
}
