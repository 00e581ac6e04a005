use crate::error::{ChartError, Result};
use crate::math::polygon_2d::axis_direction;
use crate::math::Point2;
use crate::mesh::{Color32, MeshBuffer, MeshPoint};

/// Fewest axes a radar polygon can have.
pub const MIN_CORNER_COUNT: usize = 3;

/// UV of the center vertex.
const CENTER_UV: Point2 = Point2::new(0.5, 0.5);

/// Computes the filled radar polygon for a set of axis values.
///
/// Axis `i` sits at angle `π/2 − i·2π/n` (clockwise from "up") on an ellipse
/// with radii `radius_x`/`radius_y`, scaled by `values[i]`.
#[derive(Debug)]
pub struct GeneratePolygon<'a> {
    values: &'a [f64],
    corner_count: usize,
    radius_x: f64,
    radius_y: f64,
}

/// Center plus perimeter vertices and a center-anchored triangle fan.
#[derive(Debug, Clone, Default)]
pub struct FilledPolygon {
    /// Index 0 is the center; `1..=n` are the perimeter vertices, clockwise.
    pub positions: Vec<Point2>,
    /// Center UV is `(0.5, 0.5)`; perimeter UVs are the unit axis directions.
    pub uvs: Vec<Point2>,
    pub triangles: Vec<[u32; 3]>,
}

impl<'a> GeneratePolygon<'a> {
    #[must_use]
    pub fn new(values: &'a [f64], corner_count: usize, radius_x: f64, radius_y: f64) -> Self {
        Self {
            values,
            corner_count,
            radius_x,
            radius_y,
        }
    }

    /// Executes the generation.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::InvalidAxisCount` if `values.len() != corner_count`
    /// or `corner_count < 3`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<FilledPolygon> {
        let n = self.corner_count;
        if n < MIN_CORNER_COUNT || self.values.len() != n {
            return Err(ChartError::InvalidAxisCount {
                corner_count: n,
                value_count: self.values.len(),
            }
            .into());
        }

        let mut positions = Vec::with_capacity(n + 1);
        let mut uvs = Vec::with_capacity(n + 1);
        positions.push(Point2::origin());
        uvs.push(CENTER_UV);

        for (i, &value) in self.values.iter().enumerate() {
            let dir = axis_direction(i, n);
            positions.push(Point2::new(
                value * self.radius_x * dir.x,
                value * self.radius_y * dir.y,
            ));
            uvs.push(Point2::new(dir.x, dir.y));
        }

        // Anchor the fan at the center, not at a boundary vertex: a boundary fan
        // breaks as soon as one axis dips below the chord of its neighbours.
        let n = n as u32;
        let mut triangles = Vec::with_capacity(n as usize);
        for i in 0..n - 1 {
            triangles.push([i + 1, 0, i + 2]);
        }
        triangles.push([1, 0, n]);

        Ok(FilledPolygon {
            positions,
            uvs,
            triangles,
        })
    }
}

impl FilledPolygon {
    /// Number of perimeter vertices.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    /// Perimeter vertices without the center.
    #[must_use]
    pub fn perimeter(&self) -> &[Point2] {
        self.positions.get(1..).unwrap_or_default()
    }

    /// Writes the polygon into `buffer` with a flat `color`, narrowing to
    /// `f32`, and collects the written positions (center first) into `written`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn write_to(&self, buffer: &mut MeshBuffer, color: Color32, written: &mut Vec<MeshPoint>) {
        written.clear();
        for (p, uv) in self.positions.iter().zip(&self.uvs) {
            let pos = MeshPoint::new(p.x as f32, p.y as f32);
            buffer.add_vertex(pos, color, MeshPoint::new(uv.x as f32, uv.y as f32));
            written.push(pos);
        }
        for &[a, b, c] in &self.triangles {
            buffer.add_triangle(a, b, c);
        }
    }
}
