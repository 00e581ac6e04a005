use super::{Color32, MeshBuffer, MeshPoint};

impl MeshBuffer {
    /// Appends a small black diamond centred on `center`, for eyeballing
    /// vertex positions while debugging a layout.
    ///
    /// Corners sit at `size / 2` along each axis: up, right, down, left.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_square_point(&mut self, center: MeshPoint, size: f32) {
        let half = size * 0.5;
        let base = self.vertex_count() as u32;
        let uv = MeshPoint::origin();
        for (dx, dy) in [(0.0, half), (half, 0.0), (0.0, -half), (-half, 0.0)] {
            self.add_vertex(
                MeshPoint::new(center.x + dx, center.y + dy),
                Color32::BLACK,
                uv,
            );
        }
        self.add_triangle(base, base + 3, base + 1);
        self.add_triangle(base + 2, base + 1, base + 3);
    }
}
