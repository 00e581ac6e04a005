mod square_point;

/// Single-precision 2D point stored in mesh records.
pub type MeshPoint = nalgebra::Point2<f32>;

/// 8-bit RGBA vertex colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color32 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color32 {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);

    /// Creates a colour from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color32 {
    fn default() -> Self {
        Self::WHITE
    }
}

/// One vertex record: position, colour and texture coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    pub position: MeshPoint,
    pub color: Color32,
    pub uv: MeshPoint,
}

/// Append-only vertex and triangle storage handed to the renderer.
///
/// Triangles index into the vertex list; the renderer assumes CCW winding.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffer {
    vertices: Vec<MeshVertex>,
    indices: Vec<[u32; 3]>,
}

impl MeshBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all vertices and triangles, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Appends a vertex and returns its index.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_vertex(&mut self, position: MeshPoint, color: Color32, uv: MeshPoint) -> u32 {
        let idx = self.vertices.len() as u32;
        self.vertices.push(MeshVertex {
            position,
            color,
            uv,
        });
        idx
    }

    /// Appends a triangle.
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.push([a, b, c]);
    }

    /// Number of vertices written so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles written so far.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn vertices(&self) -> &[MeshVertex] {
        &self.vertices
    }

    #[must_use]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Returns `true` if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.indices.is_empty()
    }
}
