mod builder;
mod edge_line;

pub use builder::OutlineBuilder;
pub use edge_line::{EdgeLine, LineOffsets, Side};

use crate::mesh::Color32;

/// Where the outline ribbon sits relative to the polygon boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutlineMode {
    /// Ribbon between the boundary and an inset ring.
    #[default]
    Inner,
    /// Ribbon between the boundary and an outset ring.
    Outer,
    /// Ribbon straddling the boundary, half thickness on each side.
    Center,
}

/// Outline appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineStyle {
    /// Ribbon width in local units, measured along each edge normal.
    pub thickness: f64,
    pub color: Color32,
    pub mode: OutlineMode,
}

impl OutlineStyle {
    #[must_use]
    pub fn new(thickness: f64, color: Color32, mode: OutlineMode) -> Self {
        Self {
            thickness,
            color,
            mode,
        }
    }
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self::new(1.0, Color32::BLACK, OutlineMode::Inner)
    }
}
