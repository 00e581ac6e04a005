mod axis_values;
mod modifier;
mod polygon;
mod radar_chart;

pub use axis_values::AxisValues;
pub use modifier::{MeshModifier, ModifierId, ModifierRegistry};
pub use polygon::{FilledPolygon, GeneratePolygon, MIN_CORNER_COUNT};
pub use radar_chart::RadarChart;

use crate::mesh::Color32;

/// Size of the chart's bounding rectangle in local units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectSize {
    pub width: f64,
    pub height: f64,
}

impl RectSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Horizontal and vertical ellipse radii (half width, half height).
    #[must_use]
    pub fn radii(&self) -> (f64, f64) {
        (self.width * 0.5, self.height * 0.5)
    }
}

impl Default for RectSize {
    fn default() -> Self {
        Self::new(100.0, 100.0)
    }
}

/// Chart configuration; changed rarely, not per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartConfig {
    /// Number of axes. Geometry needs at least [`MIN_CORNER_COUNT`]; 3..=20 is the useful range.
    pub corner_count: usize,
    /// Bounding rectangle; its half extents are the X/Y radii.
    pub rect: RectSize,
    /// Flat colour of the filled polygon.
    pub fill_color: Color32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            corner_count: 3,
            rect: RectSize::default(),
            fill_color: Color32::WHITE,
        }
    }
}
