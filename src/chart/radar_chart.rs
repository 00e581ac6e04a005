use crate::error::{ChartError, Result};
use crate::mesh::{Color32, MeshBuffer, MeshPoint};

use super::{AxisValues, ChartConfig, GeneratePolygon, MeshModifier, ModifierId, ModifierRegistry, RectSize};

/// A radar chart: cached axis values, configuration and mesh modifiers.
///
/// The host calls [`RadarChart::rebuild`] whenever values or configuration
/// change; every rebuild regenerates the whole mesh.
#[derive(Debug)]
pub struct RadarChart {
    config: ChartConfig,
    values: AxisValues,
    modifiers: ModifierRegistry,
    /// Polygon positions as last written, reused between rebuilds.
    written: Vec<MeshPoint>,
}

impl RadarChart {
    /// Creates a chart whose axes all start at full scale.
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        Self {
            values: AxisValues::full(config.corner_count),
            config,
            modifiers: ModifierRegistry::new(),
            written: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Current cached values, already clamped into `[0, 1]`.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Replaces the cached values, clamping each into `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::InvalidAxisCount` if `values.len()` differs from
    /// the corner count; the cached values are left unchanged.
    pub fn update_values<T: Copy + Into<f64>>(&mut self, values: &[T]) -> Result<()> {
        if values.len() != self.config.corner_count {
            tracing::warn!(
                corner_count = self.config.corner_count,
                value_count = values.len(),
                "rejected radar chart update"
            );
            return Err(ChartError::InvalidAxisCount {
                corner_count: self.config.corner_count,
                value_count: values.len(),
            }
            .into());
        }
        self.values = AxisValues::from_slice(values);
        Ok(())
    }

    /// Changes the number of axes. Surplus values are dropped and new axes
    /// start at full scale.
    pub fn set_corner_count(&mut self, corner_count: usize) {
        self.config.corner_count = corner_count;
        self.values.resize(corner_count);
    }

    pub fn set_rect(&mut self, rect: RectSize) {
        self.config.rect = rect;
    }

    pub fn set_fill_color(&mut self, color: Color32) {
        self.config.fill_color = color;
    }

    /// Registers a modifier to run after the filled polygon, after any
    /// previously registered ones.
    pub fn add_modifier(&mut self, modifier: Box<dyn MeshModifier>) -> ModifierId {
        self.modifiers.add(modifier)
    }

    pub fn remove_modifier(&mut self, id: ModifierId) -> Option<Box<dyn MeshModifier>> {
        self.modifiers.remove(id)
    }

    /// Typed access to a registered modifier, e.g. to change its style.
    pub fn modifier_mut<T: MeshModifier>(&mut self, id: ModifierId) -> Option<&mut T> {
        self.modifiers.get_mut(id)
    }

    /// Clears `buffer` and fills it with the chart mesh, then runs the
    /// enabled modifiers in registration order.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::InvalidAxisCount` if the corner count is below 3
    /// or does not match the cached values. `buffer` is left untouched.
    pub fn rebuild(&mut self, buffer: &mut MeshBuffer) -> Result<()> {
        let (radius_x, radius_y) = self.config.rect.radii();
        let polygon = GeneratePolygon::new(
            self.values.as_slice(),
            self.config.corner_count,
            radius_x,
            radius_y,
        )
        .execute()?;

        buffer.clear();
        polygon.write_to(buffer, self.config.fill_color, &mut self.written);
        self.modifiers.apply(buffer, &self.written, &self.config);

        tracing::debug!(
            corners = self.config.corner_count,
            vertices = buffer.vertex_count(),
            triangles = buffer.triangle_count(),
            "rebuilt radar chart mesh"
        );
        Ok(())
    }
}

impl Default for RadarChart {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}
