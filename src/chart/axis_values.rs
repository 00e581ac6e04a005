/// Per-axis chart values, each clamped into `[0, 1]` on ingestion.
///
/// Index `i` belongs to axis `i`; order determines angular position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisValues {
    values: Vec<f64>,
}

impl AxisValues {
    /// Clamps and copies `values`. `NaN` is treated as `0`.
    #[must_use]
    pub fn from_slice<T: Copy + Into<f64>>(values: &[T]) -> Self {
        Self {
            values: values.iter().map(|&v| clamp01(v.into())).collect(),
        }
    }

    /// Creates `count` values at full scale.
    #[must_use]
    pub fn full(count: usize) -> Self {
        Self {
            values: vec![1.0; count],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Truncates or pads (with full-scale values) to `count` entries.
    pub fn resize(&mut self, count: usize) {
        self.values.resize(count, 1.0);
    }
}

fn clamp01(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
