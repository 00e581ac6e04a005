use thiserror::Error;

/// Top-level error type for radar chart mesh generation.
#[derive(Debug, Error)]
pub enum RadarError {
    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised by the chart entry points before any mesh mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// Value count differs from the corner count, or fewer than 3 corners are configured.
    #[error("invalid axis count: {value_count} values for {corner_count} corners (need one value per corner, at least 3 corners)")]
    InvalidAxisCount {
        corner_count: usize,
        value_count: usize,
    },
}

/// Errors related to 2D line geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length edge between ({x1}, {y1}) and ({x2}, {y2})")]
    ZeroLengthEdge { x1: f64, y1: f64, x2: f64, y2: f64 },

    #[error("parallel lines have no single intersection")]
    DegenerateIntersection,
}

impl RadarError {
    /// Returns `true` if this is an axis-count mismatch.
    #[must_use]
    pub fn is_invalid_axis_count(&self) -> bool {
        matches!(self, Self::Chart(ChartError::InvalidAxisCount { .. }))
    }
}

/// Convenience type alias for results using [`RadarError`].
pub type Result<T> = std::result::Result<T, RadarError>;
