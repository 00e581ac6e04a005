pub mod general_line;
pub mod polygon_2d;

pub use general_line::GeneralLine;

/// 2D point type used for geometric computation.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type used for geometric computation.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
