pub mod chart;
pub mod error;
pub mod math;
pub mod mesh;
pub mod outline;
pub mod pointer;

pub use error::{RadarError, Result};
