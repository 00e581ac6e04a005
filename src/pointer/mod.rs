mod controller;
mod ranked;

pub use controller::{PointerController, PointerId};
pub use ranked::{RankEntry, RankedPointer};

use std::any::Any;
use std::fmt::Debug;

use crate::mesh::MeshPoint;

/// A marker placed on one axis of the chart.
pub trait PointerView: Any + Debug {
    /// Moves the marker to `anchored`, in chart-local coordinates.
    fn update_pointer_position(&mut self, anchored: MeshPoint);

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
