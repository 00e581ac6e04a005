use std::any::Any;

use slotmap::SlotMap;

use crate::chart::{ChartConfig, MeshModifier};
use crate::mesh::{MeshBuffer, MeshPoint};

use super::PointerView;

slotmap::new_key_type! {
    /// Handle to a pointer owned by a [`PointerController`].
    pub struct PointerId;
}

/// Places one pointer on each perimeter vertex after every rebuild.
///
/// Pointers are assigned to axes in the order they were added. Axes without
/// a pointer are left alone; the controller never touches the mesh itself.
#[derive(Debug)]
pub struct PointerController {
    pointers: SlotMap<PointerId, Box<dyn PointerView>>,
    axes: Vec<PointerId>,
    enabled: bool,
}

impl PointerController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pointers: SlotMap::with_key(),
            axes: Vec::new(),
            enabled: true,
        }
    }

    /// Adds a pointer for the next unassigned axis.
    pub fn add_pointer(&mut self, pointer: Box<dyn PointerView>) -> PointerId {
        let id = self.pointers.insert(pointer);
        self.axes.push(id);
        id
    }

    /// Removes a pointer; later pointers move up one axis.
    pub fn remove_pointer(&mut self, id: PointerId) -> Option<Box<dyn PointerView>> {
        let pointer = self.pointers.remove(id)?;
        self.axes.retain(|&other| other != id);
        Some(pointer)
    }

    /// Typed access to a pointer, e.g. to update its rank.
    pub fn pointer_mut<T: PointerView>(&mut self, id: PointerId) -> Option<&mut T> {
        self.pointers.get_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    /// Axis index the pointer is currently assigned to.
    #[must_use]
    pub fn axis_of(&self, id: PointerId) -> Option<usize> {
        self.axes.iter().position(|&other| other == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Moves pointer `i` to `perimeter[i]`.
    pub fn place(&mut self, perimeter: &[MeshPoint]) {
        if perimeter.len() != self.axes.len() {
            tracing::debug!(
                axes = perimeter.len(),
                pointers = self.axes.len(),
                "pointer count differs from axis count"
            );
        }
        for (id, &vertex) in self.axes.iter().zip(perimeter) {
            if let Some(pointer) = self.pointers.get_mut(*id) {
                pointer.update_pointer_position(vertex);
            }
        }
    }
}

impl Default for PointerController {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshModifier for PointerController {
    fn modify_mesh(
        &mut self,
        _buffer: &mut MeshBuffer,
        vertices: &[MeshPoint],
        _config: &ChartConfig,
    ) {
        self.place(vertices.get(1..).unwrap_or_default());
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
