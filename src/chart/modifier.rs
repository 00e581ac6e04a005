use std::any::Any;
use std::fmt::Debug;

use slotmap::SlotMap;

use crate::mesh::{MeshBuffer, MeshPoint};

use super::ChartConfig;

slotmap::new_key_type! {
    /// Handle to a modifier registered on a chart.
    pub struct ModifierId;
}

/// A collaborator that runs after the filled polygon has been written.
///
/// `vertices` holds the polygon as written to the buffer: center at index 0,
/// then one perimeter vertex per axis. `config` is the chart configuration the
/// polygon was built from. A modifier may append geometry to the buffer or
/// position external elements from the same vertex list.
pub trait MeshModifier: Any + Debug {
    fn modify_mesh(&mut self, buffer: &mut MeshBuffer, vertices: &[MeshPoint], config: &ChartConfig);

    /// Disabled modifiers are skipped without touching the buffer.
    fn is_enabled(&self) -> bool {
        true
    }

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Ordered set of mesh modifiers.
///
/// Modifiers run in registration order; removal keeps the relative order of
/// the rest.
#[derive(Debug, Default)]
pub struct ModifierRegistry {
    slots: SlotMap<ModifierId, Box<dyn MeshModifier>>,
    order: Vec<ModifierId>,
}

impl ModifierRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a modifier after all existing ones.
    pub fn add(&mut self, modifier: Box<dyn MeshModifier>) -> ModifierId {
        let id = self.slots.insert(modifier);
        self.order.push(id);
        id
    }

    /// Unregisters a modifier, returning it if it was present.
    pub fn remove(&mut self, id: ModifierId) -> Option<Box<dyn MeshModifier>> {
        let modifier = self.slots.remove(id)?;
        self.order.retain(|&other| other != id);
        Some(modifier)
    }

    /// Typed mutable access to a registered modifier.
    pub fn get_mut<T: MeshModifier>(&mut self, id: ModifierId) -> Option<&mut T> {
        self.slots.get_mut(id)?.as_any_mut().downcast_mut::<T>()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Runs every enabled modifier in registration order.
    pub fn apply(&mut self, buffer: &mut MeshBuffer, vertices: &[MeshPoint], config: &ChartConfig) {
        for &id in &self.order {
            let Some(modifier) = self.slots.get_mut(id) else {
                continue;
            };
            if !modifier.is_enabled() {
                tracing::trace!(?id, "skipping disabled mesh modifier");
                continue;
            }
            tracing::trace!(?id, vertices = buffer.vertex_count(), "running mesh modifier");
            modifier.modify_mesh(buffer, vertices, config);
        }
    }
}
