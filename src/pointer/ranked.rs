use std::any::Any;
use std::fmt::Debug;

use crate::mesh::MeshPoint;

use super::PointerView;

/// A sprite shown once the axis value reaches `threshold`.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry<S> {
    pub threshold: f64,
    pub sprite: S,
}

impl<S> RankEntry<S> {
    #[must_use]
    pub fn new(threshold: f64, sprite: S) -> Self {
        Self { threshold, sprite }
    }
}

/// A pointer whose sprite depends on the value of its axis.
///
/// `S` is whatever handle the host uses for an image.
#[derive(Debug, Clone)]
pub struct RankedPointer<S> {
    /// Highest threshold first.
    entries: Vec<RankEntry<S>>,
    sprite: Option<S>,
    position: MeshPoint,
}

impl<S: Clone> RankedPointer<S> {
    #[must_use]
    pub fn new(mut entries: Vec<RankEntry<S>>) -> Self {
        entries.sort_by(|a, b| b.threshold.total_cmp(&a.threshold));
        Self {
            entries,
            sprite: None,
            position: MeshPoint::origin(),
        }
    }

    /// Selects the sprite of the highest threshold `<= value`.
    ///
    /// Keeps the current sprite when no threshold is reached.
    pub fn update_rank(&mut self, value: f64) {
        if let Some(entry) = self.entries.iter().find(|e| value >= e.threshold) {
            self.sprite = Some(entry.sprite.clone());
        }
    }

    #[must_use]
    pub fn sprite(&self) -> Option<&S> {
        self.sprite.as_ref()
    }

    #[must_use]
    pub fn position(&self) -> MeshPoint {
        self.position
    }
}

impl<S: Debug + 'static> PointerView for RankedPointer<S> {
    fn update_pointer_position(&mut self, anchored: MeshPoint) {
        self.position = anchored;
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
