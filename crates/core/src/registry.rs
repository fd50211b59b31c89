//! Explicit entity registry.
//!
//! Owns the animators for every registered entity and tracks which one is
//! currently selected (the entity command handlers and the camera-follow
//! driver act on). Passed by reference from the composition root; there is
//! no global instance.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::animator::{EntityAnimator, Transform};

/// Opaque identifier for a registered entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(u32);

/// Collection of per-entity animators with a selection cursor.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    animators: FxHashMap<EntityId, EntityAnimator>,
    // Insertion order, for deterministic selection cycling.
    order: Vec<EntityId>,
    next_id: u32,
    selected: usize,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new entity with a default transform.
    pub fn register(&mut self) -> EntityId {
        self.register_with(Transform::default())
    }

    /// Register a new entity starting at `transform`.
    pub fn register_with(&mut self, transform: Transform) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;

        self.animators
            .insert(id, EntityAnimator::with_transform(transform));
        self.order.push(id);
        tracing::debug!(id = id.0, "registered entity");
        id
    }

    /// Remove an entity, cancelling any running animation first.
    ///
    /// Returns the animator so a caller can inspect its final transform.
    pub fn deregister(&mut self, id: EntityId) -> Option<EntityAnimator> {
        let mut animator = self.animators.remove(&id)?;
        animator.cancel();

        self.order.retain(|&other| other != id);
        if self.selected >= self.order.len() {
            self.selected = self.order.len().saturating_sub(1);
        }
        tracing::debug!(id = id.0, "deregistered entity");
        Some(animator)
    }

    /// Get an entity's animator by ID.
    pub fn get(&self, id: EntityId) -> Option<&EntityAnimator> {
        self.animators.get(&id)
    }

    /// Get a mutable entity animator by ID.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut EntityAnimator> {
        self.animators.get_mut(&id)
    }

    /// ID of the currently selected entity, if any are registered.
    pub fn selected_id(&self) -> Option<EntityId> {
        self.order.get(self.selected).copied()
    }

    pub fn selected(&self) -> Option<&EntityAnimator> {
        self.get(self.selected_id()?)
    }

    pub fn selected_mut(&mut self) -> Option<&mut EntityAnimator> {
        let id = self.selected_id()?;
        self.get_mut(id)
    }

    /// Move the selection cursor forward, wrapping at the end.
    pub fn select_next(&mut self) {
        if !self.order.is_empty() {
            self.selected = (self.selected + 1) % self.order.len();
        }
    }

    /// Move the selection cursor backward, wrapping at the start.
    pub fn select_prev(&mut self) {
        if !self.order.is_empty() {
            self.selected = self.selected.checked_sub(1).unwrap_or(self.order.len() - 1);
        }
    }

    /// All registered entities in insertion order.
    pub fn animators(&self) -> impl Iterator<Item = (EntityId, &EntityAnimator)> {
        self.order
            .iter()
            .filter_map(|id| self.animators.get(id).map(|animator| (*id, animator)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
