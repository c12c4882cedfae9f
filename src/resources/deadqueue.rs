//! Eliminated players awaiting retrieval by the guard.
use bevy_ecs::prelude::{Entity, Resource};

/// Eliminated players the guard has not picked up yet.
///
/// Entries keep insertion order so that nearest-target selection is
/// deterministic when distances tie.
#[derive(Resource, Debug, Clone, Default)]
pub struct DeadPlayerQueue {
    entries: Vec<Entity>,
}

impl DeadPlayerQueue {
    pub fn push(&mut self, entity: Entity) {
        if !self.entries.contains(&entity) {
            self.entries.push(entity);
        }
    }

    /// Remove a retrieved player. Returns whether it was queued.
    pub fn remove(&mut self, entity: Entity) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| *e != entity);
        self.entries.len() != before
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entries.contains(&entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
