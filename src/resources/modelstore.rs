//! Loaded 3D models keyed by string ids.
//!
//! Models hold GPU handles, so the store is inserted as a non-send resource
//! and only touched from the main thread.
use raylib::prelude::Model;
use rustc_hash::FxHashMap;

pub struct ModelStore {
    pub map: FxHashMap<String, Model>,
}

impl ModelStore {
    pub fn new() -> Self {
        ModelStore {
            map: FxHashMap::default(),
        }
    }
    pub fn insert(&mut self, id: impl Into<String>, model: Model) {
        self.map.insert(id.into(), model);
    }
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Model> {
        self.map.get_mut(id)
    }
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new()
    }
}
