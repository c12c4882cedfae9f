use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug)]
/// Visual for an entity: a loaded model looked up by key in the
/// [`ModelStore`](crate::resources::modelstore::ModelStore).
pub struct ModelRef {
    pub key: String,
    pub scale: f32,
}

impl ModelRef {
    pub fn new(key: impl Into<String>, scale: f32) -> Self {
        ModelRef {
            key: key.into(),
            scale,
        }
    }
}
