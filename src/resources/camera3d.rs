use bevy_ecs::prelude::Resource;
use raylib::prelude::Camera3D;

/// Shared 3D camera used by the render adapter.
#[derive(Resource, Clone, Copy)]
pub struct Camera3DRes(pub Camera3D);
