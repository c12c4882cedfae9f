//! Round setup.
//!
//! Spawns the actors at their starting marks, loads the models and sounds
//! they need, and places the camera. Entity spawning is separate from asset
//! loading so the round can be set up in a world without a window.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::doll::Doll;
use crate::components::guard::Guard;
use crate::components::model::ModelRef;
use crate::components::orientation::Orientation;
use crate::components::player::Player;
use crate::components::worldposition::WorldPosition;
use crate::error::{AssetError, require_audio_file, require_model_file};
use crate::events::audio::AudioCmd;
use crate::resources::audio::SoundCues;
use crate::resources::camera3d::Camera3DRes;
use crate::resources::lightstate::LightState;
use crate::resources::modelstore::ModelStore;
use crate::resources::roundconfig::RoundConfig;
use crate::systems::render::{SKYBOX_KEY, to_render_space};

const ACTOR_SCALE: f32 = 2.0;
const DOLL_START: (f32, f32, f32) = (0.0, 60.0, 0.0);
const GUARD_START: (f32, f32, f32) = (-4.0, 60.0, 0.0);
const PLAYER1_START: (f32, f32, f32) = (-3.0, 0.0, 0.0);
const PLAYER2_START: (f32, f32, f32) = (3.0, 0.0, 0.0);

/// Model key -> file name for every required actor model.
pub const MODEL_FILES: [(&str, &str); 4] = [
    ("doll", "squid_game_doll.glb"),
    ("guard", "squid_game_guard2.glb"),
    ("player1", "player1.glb"),
    ("player2", "player2.glb"),
];
const SKYBOX_FILE: &str = "my_skybox.glb";
const RED_LIGHT_FILE: &str = "red_light.mp3";
const GREEN_LIGHT_FILE: &str = "green_light.mp3";

/// Entities created for a round.
#[derive(Debug, Clone, Copy)]
pub struct RoundActors {
    pub doll: Entity,
    pub guard: Entity,
    pub players: [Entity; 2],
}

/// Spawn the doll, the guard and both players.
///
/// Players look at the doll and are then turned half a revolution, which is
/// why they carry `inverted_facing`.
pub fn spawn_actors(world: &mut World) -> RoundActors {
    let light = world
        .get_resource::<LightState>()
        .copied()
        .unwrap_or_default();

    let doll = world
        .spawn((
            Doll,
            WorldPosition::new(DOLL_START.0, DOLL_START.1, DOLL_START.2),
            Orientation::with_heading(Doll::heading_for(light)),
            ModelRef::new("doll", ACTOR_SCALE),
        ))
        .id();

    let guard = world
        .spawn((
            Guard,
            WorldPosition::new(GUARD_START.0, GUARD_START.1, GUARD_START.2),
            Orientation::default(),
            ModelRef::new("guard", ACTOR_SCALE),
        ))
        .id();

    let mut spawn_player = |id: u8, start: (f32, f32, f32)| {
        let mut facing = Orientation::look_at((start.0, start.1), (DOLL_START.0, DOLL_START.1));
        facing.heading += 180.0;
        world
            .spawn((
                Player::new(id, format!("Player {}", id)).with_inverted_facing(true),
                WorldPosition::new(start.0, start.1, start.2),
                facing,
                ModelRef::new(format!("player{}", id), ACTOR_SCALE),
            ))
            .id()
    };
    let players = [spawn_player(1, PLAYER1_START), spawn_player(2, PLAYER2_START)];

    info!("Finish line at Y = {}", world.resource::<RoundConfig>().finish_line);

    RoundActors {
        doll,
        guard,
        players,
    }
}

fn load_model(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    path: &std::path::Path,
) -> Result<Model, AssetError> {
    require_model_file(path)?;
    rl.load_model(th, &path.to_string_lossy())
        .map_err(|e| AssetError::LoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

/// Load every actor model plus the optional skybox.
///
/// Any missing actor model is fatal. A missing skybox is only a warning.
pub fn load_models(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    config: &RoundConfig,
) -> Result<ModelStore, AssetError> {
    let mut store = ModelStore::new();

    match load_model(rl, th, &config.asset_path(SKYBOX_FILE)) {
        Ok(model) => store.insert(SKYBOX_KEY, model),
        Err(e) => warn!("Skybox skipped: {}", e),
    }

    for (key, file) in MODEL_FILES {
        let model = load_model(rl, th, &config.asset_path(file))?;
        info!("Loaded model '{}' from {}", key, file);
        store.insert(key, model);
    }
    Ok(store)
}

/// Queue the light sounds that exist on disk and record which cues are
/// playable. Missing sounds are logged and left out.
pub fn register_sound_cues(world: &mut World) -> SoundCues {
    let config = world.resource::<RoundConfig>().clone();
    let mut cues = SoundCues::default();
    let mut cmds = world.resource_mut::<Messages<AudioCmd>>();

    for (id, file, slot) in [
        ("red_light", RED_LIGHT_FILE, &mut cues.red),
        ("green_light", GREEN_LIGHT_FILE, &mut cues.green),
    ] {
        let path = config.asset_path(file);
        match require_audio_file(&path) {
            Ok(()) => {
                cmds.write(AudioCmd::LoadFx {
                    id: id.to_string(),
                    path: path.to_string_lossy().into_owned(),
                });
                *slot = Some(id.to_string());
            }
            Err(e) => warn!("{}", e),
        }
    }

    world.insert_resource(cues.clone());
    cues
}

/// Camera behind the start line looking down the field.
pub fn setup_camera(world: &mut World) {
    let camera = Camera3D::perspective(
        to_render_space(Vector3::new(0.0, -30.0, 10.0)),
        to_render_space(Vector3::new(0.0, 30.0, 0.0)),
        Vector3::new(0.0, 1.0, 0.0),
        45.0,
    );
    world.insert_resource(Camera3DRes(camera));
}
