//! Red Light, Green Light main entry point.
//!
//! A small 3D round written in Rust using:
//! - **raylib** for windowing, model loading, audio and keyboard input
//! - **bevy_ecs** for the round state and per-frame logic
//!
//! # Main Loop
//!
//! 1. Parse the command line, load `redlight.ini` (defaults if absent)
//! 2. Open the window, load models (a missing one aborts), queue sounds
//! 3. Spawn the doll, the guard and both players
//! 4. Every frame: feed the frame delta to `WorldTime`, read input, run the
//!    round logic, talk to the audio thread, draw
//! 5. Stop when the round ends or the window closes, then join the audio thread
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config redlight.ini
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use redlight::game;
use redlight::resources::audio::{setup_audio, shutdown_audio};
use redlight::resources::input::InputBindings;
use redlight::resources::roundconfig::{DEFAULT_CONFIG_PATH, RoundConfig};
use redlight::resources::roundstatus::RoundStatus;
use redlight::resources::worldsignals::WorldSignals;
use redlight::schedule::{build_round_scheduler, init_round_world};
use redlight::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use redlight::systems::input::poll_round_input;
use redlight::systems::movement::player_movement_system;
use redlight::systems::render::render_system;
use redlight::systems::round::{QUIT_FLAG, update_move_messages};
use redlight::systems::time::update_world_time;

/// Red Light, Green Light
#[derive(Parser)]
#[command(version, about = "Two players, one doll. Move on green, freeze on red.")]
struct Cli {
    /// Configuration file to load.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Override the round length in seconds.
    #[arg(long, value_name = "SECONDS")]
    duration: Option<f32>,

    /// Write the effective configuration to PATH and exit.
    #[arg(long, value_name = "PATH")]
    write_config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = RoundConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(duration) = cli.duration {
        config.round_duration = duration;
    }

    // Early-exit: write the config and quit (no window/audio needed)
    if let Some(path) = cli.write_config {
        config.config_path = path;
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    // --------------- Raylib window & assets ---------------
    let (width, height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .title("Red Light, Green Light")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is a round binding, not a window-close key
    rl.set_exit_key(None);

    let models = match game::load_models(&mut rl, &thread, &config) {
        Ok(models) => models,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    init_round_world(&mut world, config);
    world.insert_resource(InputBindings::default());
    world.insert_non_send_resource(models);

    // Init audio; must go before the cues are queued
    setup_audio(&mut world);
    game::register_sound_cues(&mut world);

    game::setup_camera(&mut world);
    game::spawn_actors(&mut world);

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut scheduler = build_round_scheduler(&mut world);
    scheduler.every_frame(poll_round_input.before(player_movement_system));
    scheduler.every_frame(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain()
            .after(update_move_messages),
    );
    scheduler.every_frame(render_system.after(log_audio_messages));

    scheduler
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    info!("Red light! The round begins.");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<WorldSignals>().has_flag(QUIT_FLAG)
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        scheduler.run(&mut world);

        world.clear_trackers();
    }

    if let RoundStatus::Ended(reason) = *world.resource::<RoundStatus>() {
        info!("Round finished: {:?}", reason);
    }
    shutdown_audio(&mut world);
}
