//! Round integration tests.
//!
//! Drive a headless world through the round scheduler with a fixed frame
//! delta, the way the host loop does, and check the round rules end to end.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use std::sync::{Arc, Mutex};

use redlight::components::doll::Doll;
use redlight::components::model::ModelRef;
use redlight::components::orientation::Orientation;
use redlight::components::player::{Outcome, Player};
use redlight::components::worldposition::WorldPosition;
use redlight::events::audio::AudioCmd;
use redlight::events::input::{MoveCommand, QuitRequested};
use redlight::events::round::{
    LightChangedEvent, PlayerEliminatedEvent, PlayerWonEvent, RoundEndedEvent,
};
use redlight::game::{RoundActors, register_sound_cues, spawn_actors};
use redlight::resources::audio::SoundCues;
use redlight::resources::deadqueue::DeadPlayerQueue;
use redlight::resources::lightstate::LightState;
use redlight::resources::roundconfig::RoundConfig;
use redlight::resources::roundstatus::{RoundEndReason, RoundStatus};
use redlight::resources::roundtimer::RoundTimer;
use redlight::resources::worldsignals::WorldSignals;
use redlight::schedule::{RoundScheduler, build_round_scheduler, init_round_world};
use redlight::systems::round::QUIT_FLAG;
use redlight::systems::time::update_world_time;

const FRAME: f32 = 1.0 / 60.0;
const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_round(config: RoundConfig) -> (World, RoundScheduler, RoundActors) {
    let mut world = World::new();
    init_round_world(&mut world, config);
    let actors = spawn_actors(&mut world);
    let scheduler = build_round_scheduler(&mut world);
    (world, scheduler, actors)
}

fn tick(world: &mut World, scheduler: &mut RoundScheduler, dt: f32) {
    update_world_time(world, dt);
    scheduler.run(world);
}

fn send_move(world: &mut World, player: u8, fb: i8, lr: i8) {
    world
        .resource_mut::<Messages<MoveCommand>>()
        .write(MoveCommand::new(player, fb, lr));
}

fn set_light(world: &mut World, light: LightState) {
    *world.resource_mut::<LightState>() = light;
}

fn collect<E: Event + Clone>(world: &mut World) -> Arc<Mutex<Vec<E>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    world.add_observer(move |trigger: On<E>| {
        sink.lock().unwrap().push(trigger.event().clone());
    });
    seen
}

fn outcome(world: &World, entity: Entity) -> Outcome {
    world.get::<Player>(entity).unwrap().outcome
}

fn position(world: &World, entity: Entity) -> WorldPosition {
    *world.get::<WorldPosition>(entity).unwrap()
}

// =============================================================================
// Light toggling
// =============================================================================

#[test]
fn light_alternates_every_interval_starting_red() {
    let (mut world, mut scheduler, _) = make_round(RoundConfig::new());
    let changes = collect::<LightChangedEvent>(&mut world);
    assert_eq!(*world.resource::<LightState>(), LightState::Red);

    for _ in 0..12 {
        tick(&mut world, &mut scheduler, 1.0);
    }

    let states: Vec<LightState> = changes.lock().unwrap().iter().map(|e| e.state).collect();
    assert_eq!(
        states,
        vec![
            LightState::Green,
            LightState::Red,
            LightState::Green,
            LightState::Red
        ]
    );
}

#[test]
fn light_interval_is_frame_rate_independent() {
    let (mut world, mut scheduler, _) = make_round(RoundConfig::new());
    let changes = collect::<LightChangedEvent>(&mut world);

    // 6 seconds of game time as 24 quarter-second frames
    for _ in 0..24 {
        tick(&mut world, &mut scheduler, 0.25);
    }
    assert_eq!(changes.lock().unwrap().len(), 2);

    // A single long frame covering two periods still toggles twice
    tick(&mut world, &mut scheduler, 6.0);
    assert_eq!(changes.lock().unwrap().len(), 4);
    assert_eq!(*world.resource::<LightState>(), LightState::Red);
}

#[test]
fn doll_turns_its_back_on_green() {
    let (mut world, mut scheduler, actors) = make_round(RoundConfig::new());
    assert_eq!(world.get::<Orientation>(actors.doll).unwrap().heading, 0.0);

    tick(&mut world, &mut scheduler, 3.0);
    assert_eq!(*world.resource::<LightState>(), LightState::Green);
    assert_eq!(
        world.get::<Orientation>(actors.doll).unwrap().heading,
        Doll::heading_for(LightState::Green)
    );

    tick(&mut world, &mut scheduler, 3.0);
    assert_eq!(world.get::<Orientation>(actors.doll).unwrap().heading, 0.0);
}

#[test]
fn light_toggle_plays_cue_only_when_loaded() {
    let (mut world, mut scheduler, _) = make_round(RoundConfig::new());
    world.insert_resource(SoundCues {
        red: None,
        green: Some("green_light".to_string()),
    });

    tick(&mut world, &mut scheduler, 3.0); // -> green, cue present
    tick(&mut world, &mut scheduler, 3.0); // -> red, cue missing

    let mut state = SystemState::<MessageReader<AudioCmd>>::new(&mut world);
    let mut reader = state.get_mut(&mut world);
    let played: Vec<String> = reader
        .read()
        .filter_map(|cmd| match cmd {
            AudioCmd::PlayFx { id } => Some(id.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(played, vec!["green_light".to_string()]);
}

fn queued_sound_loads(world: &mut World) -> Vec<(String, String)> {
    let mut state = SystemState::<MessageReader<AudioCmd>>::new(world);
    let mut reader = state.get_mut(world);
    reader
        .read()
        .filter_map(|cmd| match cmd {
            AudioCmd::LoadFx { id, path } => Some((id.clone(), path.clone())),
            _ => None,
        })
        .collect()
}

fn empty_assets_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("redlight-{}-{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn missing_light_sounds_leave_cues_silent() {
    let dir = empty_assets_dir("nosound");
    let mut config = RoundConfig::new();
    config.assets_dir = dir.clone();
    let (mut world, mut scheduler, _) = make_round(config);

    let cues = register_sound_cues(&mut world);
    assert!(cues.red.is_none());
    assert!(cues.green.is_none());
    assert!(queued_sound_loads(&mut world).is_empty());

    // The round plays on without sound
    tick(&mut world, &mut scheduler, 3.0);
    assert_eq!(*world.resource::<LightState>(), LightState::Green);
    assert!(world.resource::<RoundStatus>().is_running());
    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn only_present_light_sounds_are_loaded() {
    let dir = empty_assets_dir("greenonly");
    std::fs::write(dir.join("green_light.mp3"), b"not really audio").unwrap();
    let mut config = RoundConfig::new();
    config.assets_dir = dir.clone();
    let (mut world, _, _) = make_round(config);

    let cues = register_sound_cues(&mut world);
    assert!(cues.red.is_none());
    assert_eq!(cues.green.as_deref(), Some("green_light"));

    let loads = queued_sound_loads(&mut world);
    assert_eq!(loads.len(), 1);
    assert_eq!(loads[0].0, "green_light");
    assert!(loads[0].1.ends_with("green_light.mp3"));
    let _ = std::fs::remove_dir_all(dir);
}

// =============================================================================
// Movement and elimination
// =============================================================================

#[test]
fn forward_input_moves_toward_the_doll_on_green() {
    let (mut world, mut scheduler, actors) = make_round(RoundConfig::new());
    set_light(&mut world, LightState::Green);
    let start = position(&world, actors.players[0]);

    send_move(&mut world, 1, 1, 0);
    tick(&mut world, &mut scheduler, FRAME);

    let end = position(&world, actors.players[0]);
    assert!(end.pos.y > start.pos.y);
    // player_speed in the model frame, scaled by the actor scale of 2
    assert!(approx_eq(start.distance_to(&end), 0.6));
    assert_eq!(outcome(&world, actors.players[0]), Outcome::Alive);
    // The other player did not move
    assert!(approx_eq(position(&world, actors.players[1]).pos.y, 0.0));
}

#[test]
fn inverted_facing_negates_forward_in_local_frame() {
    let mut world = World::new();
    init_round_world(&mut world, RoundConfig::new());
    let mut scheduler = build_round_scheduler(&mut world);
    set_light(&mut world, LightState::Green);
    let runner = world
        .spawn((
            Player::new(1, "runner").with_inverted_facing(true),
            WorldPosition::new(0.0, 0.0, 0.0),
            Orientation::with_heading(180.0),
            ModelRef::new("player1", 2.0),
        ))
        .id();

    send_move(&mut world, 1, 1, 0);
    tick(&mut world, &mut scheduler, FRAME);
    let p = position(&world, runner);
    assert!(approx_eq(p.pos.x, 0.0));
    assert!(approx_eq(p.pos.y, 0.6));

    // Half a turn also mirrors the lateral axis
    send_move(&mut world, 1, 0, 1);
    tick(&mut world, &mut scheduler, FRAME);
    let p = position(&world, runner);
    assert!(approx_eq(p.pos.x, -0.6));
    assert!(approx_eq(p.pos.y, 0.6));
}

#[test]
fn unscaled_player_steps_by_player_speed() {
    let mut world = World::new();
    init_round_world(&mut world, RoundConfig::new());
    let mut scheduler = build_round_scheduler(&mut world);
    set_light(&mut world, LightState::Green);
    let runner = world
        .spawn((
            Player::new(1, "runner"),
            WorldPosition::new(0.0, 0.0, 0.0),
            Orientation::default(),
        ))
        .id();

    send_move(&mut world, 1, 1, 0);
    tick(&mut world, &mut scheduler, FRAME);
    assert!(approx_eq(position(&world, runner).pos.y, 0.3));
}

#[test]
fn each_command_is_applied_once() {
    let (mut world, mut scheduler, actors) = make_round(RoundConfig::new());
    set_light(&mut world, LightState::Green);

    send_move(&mut world, 2, 1, 0);
    tick(&mut world, &mut scheduler, FRAME);
    let after_first = position(&world, actors.players[1]);
    tick(&mut world, &mut scheduler, FRAME);
    tick(&mut world, &mut scheduler, FRAME);

    assert!(approx_eq(
        position(&world, actors.players[1]).pos.y,
        after_first.pos.y
    ));
}

#[test]
fn any_motion_on_red_eliminates() {
    let (mut world, mut scheduler, actors) = make_round(RoundConfig::new());
    let eliminated = collect::<PlayerEliminatedEvent>(&mut world);

    send_move(&mut world, 1, 0, -1);
    tick(&mut world, &mut scheduler, FRAME);

    let p1 = actors.players[0];
    assert_eq!(outcome(&world, p1), Outcome::Eliminated);
    assert!(world.resource::<DeadPlayerQueue>().contains(p1));
    assert_eq!(world.get::<Orientation>(p1).unwrap().pitch, -90.0);
    assert_eq!(eliminated.lock().unwrap().len(), 1);
    assert_eq!(eliminated.lock().unwrap()[0].entity, p1);
    assert!(world.resource::<RoundStatus>().is_running());
}

#[test]
fn zero_motion_on_red_is_harmless() {
    let (mut world, mut scheduler, actors) = make_round(RoundConfig::new());
    let start = position(&world, actors.players[0]);

    send_move(&mut world, 1, 0, 0);
    tick(&mut world, &mut scheduler, FRAME);

    assert_eq!(outcome(&world, actors.players[0]), Outcome::Alive);
    assert!(world.resource::<DeadPlayerQueue>().is_empty());
    assert!(approx_eq(start.distance_to(&position(&world, actors.players[0])), 0.0));
}

#[test]
fn eliminated_player_never_moves_again() {
    let (mut world, mut scheduler, actors) = make_round(RoundConfig::new());
    let p1 = actors.players[0];

    send_move(&mut world, 1, 1, 0);
    tick(&mut world, &mut scheduler, FRAME);
    assert_eq!(outcome(&world, p1), Outcome::Eliminated);
    let fallen_at = position(&world, p1);

    set_light(&mut world, LightState::Green);
    for (fb, lr) in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
        send_move(&mut world, 1, fb, lr);
        tick(&mut world, &mut scheduler, FRAME);
    }

    assert!(approx_eq(fallen_at.distance_to(&position(&world, p1)), 0.0));
    assert_eq!(world.resource::<DeadPlayerQueue>().len(), 1);
}

#[test]
fn both_players_moving_on_red_ends_the_round() {
    let (mut world, mut scheduler, actors) = make_round(RoundConfig::new());
    let ended = collect::<RoundEndedEvent>(&mut world);

    send_move(&mut world, 1, 1, 0);
    send_move(&mut world, 2, 0, 1);
    tick(&mut world, &mut scheduler, FRAME);

    for p in actors.players {
        assert_eq!(outcome(&world, p), Outcome::Eliminated);
        assert!(world.resource::<DeadPlayerQueue>().contains(p));
    }
    assert_eq!(
        *world.resource::<RoundStatus>(),
        RoundStatus::Ended(RoundEndReason::AllResolved)
    );
    assert!(world.resource::<WorldSignals>().has_flag(QUIT_FLAG));
    assert_eq!(ended.lock().unwrap().len(), 1);
}

// =============================================================================
// Finish line
// =============================================================================

#[test]
fn crossing_the_finish_line_wins_without_queueing() {
    let (mut world, mut scheduler, actors) = make_round(RoundConfig::new());
    let won = collect::<PlayerWonEvent>(&mut world);
    set_light(&mut world, LightState::Green);
    let p1 = actors.players[0];
    world.get_mut::<WorldPosition>(p1).unwrap().pos.y = 59.8;

    send_move(&mut world, 1, 1, 0);
    tick(&mut world, &mut scheduler, FRAME);

    assert_eq!(outcome(&world, p1), Outcome::Won);
    assert!(world.resource::<DeadPlayerQueue>().is_empty());
    assert_eq!(won.lock().unwrap().len(), 1);
    assert!(world.resource::<RoundStatus>().is_running());

    // A winner no longer reacts to input, even on red
    set_light(&mut world, LightState::Red);
    let at_line = position(&world, p1);
    send_move(&mut world, 1, 1, 0);
    tick(&mut world, &mut scheduler, FRAME);
    assert_eq!(outcome(&world, p1), Outcome::Won);
    assert!(approx_eq(at_line.distance_to(&position(&world, p1)), 0.0));
}

#[test]
fn simultaneous_winners_both_win_and_round_ends() {
    let (mut world, mut scheduler, actors) = make_round(RoundConfig::new());
    let won = collect::<PlayerWonEvent>(&mut world);
    for p in actors.players {
        world.get_mut::<WorldPosition>(p).unwrap().pos.y = 60.0;
    }

    tick(&mut world, &mut scheduler, FRAME);

    for p in actors.players {
        assert_eq!(outcome(&world, p), Outcome::Won);
    }
    assert_eq!(won.lock().unwrap().len(), 2);
    assert_eq!(
        *world.resource::<RoundStatus>(),
        RoundStatus::Ended(RoundEndReason::AllResolved)
    );
}

#[test]
fn one_winner_one_eliminated_resolves_the_round() {
    let (mut world, mut scheduler, actors) = make_round(RoundConfig::new());
    send_move(&mut world, 2, -1, 0);
    tick(&mut world, &mut scheduler, FRAME);
    assert!(world.resource::<RoundStatus>().is_running());

    world.get_mut::<WorldPosition>(actors.players[0]).unwrap().pos.y = 61.0;
    tick(&mut world, &mut scheduler, FRAME);

    assert_eq!(outcome(&world, actors.players[0]), Outcome::Won);
    assert_eq!(outcome(&world, actors.players[1]), Outcome::Eliminated);
    assert_eq!(
        *world.resource::<RoundStatus>(),
        RoundStatus::Ended(RoundEndReason::AllResolved)
    );
}

// =============================================================================
// Round timer and quitting
// =============================================================================

#[test]
fn timer_counts_down_and_ends_round_once() {
    let mut config = RoundConfig::new();
    config.round_duration = 1.0;
    config.light_interval = 100.0;
    let (mut world, mut scheduler, _) = make_round(config);
    let ended = collect::<RoundEndedEvent>(&mut world);

    let mut last = world.resource::<RoundTimer>().remaining();
    for _ in 0..10 {
        tick(&mut world, &mut scheduler, 0.3);
        let now = world.resource::<RoundTimer>().remaining();
        assert!(now <= last);
        assert!(now >= 0.0);
        last = now;
    }

    assert_eq!(world.resource::<RoundTimer>().remaining(), 0.0);
    assert_eq!(
        *world.resource::<RoundStatus>(),
        RoundStatus::Ended(RoundEndReason::TimeUp)
    );
    let ended = ended.lock().unwrap();
    assert_eq!(ended.len(), 1);
    assert_eq!(ended[0].reason, RoundEndReason::TimeUp);
}

#[test]
fn overlay_shows_whole_seconds_left() {
    let (mut world, mut scheduler, _) = make_round(RoundConfig::new());
    tick(&mut world, &mut scheduler, 0.5);
    let signals = world.resource::<WorldSignals>();
    assert_eq!(
        signals.get_string("time_left").map(String::as_str),
        Some("Time Left: 59")
    );
    assert!(approx_eq(signals.get_scalar("time_remaining").unwrap(), 59.5));
}

#[test]
fn ended_round_freezes_the_logic() {
    let (mut world, mut scheduler, actors) = make_round(RoundConfig::new());
    world.trigger(QuitRequested);
    world.flush();
    assert_eq!(
        *world.resource::<RoundStatus>(),
        RoundStatus::Ended(RoundEndReason::Quit)
    );
    assert!(world.resource::<WorldSignals>().has_flag(QUIT_FLAG));

    let remaining = world.resource::<RoundTimer>().remaining();
    send_move(&mut world, 1, 1, 0);
    tick(&mut world, &mut scheduler, 5.0);

    assert_eq!(world.resource::<RoundTimer>().remaining(), remaining);
    assert_eq!(outcome(&world, actors.players[0]), Outcome::Alive);
    assert_eq!(*world.resource::<LightState>(), LightState::Red);
    // The first reason sticks
    world.trigger(RoundEndedEvent {
        reason: RoundEndReason::TimeUp,
    });
    world.flush();
    assert_eq!(
        *world.resource::<RoundStatus>(),
        RoundStatus::Ended(RoundEndReason::Quit)
    );
}
