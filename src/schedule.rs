//! Round scheduler.
//!
//! [`RoundScheduler`] wraps a single-threaded `bevy_ecs` [`Schedule`] with the
//! two kinds of task the round needs: systems that run every frame and named
//! tasks that run every N seconds of game time. Interval tasks are backed by
//! [`IntervalTimer`] entities and dispatched to observers through
//! [`TimerEvent`](crate::events::timer::TimerEvent).
//!
//! [`build_round_scheduler`] and [`init_round_world`] assemble everything the
//! round logic needs without touching the host engine, which is how the
//! integration tests drive it.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, ScheduleBuildError};
use bevy_ecs::system::ScheduleSystem;

use crate::components::timer::IntervalTimer;
use crate::events::audio::AudioCmd;
use crate::events::input::MoveCommand;
use crate::resources::deadqueue::DeadPlayerQueue;
use crate::resources::lightstate::LightState;
use crate::resources::roundconfig::RoundConfig;
use crate::resources::roundstatus::RoundStatus;
use crate::resources::roundtimer::RoundTimer;
use crate::resources::worldsignals::WorldSignals;
use crate::resources::worldtime::WorldTime;
use crate::systems::finish::finish_line_system;
use crate::systems::guard::guard_pursuit_system;
use crate::systems::light::{TOGGLE_LIGHT_TASK, light_timer_observer};
use crate::systems::movement::player_movement_system;
use crate::systems::round::{
    quit_observer, round_end_observer, round_is_running, update_move_messages,
};
use crate::systems::roundtimer::round_timer_system;
use crate::systems::timer::update_interval_timers;

pub struct RoundScheduler {
    schedule: Schedule,
}

impl Default for RoundScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundScheduler {
    pub fn new() -> Self {
        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        RoundScheduler { schedule }
    }

    /// Register systems to run once per frame.
    pub fn every_frame<M>(
        &mut self,
        systems: impl IntoScheduleConfigs<ScheduleSystem, M>,
    ) -> &mut Self {
        self.schedule.add_systems(systems);
        self
    }

    /// Register a named task that fires every `seconds` of game time.
    /// Returns the timer entity.
    pub fn every(&mut self, world: &mut World, seconds: f32, task: &str) -> Entity {
        world.spawn(IntervalTimer::new(seconds, task)).id()
    }

    pub fn initialize(&mut self, world: &mut World) -> Result<(), ScheduleBuildError> {
        self.schedule.initialize(world)
    }

    /// Run one frame.
    pub fn run(&mut self, world: &mut World) {
        self.schedule.run(world);
    }
}

/// Insert the round resources and observers into `world`.
pub fn init_round_world(world: &mut World, config: RoundConfig) {
    world.insert_resource(RoundTimer::new(config.round_duration));
    world.insert_resource(config);
    world.init_resource::<WorldTime>();
    world.insert_resource(LightState::default());
    world.insert_resource(DeadPlayerQueue::default());
    world.insert_resource(RoundStatus::default());
    world.init_resource::<WorldSignals>();
    world.init_resource::<Messages<MoveCommand>>();
    world.init_resource::<Messages<AudioCmd>>();

    world.add_observer(light_timer_observer);
    world.add_observer(round_end_observer);
    world.add_observer(quit_observer);
}

/// Scheduler with the round logic in its fixed per-frame order, plus the
/// light toggle registered as an interval task.
pub fn build_round_scheduler(world: &mut World) -> RoundScheduler {
    let interval = world.resource::<RoundConfig>().light_interval;
    let mut scheduler = RoundScheduler::new();
    scheduler.every(world, interval, TOGGLE_LIGHT_TASK);
    scheduler.every_frame(
        (
            player_movement_system,
            finish_line_system,
            guard_pursuit_system,
            round_timer_system,
            update_interval_timers,
        )
            .chain()
            .distributive_run_if(round_is_running),
    );
    scheduler.every_frame(update_move_messages.after(update_interval_timers));
    scheduler
}
