//! Red/green light toggling.
//!
//! [`light_timer_observer`] reacts to the `toggle_light` interval task: it
//! flips [`LightState`], turns the doll and queues the matching sound cue.
//! A cue that was missing at load time is skipped without complaint.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::doll::Doll;
use crate::components::orientation::Orientation;
use crate::events::audio::AudioCmd;
use crate::events::round::LightChangedEvent;
use crate::events::timer::TimerEvent;
use crate::resources::audio::SoundCues;
use crate::resources::lightstate::LightState;

/// Interval task name for the light toggle.
pub const TOGGLE_LIGHT_TASK: &str = "toggle_light";

pub fn light_timer_observer(
    trigger: On<TimerEvent>,
    mut commands: Commands,
    mut light: ResMut<LightState>,
    cues: Option<Res<SoundCues>>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
    mut dolls: Query<&mut Orientation, With<Doll>>,
) {
    if trigger.event().task != TOGGLE_LIGHT_TASK {
        return;
    }

    let state = light.toggle();
    match state {
        LightState::Green => info!("Green Light! Run!"),
        LightState::Red => info!("Red Light! Stop!"),
    }

    let cue = cues.as_deref().and_then(|cues| match state {
        LightState::Red => cues.red.clone(),
        LightState::Green => cues.green.clone(),
    });
    if let Some(id) = cue {
        audio_cmd_writer.write(AudioCmd::PlayFx { id });
    }

    let heading = Doll::heading_for(state);
    for mut orientation in dolls.iter_mut() {
        orientation.heading = heading;
    }

    commands.trigger(LightChangedEvent { state });
}
