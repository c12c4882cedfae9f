//! Whether the round is still being played.
use bevy_ecs::prelude::Resource;

/// Why a round stopped. All of these are normal endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundEndReason {
    /// The countdown ran out.
    TimeUp,
    /// Every player has either won or been eliminated.
    AllResolved,
    /// The quit key was pressed.
    Quit,
}

impl RoundEndReason {
    pub fn message(&self) -> &'static str {
        match self {
            RoundEndReason::TimeUp => "Time's Up! Game Over!",
            RoundEndReason::AllResolved => {
                "Game Over! All players have been eliminated or have won."
            }
            RoundEndReason::Quit => "Round aborted by player.",
        }
    }
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundStatus {
    #[default]
    Running,
    Ended(RoundEndReason),
}

impl RoundStatus {
    pub fn is_running(&self) -> bool {
        matches!(self, RoundStatus::Running)
    }

    /// Move to `Ended`. Returns `false` if the round had already ended, in
    /// which case the first reason is kept.
    pub fn end(&mut self, reason: RoundEndReason) -> bool {
        if self.is_running() {
            *self = RoundStatus::Ended(reason);
            true
        } else {
            false
        }
    }
}
