// Use-case level inputs/outputs for the client loop.

use crate::domain::{ApiError, BossId, PlayerAction, StateSnapshot};
use crate::use_cases::poller::Cadence;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    // User input.
    CreateProfile { name: String },
    LoadProfile { name: String },
    SaveProfile,
    StartRun { boss: BossId },
    Control { action: PlayerAction },

    // Timer.
    PollTick,

    // Request completions.
    StateFetched(Result<StateSnapshot, ApiError>),
    ProfileCreated(Result<String, ApiError>),
    ProfileLoaded(Result<String, ApiError>),
    ProfileSaved {
        name: String,
        result: Result<(), ApiError>,
    },
    RunStarted {
        boss: BossId,
        result: Result<(), ApiError>,
    },
    ActionSent {
        action: PlayerAction,
        result: Result<(), ApiError>,
    },
}

/// Side effects requested by the client loop, executed by the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchState,
    Render(StateSnapshot),
    // Replace the poll timer with one at this cadence.
    Schedule(Cadence),
    StopPolling,
    CreateKnight { name: String },
    LoadKnight { name: String },
    SaveKnight { name: String },
    StartBoss { boss: BossId, name: String },
    SendAction { action: PlayerAction },
}
