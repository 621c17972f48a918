// Polling state machine: cadence, tick serialization and terminal detection.

use crate::domain::hud::status_line;
use crate::domain::{ApiError, Hud, Outcome, StateSnapshot};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Polling speed. Idle keeps the boss animating before a run starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence {
    Idle,
    Active,
}

const DEFAULT_IDLE_PERIOD: Duration = Duration::from_millis(400);
const DEFAULT_ACTIVE_PERIOD: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub idle: Duration,
    pub active: Duration,
}

impl PollIntervals {
    /// Timer period for `cadence`. A zero period falls back to the default.
    pub fn period(&self, cadence: Cadence) -> Duration {
        let (period, fallback) = match cadence {
            Cadence::Idle => (self.idle, DEFAULT_IDLE_PERIOD),
            Cadence::Active => (self.active, DEFAULT_ACTIVE_PERIOD),
        };
        if period.is_zero() { fallback } else { period }
    }
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self {
            idle: DEFAULT_IDLE_PERIOD,
            active: DEFAULT_ACTIVE_PERIOD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollerState {
    Polling(Cadence),
    Stopped(Outcome),
}

/// What the client loop should do with a completed poll.
#[derive(Debug, Clone, PartialEq)]
pub enum PollResult {
    // Failed or arrived after the poller stopped; nothing changes.
    Ignored,
    Rendered(StateSnapshot),
    // Rendered and reached a terminal condition; the timer must stop.
    Finished(StateSnapshot),
}

#[derive(Debug)]
pub struct Poller {
    state: PollerState,
    // Set while a fetch is outstanding; ticks during that window are skipped.
    in_flight: bool,
}

impl Default for Poller {
    fn default() -> Self {
        Self::new()
    }
}

impl Poller {
    pub fn new() -> Self {
        Self {
            state: PollerState::Polling(Cadence::Idle),
            in_flight: false,
        }
    }

    pub fn state(&self) -> &PollerState {
        &self.state
    }

    pub fn cadence(&self) -> Option<Cadence> {
        match self.state {
            PollerState::Polling(cadence) => Some(cadence),
            PollerState::Stopped(_) => None,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Replaces the current cadence; restarts polling after a terminal tick.
    pub fn switch_to(&mut self, cadence: Cadence) {
        self.state = PollerState::Polling(cadence);
    }

    /// Returns true when this tick should issue a fetch.
    pub fn on_tick(&mut self) -> bool {
        if self.cadence().is_none() {
            return false;
        }
        if self.in_flight {
            debug!("previous poll still in flight; skipping tick");
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn on_fetched(
        &mut self,
        result: Result<StateSnapshot, ApiError>,
        hud: &mut Hud,
    ) -> PollResult {
        self.in_flight = false;

        let snapshot = match result {
            Ok(snapshot) => snapshot,
            Err(e) => {
                // The next tick is the retry.
                warn!(error = %e, "poll error");
                return PollResult::Ignored;
            }
        };

        if self.cadence().is_none() {
            debug!(
                frame = snapshot.frame,
                "poll finished after stop; dropping snapshot"
            );
            return PollResult::Ignored;
        }

        hud.status = status_line(&snapshot);

        match Outcome::from_snapshot(&snapshot) {
            Some(outcome) => {
                info!(frame = snapshot.frame, ?outcome, "run finished");
                hud.result = outcome.message();
                self.state = PollerState::Stopped(outcome);
                PollResult::Finished(snapshot)
            }
            None => PollResult::Rendered(snapshot),
        }
    }
}
