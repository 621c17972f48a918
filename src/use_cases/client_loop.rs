// Orchestrator owning the active profile, poller state and HUD.
// `handle` is the event dispatch table: (state, event) -> commands.

use crate::domain::Hud;
use crate::use_cases::dispatcher::ActionDispatcher;
use crate::use_cases::poller::{Cadence, PollResult, Poller, PollerState};
use crate::use_cases::types::{ClientEvent, Command};

#[derive(Debug, Default)]
pub struct ClientLoop {
    poller: Poller,
    dispatcher: ActionDispatcher,
    hud: Hud,
}

impl ClientLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn active_profile(&self) -> Option<&str> {
        self.dispatcher.active_profile()
    }

    pub fn poller_state(&self) -> &PollerState {
        self.poller.state()
    }

    /// Commands to run once at startup: passive polling begins immediately.
    pub fn start(&mut self) -> Vec<Command> {
        self.poller.switch_to(Cadence::Idle);
        vec![Command::Schedule(Cadence::Idle)]
    }

    pub fn handle(&mut self, event: ClientEvent) -> Vec<Command> {
        let hud = &mut self.hud;
        match event {
            ClientEvent::CreateProfile { name } => vec![self.dispatcher.create_profile(&name)],
            ClientEvent::LoadProfile { name } => vec![self.dispatcher.load_profile(&name)],
            ClientEvent::SaveProfile => self.dispatcher.save_profile(hud).into_iter().collect(),
            ClientEvent::StartRun { boss } => {
                self.dispatcher.start_run(boss, hud).into_iter().collect()
            }
            ClientEvent::Control { action } => vec![self.dispatcher.send_action(action)],

            ClientEvent::PollTick => {
                if self.poller.on_tick() {
                    vec![Command::FetchState]
                } else {
                    Vec::new()
                }
            }

            ClientEvent::StateFetched(result) => match self.poller.on_fetched(result, hud) {
                PollResult::Ignored => Vec::new(),
                PollResult::Rendered(snapshot) => vec![Command::Render(snapshot)],
                PollResult::Finished(snapshot) => {
                    vec![Command::Render(snapshot), Command::StopPolling]
                }
            },
            ClientEvent::ProfileCreated(result) => {
                self.dispatcher.on_profile_created(result, hud);
                Vec::new()
            }
            ClientEvent::ProfileLoaded(result) => {
                self.dispatcher.on_profile_loaded(result, hud);
                Vec::new()
            }
            ClientEvent::ProfileSaved { name, result } => {
                self.dispatcher.on_profile_saved(&name, result, hud);
                Vec::new()
            }
            ClientEvent::RunStarted { boss, result } => {
                if self.dispatcher.on_run_started(&boss, result, hud) {
                    self.poller.switch_to(Cadence::Active);
                    vec![Command::Schedule(Cadence::Active)]
                } else {
                    Vec::new()
                }
            }
            ClientEvent::ActionSent { action, result } => {
                self.dispatcher.on_action_sent(action, result);
                Vec::new()
            }
        }
    }
}
