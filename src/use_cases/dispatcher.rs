// Turns discrete user inputs into one-shot API requests and applies their results.

use crate::domain::{ApiError, BossId, Hud, PlayerAction, messages};
use crate::use_cases::types::Command;
use tracing::{debug, info, warn};

#[derive(Debug, Default)]
pub struct ActionDispatcher {
    // Profile name used for starting runs; set only by a successful create/load.
    active_profile: Option<String>,
}

impl ActionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_profile(&self) -> Option<&str> {
        self.active_profile.as_deref()
    }

    pub fn create_profile(&self, name: &str) -> Command {
        // Only whitespace is stripped; the server owns name validation.
        Command::CreateKnight {
            name: name.trim().to_string(),
        }
    }

    pub fn on_profile_created(&mut self, result: Result<String, ApiError>, hud: &mut Hud) {
        match accepted_name(result) {
            Ok(name) => {
                info!(profile = %name, "profile created");
                hud.profile = messages::active_profile(&name);
                self.active_profile = Some(name);
            }
            Err(e) => {
                warn!(error = %e, "profile creation failed");
                hud.profile = messages::PROFILE_CREATE_FAILED.to_string();
            }
        }
    }

    pub fn load_profile(&self, name: &str) -> Command {
        Command::LoadKnight {
            name: name.trim().to_string(),
        }
    }

    pub fn on_profile_loaded(&mut self, result: Result<String, ApiError>, hud: &mut Hud) {
        match accepted_name(result) {
            Ok(name) => {
                info!(profile = %name, "profile loaded");
                hud.profile = messages::active_profile(&name);
                self.active_profile = Some(name);
            }
            Err(e) => {
                warn!(error = %e, "profile load failed");
                hud.profile = messages::PROFILE_NOT_FOUND.to_string();
            }
        }
    }

    pub fn save_profile(&self, hud: &mut Hud) -> Option<Command> {
        let name = self.require_profile(hud)?;
        Some(Command::SaveKnight { name })
    }

    pub fn on_profile_saved(&self, name: &str, result: Result<(), ApiError>, hud: &mut Hud) {
        match result {
            Ok(()) => hud.profile = messages::profile_saved(name),
            Err(e) => {
                warn!(error = %e, profile = %name, "profile save failed");
                hud.profile = messages::PROFILE_SAVE_FAILED.to_string();
            }
        }
    }

    /// Returns `None` without touching the network when no profile is active.
    pub fn start_run(&self, boss: BossId, hud: &mut Hud) -> Option<Command> {
        let name = self.require_profile(hud)?;
        Some(Command::StartBoss { boss, name })
    }

    /// Returns true when the run was accepted and the HUD was reset for it.
    pub fn on_run_started(
        &self,
        boss: &BossId,
        result: Result<(), ApiError>,
        hud: &mut Hud,
    ) -> bool {
        match result {
            Ok(()) => {
                info!(%boss, "run started");
                hud.result.clear();
                true
            }
            Err(e) => {
                debug!(%boss, error = %e, "start request failed");
                false
            }
        }
    }

    pub fn send_action(&self, action: PlayerAction) -> Command {
        Command::SendAction { action }
    }

    pub fn on_action_sent(&self, action: PlayerAction, result: Result<(), ApiError>) {
        if let Err(e) = result {
            debug!(action = action.as_str(), error = %e, "action request failed");
        }
    }

    fn require_profile(&self, hud: &mut Hud) -> Option<String> {
        match &self.active_profile {
            Some(name) => Some(name.clone()),
            None => {
                hud.profile = messages::PROFILE_REQUIRED.to_string();
                None
            }
        }
    }
}

// A blank echoed name can never become the active profile.
fn accepted_name(result: Result<String, ApiError>) -> Result<String, ApiError> {
    let name = result?;
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Protocol("server returned an empty profile name".to_string()));
    }
    Ok(trimmed.to_string())
}
