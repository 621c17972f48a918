use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{ApiError, BossId, Combatant, GameApi, PlayerAction, StateSnapshot};

pub(crate) fn fighter(name: &str, health: f64, alive: bool) -> Combatant {
    Combatant {
        name: Some(name.to_string()),
        x: 50.0,
        y: 50.0,
        health,
        alive,
    }
}

pub(crate) fn snapshot(frame: u64, player: Combatant, enemy: Option<Combatant>) -> StateSnapshot {
    StateSnapshot {
        frame,
        player: Some(player),
        enemy,
    }
}

// Fake game API: replays scripted poll results and records every call.
pub(crate) struct ScriptedApi {
    states: Mutex<VecDeque<Result<StateSnapshot, ApiError>>>,
    // Repeated once the script runs out.
    last_state: Mutex<Result<StateSnapshot, ApiError>>,
    knight_result: Result<(), ApiError>,
    start_result: Result<(), ApiError>,
    // How long each fetch_state takes to answer.
    fetch_delay: Duration,
    calls: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub(crate) fn new() -> Self {
        Self {
            states: Mutex::new(VecDeque::new()),
            last_state: Mutex::new(Err(ApiError::Transport("no state scripted".to_string()))),
            knight_result: Ok(()),
            start_result: Ok(()),
            fetch_delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_states(
        self,
        states: impl IntoIterator<Item = Result<StateSnapshot, ApiError>>,
    ) -> Self {
        self.states
            .lock()
            .expect("states mutex poisoned")
            .extend(states);
        self
    }

    pub(crate) fn with_knight_result(mut self, result: Result<(), ApiError>) -> Self {
        self.knight_result = result;
        self
    }

    pub(crate) fn with_start_result(mut self, result: Result<(), ApiError>) -> Self {
        self.start_result = result;
        self
    }

    pub(crate) fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    pub(crate) fn count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }
}

#[async_trait]
impl GameApi for ScriptedApi {
    async fn fetch_state(&self) -> Result<StateSnapshot, ApiError> {
        self.record("fetch_state".to_string());
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
        let next = self
            .states
            .lock()
            .expect("states mutex poisoned")
            .pop_front();
        let mut last = self.last_state.lock().expect("state mutex poisoned");
        if let Some(next) = next {
            *last = next;
        }
        last.clone()
    }

    async fn create_knight(&self, name: &str) -> Result<String, ApiError> {
        self.record(format!("create_knight:{name}"));
        self.knight_result.clone().map(|()| name.to_string())
    }

    async fn start_boss(&self, boss: &BossId, name: &str) -> Result<(), ApiError> {
        self.record(format!("start_boss:{boss}:{name}"));
        self.start_result.clone()
    }

    async fn send_action(&self, action: PlayerAction) -> Result<(), ApiError> {
        self.record(format!("send_action:{}", action.as_str()));
        Ok(())
    }

    async fn load_knight(&self, name: &str) -> Result<String, ApiError> {
        self.record(format!("load_knight:{name}"));
        self.knight_result.clone().map(|()| name.to_string())
    }

    async fn save_knight(&self, name: &str) -> Result<(), ApiError> {
        self.record(format!("save_knight:{name}"));
        Ok(())
    }
}
