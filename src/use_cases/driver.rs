// Async driver: owns the ClientLoop, the poll timer and the request tasks.

use crate::domain::{GameApi, Hud, Surface};
use crate::use_cases::client_loop::ClientLoop;
use crate::use_cases::poller::PollIntervals;
use crate::use_cases::render::render;
use crate::use_cases::types::{ClientEvent, Command};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior};
use tracing::{debug, info};

/// Shared configuration for the client driver.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Poll periods for the idle and active cadences.
    pub intervals: PollIntervals,
    /// Capacity for user events and request completions.
    pub event_channel_capacity: usize,
}

/// Handles for talking to a running client task.
pub struct ClientHandle<S> {
    /// User input flows in here; dropping every sender shuts the client down.
    pub events_tx: mpsc::Sender<ClientEvent>,
    /// Latest HUD text.
    pub hud_rx: watch::Receiver<Hud>,
    /// Latest rendered frame.
    pub surface_rx: watch::Receiver<S>,
    pub task: JoinHandle<()>,
}

pub fn spawn_client<S>(
    api: Arc<dyn GameApi>,
    surface: S,
    settings: ClientSettings,
) -> ClientHandle<S>
where
    S: Surface + Send + Sync + 'static,
{
    let (events_tx, events_rx) = mpsc::channel::<ClientEvent>(settings.event_channel_capacity);
    let (hud_tx, hud_rx) = watch::channel(Hud::default());
    let (surface_tx, surface_rx) = watch::channel(surface);

    let task = tokio::spawn(client_task(api, events_rx, hud_tx, surface_tx, settings));

    ClientHandle {
        events_tx,
        hud_rx,
        surface_rx,
        task,
    }
}

pub async fn client_task<S>(
    api: Arc<dyn GameApi>,
    mut events_rx: mpsc::Receiver<ClientEvent>,
    hud_tx: watch::Sender<Hud>,
    surface_tx: watch::Sender<S>,
    settings: ClientSettings,
) where
    S: Surface + Send + Sync + 'static,
{
    let mut client = ClientLoop::new();
    let mut timer: Option<Interval> = None;

    // Request completions come back on their own channel so the loop can stop
    // as soon as the user side hangs up, even with requests still in flight.
    let (done_tx, mut done_rx) = mpsc::channel::<ClientEvent>(settings.event_channel_capacity);
    let executor = Executor {
        api,
        done_tx,
        intervals: settings.intervals,
    };

    for command in client.start() {
        executor.execute(command, &mut timer, &surface_tx);
    }

    loop {
        let event = tokio::select! {
            maybe = events_rx.recv() => match maybe {
                Some(event) => event,
                None => break,
            },
            Some(event) = done_rx.recv() => event,
            _ = next_tick(&mut timer) => ClientEvent::PollTick,
        };

        for command in client.handle(event) {
            executor.execute(command, &mut timer, &surface_tx);
        }

        hud_tx.send_if_modified(|hud| {
            if *hud == *client.hud() {
                return false;
            }
            *hud = client.hud().clone();
            true
        });
    }

    info!("input closed; client loop exiting");
}

// Resolves on the next timer tick, or never while polling is stopped.
async fn next_tick(timer: &mut Option<Interval>) {
    match timer {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

struct Executor {
    api: Arc<dyn GameApi>,
    done_tx: mpsc::Sender<ClientEvent>,
    intervals: PollIntervals,
}

impl Executor {
    fn execute<S>(
        &self,
        command: Command,
        timer: &mut Option<Interval>,
        surface_tx: &watch::Sender<S>,
    ) where
        S: Surface,
    {
        match command {
            Command::Render(snapshot) => {
                surface_tx.send_modify(|surface| render(&snapshot, surface));
            }
            Command::Schedule(cadence) => {
                let period = self.intervals.period(cadence);
                debug!(?cadence, period_ms = period.as_millis(), "poll timer replaced");
                // First tick after one full period, like a browser interval.
                let mut interval = tokio::time::interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
                *timer = Some(interval);
            }
            Command::StopPolling => {
                debug!("poll timer stopped");
                *timer = None;
            }
            Command::FetchState => {
                let api = Arc::clone(&self.api);
                self.spawn_request(async move {
                    ClientEvent::StateFetched(api.fetch_state().await)
                });
            }
            Command::CreateKnight { name } => {
                let api = Arc::clone(&self.api);
                self.spawn_request(async move {
                    ClientEvent::ProfileCreated(api.create_knight(&name).await)
                });
            }
            Command::LoadKnight { name } => {
                let api = Arc::clone(&self.api);
                self.spawn_request(async move {
                    ClientEvent::ProfileLoaded(api.load_knight(&name).await)
                });
            }
            Command::SaveKnight { name } => {
                let api = Arc::clone(&self.api);
                self.spawn_request(async move {
                    let result = api.save_knight(&name).await;
                    ClientEvent::ProfileSaved { name, result }
                });
            }
            Command::StartBoss { boss, name } => {
                let api = Arc::clone(&self.api);
                self.spawn_request(async move {
                    let result = api.start_boss(&boss, &name).await;
                    ClientEvent::RunStarted { boss, result }
                });
            }
            Command::SendAction { action } => {
                let api = Arc::clone(&self.api);
                self.spawn_request(async move {
                    let result = api.send_action(action).await;
                    ClientEvent::ActionSent { action, result }
                });
            }
        }
    }

    // Fire-and-forget: the completion is fed back into the loop as an event.
    fn spawn_request<F>(&self, request: F)
    where
        F: Future<Output = ClientEvent> + Send + 'static,
    {
        let done_tx = self.done_tx.clone();
        tokio::spawn(async move {
            let _ = done_tx.send(request.await).await;
        });
    }
}
