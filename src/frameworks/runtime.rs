// Framework bootstrap for the boss-rush client runtime.

use crate::domain::GameApi;
use crate::frameworks::config;
use crate::interface_adapters::canvas::PixelCanvas;
use crate::interface_adapters::clients::GameApiClient;
use crate::interface_adapters::{console, view};
use crate::use_cases::{ClientSettings, PollIntervals, spawn_client};

use std::io::{Error, Result};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, BufReader};
use tokio::task::JoinHandle;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    // Logs go to stderr so they never interleave with the HUD on stdout.
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Runs the client until `input` reaches EOF or a `quit` line.
pub async fn run<R>(
    api: Arc<dyn GameApi>,
    input: R,
    settings: ClientSettings,
    ascii_view: bool,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let handle = spawn_client(
        api,
        PixelCanvas::new(config::CANVAS_WIDTH, config::CANVAS_HEIGHT),
        settings,
    );

    let canvas_rx = ascii_view.then(|| handle.surface_rx.clone());
    let presenter = tokio::spawn(view::present(handle.hud_rx.clone(), canvas_rx));

    println!("{}", console::USAGE);
    // Returning from here drops the only event sender and stops the loop.
    console::forward_lines(input, handle.events_tx).await;

    handle
        .task
        .await
        .map_err(|e| Error::other(format!("client loop failed: {e}")))?;
    join_logged(presenter, "presenter").await;

    tracing::info!("client stopped");
    Ok(())
}

// A failed background task is logged; the session still ends cleanly.
async fn join_logged(task: JoinHandle<()>, name: &'static str) -> bool {
    match task.await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(task = name, error = %e, "background task failed");
            false
        }
    }
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let api = build_api()?;
    let settings = ClientSettings {
        intervals: PollIntervals {
            idle: config::idle_poll_interval(),
            active: config::active_poll_interval(),
        },
        event_channel_capacity: config::EVENT_CHANNEL_CAPACITY,
    };
    tracing::debug!(
        idle_poll_ms = settings.intervals.idle.as_millis(),
        active_poll_ms = settings.intervals.active.as_millis(),
        "poll cadence configured"
    );

    let stdin = BufReader::new(tokio::io::stdin());
    run(api, stdin, settings, config::ascii_view_enabled()).await
}

fn build_api() -> Result<Arc<dyn GameApi>> {
    let base_url = config::api_base_url()
        .map_err(|e| Error::other(format!("invalid BOSS_RUSH_API_URL: {e}")))?;
    if base_url.cannot_be_a_base() {
        return Err(Error::other(format!(
            "invalid BOSS_RUSH_API_URL: {base_url} cannot take path segments"
        )));
    }

    let timeout = config::request_timeout();
    let client = GameApiClient::new(base_url, timeout)
        .map_err(|e| Error::other(format!("failed to initialize api client: {e}")))?;
    tracing::info!(
        api_base_url = %client.base_url(),
        request_timeout_ms = timeout.as_millis(),
        "api client configured"
    );

    Ok(Arc::new(client))
}
