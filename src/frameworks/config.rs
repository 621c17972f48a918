use std::{env, time::Duration};
use url::Url;

// Runtime/client constants (not gameplay tuning).

pub const EVENT_CHANNEL_CAPACITY: usize = 64;

pub const CANVAS_WIDTH: u32 = 480;
pub const CANVAS_HEIGHT: u32 = 180;

const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

pub fn api_base_url() -> Result<Url, url::ParseError> {
    let raw = env::var("BOSS_RUSH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    Url::parse(&raw)
}

pub fn request_timeout() -> Duration {
    millis_from_env("BOSS_RUSH_REQUEST_TIMEOUT_MS", 1500)
}

pub fn idle_poll_interval() -> Duration {
    millis_from_env("BOSS_RUSH_IDLE_POLL_MS", 400)
}

pub fn active_poll_interval() -> Duration {
    millis_from_env("BOSS_RUSH_ACTIVE_POLL_MS", 200)
}

pub fn ascii_view_enabled() -> bool {
    matches!(env::var("BOSS_RUSH_ASCII").as_deref(), Ok("1" | "true"))
}

// Zero would make the interval panic, so it falls back to the default too.
fn millis_from_env(key: &str, default: u64) -> Duration {
    let millis = env::var(key)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|&value| value > 0)
        .unwrap_or(default);
    Duration::from_millis(millis)
}
