use async_trait::async_trait;

use crate::domain::errors::ApiError;
use crate::domain::snapshot::{BossId, PlayerAction, StateSnapshot};

// The client loop depends on this trait, not on the concrete HTTP client.
// Dependencies point inwards to the domain layer.
#[async_trait]
pub trait GameApi: Send + Sync {
    // GET /api/state
    async fn fetch_state(&self) -> Result<StateSnapshot, ApiError>;

    // POST /api/knight; returns the name echoed by the server.
    async fn create_knight(&self, name: &str) -> Result<String, ApiError>;

    // POST /api/start_boss/{boss}
    async fn start_boss(&self, boss: &BossId, name: &str) -> Result<(), ApiError>;

    // POST /api/action
    async fn send_action(&self, action: PlayerAction) -> Result<(), ApiError>;

    // GET /api/load/{name}; returns the stored profile name.
    async fn load_knight(&self, name: &str) -> Result<String, ApiError>;

    // GET /api/save/{name}
    async fn save_knight(&self, name: &str) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Fixed-size 2D drawing target.
///
/// Coordinates are in surface pixels with the origin at the top-left corner.
/// Implementations clip anything that falls outside the surface.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn clear(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb);
}
