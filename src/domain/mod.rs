// Domain layer: snapshot model, HUD text and the ports the client depends on.

pub mod errors;
pub mod hud;
pub mod messages;
pub mod ports;
pub mod snapshot;

pub use errors::ApiError;
pub use hud::{Hud, Outcome};
pub use ports::{GameApi, Rgb, Surface};
pub use snapshot::{BossId, Combatant, PlayerAction, StateSnapshot};
