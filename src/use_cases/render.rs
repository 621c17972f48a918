// Paints one snapshot onto a surface. Stateless: every call repaints everything.

use crate::domain::{Rgb, StateSnapshot, Surface};

pub const GROUND_Y: f64 = 150.0;
pub const GROUND_THICKNESS: f64 = 2.0;

// Squares are drawn centred on the combatant's x; y is a fixed lane.
pub const SPRITE_SIZE: f64 = 20.0;
pub const PLAYER_LANE_Y: f64 = 140.0;
pub const ENEMY_LANE_Y: f64 = 120.0;

pub const HEALTH_BAR_X: f64 = 10.0;
pub const HEALTH_BAR_HEIGHT: f64 = 6.0;
pub const PLAYER_BAR_Y: f64 = 10.0;
pub const ENEMY_BAR_Y: f64 = 24.0;

pub const GROUND_COLOR: Rgb = Rgb(0x33, 0x33, 0x33);
pub const PLAYER_COLOR: Rgb = Rgb(0x66, 0xcc, 0xff);
pub const PLAYER_BAR_COLOR: Rgb = Rgb(0xff, 0x55, 0x55);
pub const ENEMY_COLOR: Rgb = Rgb(0xff, 0x66, 0x66);
pub const ENEMY_BAR_COLOR: Rgb = Rgb(0x66, 0xff, 0x66);

pub fn render<S>(snapshot: &StateSnapshot, surface: &mut S)
where
    S: Surface + ?Sized,
{
    surface.clear();

    let width = f64::from(surface.width());
    surface.fill_rect(0.0, GROUND_Y, width, GROUND_THICKNESS, GROUND_COLOR);

    if let Some(player) = &snapshot.player {
        // Vertical position never comes from the server.
        surface.fill_rect(
            player.x - SPRITE_SIZE / 2.0,
            PLAYER_LANE_Y,
            SPRITE_SIZE,
            SPRITE_SIZE,
            PLAYER_COLOR,
        );
        surface.fill_rect(
            HEALTH_BAR_X,
            PLAYER_BAR_Y,
            player.health.max(0.0),
            HEALTH_BAR_HEIGHT,
            PLAYER_BAR_COLOR,
        );
    }

    if let Some(enemy) = &snapshot.enemy {
        surface.fill_rect(
            enemy.x - SPRITE_SIZE / 2.0,
            ENEMY_LANE_Y,
            SPRITE_SIZE,
            SPRITE_SIZE,
            ENEMY_COLOR,
        );
        surface.fill_rect(
            HEALTH_BAR_X,
            ENEMY_BAR_Y,
            enemy.health.max(0.0),
            HEALTH_BAR_HEIGHT,
            ENEMY_BAR_COLOR,
        );
    }
}
