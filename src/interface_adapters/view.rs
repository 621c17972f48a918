// Terminal presentation of the HUD and, optionally, the canvas.

use crate::domain::{Hud, Rgb};
use crate::interface_adapters::canvas::PixelCanvas;
use crate::use_cases::render::{
    ENEMY_BAR_COLOR, ENEMY_COLOR, GROUND_COLOR, PLAYER_BAR_COLOR, PLAYER_COLOR,
};
use tokio::sync::watch;

// Terminal cells are roughly twice as tall as wide.
const ASCII_CELL_WIDTH: u32 = 8;
const ASCII_CELL_HEIGHT: u32 = 16;

pub fn glyph(color: Rgb) -> char {
    match color {
        GROUND_COLOR => '_',
        PLAYER_COLOR => 'K',
        ENEMY_COLOR => 'B',
        PLAYER_BAR_COLOR | ENEMY_BAR_COLOR => '=',
        _ => '#',
    }
}

/// Lines of `current` that differ from `previous`, labelled for the terminal.
pub fn changed_lines(previous: &Hud, current: &Hud) -> Vec<String> {
    let mut lines = Vec::new();
    if previous.profile != current.profile {
        lines.push(format!("[perfil] {}", current.profile));
    }
    if previous.status != current.status {
        lines.push(format!("[hud] {}", current.status));
    }
    if previous.result != current.result && !current.result.is_empty() {
        lines.push(format!("[resultado] {}", current.result));
    }
    lines
}

/// Prints HUD changes (and canvas frames when `canvas_rx` is given) until the
/// client loop drops its senders.
pub async fn present(
    mut hud_rx: watch::Receiver<Hud>,
    mut canvas_rx: Option<watch::Receiver<PixelCanvas>>,
) {
    let mut shown = Hud::default();

    loop {
        let canvas_changed = async {
            match canvas_rx.as_mut() {
                Some(rx) => rx.changed().await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            changed = hud_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let current = hud_rx.borrow_and_update().clone();
                for line in changed_lines(&shown, &current) {
                    println!("{line}");
                }
                shown = current;
            }
            changed = canvas_changed => {
                if changed.is_err() {
                    canvas_rx = None;
                    continue;
                }
                if let Some(rx) = canvas_rx.as_mut() {
                    let frame = rx
                        .borrow_and_update()
                        .to_ascii(ASCII_CELL_WIDTH, ASCII_CELL_HEIGHT, glyph);
                    print!("{frame}");
                }
            }
        }
    }
}
