use crate::domain::messages;
use crate::domain::snapshot::StateSnapshot;

/// Text lines shown next to the canvas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hud {
    // Frame number and both health values from the latest snapshot.
    pub status: String,
    // Victory/defeat text; cleared when a new run starts.
    pub result: String,
    // Active profile or the last profile error.
    pub profile: String,
}

/// Terminal condition reached by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Victory { enemy: String },
    Defeat,
}

impl Outcome {
    /// Victory wins over defeat when both combatants are down on the same tick.
    pub fn from_snapshot(snapshot: &StateSnapshot) -> Option<Self> {
        if let Some(enemy) = snapshot.enemy.as_ref().filter(|enemy| !enemy.alive) {
            let name = enemy
                .name
                .clone()
                .unwrap_or_else(|| messages::UNNAMED_BOSS.to_string());
            return Some(Outcome::Victory { enemy: name });
        }

        match &snapshot.player {
            Some(player) if !player.alive => Some(Outcome::Defeat),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::Victory { enemy } => messages::victory(enemy),
            Outcome::Defeat => messages::DEFEAT.to_string(),
        }
    }
}

pub fn status_line(snapshot: &StateSnapshot) -> String {
    let player_hp = snapshot
        .player
        .as_ref()
        .map_or_else(|| "-".to_string(), |player| player.health.to_string());
    let enemy_hp = snapshot
        .enemy
        .as_ref()
        .map_or_else(|| "-".to_string(), |enemy| enemy.health.to_string());

    format!(
        "Frame: {} | Player HP: {player_hp} | Enemy HP: {enemy_hp}",
        snapshot.frame
    )
}
