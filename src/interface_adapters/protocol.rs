// Wire protocol DTOs for the boss-rush `/api` endpoints and their domain conversions.

use crate::domain::{Combatant, StateSnapshot};
use serde::{Deserialize, Serialize};

/// Body for `POST /api/knight` and `POST /api/start_boss/{boss}`.
#[derive(Debug, Serialize)]
pub struct KnightNameRequest<'a> {
    pub name: &'a str,
}

/// Body for `POST /api/action`.
#[derive(Debug, Serialize)]
pub struct ActionRequest<'a> {
    pub action: &'a str,
}

/// Knight profile as returned by create/load. Other profile fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct KnightProfileDto {
    pub name: String,
}

/// Response of `GET /api/state`.
#[derive(Debug, Clone, Deserialize)]
pub struct StateSnapshotDto {
    pub frame: u64,
    // `null` and a missing key both mean "absent".
    #[serde(default)]
    pub player: Option<CombatantDto>,
    #[serde(default)]
    pub enemy: Option<CombatantDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CombatantDto {
    pub position: [f64; 2],
    pub health: f64,
    pub alive: bool,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<CombatantDto> for Combatant {
    fn from(dto: CombatantDto) -> Self {
        let [x, y] = dto.position;
        Self {
            name: dto.name,
            x,
            y,
            health: dto.health,
            alive: dto.alive,
        }
    }
}

impl From<StateSnapshotDto> for StateSnapshot {
    fn from(dto: StateSnapshotDto) -> Self {
        Self {
            frame: dto.frame,
            player: dto.player.map(Combatant::from),
            enemy: dto.enemy.map(Combatant::from),
        }
    }
}
