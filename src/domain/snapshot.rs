// Domain-level view of the server state and the inputs the client can send.

/// One fighter as reported by the server for a single poll.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    // Display name; always sent for bosses, optional for the player.
    pub name: Option<String>,
    pub x: f64,
    pub y: f64,
    pub health: f64,
    pub alive: bool,
}

/// Server-reported instant of game state. Never retained past one poll cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    // Monotonic server tick counter (reset when a run starts).
    pub frame: u64,
    pub player: Option<Combatant>,
    pub enemy: Option<Combatant>,
}

/// Control buttons the player can press during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    MoveLeft,
    MoveRight,
    Jump,
    Attack,
    Dash,
}

impl PlayerAction {
    pub const ALL: [PlayerAction; 5] = [
        PlayerAction::MoveLeft,
        PlayerAction::MoveRight,
        PlayerAction::Jump,
        PlayerAction::Attack,
        PlayerAction::Dash,
    ];

    /// Wire identifier sent in `{"action": ...}`.
    pub fn as_str(self) -> &'static str {
        match self {
            PlayerAction::MoveLeft => "move_left",
            PlayerAction::MoveRight => "move_right",
            PlayerAction::Jump => "jump",
            PlayerAction::Attack => "attack",
            PlayerAction::Dash => "dash",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == id)
    }
}

/// Boss identifier used in the start path. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BossId(String);

impl BossId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BossId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
