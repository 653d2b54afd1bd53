use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
    pub struct ItemId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { y, x }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }

    pub fn chebyshev(self, other: Pos) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Squared Euclidean distance; compared against squared radii to stay in integers.
    pub fn distance_squared(self, other: Pos) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
}

impl TileKind {
    pub fn walkable(self) -> bool {
        matches!(self, TileKind::Floor)
    }

    pub fn transparent(self) -> bool {
        matches!(self, TileKind::Floor)
    }

    pub fn glyph(self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::Floor => '.',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActorKind {
    Player,
    Orc,
    Troll,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKind {
    HealthPotion,
    LightningScroll,
    ConfusionScroll,
    FireballScroll,
}

/// Layering hint for the renderer; later variants draw on top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RenderOrder {
    Corpse,
    Item,
    Actor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    PlayerAttack,
    EnemyAttack,
    PlayerDeath,
    EnemyDeath,
    HealthRecovered,
    StatusEffectApplied,
    Impossible,
}

/// A single intent resolved against the world on behalf of one actor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Wait,
    Escape,
    Move { dx: i32, dy: i32 },
    Melee { dx: i32, dy: i32 },
    Bump { dx: i32, dy: i32 },
    PickUp,
    Drop { index: usize },
    UseItem { index: usize, target: Option<Pos> },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    PlayerActing,
    EnemiesActing,
    VisibilityRefresh,
    GameOver,
    Terminated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The action resolved; enemies acted and visibility was refreshed.
    Spent,
    /// The action was impossible; nothing else ran this turn.
    Rejected { reason: String },
    GameOver,
    Terminated,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// Recoverable validation failure. Consumes no turn.
    Impossible(String),
    /// The actor asked to end the session.
    Terminated,
    /// Invariant violation; the session cannot continue.
    Fatal(String),
}

impl ActionError {
    pub(crate) fn impossible(reason: impl Into<String>) -> Self {
        Self::Impossible(reason.into())
    }

    pub(crate) fn fatal(reason: impl Into<String>) -> Self {
        Self::Fatal(reason.into())
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Impossible(reason) => write!(f, "impossible action: {reason}"),
            Self::Terminated => write!(f, "session terminated"),
            Self::Fatal(reason) => write!(f, "fatal error: {reason}"),
        }
    }
}

impl Error for ActionError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    Fatal(String),
    /// A turn was requested after the session reached GameOver or Terminated.
    SessionOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fatal(reason) => write!(f, "fatal error: {reason}"),
            Self::SessionOver => write!(f, "the session has already ended"),
        }
    }
}

impl Error for GameError {}
