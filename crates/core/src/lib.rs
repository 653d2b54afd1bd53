pub mod config;
pub mod content;
pub mod game;
pub mod mapgen;
mod random;
pub mod state;
pub mod types;

pub use config::{ConfigError, DungeonConfig};
pub use game::{EntityRef, Game, Message, MessageLog, compute_fov, find_path};
pub use mapgen::{DungeonGenerator, GeneratedDungeon, generate_dungeon};
pub use state::{Actor, Ai, Consumable, Fighter, GameState, GroundItem, Inventory, Item, Map};
pub use types::*;
