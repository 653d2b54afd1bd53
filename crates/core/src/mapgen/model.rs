//! Public data models for generated dungeons and their spawn lists.

use crate::state::Map;
use crate::types::{ActorKind, ItemKind, Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonsterSpawn {
    pub kind: ActorKind,
    pub pos: Pos,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpawn {
    pub kind: ItemKind,
    pub pos: Pos,
}

#[derive(Clone, Debug)]
pub struct GeneratedDungeon {
    pub map: Map,
    pub player_start: Pos,
    pub monster_spawns: Vec<MonsterSpawn>,
    pub item_spawns: Vec<ItemSpawn>,
}

impl GeneratedDungeon {
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.map.width() as u32).to_le_bytes());
        bytes.extend((self.map.height() as u32).to_le_bytes());
        for tile in self.map.tiles() {
            bytes.push(match tile {
                TileKind::Wall => 0,
                TileKind::Floor => 1,
            });
        }
        bytes.extend(self.player_start.y.to_le_bytes());
        bytes.extend(self.player_start.x.to_le_bytes());

        bytes.extend((self.monster_spawns.len() as u32).to_le_bytes());
        for spawn in &self.monster_spawns {
            bytes.push(match spawn.kind {
                ActorKind::Player => 0,
                ActorKind::Orc => 1,
                ActorKind::Troll => 2,
            });
            bytes.extend(spawn.pos.y.to_le_bytes());
            bytes.extend(spawn.pos.x.to_le_bytes());
        }

        bytes.extend((self.item_spawns.len() as u32).to_le_bytes());
        for spawn in &self.item_spawns {
            bytes.push(match spawn.kind {
                ItemKind::HealthPotion => 0,
                ItemKind::LightningScroll => 1,
                ItemKind::ConfusionScroll => 2,
                ItemKind::FireballScroll => 3,
            });
            bytes.extend(spawn.pos.y.to_le_bytes());
            bytes.extend(spawn.pos.x.to_le_bytes());
        }

        bytes
    }
}
