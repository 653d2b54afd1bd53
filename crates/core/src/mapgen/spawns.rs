//! Monster and item population for freshly carved rooms.

use std::collections::BTreeSet;

use rand_chacha::rand_core::Rng;

use super::layout::RoomRect;
use super::model::{ItemSpawn, MonsterSpawn};
use crate::random::{below, percent_chance};
use crate::types::{ActorKind, ItemKind, Pos};

pub(super) struct SpawnContext<'a> {
    pub(super) max_monsters: u32,
    pub(super) max_items: u32,
    /// Every point already holding an entity, the player included.
    pub(super) occupied: &'a mut BTreeSet<Pos>,
    pub(super) monster_spawns: &'a mut Vec<MonsterSpawn>,
    pub(super) item_spawns: &'a mut Vec<ItemSpawn>,
}

/// Counts are upper bounds: a draw landing on an occupied point is dropped, not retried.
pub(super) fn populate_room<R: Rng + ?Sized>(
    context: &mut SpawnContext<'_>,
    room: RoomRect,
    rng: &mut R,
) {
    let monster_count = below(rng, context.max_monsters + 1);
    let item_count = below(rng, context.max_items);

    for _ in 0..monster_count {
        let pos = room.random_inner_point(rng);
        if !context.occupied.insert(pos) {
            continue;
        }
        let kind = if percent_chance(rng, 80) { ActorKind::Orc } else { ActorKind::Troll };
        context.monster_spawns.push(MonsterSpawn { kind, pos });
    }

    for _ in 0..item_count {
        let pos = room.random_inner_point(rng);
        if !context.occupied.insert(pos) {
            continue;
        }
        context.item_spawns.push(ItemSpawn { kind: roll_item_kind(rng), pos });
    }
}

fn roll_item_kind<R: Rng + ?Sized>(rng: &mut R) -> ItemKind {
    match below(rng, 100) {
        0..70 => ItemKind::HealthPotion,
        70..80 => ItemKind::FireballScroll,
        80..90 => ItemKind::ConfusionScroll,
        _ => ItemKind::LightningScroll,
    }
}
