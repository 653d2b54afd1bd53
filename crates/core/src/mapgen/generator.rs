//! Room-and-corridor generation that chains rooms in acceptance order.

use std::collections::BTreeSet;

use rand_chacha::rand_core::Rng;

use super::corridor::tunnel_between;
use super::layout::{RoomRect, carve_room};
use super::model::GeneratedDungeon;
use super::spawns::{SpawnContext, populate_room};
use crate::config::{ConfigError, DungeonConfig};
use crate::random::{below, percent_chance};
use crate::state::Map;
use crate::types::{Pos, TileKind};

pub struct DungeonGenerator {
    config: DungeonConfig,
}

impl DungeonGenerator {
    pub fn new(config: DungeonConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> GeneratedDungeon {
        self.generate_with_rooms(rng).0
    }

    fn generate_with_rooms<R: Rng + ?Sized>(&self, rng: &mut R) -> (GeneratedDungeon, Vec<RoomRect>) {
        let config = &self.config;
        let width = config.map_width as i32;
        let height = config.map_height as i32;
        let min_size = config.room_min_size as u32;
        let size_span = (config.room_max_size - config.room_min_size) as u32;

        let mut map = Map::new(config.map_width, config.map_height);
        let mut rooms: Vec<RoomRect> = Vec::new();
        let mut player_start = None;
        let mut occupied = BTreeSet::new();
        let mut monster_spawns = Vec::new();
        let mut item_spawns = Vec::new();

        for _ in 0..config.max_rooms {
            let room_width = (min_size + below(rng, size_span)) as i32;
            let room_height = (min_size + below(rng, size_span)) as i32;
            let x = below(rng, (width - room_width - 1) as u32) as i32;
            let y = below(rng, (height - room_height - 1) as u32) as i32;

            let candidate = RoomRect::new(x, y, room_width, room_height);
            if rooms.iter().any(|other| candidate.intersects(other)) {
                continue;
            }

            carve_room(&mut map, candidate);

            match rooms.last() {
                None => {
                    let start = candidate.center();
                    player_start = Some(start);
                    occupied.insert(start);
                }
                Some(previous) => {
                    let horizontal_first = percent_chance(rng, 50);
                    for pos in tunnel_between(previous.center(), candidate.center(), horizontal_first)
                    {
                        map.set_tile(pos, TileKind::Floor);
                    }
                }
            }

            populate_room(
                &mut SpawnContext {
                    max_monsters: config.max_monsters_per_room,
                    max_items: config.max_items_per_room,
                    occupied: &mut occupied,
                    monster_spawns: &mut monster_spawns,
                    item_spawns: &mut item_spawns,
                },
                candidate,
                rng,
            );

            rooms.push(candidate);
        }

        let player_start = player_start.unwrap_or_else(|| {
            let fallback = Pos::new(width / 2, height / 2);
            log::warn!("no room could be placed; opening a single cell at {fallback:?}");
            map.set_tile(fallback, TileKind::Floor);
            fallback
        });

        log::debug!(
            "generated {}x{} dungeon: {} rooms, {} monsters, {} items",
            config.map_width,
            config.map_height,
            rooms.len(),
            monster_spawns.len(),
            item_spawns.len()
        );

        (GeneratedDungeon { map, player_start, monster_spawns, item_spawns }, rooms)
    }
}
