//! Shared test fixtures for the `game` submodule test suites.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use super::*;
use crate::content::{new_item, new_monster, new_player};
use crate::state::{Ai, Fighter, Map};

/// 10x10 walled room, floor on `1..=8`, origin in the middle.
pub(super) fn open_room_fixture() -> (Map, Pos) {
    let mut map = Map::new(10, 10);
    for y in 1..9 {
        for x in 1..9 {
            map.set_tile(Pos::new(x, y), TileKind::Floor);
        }
    }
    (map, Pos::new(5, 5))
}

/// Single-row corridor with a wall plug at x = 6.
pub(super) fn wall_occlusion_fixture() -> (Map, Pos) {
    let mut map = Map::new(11, 11);
    for x in 1..10 {
        map.set_tile(Pos::new(x, 5), TileKind::Floor);
    }
    map.set_tile(Pos::new(6, 5), TileKind::Wall);
    (map, Pos::new(3, 5))
}

/// Open floor with a closed wall ring on `lo..=hi`.
pub(super) fn closed_room_fixture() -> (Map, i32, i32) {
    let (lo, hi) = (3, 9);
    let mut map = Map::filled(14, 14, TileKind::Floor);
    for i in lo..=hi {
        for pos in [Pos::new(i, lo), Pos::new(i, hi), Pos::new(lo, i), Pos::new(hi, i)] {
            map.set_tile(pos, TileKind::Wall);
        }
    }
    (map, lo, hi)
}

/// 12x12 walled arena with the player at (5, 5) and default player stats.
pub(super) fn arena_game() -> Game {
    arena_game_with_capacity(26)
}

pub(super) fn arena_game_with_capacity(capacity: usize) -> Game {
    let mut map = Map::new(12, 12);
    for y in 1..11 {
        for x in 1..11 {
            map.set_tile(Pos::new(x, y), TileKind::Floor);
        }
    }
    let state = GameState::new(map, new_player(Pos::new(5, 5), capacity));
    Game::from_state(state, ChaCha8Rng::seed_from_u64(7), DungeonConfig::default())
}

/// The player boxed into a single floor cell.
pub(super) fn single_cell_game() -> Game {
    let mut map = Map::new(3, 3);
    map.set_tile(Pos::new(1, 1), TileKind::Floor);
    let state = GameState::new(map, new_player(Pos::new(1, 1), 26));
    Game::from_state(state, ChaCha8Rng::seed_from_u64(1), DungeonConfig::default())
}

pub(super) fn add_monster(game: &mut Game, kind: ActorKind, pos: Pos) -> EntityId {
    game.state.add_actor(new_monster(kind, pos))
}

pub(super) fn add_ground_item(game: &mut Game, kind: ItemKind, pos: Pos) -> ItemId {
    game.state.add_item(pos, new_item(kind))
}

pub(super) fn give_item(game: &mut Game, kind: ItemKind) {
    let player = game.state.player_id;
    assert!(game.state.actors[player].inventory.push(new_item(kind)).is_ok(), "inventory has room");
}

pub(super) fn set_fighter(game: &mut Game, id: EntityId, hp: i32, defense: i32, power: i32) {
    game.state.actors[id].fighter = Fighter::new(hp, defense, power);
}

pub(super) fn set_tile(game: &mut Game, pos: Pos, tile: TileKind) {
    game.state.map.set_tile(pos, tile);
}

pub(super) fn kill(game: &mut Game, id: EntityId) {
    let hp = game.state.actors[id].fighter.hp();
    game.take_damage(id, hp);
}

pub(super) fn confuse(game: &mut Game, id: EntityId, turns: u32) {
    let actor = &mut game.state.actors[id];
    let previous = actor.ai.take().unwrap_or_else(Ai::hostile);
    actor.ai = Some(Ai::Confused { previous: Box::new(previous), turns_remaining: turns });
}

/// Drops the current field of view so no actor counts as seen.
pub(super) fn blind(game: &mut Game) {
    game.state.map.clear_visible();
}
