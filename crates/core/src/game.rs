use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::config::{ConfigError, DungeonConfig};
use crate::content::{new_item, new_monster, new_player};
use crate::mapgen::{GeneratedDungeon, generate_dungeon};
use crate::state::{Actor, GameState, GroundItem};
use crate::types::*;

mod actions;
mod ai;
mod combat;
mod consumables;
mod hash;
mod messages;
mod pathfinding;
#[cfg(test)]
mod test_support;
mod turn;
mod visibility;

pub use messages::{Message, MessageLog};
pub use pathfinding::find_path;
pub use visibility::compute_fov;

const WELCOME_TEXT: &str = "Hello and welcome, adventurer, to yet another dungeon!";

pub struct Game {
    seed: u64,
    turn: u64,
    phase: TurnPhase,
    rng: ChaCha8Rng,
    config: DungeonConfig,
    state: GameState,
    messages: MessageLog,
}

/// Something occupying a cell, as the renderer sees it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityRef {
    Actor(EntityId),
    Item(ItemId),
}

impl Game {
    /// Generates a dungeon from `seed`, places the player in the first room
    /// and lights the starting view.
    pub fn new(seed: u64, config: DungeonConfig) -> Result<Self, ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dungeon = generate_dungeon(&config, &mut rng)?;
        let state = populate(dungeon, &config);

        let mut game = Self::assemble(seed, state, rng, config);
        game.log_message(WELCOME_TEXT, Severity::Info);
        log::info!(
            "session started: seed={seed} actors={} items={}",
            game.state.actors.len(),
            game.state.items.len()
        );
        Ok(game)
    }

    /// Wraps a hand-built world. The random source is only used by AI from here on.
    pub fn from_state(state: GameState, rng: ChaCha8Rng, config: DungeonConfig) -> Self {
        Self::assemble(0, state, rng, config)
    }

    fn assemble(seed: u64, state: GameState, rng: ChaCha8Rng, config: DungeonConfig) -> Self {
        let mut game = Self {
            seed,
            turn: 0,
            phase: TurnPhase::Idle,
            rng,
            config,
            state,
            messages: MessageLog::default(),
        };
        game.refresh_visibility();
        game
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Turns spent so far; rejected actions do not count.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn messages(&self) -> &MessageLog {
        &self.messages
    }

    pub fn player_id(&self) -> EntityId {
        self.state.player_id
    }

    pub fn player(&self) -> &Actor {
        &self.state.actors[self.state.player_id]
    }

    pub fn actor(&self, id: EntityId) -> Option<&Actor> {
        self.state.actors.get(id)
    }

    pub fn ground_item(&self, id: ItemId) -> Option<&GroundItem> {
        self.state.items.get(id)
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        self.state.map.is_visible(pos)
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.state.map.is_explored(pos)
    }

    /// `(hp, max_hp)` of the player, for the status bar.
    pub fn hp_status(&self) -> (i32, i32) {
        let fighter = &self.player().fighter;
        (fighter.hp(), fighter.max_hp())
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, TurnPhase::GameOver)
    }

    /// Everything standing or lying on `pos`, bottom layer first.
    pub fn entities_at(&self, pos: Pos) -> Vec<(RenderOrder, EntityRef)> {
        let mut found: Vec<(RenderOrder, EntityRef)> = self
            .state
            .items
            .iter()
            .filter(|(_, item)| item.pos == pos)
            .map(|(id, _)| (RenderOrder::Item, EntityRef::Item(id)))
            .chain(
                self.state
                    .actors
                    .iter()
                    .filter(|(_, actor)| actor.pos == pos)
                    .map(|(id, actor)| (actor.render_order, EntityRef::Actor(id))),
            )
            .collect();
        found.sort_by_key(|(order, _)| *order);
        found
    }

    /// Narration hook shared by every subsystem.
    pub fn log_message(&mut self, text: impl Into<String>, severity: Severity) {
        self.messages.add(text, severity);
    }

    /// Recomputes the player's field of view and grows the explored set.
    pub fn refresh_visibility(&mut self) {
        let origin = self.player().pos;
        compute_fov(&mut self.state.map, origin, self.config.fov_radius);
    }
}

fn populate(dungeon: GeneratedDungeon, config: &DungeonConfig) -> GameState {
    let GeneratedDungeon { map, player_start, monster_spawns, item_spawns } = dungeon;
    let mut state = GameState::new(map, new_player(player_start, config.player_inventory_capacity));
    for spawn in monster_spawns {
        state.add_actor(new_monster(spawn.kind, spawn.pos));
    }
    for spawn in item_spawns {
        state.add_item(spawn.pos, new_item(spawn.kind));
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn new_session_places_player_and_lights_start() {
        let game = Game::new(42, DungeonConfig::default()).expect("valid config");
        let player = game.player();
        assert_eq!(player.kind, ActorKind::Player);
        assert!(game.state().map.is_walkable(player.pos));
        assert!(game.is_visible(player.pos));
        assert!(game.is_explored(player.pos));
        assert_eq!(game.phase(), TurnPhase::Idle);
        assert_eq!(game.messages().last().map(|m| m.text.as_str()), Some(WELCOME_TEXT));
    }

    #[test]
    fn monsters_register_after_the_player() {
        let game = Game::new(7, DungeonConfig::default()).expect("valid config");
        let first = game.state().actors.keys().next();
        assert_eq!(first, Some(game.player_id()));
        assert!(game.state().actors.values().skip(1).all(|actor| actor.ai.is_some()));
    }

    #[test]
    fn invalid_config_is_reported() {
        let config = DungeonConfig { room_min_size: 1, ..DungeonConfig::default() };
        assert!(matches!(Game::new(1, config), Err(ConfigError::RoomTooSmall { .. })));
    }

    #[test]
    fn entities_at_lists_corpse_below_item_below_actor() {
        let mut game = arena_game();
        let spot = game.player().pos.offset(1, 0);
        let orc = add_monster(&mut game, ActorKind::Orc, spot);
        kill(&mut game, orc);
        let potion = add_ground_item(&mut game, ItemKind::HealthPotion, spot);
        let troll = add_monster(&mut game, ActorKind::Troll, spot);

        let layers = game.entities_at(spot);
        assert_eq!(
            layers,
            vec![
                (RenderOrder::Corpse, EntityRef::Actor(orc)),
                (RenderOrder::Item, EntityRef::Item(potion)),
                (RenderOrder::Actor, EntityRef::Actor(troll)),
            ]
        );
    }

    #[test]
    fn hp_status_tracks_player_fighter() {
        let game = arena_game();
        assert_eq!(game.hp_status(), (30, 30));
    }
}
