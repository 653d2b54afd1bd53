use slotmap::SlotMap;

use crate::types::*;

/// Tile storage plus the per-cell visibility bitmaps.
#[derive(Clone, Debug)]
pub struct Map {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
    visible: Vec<bool>,
    explored: Vec<bool>,
}

impl Map {
    /// A map filled entirely with walls.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, TileKind::Wall)
    }

    pub fn filled(width: usize, height: usize, tile: TileKind) -> Self {
        Self {
            width,
            height,
            tiles: vec![tile; width * height],
            visible: vec![false; width * height],
            explored: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Out-of-bounds cells read as walls.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.tile_at(pos).walkable()
    }

    pub fn is_opaque(&self, pos: Pos) -> bool {
        !self.tile_at(pos).transparent()
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_visible(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.visible[self.index(pos)]
    }

    pub fn is_explored(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.explored[self.index(pos)]
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn explored(&self) -> &[bool] {
        &self.explored
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Pos::new(x as i32, y as i32)))
    }

    pub(crate) fn clear_visible(&mut self) {
        self.visible.fill(false);
    }

    pub(crate) fn set_visible(&mut self, pos: Pos) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.visible[idx] = true;
    }

    /// Folds the current visible set into `explored`. Never clears a bit.
    pub(crate) fn accumulate_explored(&mut self) {
        for (explored, &visible) in self.explored.iter_mut().zip(&self.visible) {
            *explored |= visible;
        }
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fighter {
    max_hp: i32,
    hp: i32,
    defense: i32,
    power: i32,
}

impl Fighter {
    pub fn new(hp: i32, defense: i32, power: i32) -> Self {
        Self { max_hp: hp, hp, defense, power }
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    /// Clamps into `[0, max_hp]`.
    pub(crate) fn set_hp(&mut self, value: i32) {
        self.hp = value.clamp(0, self.max_hp);
    }

    /// Returns the amount actually recovered.
    pub(crate) fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.set_hp(self.hp + amount);
        self.hp - before
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Consumable {
    Healing { amount: i32 },
    LightningBolt { damage: i32, maximum_range: i32 },
    Confusion { number_of_turns: u32 },
    Fireball { damage: i32, radius: i32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub name: String,
    pub glyph: char,
    pub consumable: Consumable,
}

/// An item lying on the map.
#[derive(Clone, Debug)]
pub struct GroundItem {
    pub id: ItemId,
    pub pos: Pos,
    pub item: Item,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    capacity: usize,
    items: Vec<Item>,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self { capacity, items: Vec::new() }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Acquisition order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Hands the item back when there is no room for it.
    pub(crate) fn push(&mut self, item: Item) -> Result<(), Item> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    pub(crate) fn take(&mut self, index: usize) -> Option<Item> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ai {
    /// Chases the player along a cached path.
    Hostile { path: Vec<Pos> },
    /// Stumbles randomly, then restores `previous`.
    Confused { previous: Box<Ai>, turns_remaining: u32 },
}

impl Ai {
    pub fn hostile() -> Self {
        Ai::Hostile { path: Vec::new() }
    }

    pub fn is_confused(&self) -> bool {
        matches!(self, Ai::Confused { .. })
    }
}

#[derive(Clone, Debug)]
pub struct Actor {
    pub id: EntityId,
    pub kind: ActorKind,
    pub pos: Pos,
    pub name: String,
    pub glyph: char,
    pub blocks_movement: bool,
    pub render_order: RenderOrder,
    pub fighter: Fighter,
    pub inventory: Inventory,
    pub ai: Option<Ai>,
}

impl Actor {
    pub fn is_alive(&self) -> bool {
        self.fighter.hp() > 0
    }
}

pub struct GameState {
    pub map: Map,
    pub actors: SlotMap<EntityId, Actor>,
    pub items: SlotMap<ItemId, GroundItem>,
    pub player_id: EntityId,
}

impl GameState {
    /// An empty world holding only the given player actor.
    pub fn new(map: Map, player: Actor) -> Self {
        let mut actors = SlotMap::with_key();
        let player_id = actors.insert(player);
        actors[player_id].id = player_id;
        Self { map, actors, items: SlotMap::with_key(), player_id }
    }

    pub fn add_actor(&mut self, actor: Actor) -> EntityId {
        let id = self.actors.insert(actor);
        self.actors[id].id = id;
        id
    }

    pub fn add_item(&mut self, pos: Pos, item: Item) -> ItemId {
        self.items.insert_with_key(|id| GroundItem { id, pos, item })
    }

    pub fn blocking_actor_at(&self, pos: Pos) -> Option<EntityId> {
        self.actors
            .iter()
            .find(|(_, actor)| actor.blocks_movement && actor.pos == pos)
            .map(|(id, _)| id)
    }

    pub fn living_actor_at(&self, pos: Pos) -> Option<EntityId> {
        self.actors
            .iter()
            .find(|(_, actor)| actor.is_alive() && actor.pos == pos)
            .map(|(id, _)| id)
    }

    pub fn item_at(&self, pos: Pos) -> Option<ItemId> {
        self.items.iter().find(|(_, item)| item.pos == pos).map(|(id, _)| id)
    }

    /// Living actors in registration order.
    pub fn living_actor_ids(&self) -> Vec<EntityId> {
        self.actors.iter().filter(|(_, actor)| actor.is_alive()).map(|(id, _)| id).collect()
    }
}
