use crate::state::{Actor, Ai, Consumable, Fighter, Inventory, Item};
use crate::types::*;

pub const HEALTH_POTION_AMOUNT: i32 = 4;
pub const LIGHTNING_DAMAGE: i32 = 20;
pub const LIGHTNING_RANGE: i32 = 5;
pub const CONFUSION_TURNS: u32 = 10;
pub const FIREBALL_DAMAGE: i32 = 12;
pub const FIREBALL_RADIUS: i32 = 3;

pub struct ActorStats {
    pub name: &'static str,
    pub glyph: char,
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
}

pub fn actor_stats(kind: ActorKind) -> ActorStats {
    match kind {
        ActorKind::Player => ActorStats { name: "Player", glyph: '@', hp: 30, defense: 2, power: 5 },
        ActorKind::Orc => ActorStats { name: "Orc", glyph: 'o', hp: 10, defense: 0, power: 3 },
        ActorKind::Troll => ActorStats { name: "Troll", glyph: 'T', hp: 16, defense: 1, power: 4 },
    }
}

pub fn new_player(pos: Pos, inventory_capacity: usize) -> Actor {
    build_actor(ActorKind::Player, pos, inventory_capacity, None)
}

pub fn new_monster(kind: ActorKind, pos: Pos) -> Actor {
    build_actor(kind, pos, 0, Some(Ai::hostile()))
}

fn build_actor(kind: ActorKind, pos: Pos, inventory_capacity: usize, ai: Option<Ai>) -> Actor {
    let stats = actor_stats(kind);
    Actor {
        id: EntityId::default(),
        kind,
        pos,
        name: stats.name.to_string(),
        glyph: stats.glyph,
        blocks_movement: true,
        render_order: RenderOrder::Actor,
        fighter: Fighter::new(stats.hp, stats.defense, stats.power),
        inventory: Inventory::new(inventory_capacity),
        ai,
    }
}

pub fn new_item(kind: ItemKind) -> Item {
    let (name, glyph, consumable) = match kind {
        ItemKind::HealthPotion => {
            ("Health Potion", '!', Consumable::Healing { amount: HEALTH_POTION_AMOUNT })
        }
        ItemKind::LightningScroll => (
            "Lightning Scroll",
            '~',
            Consumable::LightningBolt { damage: LIGHTNING_DAMAGE, maximum_range: LIGHTNING_RANGE },
        ),
        ItemKind::ConfusionScroll => {
            ("Confusion Scroll", '~', Consumable::Confusion { number_of_turns: CONFUSION_TURNS })
        }
        ItemKind::FireballScroll => (
            "Fireball Scroll",
            '~',
            Consumable::Fireball { damage: FIREBALL_DAMAGE, radius: FIREBALL_RADIUS },
        ),
    };
    Item { kind, name: name.to_string(), glyph, consumable }
}
