//! Validation and application of a single action for a single actor.
//! Every failure the actor could have avoided is `Impossible`; anything else is `Fatal`.

use super::*;

impl Game {
    /// Resolves `action` on behalf of the player without advancing the turn.
    /// `Ok` means the action consumed the player's turn.
    pub fn resolve(&mut self, action: &Action) -> Result<(), ActionError> {
        self.perform(self.state.player_id, action)
    }

    pub(super) fn perform(&mut self, actor: EntityId, action: &Action) -> Result<(), ActionError> {
        let origin = self.actor_pos(actor)?;
        match *action {
            Action::Wait => Ok(()),
            Action::Escape => Err(ActionError::Terminated),
            Action::Move { dx, dy } => self.move_actor(actor, origin.offset(dx, dy)),
            Action::Melee { dx, dy } => self.melee(actor, origin.offset(dx, dy)),
            Action::Bump { dx, dy } => {
                let dest = origin.offset(dx, dy);
                if self.state.living_actor_at(dest).is_some() {
                    self.melee(actor, dest)
                } else {
                    self.move_actor(actor, dest)
                }
            }
            Action::PickUp => self.pick_up(actor, origin),
            Action::Drop { index } => self.drop_item(actor, origin, index),
            Action::UseItem { index, target } => self.use_item(actor, index, target.unwrap_or(origin)),
        }
    }

    fn actor_pos(&self, actor: EntityId) -> Result<Pos, ActionError> {
        self.state
            .actors
            .get(actor)
            .map(|actor| actor.pos)
            .ok_or_else(|| ActionError::fatal(format!("action for unknown actor {actor:?}")))
    }

    fn move_actor(&mut self, actor: EntityId, dest: Pos) -> Result<(), ActionError> {
        let map = &self.state.map;
        if !map.in_bounds(dest) || !map.is_walkable(dest) || self.state.blocking_actor_at(dest).is_some() {
            return Err(ActionError::impossible("That way is blocked."));
        }
        self.state.actors[actor].pos = dest;
        Ok(())
    }

    fn pick_up(&mut self, actor: EntityId, pos: Pos) -> Result<(), ActionError> {
        let item_id = self
            .state
            .item_at(pos)
            .ok_or_else(|| ActionError::impossible("There is nothing here to pick up."))?;
        if self.state.actors[actor].inventory.is_full() {
            return Err(ActionError::impossible("Your inventory is full."));
        }
        let ground = self
            .state
            .items
            .remove(item_id)
            .ok_or_else(|| ActionError::fatal(format!("ground item {item_id:?} vanished")))?;
        let name = ground.item.name.clone();
        if self.state.actors[actor].inventory.push(ground.item).is_err() {
            return Err(ActionError::fatal("inventory refused an item after the capacity check"));
        }
        self.log_message(format!("You picked up the {name}!"), Severity::Info);
        Ok(())
    }

    fn drop_item(&mut self, actor: EntityId, pos: Pos, index: usize) -> Result<(), ActionError> {
        let item = self.state.actors[actor]
            .inventory
            .take(index)
            .ok_or_else(|| ActionError::impossible("Invalid entry."))?;
        let name = item.name.clone();
        self.state.add_item(pos, item);
        self.log_message(format!("You dropped the {name}."), Severity::Info);
        Ok(())
    }

    /// The item leaves the inventory only when its effect succeeded.
    fn use_item(&mut self, actor: EntityId, index: usize, target: Pos) -> Result<(), ActionError> {
        let item = self.state.actors[actor]
            .inventory
            .get(index)
            .cloned()
            .ok_or_else(|| ActionError::impossible("Invalid entry."))?;
        self.activate(actor, &item, target)?;
        if self.state.actors[actor].inventory.take(index).is_none() {
            return Err(ActionError::fatal(format!("{} left the inventory during use", item.name)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn wait_always_succeeds_and_escape_terminates() {
        let mut game = arena_game();
        assert_eq!(game.resolve(&Action::Wait), Ok(()));
        assert_eq!(game.resolve(&Action::Escape), Err(ActionError::Terminated));
    }

    #[test]
    fn move_into_wall_is_blocked() {
        let mut game = arena_game();
        let start = game.player().pos;
        set_tile(&mut game, start.offset(1, 0), TileKind::Wall);

        assert_eq!(
            game.resolve(&Action::Move { dx: 1, dy: 0 }),
            Err(ActionError::Impossible("That way is blocked.".into()))
        );
        assert_eq!(game.player().pos, start);
    }

    #[test]
    fn move_onto_monster_is_blocked_but_corpse_is_not() {
        let mut game = arena_game();
        let start = game.player().pos;
        let orc = add_monster(&mut game, ActorKind::Orc, start.offset(0, 1));

        assert!(matches!(game.resolve(&Action::Move { dx: 0, dy: 1 }), Err(ActionError::Impossible(_))));
        kill(&mut game, orc);
        assert_eq!(game.resolve(&Action::Move { dx: 0, dy: 1 }), Ok(()));
        assert_eq!(game.player().pos, start.offset(0, 1));
    }

    #[test]
    fn bump_attacks_living_actor_and_walks_otherwise() {
        let mut game = arena_game();
        let start = game.player().pos;
        let orc = add_monster(&mut game, ActorKind::Orc, start.offset(1, 0));

        game.resolve(&Action::Bump { dx: 1, dy: 0 }).expect("melee");
        assert_eq!(game.player().pos, start);
        assert_eq!(game.actor(orc).map(|a| a.fighter.hp()), Some(5));

        game.resolve(&Action::Bump { dx: -1, dy: 0 }).expect("move");
        assert_eq!(game.player().pos, start.offset(-1, 0));
    }

    #[test]
    fn items_never_block_movement() {
        let mut game = arena_game();
        let start = game.player().pos;
        add_ground_item(&mut game, ItemKind::HealthPotion, start.offset(1, 1));
        assert_eq!(game.resolve(&Action::Bump { dx: 1, dy: 1 }), Ok(()));
    }

    #[test]
    fn pick_up_moves_item_from_floor_to_inventory() {
        let mut game = arena_game();
        let here = game.player().pos;
        let potion = add_ground_item(&mut game, ItemKind::HealthPotion, here);

        game.resolve(&Action::PickUp).expect("item underfoot");

        assert!(game.ground_item(potion).is_none());
        assert_eq!(game.player().inventory.items().len(), 1);
        assert_eq!(
            game.messages().last().map(|m| m.text.as_str()),
            Some("You picked up the Health Potion!")
        );
    }

    #[test]
    fn pick_up_on_empty_floor_is_impossible() {
        let mut game = arena_game();
        assert_eq!(
            game.resolve(&Action::PickUp),
            Err(ActionError::Impossible("There is nothing here to pick up.".into()))
        );
    }

    #[test]
    fn full_inventory_leaves_item_on_the_floor() {
        let mut game = arena_game_with_capacity(1);
        give_item(&mut game, ItemKind::ConfusionScroll);
        let here = game.player().pos;
        let potion = add_ground_item(&mut game, ItemKind::HealthPotion, here);

        assert_eq!(
            game.resolve(&Action::PickUp),
            Err(ActionError::Impossible("Your inventory is full.".into()))
        );
        assert_eq!(game.ground_item(potion).map(|g| g.pos), Some(here));
        assert_eq!(game.player().inventory.items().len(), 1);
    }

    #[test]
    fn drop_returns_item_to_the_players_cell() {
        let mut game = arena_game();
        give_item(&mut game, ItemKind::FireballScroll);
        let here = game.player().pos;

        game.resolve(&Action::Drop { index: 0 }).expect("valid index");

        assert!(game.player().inventory.items().is_empty());
        let dropped = game.state().item_at(here).and_then(|id| game.ground_item(id));
        assert_eq!(dropped.map(|g| g.item.kind), Some(ItemKind::FireballScroll));
        assert_eq!(
            game.messages().last().map(|m| m.text.as_str()),
            Some("You dropped the Fireball Scroll.")
        );
    }

    #[test]
    fn bad_inventory_index_is_invalid_entry() {
        let mut game = arena_game();
        let expected = Err(ActionError::Impossible("Invalid entry.".into()));
        assert_eq!(game.resolve(&Action::Drop { index: 0 }), expected);
        assert_eq!(game.resolve(&Action::UseItem { index: 3, target: None }), expected);
    }

    #[test]
    fn failed_use_keeps_the_item() {
        let mut game = arena_game();
        give_item(&mut game, ItemKind::HealthPotion);

        assert_eq!(
            game.resolve(&Action::UseItem { index: 0, target: None }),
            Err(ActionError::Impossible("Your health is already full.".into()))
        );
        assert_eq!(game.player().inventory.items().len(), 1);
    }
}
