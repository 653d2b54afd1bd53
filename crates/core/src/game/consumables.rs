//! Item effects. Each consumable kind is one arm of `activate`; a failed
//! activation returns `Impossible` and leaves the world untouched.

use super::*;
use crate::state::{Ai, Consumable, Item};

impl Game {
    pub(super) fn activate(&mut self, user: EntityId, item: &Item, target: Pos) -> Result<(), ActionError> {
        match item.consumable {
            Consumable::Healing { amount } => self.heal(user, &item.name, amount),
            Consumable::LightningBolt { damage, maximum_range } => {
                self.lightning(user, damage, maximum_range)
            }
            Consumable::Confusion { number_of_turns } => self.confuse(user, target, number_of_turns),
            Consumable::Fireball { damage, radius } => self.fireball(target, damage, radius),
        }
    }

    fn heal(&mut self, user: EntityId, item_name: &str, amount: i32) -> Result<(), ActionError> {
        let recovered = self.state.actors[user].fighter.heal(amount);
        if recovered <= 0 {
            return Err(ActionError::impossible("Your health is already full."));
        }
        self.log_message(
            format!("You consume the {item_name}, and recover {recovered} HP!"),
            Severity::HealthRecovered,
        );
        Ok(())
    }

    /// Strikes the closest visible living actor within `maximum_range`.
    /// Ties go to the earliest registered actor.
    fn lightning(&mut self, user: EntityId, damage: i32, maximum_range: i32) -> Result<(), ActionError> {
        let origin = self.state.actors[user].pos;
        let reach = (maximum_range + 1) * (maximum_range + 1);

        let mut closest: Option<(EntityId, i32)> = None;
        for (id, actor) in &self.state.actors {
            if id == user || !actor.is_alive() || !self.state.map.is_visible(actor.pos) {
                continue;
            }
            let distance = origin.distance_squared(actor.pos);
            let best = closest.map_or(reach, |(_, best)| best);
            if distance < best {
                closest = Some((id, distance));
            }
        }

        let (target, _) =
            closest.ok_or_else(|| ActionError::impossible("No enemy is close enough to strike."))?;
        let name = self.state.actors[target].name.clone();
        self.log_message(
            format!("A lightning bolt strikes the {name} with a loud thunder, for {damage} damage!"),
            Severity::PlayerAttack,
        );
        self.take_damage(target, damage);
        Ok(())
    }

    fn confuse(&mut self, user: EntityId, target: Pos, turns: u32) -> Result<(), ActionError> {
        if !self.state.map.is_visible(target) {
            return Err(ActionError::impossible("You cannot target an area that you cannot see."));
        }
        let victim = self
            .state
            .living_actor_at(target)
            .ok_or_else(|| ActionError::impossible("You must select an enemy to target."))?;
        if victim == user {
            return Err(ActionError::impossible("You cannot confuse yourself!"));
        }

        let actor = &mut self.state.actors[victim];
        let previous =
            actor.ai.take().ok_or_else(|| ActionError::impossible("You must select an enemy to target."))?;
        actor.ai = Some(Ai::Confused { previous: Box::new(previous), turns_remaining: turns });
        let text = format!("The eyes of the {} look vacant, as it starts to stumble around!", actor.name);
        self.log_message(text, Severity::StatusEffectApplied);
        Ok(())
    }

    /// Burns every living actor within `radius + 1` of `target`, the user included.
    fn fireball(&mut self, target: Pos, damage: i32, radius: i32) -> Result<(), ActionError> {
        if !self.state.map.is_visible(target) {
            return Err(ActionError::impossible("You cannot target an area that you cannot see."));
        }
        let reach = (radius + 1) * (radius + 1);
        let victims: Vec<EntityId> = self
            .state
            .actors
            .iter()
            .filter(|(_, actor)| actor.is_alive() && actor.pos.distance_squared(target) <= reach)
            .map(|(id, _)| id)
            .collect();
        if victims.is_empty() {
            return Err(ActionError::impossible("There are no targets in the radius."));
        }

        for victim in victims {
            let name = self.state.actors[victim].name.clone();
            self.log_message(
                format!("The {name} is engulfed in a fiery explosion, taking {damage} damage!"),
                Severity::PlayerAttack,
            );
            self.take_damage(victim, damage);
        }
        Ok(())
    }
}
