//! Melee resolution, damage application and the death transition.

use super::*;

const CORPSE_GLYPH: char = '%';

impl Game {
    /// `attacker` strikes whatever blocks `target_pos`.
    pub(super) fn melee(&mut self, attacker: EntityId, target_pos: Pos) -> Result<(), ActionError> {
        let target = self
            .state
            .blocking_actor_at(target_pos)
            .ok_or_else(|| ActionError::impossible("Nothing to attack."))?;

        let (attacker_name, power, severity) = {
            let actor = self.combatant(attacker)?;
            let severity = if attacker == self.state.player_id {
                Severity::PlayerAttack
            } else {
                Severity::EnemyAttack
            };
            (actor.name.clone(), actor.fighter.power(), severity)
        };
        let (target_name, defense) = {
            let actor = self.combatant(target)?;
            (actor.name.clone(), actor.fighter.defense())
        };

        let damage = power - defense;
        let description = format!("{} attacks {}", capitalize(&attacker_name), target_name);
        if damage > 0 {
            self.log_message(format!("{description} for {damage} hit points."), severity);
            self.take_damage(target, damage);
        } else {
            self.log_message(format!("{description} but does no damage."), severity);
        }
        Ok(())
    }

    fn combatant(&self, id: EntityId) -> Result<&Actor, ActionError> {
        self.state.actors.get(id).ok_or_else(|| ActionError::fatal(format!("unknown actor {id:?}")))
    }

    /// Lowers hit points, clamped at zero. Dead actors are left untouched.
    pub(super) fn take_damage(&mut self, target: EntityId, amount: i32) {
        let Some(actor) = self.state.actors.get_mut(target) else {
            return;
        };
        if !actor.is_alive() {
            return;
        }
        let hp = actor.fighter.hp();
        actor.fighter.set_hp(hp - amount);
        if !actor.is_alive() {
            self.die(target);
        }
    }

    /// Turns a freshly killed actor into an inert corpse. Runs once per actor.
    fn die(&mut self, target: EntityId) {
        let is_player = target == self.state.player_id;
        let actor = &mut self.state.actors[target];
        let text = if is_player { "You died!".to_string() } else { format!("{} is dead!", actor.name) };

        actor.glyph = CORPSE_GLYPH;
        actor.blocks_movement = false;
        actor.ai = None;
        actor.name = format!("remains of {}", actor.name);
        actor.render_order = RenderOrder::Corpse;

        if is_player {
            log::info!("player died on turn {}", self.turn);
            self.phase = TurnPhase::GameOver;
            self.log_message(text, Severity::PlayerDeath);
        } else {
            self.log_message(text, Severity::EnemyDeath);
        }
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
