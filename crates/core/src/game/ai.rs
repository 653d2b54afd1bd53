//! Per-actor decision making for non-player actors.

use super::*;
use crate::random::below;
use crate::state::Ai;

const STUMBLE_DIRECTIONS: [(i32, i32); 8] =
    [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

impl Game {
    /// Lets `id` choose and resolve one action. Actors without AI do nothing.
    pub(super) fn perform_ai(&mut self, id: EntityId) -> Result<(), ActionError> {
        let Some(actor) = self.state.actors.get(id) else {
            return Err(ActionError::fatal(format!("AI turn for unknown actor {id:?}")));
        };
        let confused = match &actor.ai {
            None => return Ok(()),
            Some(ai) => ai.is_confused(),
        };
        if confused { self.perform_confused(id) } else { self.perform_hostile(id) }
    }

    /// Melee when adjacent and seen, otherwise follow a path refreshed while seen.
    /// A path step is spent only by a successful one-cell move; anything else
    /// drops the cached path.
    fn perform_hostile(&mut self, id: EntityId) -> Result<(), ActionError> {
        let target = self.player().pos;
        let pos = self.state.actors[id].pos;
        let seen = self.state.map.is_visible(pos);

        if seen {
            if pos.chebyshev(target) <= 1 {
                return self.perform(id, &Action::Melee { dx: target.x - pos.x, dy: target.y - pos.y });
            }
            // Unreachable targets leave nothing to follow.
            let fresh = find_path(&self.state.map, pos, target).unwrap_or_default();
            self.set_path(id, fresh);
        }

        let next_step = match &self.state.actors[id].ai {
            Some(Ai::Hostile { path }) => path.first().copied(),
            _ => None,
        };
        let Some(step) = next_step else {
            return self.perform(id, &Action::Wait);
        };
        if pos.chebyshev(step) != 1 {
            self.set_path(id, Vec::new());
            return self.perform(id, &Action::Wait);
        }

        let result = self.perform(id, &Action::Move { dx: step.x - pos.x, dy: step.y - pos.y });
        match (&result, &mut self.state.actors[id].ai) {
            (Ok(()), Some(Ai::Hostile { path })) => {
                path.remove(0);
            }
            (Err(_), Some(Ai::Hostile { path })) => path.clear(),
            _ => {}
        }
        result
    }

    fn set_path(&mut self, id: EntityId, fresh: Vec<Pos>) {
        if let Some(Ai::Hostile { path }) = &mut self.state.actors[id].ai {
            *path = fresh;
        }
    }

    /// Stumbles in a random direction. The previous AI comes back once the
    /// counter reaches zero, on the same resolution that spent the last turn.
    fn perform_confused(&mut self, id: EntityId) -> Result<(), ActionError> {
        let (dx, dy) = STUMBLE_DIRECTIONS[below(&mut self.rng, STUMBLE_DIRECTIONS.len() as u32) as usize];

        let expired = match &mut self.state.actors[id].ai {
            Some(Ai::Confused { turns_remaining, .. }) => {
                *turns_remaining = turns_remaining.saturating_sub(1);
                *turns_remaining == 0
            }
            _ => return Err(ActionError::fatal("confused turn for an actor that is not confused")),
        };

        let result = self.perform(id, &Action::Bump { dx, dy });

        if expired {
            self.end_confusion(id);
        }
        result
    }

    fn end_confusion(&mut self, id: EntityId) {
        let actor = &mut self.state.actors[id];
        // The actor may have died from its own stumble; corpses stay inert.
        let Some(Ai::Confused { previous, .. }) = actor.ai.take() else {
            return;
        };
        actor.ai = Some(*previous);
        let name = actor.name.clone();
        log::debug!("{name} recovered from confusion");
        self.log_message(format!("The {name} is no longer confused."), Severity::Info);
    }
}
