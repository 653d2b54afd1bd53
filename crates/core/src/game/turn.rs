//! The turn state machine: player action, enemy phase, visibility refresh.
//! A rejected player action ends the turn early and spends nothing.

use super::*;

impl Game {
    /// Plays one full turn for the player.
    ///
    /// `Ok(Rejected)` leaves the world exactly as it was, apart from the
    /// message log. `Err(SessionOver)` is returned for any call after the
    /// session reached `GameOver` or `Terminated`.
    pub fn play_turn(&mut self, action: Action) -> Result<TurnOutcome, GameError> {
        if matches!(self.phase, TurnPhase::GameOver | TurnPhase::Terminated) {
            return Err(GameError::SessionOver);
        }

        self.phase = TurnPhase::PlayerActing;
        match self.resolve(&action) {
            Ok(()) => {}
            Err(ActionError::Impossible(reason)) => {
                log::debug!("rejected {action:?}: {reason}");
                self.log_message(reason.clone(), Severity::Impossible);
                self.phase = TurnPhase::Idle;
                return Ok(TurnOutcome::Rejected { reason });
            }
            Err(ActionError::Terminated) => {
                log::info!("session terminated on turn {}", self.turn);
                self.phase = TurnPhase::Terminated;
                return Ok(TurnOutcome::Terminated);
            }
            Err(ActionError::Fatal(reason)) => return Err(self.fail(reason)),
        }
        self.turn += 1;
        if !self.player().is_alive() {
            self.phase = TurnPhase::GameOver;
            return Ok(TurnOutcome::GameOver);
        }

        self.phase = TurnPhase::EnemiesActing;
        if let Err(error) = self.run_enemy_turns() {
            let reason = match error {
                ActionError::Fatal(reason) => reason,
                other => other.to_string(),
            };
            return Err(self.fail(reason));
        }
        if !self.player().is_alive() {
            self.phase = TurnPhase::GameOver;
            return Ok(TurnOutcome::GameOver);
        }

        self.phase = TurnPhase::VisibilityRefresh;
        self.refresh_visibility();
        self.phase = TurnPhase::Idle;
        Ok(TurnOutcome::Spent)
    }

    /// Gives every living non-player actor one action, in registration order.
    /// Stops early once the player is dead.
    pub fn run_enemy_turns(&mut self) -> Result<(), ActionError> {
        let player_id = self.state.player_id;
        for id in self.state.living_actor_ids() {
            if id == player_id {
                continue;
            }
            if !self.player().is_alive() {
                break;
            }
            // Killed earlier in this phase by another actor's stumble.
            if !self.state.actors[id].is_alive() {
                continue;
            }
            match self.perform_ai(id) {
                Ok(()) | Err(ActionError::Impossible(_)) => {}
                Err(ActionError::Terminated) => {
                    return Err(ActionError::fatal(format!("actor {id:?} tried to end the session")));
                }
                Err(fatal @ ActionError::Fatal(_)) => return Err(fatal),
            }
        }
        Ok(())
    }

    fn fail(&mut self, reason: String) -> GameError {
        log::error!("fatal error on turn {}: {reason}", self.turn);
        self.phase = TurnPhase::Terminated;
        GameError::Fatal(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn spent_turn_runs_enemies_and_refreshes_view() {
        let mut game = arena_game();
        let here = game.player().pos;
        let troll = add_monster(&mut game, ActorKind::Troll, here.offset(4, 0));

        let outcome = game.play_turn(Action::Bump { dx: 0, dy: -1 }).expect("move");

        assert_eq!(outcome, TurnOutcome::Spent);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.phase(), TurnPhase::Idle);
        assert_ne!(game.actor(troll).map(|a| a.pos), Some(here.offset(4, 0)), "troll advanced");
        assert!(game.is_visible(here.offset(0, -1)));
    }

    #[test]
    fn rejected_action_spends_nothing() {
        let mut game = single_cell_game();
        let before = game.snapshot_hash();

        let outcome = game.play_turn(Action::Move { dx: 1, dy: 0 }).expect("no fatal error");

        assert_eq!(outcome, TurnOutcome::Rejected { reason: "That way is blocked.".into() });
        assert_eq!(game.turn(), 0);
        assert_eq!(game.phase(), TurnPhase::Idle);
        assert_eq!(game.snapshot_hash(), before);
        assert_eq!(game.messages().last().map(|m| m.severity), Some(Severity::Impossible));
    }

    #[test]
    fn rejected_action_does_not_wake_enemies() {
        let mut game = arena_game();
        let here = game.player().pos;
        let troll = add_monster(&mut game, ActorKind::Troll, here.offset(4, 0));
        set_tile(&mut game, here.offset(-1, 0), TileKind::Wall);

        let outcome = game.play_turn(Action::Move { dx: -1, dy: 0 }).expect("no fatal error");

        assert!(matches!(outcome, TurnOutcome::Rejected { .. }));
        assert_eq!(game.actor(troll).map(|a| a.pos), Some(here.offset(4, 0)));
    }

    #[test]
    fn escape_terminates_and_closes_the_session() {
        let mut game = arena_game();
        assert_eq!(game.play_turn(Action::Escape), Ok(TurnOutcome::Terminated));
        assert_eq!(game.phase(), TurnPhase::Terminated);
        assert_eq!(game.play_turn(Action::Wait), Err(GameError::SessionOver));
    }

    #[test]
    fn player_killed_by_enemy_ends_in_game_over() {
        let mut game = arena_game();
        let here = game.player().pos;
        let player = game.player_id();
        let orc = add_monster(&mut game, ActorKind::Orc, here.offset(1, 0));
        add_monster(&mut game, ActorKind::Orc, here.offset(-1, 0));
        set_fighter(&mut game, player, 1, 0, 5);
        set_fighter(&mut game, orc, 10, 0, 3);

        let outcome = game.play_turn(Action::Wait).expect("no fatal error");

        assert_eq!(outcome, TurnOutcome::GameOver);
        assert_eq!(game.phase(), TurnPhase::GameOver);
        assert_eq!(game.messages().count_of("You died!"), 1);
        assert_eq!(
            game.messages().count_of("Orc attacks Player for 3 hit points."),
            1,
            "the second orc never acts on a dead player"
        );
        assert_eq!(game.play_turn(Action::Wait), Err(GameError::SessionOver));
    }

    #[test]
    fn player_killed_by_own_fireball_skips_enemy_phase() {
        let mut game = arena_game();
        let here = game.player().pos;
        let player = game.player_id();
        let troll = add_monster(&mut game, ActorKind::Troll, here.offset(5, 0));
        set_fighter(&mut game, player, 5, 0, 5);
        give_item(&mut game, ItemKind::FireballScroll);

        let outcome = game.play_turn(Action::UseItem { index: 0, target: None }).expect("no fatal error");

        assert_eq!(outcome, TurnOutcome::GameOver);
        assert_eq!(game.actor(troll).map(|a| a.pos), Some(here.offset(5, 0)));
    }
}
