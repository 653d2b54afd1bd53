use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::{Action, DungeonConfig, Game, TurnOutcome};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

const DIRECTIONS: [(i32, i32); 8] =
    [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

fn next_action(rng: &mut ChaCha8Rng, game: &Game) -> Action {
    let (dx, dy) = choose(rng, &DIRECTIONS);
    let carried = game.player().inventory.items().len();
    let roll = rng.next_u64() % 100;
    if roll < 10 {
        Action::PickUp
    } else if roll < 15 && carried > 0 {
        Action::Drop { index: rng.next_u64() as usize % carried }
    } else if roll < 25 && carried > 0 {
        let target = game.player().pos.offset(dx * 2, dy * 2);
        Action::UseItem { index: rng.next_u64() as usize % carried, target: Some(target) }
    } else if roll < 30 {
        Action::Wait
    } else {
        Action::Bump { dx, dy }
    }
}

/// Rejected actions don't advance the turn, so cap total attempts.
fn attempt_budget(turns: u32) -> u32 {
    turns.saturating_mul(10)
}

fn check_invariants(game: &Game, explored_before: &[bool]) -> Result<()> {
    let state = game.state();
    if explored_before.iter().zip(state.map.explored()).any(|(was, now)| *was && !*now) {
        bail!("Invariant failed: explored cell reset on turn {}", game.turn());
    }
    for actor in state.actors.values() {
        let fighter = &actor.fighter;
        if fighter.hp() < 0 || fighter.hp() > fighter.max_hp() {
            bail!("Invariant failed: {} has {} / {} HP", actor.name, fighter.hp(), fighter.max_hp());
        }
        if actor.inventory.items().len() > actor.inventory.capacity() {
            bail!("Invariant failed: {} carries more than its capacity", actor.name);
        }
        if actor.is_alive() && !state.map.is_walkable(actor.pos) {
            bail!("Invariant failed: {} inside wall at {:?}", actor.name, actor.pos);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for max {} turns...", args.seed, args.turns);
    let mut game = Game::new(args.seed, DungeonConfig::default())?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut attempts = 0;
    let mut rejected = 0;
    while game.turn() < u64::from(args.turns) && attempts < attempt_budget(args.turns) {
        attempts += 1;
        let explored_before = game.state().map.explored().to_vec();
        let action = next_action(&mut rng, &game);

        match game.play_turn(action)? {
            TurnOutcome::Spent => {}
            TurnOutcome::Rejected { .. } => rejected += 1,
            outcome @ (TurnOutcome::GameOver | TurnOutcome::Terminated) => {
                println!("Finished with outcome {:?} after {} turns", outcome, game.turn());
                check_invariants(&game, &explored_before)?;
                break;
            }
        }
        check_invariants(&game, &explored_before)?;
    }

    println!("Fuzzing completed successfully.");
    println!("Turns: {} ({} rejected attempts)", game.turn(), rejected);
    println!("Snapshot Hash: {}", game.snapshot_hash());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_budget_saturates_for_huge_turn_counts() {
        assert_eq!(attempt_budget(100), 1_000);
        assert_eq!(attempt_budget(u32::MAX / 2), u32::MAX);
    }
}
