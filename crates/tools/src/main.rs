use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use dungeon_core::{Action, DungeonConfig, Game, TurnOutcome};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON action script to play
    #[arg(short = 'a', long)]
    script: PathBuf,
    /// Optional TOML dungeon configuration; defaults apply to missing keys
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Print only the summary, not the message log
    #[arg(short, long)]
    quiet: bool,
}

fn load_config(path: Option<&Path>) -> Result<DungeonConfig> {
    let Some(path) = path else {
        return Ok(DungeonConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: DungeonConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config TOML: {}", path.display()))?;
    config.validate().with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(config)
}

fn load_script(path: &Path) -> Result<Vec<Action>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read script file: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| "Failed to deserialize action script JSON")
}

struct RunSummary {
    played: usize,
    rejected: usize,
    outcome: &'static str,
}

fn play_script(game: &mut Game, script: &[Action]) -> Result<RunSummary> {
    let mut summary = RunSummary { played: 0, rejected: 0, outcome: "script exhausted" };
    for (step, action) in script.iter().enumerate() {
        let outcome = game
            .play_turn(action.clone())
            .with_context(|| format!("Turn failed at script step {step} ({action:?})"))?;
        summary.played += 1;
        match outcome {
            TurnOutcome::Spent => {}
            TurnOutcome::Rejected { reason } => {
                log::debug!("step {step}: {reason}");
                summary.rejected += 1;
            }
            TurnOutcome::GameOver => {
                summary.outcome = "game over";
                break;
            }
            TurnOutcome::Terminated => {
                summary.outcome = "terminated";
                break;
            }
        }
    }
    Ok(summary)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let script = load_script(&args.script)?;
    let mut game = Game::new(args.seed, config).context("Failed to generate dungeon")?;

    let summary = play_script(&mut game, &script)?;

    if !args.quiet {
        for message in game.messages().messages() {
            println!("{}", message.full_text());
        }
        println!();
    }
    let (hp, max_hp) = game.hp_status();
    println!("Script complete.");
    println!("Actions: {} ({} rejected)", summary.played, summary.rejected);
    println!("Turns: {}", game.turn());
    println!("Player HP: {hp}/{max_hp}");
    println!("Outcome: {}", summary.outcome);
    println!("Snapshot Hash: {}", game.snapshot_hash());

    Ok(())
}
