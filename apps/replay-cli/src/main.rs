mod script;
mod telemetry;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use domino_backend::{EngineConfig, GameFlowService, GameUpdate};
use tracing::{error, info};

use crate::script::{Replay, Script};

#[derive(Parser)]
#[command(name = "domino-replay")]
#[command(about = "Replay a scripted domino match against the rules engine")]
struct Args {
    /// JSON script: {"seed": n, "steps": [...]}
    script: PathBuf,

    /// Dealing seed; overrides the script and DOMINO_RNG_SEED
    #[arg(long)]
    seed: Option<u64>,

    /// Human-readable logs instead of JSON
    #[arg(long)]
    pretty: bool,

    /// Print every snapshot pushed to the subscription
    #[arg(long)]
    follow: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    telemetry::init_tracing(args.pretty);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!(error = %message, "Replay failed");
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), String> {
    let raw = std::fs::read_to_string(&args.script)
        .map_err(|e| format!("Cannot read {}: {e}", args.script.display()))?;
    let script: Script = serde_json::from_str(&raw)
        .map_err(|e| format!("Invalid script {}: {e}", args.script.display()))?;

    let config = EngineConfig::from_env().map_err(|e| e.to_string())?;
    let seed = args.seed.or(script.seed).or(config.rng_seed);
    let service = GameFlowService::in_memory(config.with_rng_seed(seed));
    info!(seed = ?seed, steps = script.steps.len(), "Replaying script");

    let mut replay = Replay::new(&service);
    let mut subscription = None;
    for (idx, step) in script.steps.iter().enumerate() {
        replay.step(idx + 1, step).map_err(|e| e.to_string())?;

        // Attach once the game exists.
        if args.follow && subscription.is_none() {
            if let Some(game_id) = replay.game_id() {
                let sub = service
                    .subscribe(game_id, print_update)
                    .map_err(|e| e.to_string())?;
                subscription = Some(sub);
            }
        }
    }
    drop(subscription);

    let game_id = replay.game_id().ok_or("Script never created a game")?;
    let final_update = match service.get_game(game_id).map_err(|e| e.to_string())? {
        Some(game) => GameUpdate::Snapshot { game },
        None => GameUpdate::Deleted {
            game_id: game_id.to_string(),
        },
    };
    let json = serde_json::to_string_pretty(&final_update).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn print_update(update: &GameUpdate) {
    match serde_json::to_string(update) {
        Ok(line) => println!("{line}"),
        Err(e) => error!(error = %e, "Cannot encode update"),
    }
}
