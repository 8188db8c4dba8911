//! Headless driver for the avatar animator.
//!
//! Stands in for a render loop: ticks an [`Animator`] at a fixed delta and
//! prints rig snapshots as JSON lines, one per sampled tick.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --action dance --ticks 180 --every 30
//! cargo run --release -- --switch 60:eat --switch 120:sleep --pointer 0.5 -0.2
//! ```

use avatar_animator::{Action, Animator, AnimatorConfig};
use clap::Parser;
use std::path::PathBuf;

/// Avatar animator, headless.
#[derive(Parser)]
#[command(version, about = "Runs the procedural avatar animator and prints the rig as JSON lines.")]
struct Cli {
    /// Action to start with (idle, wave, dance, sit_down, sleep, eat).
    #[arg(long, default_value = "idle")]
    action: String,

    /// Switch action at a tick, as TICK:ACTION. May be repeated.
    #[arg(long, value_name = "TICK:ACTION")]
    switch: Vec<String>,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 120)]
    ticks: u32,

    /// Seconds per tick.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Print every Nth tick (the last tick is always printed).
    #[arg(long, default_value_t = 1)]
    every: u32,

    /// Normalized pointer position held for the whole run.
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pointer: Option<Vec<f32>>,

    /// Seed for blink timing.
    #[arg(long)]
    seed: Option<u64>,

    /// Load tuning from an INI file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective tuning to an INI file and exit.
    #[arg(long, value_name = "PATH")]
    save_config: Option<PathBuf>,
}

fn parse_switch(spec: &str) -> Result<(u32, Action), String> {
    let (tick, action) = spec
        .split_once(':')
        .ok_or_else(|| format!("Invalid switch '{}', expected TICK:ACTION", spec))?;
    let tick = tick
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("Invalid tick in switch '{}': {}", spec, e))?;
    Ok((tick, Action::from_name(action)))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = AnimatorConfig::with_path(path);
            if let Err(e) = config.load_from_file() {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            config
        }
        None => AnimatorConfig::new(),
    };
    if let Some(seed) = cli.seed {
        config.blink_seed = Some(seed);
    }
    config.sanitize();

    if let Some(path) = cli.save_config {
        config.config_path = path;
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Animator config written to {}", config.config_path.display());
        return;
    }

    let mut switches = Vec::with_capacity(cli.switch.len());
    for spec in &cli.switch {
        match parse_switch(spec) {
            Ok(switch) => switches.push(switch),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
    switches.sort_by_key(|(tick, _)| *tick);

    let (pointer_x, pointer_y) = match cli.pointer.as_deref() {
        Some([x, y]) => (*x, *y),
        _ => (0.0, 0.0),
    };
    let every = cli.every.max(1);

    let mut animator = Animator::new(config);
    let mut action = Action::from_name(&cli.action);
    log::info!("Simulating {} ticks of {:.4}s", cli.ticks, cli.dt);

    for tick in 0..cli.ticks {
        if let Some((_, next)) = switches.iter().rev().find(|(at, _)| *at == tick) {
            action = *next;
        }
        let output = animator.step(action, cli.dt, pointer_x, pointer_y);

        if tick % every == 0 || tick + 1 == cli.ticks {
            let line = serde_json::json!({
                "tick": tick,
                "t": animator.elapsed(),
                "action": action,
                "eyelid": animator.eyelid_openness(),
                "output": output,
                "nodes": animator.snapshot(),
            });
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_switch() {
        assert_eq!(parse_switch("60:eat"), Ok((60, Action::Eat)));
        assert_eq!(parse_switch("5:moonwalk"), Ok((5, Action::Idle)));
        assert!(parse_switch("eat").is_err());
        assert!(parse_switch("x:eat").is_err());
    }

    #[test]
    fn test_cli_parses_pointer() {
        let cli = Cli::try_parse_from(["avatar-animator", "--pointer", "0.5", "-0.25"]).unwrap();
        assert_eq!(cli.pointer, Some(vec![0.5, -0.25]));
    }
}
