//! farm-run: headless frame runner for bean farm scenarios.
//!
//! Usage:
//!   farm-run run --scenario scenarios/orchard.json --frames 2000 --hold h@120 --hold c@400

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use beanfarm_core::commands::PlayerCommand;
use beanfarm_core::config::ScenarioConfig;
use beanfarm_core::enums::ActorKind;
use beanfarm_core::events::SimEvent;
use beanfarm_sim::SimulationEngine;

const DEFAULT_FRAMES: u64 = 1000;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "farm-run: bean farm scenario runner\n\
         \n\
         Commands:\n\
         \n\
         run       Run a scenario headless and print a summary\n\
         \n\
           --scenario <path>    Scenario JSON file\n\
           --frames <N>         Frames to run (default: 1000)\n\
           --hold <key>@<frame> Hold a key for one frame (repeatable)\n\
         \n\
         Examples:\n\
         \n\
           farm-run run --scenario scenarios/orchard.json\n\
           farm-run run --scenario scenarios/orchard.json --frames 3000 --hold h@10 --hold c@600\n"
    );
}

fn parse_scenario(args: &[String]) -> Option<PathBuf> {
    for i in 0..args.len() {
        if args[i] == "--scenario" && i + 1 < args.len() {
            return Some(PathBuf::from(&args[i + 1]));
        }
    }
    None
}

fn parse_frames(args: &[String]) -> u64 {
    for i in 0..args.len() {
        if args[i] == "--frames" && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u64>() {
                return n;
            }
        }
    }
    DEFAULT_FRAMES
}

/// `--hold h@120` presses `h` before frame 120 and releases it after.
fn parse_holds(args: &[String]) -> Result<Vec<(char, u64)>, String> {
    let mut holds = Vec::new();
    for i in 0..args.len() {
        if args[i] == "--hold" && i + 1 < args.len() {
            let arg = &args[i + 1];
            let (key, frame) = arg
                .split_once('@')
                .ok_or_else(|| format!("expected <key>@<frame>, got {arg:?}"))?;
            let mut chars = key.chars();
            let (Some(key), None) = (chars.next(), chars.next()) else {
                return Err(format!("key must be a single character, got {key:?}"));
            };
            let frame = frame
                .parse::<u64>()
                .map_err(|_| format!("invalid frame number in {arg:?}"))?;
            holds.push((key, frame));
        }
    }
    Ok(holds)
}

fn event_name(event: &SimEvent) -> &'static str {
    match event {
        SimEvent::Spawned { .. } => "spawned",
        SimEvent::Theft { .. } => "theft",
        SimEvent::Uprooted { .. } => "uprooted",
        SimEvent::Refunded { .. } => "refunded",
        SimEvent::Pacified { .. } => "pacified",
        SimEvent::BeeLaunched { .. } => "bee_launched",
        SimEvent::Collision { .. } => "collision",
        SimEvent::Placed { .. } => "placed",
        SimEvent::Removed { .. } => "removed",
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    let path = match parse_scenario(args) {
        Some(path) => path,
        None => {
            eprintln!("Error: --scenario <path> is required");
            process::exit(1);
        }
    };
    let frames = parse_frames(args);
    let holds = match parse_holds(args) {
        Ok(holds) => holds,
        Err(message) => {
            eprintln!("Error: {message}");
            process::exit(1);
        }
    };

    let config = match ScenarioConfig::load(&path) {
        Ok(config) => config,
        Err(err) => {
            error!(path = %path.display(), %err, "scenario_rejected");
            process::exit(1);
        }
    };

    info!(path = %path.display(), frames, "run_started");
    let mut engine = SimulationEngine::from_scenario(&config);
    let mut tally: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut last = None;

    for frame in 1..=frames {
        for &(key, _) in holds.iter().filter(|&&(_, at)| at == frame) {
            engine.queue_command(PlayerCommand::PressKey { key });
        }

        let snapshot = engine.tick();
        for event in &snapshot.events {
            *tally.entry(event_name(event)).or_default() += 1;
        }

        for &(key, _) in holds.iter().filter(|&&(_, at)| at == frame) {
            engine.queue_command(PlayerCommand::ReleaseKey { key });
        }
        last = Some(snapshot);
    }

    let Some(snapshot) = last else {
        println!("No frames run.");
        return;
    };

    println!("Frames:     {}", snapshot.time.tick);
    println!("Coins:      {}", snapshot.coins);
    println!("Food:       {}", snapshot.food);
    println!("Cabbages:   {}", snapshot.cabbages);
    println!("Actors alive at the end:");
    for kind in [
        ActorKind::Magpie,
        ActorKind::Pigeon,
        ActorKind::Eagle,
        ActorKind::GuardBee,
        ActorKind::BeeHive,
        ActorKind::Scarecrow,
        ActorKind::Wanderer,
    ] {
        println!("  {:<10} {}", format!("{kind:?}"), snapshot.count(kind));
    }
    println!("Events:");
    for (name, count) in &tally {
        println!("  {name:<13} {count}");
    }
    info!(frames = snapshot.time.tick, "run_finished");
}
