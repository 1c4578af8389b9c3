//! Session simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 1000 runs to level 10
//!   cargo run --bin simulate -- -n 100 -l 5    # 100 runs to level 5
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use questlog::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let (config, json) = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              QUESTLOG SESSION SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Target Level:   {}", config.target_level);
    println!("  Max Turns:      {}", config.max_turns_per_run);
    println!("  Encounters:     {:.0}%", config.encounter_chance * 100.0);
    println!("  Loot Chance:    {:.0}%", config.loot_chance * 100.0);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => {
                log::error!("failed to write {}: {}", filename, e);
                std::process::exit(1);
            }
        }
    }
}

fn parse_args(args: &[String]) -> (SimConfig, bool) {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-l" | "--level" => {
                if i + 1 < args.len() {
                    config.target_level = args[i + 1].parse().unwrap_or(10);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--turns" => {
                if i + 1 < args.len() {
                    config.max_turns_per_run = args[i + 1].parse().unwrap_or(500);
                    i += 1;
                }
            }
            "--encounters" => {
                if i + 1 < args.len() {
                    if let Some(chance) = SimConfig::parse_chance(&args[i + 1]) {
                        config.encounter_chance = chance;
                        i += 1;
                    }
                }
            }
            "--loot" => {
                if i + 1 < args.len() {
                    if let Some(chance) = SimConfig::parse_chance(&args[i + 1]) {
                        config.loot_chance = chance;
                        i += 1;
                    }
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--json" => {
                json = true;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::quick();
            }
            "--marathon" => {
                config = SimConfig::marathon();
            }
            other => {
                log::warn!("ignoring unknown argument {}", other);
            }
        }
        i += 1;
    }

    (config, json)
}

fn print_help() {
    println!("Questlog Session Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of simulated sessions (default: 1000)");
    println!("    -l, --level <L>       Target level (default: 10)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    -t, --turns <T>       Max turns per session (default: 500)");
    println!("    --encounters <P>      Chance per turn of a fight, 0-1 (default: 0.5)");
    println!("    --loot <P>            Chance a won fight drops loot, 0-1 (default: 0.4)");
    println!("    -v, --verbose         Print every run");
    println!("    --json                Save JSON report");
    println!("    --quick               Quick check (100 runs to level 5)");
    println!("    --marathon            Long sessions (50 runs to level 25)");
    println!("    -h, --help            Show this help");
    println!();
    println!("Set RUST_LOG=debug to trace level-ups, quests and unlocks.");
}
