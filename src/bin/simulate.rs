//! Arena balance simulator CLI.
//!
//! Run Monte Carlo simulations of battle sequences to analyze balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                          # Default: 1000 runs, no gear
//!   cargo run --bin simulate -- -n 100 --buy Hacha    # 100 runs with an axe
//!   cargo run --bin simulate -- --seed 42             # Reproducible run

use arena::session::ResultLog;
use arena::simulator::{run_simulation, SimConfig, SimReport, SIM_PLAYER_NAME};
use arena::ResultLogError;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              ARENA BALANCE SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!(
        "  Build:          atk {} / def {} / life {}",
        config.base_attack, config.base_defense, config.life
    );
    if config.loadout.is_empty() {
        println!("  Loadout:        (none)");
    } else {
        println!("  Loadout:        {}", config.loadout.join(", "));
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    if config.verbosity > 0 {
        println!("{}", report.to_text());
    }

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => {
                eprintln!("Failed to write JSON report: {}", err);
                std::process::exit(1);
            }
        }
    }

    if args.iter().any(|a| a == "--save") {
        match save_results(&report) {
            Ok(path) => println!("Results appended to: {}", path.display()),
            Err(err) => {
                eprintln!("Failed to save results: {}", err);
                std::process::exit(1);
            }
        }
    }
}

/// Appends every run to the shared result log.
fn save_results(report: &SimReport) -> Result<PathBuf, ResultLogError> {
    let path = ResultLog::default_path()?;
    let mut log = ResultLog::load(&path)?;
    report.append_to(&mut log, SIM_PLAYER_NAME);
    log.save(&path)?;
    Ok(path)
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();
    let mut loadout = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--buy" => {
                if i + 1 < args.len() {
                    loadout.push(args[i + 1].clone());
                    i += 1;
                }
            }
            "--attack" => {
                if i + 1 < args.len() {
                    config.base_attack = args[i + 1].parse().unwrap_or(config.base_attack);
                    i += 1;
                }
            }
            "--defense" => {
                if i + 1 < args.len() {
                    config.base_defense = args[i + 1].parse().unwrap_or(config.base_defense);
                    i += 1;
                }
            }
            "--life" => {
                if i + 1 < args.len() {
                    config.life = args[i + 1].parse().unwrap_or(config.life);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "--starter" => {
                config = SimConfig::starter_kit();
            }
            "--full" => {
                config = SimConfig::full_kit();
            }
            "--tank" => {
                config = SimConfig::tank(config.num_runs);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    if !loadout.is_empty() {
        config.loadout = loadout;
    }
    config
}

fn print_help() {
    println!("Arena Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulated sequences (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    --buy <NAME>        Buy a catalog item before fighting (repeatable)");
    println!("    --attack <A>        Base attack (default: 10)");
    println!("    --defense <D>       Base defense (default: 0)");
    println!("    --life <L>          Starting and maximum life (default: 100)");
    println!("    --starter           Preset: basic sword and two potions");
    println!("    --full              Preset: axe, ancient shield and a revive");
    println!("    --tank              Preset: all creation points in defense");
    println!("    -v, --verbose       Print every run");
    println!("    -q, --quiet         Skip the text report");
    println!("    --json              Save JSON report");
    println!("    --save              Append each run to the result log");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate -- --buy Revivir --buy Hacha");
    println!("    cargo run --bin simulate -- --attack 0 --defense 10 --seed 42");
    println!("    cargo run --bin simulate -- --full -n 200 --json");
}
