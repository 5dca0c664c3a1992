//! Balance simulator CLI.
//!
//! Auto-plays many sessions to check draw pacing, the money curve and
//! prestige timing.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 100 runs to P1 + 5 wins
//!   cargo run --bin simulate -- -n 20 -w 15    # 20 runs to the exit door
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use royal_flush::simulator::{run_simulation, SimConfig};
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    // Quiet by default; RUST_LOG overrides
    let default_filter = if config.verbosity >= 2 { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              ROYAL FLUSH BALANCE SIMULATOR                    ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Target:         P{} + {} wins", config.target_prestige, config.target_wins);
    println!("  Shopping:       {}", config.buy_upgrades);
    println!("  Max Draws:      {}", config.max_draws_per_run);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, json).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-w" | "--wins" => {
                if i + 1 < args.len() {
                    config.target_wins = args[i + 1].parse().unwrap_or(5);
                    i += 1;
                }
            }
            "-p" | "--prestige" => {
                if i + 1 < args.len() {
                    config.target_prestige = args[i + 1].parse().unwrap_or(1);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-d" | "--draws" => {
                if i + 1 < args.len() {
                    config.max_draws_per_run = args[i + 1].parse().unwrap_or(200_000);
                    i += 1;
                }
            }
            "--no-shop" => {
                config.buy_upgrades = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                config = SimConfig::first_prestige_test();
            }
            "--cycles" => {
                config = SimConfig::prestige_cycle_test(3);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Royal Flush Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulation runs (default: 100)");
    println!("    -p, --prestige <P>  Prestige level to reach (default: 1)");
    println!("    -w, --wins <W>      Flushes to complete after the last prestige (default: 5)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -d, --draws <D>     Max draws per run (default: 200,000)");
    println!("    --no-shop           Never buy upgrades");
    println!("    -v, --verbose       Log every run");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick test (20 runs to the first prestige)");
    println!("    --cycles            Prestige pacing (20 runs to P3)");
    println!("    -h, --help          Show this help");
    println!();
    println!("Set RUST_LOG=debug to trace every command.");
}
