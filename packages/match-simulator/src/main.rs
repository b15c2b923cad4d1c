//! Bisca match simulator CLI.
//!
//! Plays one or more matches with random card choices, prints each trick and
//! the outcome, and optionally writes structured results to disk.

mod output;
mod records;
mod render;
mod summary;
mod telemetry;
mod types;

use std::time::Instant;

use bisca_engine::config::seed_from_env;
use bisca_engine::{DomainError, MatchConfig, MatchResult};
use clap::Parser;
use output::OutputWriter;
use records::build_game_record;
use summary::Summary;
use tracing::{debug, error, info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "bisca")]
#[command(about = "Play simulated Bisca matches for 2 or 4 players")]
struct Args {
    /// Player names in seat order (2 or 4); seats 1 and 3 partner seats 2 and 4
    #[arg(default_values = ["Filipe", "Maja"])]
    names: Vec<String>,

    /// Number of matches to play
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Base seed; match N uses seed + N. Falls back to BISCA_SEED
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Directory for structured results; nothing is written without it
    #[arg(long)]
    output_dir: Option<String>,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the results file with gzip
    #[arg(long)]
    compress: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose, args.show_output, args.log_json);

    let start = Instant::now();
    let summary = simulate(&args)?;
    if args.show_output {
        summary.print(start.elapsed());
    }
    Ok(())
}

/// Play every requested match, writing results as configured. The first
/// engine error ends the run.
fn simulate(args: &Args) -> Result<Summary, Box<dyn std::error::Error>> {
    // Validate the table once up front
    MatchConfig::new(args.names.iter().map(String::as_str), None)?;
    let base_seed = match args.seed {
        Some(seed) => Some(seed),
        None => seed_from_env()?,
    };
    info!(games = args.games, players = args.names.len(), ?base_seed, "starting simulation");

    let mut output_writer = args
        .output_dir
        .as_deref()
        .map(|dir| OutputWriter::new(dir, args.output_format, args.compress))
        .transpose()?;

    let mut summary = Summary::default();

    for game_no in 1..=args.games {
        let seed = match base_seed {
            Some(base) => base.wrapping_add(u64::from(game_no)),
            None => rand::random(),
        };
        let game_start = Instant::now();

        let result = run_game(&args.names, seed).inspect_err(|e| {
            error!(game_no, seed, error = %e, "match failed");
        })?;
        let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;

        if args.games > 1 {
            println!("\n=== Match {game_no} (seed {seed}) ===");
        }
        print_match(&result);
        summary.record(&result.outcome);
        debug!(game_no, seed, duration_ms, "match completed");

        if let Some(writer) = output_writer.as_mut() {
            let record = build_game_record(game_no, seed, result, duration_ms);
            if let Err(e) = writer.write_game(record) {
                warn!("Failed to write results for match {}: {}", game_no, e);
            }
        }
    }

    if let Some(writer) = output_writer {
        let (records_path, csv_path) = writer.output_paths();
        let (records_path, csv_path) = (records_path.to_path_buf(), csv_path.to_path_buf());
        writer.finish()?;
        if args.show_output {
            info!("Detailed results written to: {}", records_path.display());
            info!("Summary CSV written to: {}", csv_path.display());
        }
    }

    Ok(summary)
}

/// Engine errors are fatal: a failed match aborts the run.
fn run_game(names: &[String], seed: u64) -> Result<MatchResult, DomainError> {
    let config = MatchConfig::new(names.iter().map(String::as_str), Some(seed))?;
    let mut rng = config.rng();
    config.create_match(&mut rng)?.play(&mut rng)
}

fn print_match(result: &MatchResult) {
    println!("Trump: {}", result.trump);
    for trick in &result.tricks {
        println!();
        for line in render::trick_lines(trick) {
            println!("{line}");
        }
    }
    println!("\n\n{}", render::outcome_line(&result.outcome));
}
