use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use setacc_bench::{init_logging, run_benchmark, BenchConfig, ExperimentResults};
use tracing::info;

#[derive(Parser)]
#[command(name = "setacc", about = "Benchmark set-accumulator schemes against each other")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark sweep and print a results table.
    Run {
        /// Built-in state-size profile to use when no config file is given.
        #[arg(long, value_enum, default_value_t = Profile::Quick)]
        profile: Profile,

        /// Path to a JSON file overriding the benchmark config.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Optional path to write the full results as JSON.
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Profile {
    Quick,
    Paper,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { profile, config, json } => run(profile, config, json),
    }
}

fn run(profile: Profile, config_path: Option<PathBuf>, json_path: Option<PathBuf>) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening config file {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("parsing config file {}", path.display()))?
        }
        None => match profile {
            Profile::Quick => BenchConfig::quick(),
            Profile::Paper => BenchConfig::paper(),
        },
    };

    info!(state_sizes = ?config.state_sizes, num_runs = config.num_runs, "starting benchmark sweep");
    let results = run_benchmark(&config);
    print_results(&results);

    if let Some(path) = json_path {
        let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(file, &results)?;
        info!(path = %path.display(), "wrote results as JSON");
    }

    Ok(())
}

fn print_results(results: &ExperimentResults) {
    let mut scheme_names: Vec<&String> = results.keys().collect();
    scheme_names.sort();

    for name in scheme_names {
        println!("{name}");
        for cell in &results[name] {
            println!(
                "  n={:<8} create={:>10.2?} update/op={:>10.2?} prove={:>10.2?} verify={:>10.2?} proof={:>8.0}B",
                cell.state_size,
                cell.mean_create_time,
                cell.mean_update_time_per_op,
                cell.mean_prove_time,
                cell.mean_verify_time,
                cell.mean_proof_size,
            );
        }
    }
}
