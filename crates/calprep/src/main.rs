use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use calprep_core::datasets::{load_all_operator_data, load_joined_data};
use calprep_core::export::write_parquet;
use clap::{Args, Parser, Subcommand};
use polars::prelude::DataFrame;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Join and clean cost-calibration CSV exports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the joined scan-operator dataset of a calibration run
    Joined(DatasetArgs),
    /// Build the general, join, and join-stage operator datasets
    Operators(DatasetArgs),
}

#[derive(Args, Debug)]
struct DatasetArgs {
    /// Directory containing the calibration CSV exports and their sidecars
    run_dir: PathBuf,

    /// Export the resulting dataset(s) as parquet into this directory
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Joined(args) => {
            let joined = load_joined_data(&args.run_dir).with_context(|| {
                format!("failed to build joined data from {}", args.run_dir.display())
            })?;
            info!(
                rows = joined.height(),
                columns = joined.width(),
                "joined dataset built"
            );
            if let Some(out_dir) = args.out_dir {
                export(&out_dir, &[("joined", &joined)])?;
            }
            Ok(())
        }
        Command::Operators(args) => {
            let datasets = load_all_operator_data(&args.run_dir).with_context(|| {
                format!(
                    "failed to build operator datasets from {}",
                    args.run_dir.display()
                )
            })?;
            info!(
                operators = datasets.operators.height(),
                joins = datasets.joins.height(),
                join_stages = datasets.join_stages.height(),
                "operator datasets built"
            );
            if let Some(out_dir) = args.out_dir {
                export(
                    &out_dir,
                    &[
                        ("operators", &datasets.operators),
                        ("joins", &datasets.joins),
                        ("join_stages", &datasets.join_stages),
                    ],
                )?;
            }
            Ok(())
        }
    }
}

fn export(out_dir: &Path, datasets: &[(&str, &DataFrame)]) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for (name, df) in datasets {
        let path = out_dir.join(format!("{name}.parquet"));
        write_parquet(df, &path)
            .with_context(|| format!("failed to export {}", path.display()))?;
        info!(path = %path.display(), rows = df.height(), "dataset exported");
    }
    Ok(())
}
