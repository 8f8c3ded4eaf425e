//! Batch projection runner
//!
//! Reads household profiles from a CSV file, projects each one in parallel,
//! and writes a per-profile summary CSV.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use baby_budget::profile::load_profiles;
use baby_budget::ProjectionRunner;

#[derive(Parser, Debug)]
#[command(name = "run_profiles")]
#[command(about = "Run 5-year projections for a batch of household profiles")]
struct Args {
    /// Input CSV of household profiles
    #[arg(short, long, default_value = "data/profiles_sample.csv")]
    input: PathBuf,

    /// Output CSV of per-profile summaries
    #[arg(short, long, default_value = "batch_summary.csv")]
    output: PathBuf,

    /// Reference data directory (defaults to the built-in tables when absent)
    #[arg(short, long)]
    reference: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let runner = match &args.reference {
        Some(path) => ProjectionRunner::from_csv_path(path)
            .with_context(|| format!("loading reference data from {}", path.display()))?,
        None => ProjectionRunner::new(),
    };

    let profiles = load_profiles(&args.input)
        .map_err(|e| anyhow!("reading profiles from {}: {}", args.input.display(), e))?;
    log::info!("loaded {} profiles from {}", profiles.len(), args.input.display());

    let start = std::time::Instant::now();
    let results = runner.run_batch(&profiles);
    log::info!("projected {} profiles in {:?}", results.len(), start.elapsed());

    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    writeln!(
        file,
        "ZipCode,ChildcarePreference,CostBand,ZipFound,TotalCost,EndingSavings,Warnings"
    )?;
    for (profile, result) in profiles.iter().zip(&results) {
        let ending_savings = result
            .yearly_projections
            .last()
            .map(|y| y.ending_savings)
            .unwrap_or(0.0);
        let warning_titles: Vec<&str> =
            result.warnings.iter().map(|w| w.title.as_str()).collect();
        writeln!(
            file,
            "{},{:?},{},{},{:.2},{:.2},\"{}\"",
            profile.zip_code,
            profile.childcare_preference,
            result.assumptions.cost_band.as_str(),
            result.assumptions.zip_code_found,
            result.total_cost,
            ending_savings,
            warning_titles.join("; "),
        )?;
    }

    println!(
        "Projected {} profiles; summary written to {}",
        results.len(),
        args.output.display()
    );
    Ok(())
}
