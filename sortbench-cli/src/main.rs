use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use sortbench::{
    BenchConfig, BenchRunner, CorpusGenerator, DefaultRngProvider, PerturbationPolicy,
    RngProvider, SortFamily, TsvReport, estimate_circle_area,
};

#[derive(Parser)]
#[command(name = "sortbench")]
#[command(about = "Benchmark adaptive hybrid sorts over generated corpora", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one benchmark sweep and write a tab-separated report
    Run {
        /// Smallest corpus size in the sweep
        #[arg(long, default_value_t = 500)]
        min_size: usize,

        /// Largest corpus size in the sweep (inclusive)
        #[arg(long, default_value_t = 10_000)]
        max_size: usize,

        /// Size increment between rows
        #[arg(long, default_value_t = 100)]
        step: usize,

        /// Insertion-sort cutoff for the hybrid merge sort
        #[arg(long, default_value_t = 15)]
        threshold: usize,

        /// Lower bound of generated values (inclusive)
        #[arg(long, default_value_t = 0)]
        value_min: i32,

        /// Upper bound of generated values (inclusive)
        #[arg(long, default_value_t = 6000)]
        value_max: i32,

        /// Seed for reproducible corpora (entropy-seeded when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Algorithm pair to measure
        #[arg(long, value_enum, default_value = "merge")]
        family: FamilyArg,

        /// Almost-sorted construction rule
        #[arg(long, value_enum, default_value = "transpositions")]
        policy: PolicyArg,

        /// Output file for the report
        #[arg(short, long, default_value = "results.tsv")]
        output: PathBuf,
    },
    /// Estimate a circle's area by Monte-Carlo sampling
    Area {
        /// Circle radius
        #[arg(long, default_value_t = 1.0)]
        radius: f64,

        /// Number of sample points
        #[arg(long, default_value_t = 1_000_000)]
        samples: usize,

        /// Seed for a reproducible estimate
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FamilyArg {
    Merge,
    Quick,
}

impl From<FamilyArg> for SortFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Merge => SortFamily::Merge,
            FamilyArg::Quick => SortFamily::Quick,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Transpositions,
    AdjacentPass,
}

impl From<PolicyArg> for PerturbationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Transpositions => PerturbationPolicy::RandomTranspositions,
            PolicyArg::AdjacentPass => PerturbationPolicy::AdjacentPass,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            min_size,
            max_size,
            step,
            threshold,
            value_min,
            value_max,
            seed,
            family,
            policy,
            output,
        } => {
            let config = BenchConfig {
                min_size,
                max_size,
                step,
                insertion_threshold: threshold,
                value_min,
                value_max,
                seed,
                family: family.into(),
                policy: policy.into(),
            };
            run_sweep(config, &output)
        }
        Commands::Area {
            radius,
            samples,
            seed,
        } => run_area(radius, samples, seed),
    }
}

fn run_sweep(config: BenchConfig, output: &Path) -> Result<()> {
    let runner = BenchRunner::new(config).context("Invalid benchmark configuration")?;
    let rows = runner.config().row_count();

    let mut generator = CorpusGenerator::from_config(runner.config());
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file '{}'", output.display()))?;
    let mut report = TsvReport::new(BufWriter::new(file));

    runner
        .run(&mut generator, &mut report)
        .context("Benchmark sweep failed")?;
    report.into_inner().context("Failed to flush report")?;

    println!(
        "{} {} {} {}",
        "Wrote".green(),
        rows.to_string().bold(),
        "rows to".green(),
        output.display().to_string().cyan()
    );
    if let Some(seed) = runner.config().seed {
        println!("{}", format!("Reproduce with --seed {}", seed).bright_black());
    }
    Ok(())
}

fn run_area(radius: f64, samples: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = DefaultRngProvider.create_rng(seed);
    let estimate = estimate_circle_area(radius, samples, &mut rng)
        .context("Area estimation failed")?;

    println!(
        "{} {}",
        "Estimated area:".green(),
        format!("{:.6}", estimate).bold()
    );
    println!(
        "{}",
        format!("({} samples, radius {})", samples, radius).bright_black()
    );
    Ok(())
}
