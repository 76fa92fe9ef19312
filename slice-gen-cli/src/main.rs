//! `slice-gen` - writes random substring fixtures for string-search benchmarks.
//!
//! # Usage
//!
//! ```bash
//! # Default fixture set from ./string1000000.txt
//! slice-gen
//!
//! # Reproducible run into ./data, with a manifest of every offset
//! slice-gen --out-dir data --seed 42 --manifest data/fixtures.manifest
//!
//! # Custom lengths
//! slice-gen --slice-lengths 2000,1000 --pattern-lengths 10,20 --count 50
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::info;
use slice_gen_core::fixture::generator::FixtureGenerator;
use slice_gen_core::fixture::manifest::Manifest;
use slice_gen_core::fixture::plan::{
    DEFAULT_PATTERN_COUNT,
    DEFAULT_PATTERN_LENGTHS,
    DEFAULT_SLICE_LENGTHS,
    DEFAULT_SOURCE,
    FixturePlan,
};

/// Cut random slices and pattern files out of one large text file.
#[derive(Parser, Debug)]
#[command(name = "slice-gen", version, about)]
struct Args {
    /// Source text file
    #[arg(long, default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Folder receiving the generated files
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Lengths of the single-slice files (string{L}.txt), comma-separated
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SLICE_LENGTHS)]
    slice_lengths: Vec<usize>,

    /// Lengths of the pattern files (patterns{L}.txt), comma-separated
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_PATTERN_LENGTHS)]
    pattern_lengths: Vec<usize>,

    /// Number of patterns per pattern file
    #[arg(short = 'n', long, default_value_t = DEFAULT_PATTERN_COUNT)]
    count: usize,

    /// Seed for reproducible output (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write a manifest (seed and offsets of every file) to this path
    #[arg(long)]
    manifest: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn plan(&self) -> FixturePlan {
        FixturePlan {
            source: self.source.clone(),
            out_dir: self.out_dir.clone(),
            slice_lengths: self.slice_lengths.clone(),
            pattern_lengths: self.pattern_lengths.clone(),
            pattern_count: self.count,
            seed: self.seed,
        }
    }
}

/// Loads the source once, writes every file in order, then the manifest if asked.
fn run(args: &Args) -> Result<Manifest, Box<dyn std::error::Error>> {
    let plan = args.plan();

    let mut generator = FixtureGenerator::from_plan(&plan)?;
    let manifest = generator.run(&plan)?;

    if let Some(path) = &args.manifest {
        manifest.save(path)?;
        info!("Wrote manifest {}", path.display());
    }

    Ok(manifest)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // RUST_LOG wins over --verbose
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let manifest = run(&args)?;
    info!("Generated {} files (seed {})", manifest.entries.len(), manifest.seed);
    Ok(())
}
