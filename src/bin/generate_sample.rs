use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use star_size_predictor::data::loader::encode_dataset;
use star_size_predictor::data::synth::{GroundTruth, Synthesizer};

/// Write a synthetic star dataset (`Brightness,True Size`) as CSV.
#[derive(Debug, Parser)]
#[command(name = "generate_sample", version)]
struct Args {
    /// Number of stars to generate
    #[arg(short, long, default_value_t = 500)]
    count: usize,

    /// Seed for a reproducible dataset
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let synthesizer = Synthesizer::new(GroundTruth::default(), usize::MAX);
    let dataset = synthesizer
        .generate(args.count, args.seed)
        .context("generating dataset")?;
    let csv = encode_dataset(&dataset).context("encoding dataset")?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &csv)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {} stars to {}", dataset.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&csv).context("writing to stdout")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
