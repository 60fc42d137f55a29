use anyhow::Context;
use clap::Parser;
use flightcore::prelude::StateSource;
use generator::synthetic::{GeneratorConfig, SyntheticSource};
use log::{error, info};
use source::{FileSource, OpenSkyClient};
use std::path::PathBuf;
use workflow::config::FetchConfig;
use workflow::runner::{RunOutcome, Runner};

mod generator;
mod source;
mod workflow;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Fetch live OpenSky states and save the flights near a point of interest"
)]
struct Args {
    /// Load settings from YAML instead of the built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Read a saved /states/all response instead of calling the API
    #[arg(long, conflicts_with = "synthetic")]
    input: Option<PathBuf>,
    /// Generate this many seeded random states instead of calling the API
    #[arg(long)]
    synthetic: Option<usize>,
    #[arg(long, default_value_t = 0, requires = "synthetic")]
    seed: u64,
    /// Directory for relative output paths
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn build_source(args: &Args, config: &FetchConfig) -> anyhow::Result<Box<dyn StateSource>> {
    if let Some(path) = &args.input {
        return Ok(Box::new(FileSource::new(path)));
    }
    if let Some(count) = args.synthetic {
        let generator = GeneratorConfig {
            count,
            seed: args.seed,
            ..Default::default()
        };
        return Ok(Box::new(SyntheticSource::new(generator, config.area)));
    }
    let client = OpenSkyClient::new(config).context("building HTTP client")?;
    Ok(Box::new(client))
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => FetchConfig::load(path)?,
        None => FetchConfig::default(),
    };
    if let Some(dir) = &args.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        config = config.with_output_dir(dir);
    }

    let source = build_source(&args, &config)?;
    let runner = Runner::new(config);

    match runner.execute(source.as_ref())? {
        RunOutcome::Empty { metrics } => {
            info!("nothing to save ({})", metrics);
        }
        RunOutcome::Written {
            metrics,
            json_out,
            csv_out,
            nearest,
        } => {
            println!(
                "{} flights nearby ({} in air, {} on ground) -> {}, {}",
                metrics.kept,
                metrics.airborne,
                metrics.on_ground,
                json_out.display(),
                csv_out.display()
            );
            if let Some((icao24, distance)) = nearest {
                println!("nearest: {} at {:.2} km", icao24, distance);
            }
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    run(args).inspect_err(|err| error!("{:#}", err))
}
