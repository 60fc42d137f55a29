use anyhow::Context;
use canvas::PlotFrame;
use chrono::Local;
use clap::Parser;
use flightcore::prelude::DEFAULT_DATE_FORMAT;
use flightcore::processing::format_epoch;
use flightcore::Snapshot;
use log::{error, info};
use std::path::{Path, PathBuf};

mod canvas;
mod markers;

#[derive(Parser)]
#[command(author, version, about = "Scatter plot of a saved flight snapshot")]
struct Args {
    /// Snapshot written by the fetcher
    #[arg(long, default_value = "flights.json")]
    input: PathBuf,
    #[arg(long, default_value = "flights.png")]
    output: PathBuf,
}

/// Renders `input` to a PNG at `output`; returns the number of markers drawn.
fn plot(input: &Path, output: &Path, frame: &PlotFrame) -> anyhow::Result<usize> {
    let snapshot = Snapshot::load(input)
        .with_context(|| format!("reading snapshot {}", input.display()))?;
    let title = format_epoch(snapshot.timestamp, DEFAULT_DATE_FORMAT, &Local);
    info!("plotting {} flights observed {}", snapshot.len(), title);

    let markers = markers::build_markers(&snapshot);
    let (image, drawn) = frame.render(&markers);
    if drawn < markers.len() {
        info!("{} flights fall outside the map extent", markers.len() - drawn);
    }

    image
        .save(output)
        .with_context(|| format!("writing plot {}", output.display()))?;
    Ok(drawn)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let drawn = plot(&args.input, &args.output, &PlotFrame::default())
        .inspect_err(|err| error!("{:#}", err))?;
    println!("{} flights plotted -> {}", drawn, args.output.display());
    Ok(())
}
