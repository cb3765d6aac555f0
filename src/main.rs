use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;

use freqres::chart;
use freqres::data::loader;
use freqres::gain;

/// Input sweep, by convention in the working directory.
const INPUT_CSV: &str = "scopeMeasure.csv";
/// Rendered chart, written next to the input.
const OUTPUT_PNG: &str = "freqRes.png";

fn main() -> ExitCode {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> anyhow::Result<()> {
    let table = loader::load_csv(Path::new(INPUT_CSV))
        .with_context(|| format!("loading {INPUT_CSV}"))?;
    log::info!("Loaded {} measurements from {INPUT_CSV}", table.len());

    let gains_db = gain::gain_series(&table).context("computing gain series")?;

    chart::render(&table, &gains_db, Path::new(OUTPUT_PNG)).context("rendering chart")?;
    log::info!(
        "Wrote {OUTPUT_PNG} ({}x{} px)",
        chart::IMAGE_WIDTH,
        chart::IMAGE_HEIGHT
    );

    Ok(())
}
