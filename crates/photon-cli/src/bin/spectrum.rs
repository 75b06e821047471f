//! Visible spectrum energy table
//!
//! Prints the photon energy range of each colour band, violet on top.
//! An optional JSON config replaces the bands and/or physical constants
//! (see `configs/visible_spectrum.json`).
//!
//! Usage:
//! ```
//! cargo run --bin spectrum
//! cargo run --bin spectrum -- --config configs/visible_spectrum.json
//! ```

use anyhow::Context;
use clap::Parser;
use log::info;
use photon_core::energy::EnergyConverter;
use photon_core::spectrum::SpectrumTable;
use photon_types::config::SpectrumConfig;

#[derive(Parser, Debug)]
#[command(about = "Photon energy ranges of the visible spectrum")]
struct Args {
    /// JSON file with bands and/or physical constants
    #[arg(long)]
    config: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging from environment variables
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SpectrumConfig::from_file(path)
            .with_context(|| format!("Failed to load spectrum config from {path}"))?,
        None => SpectrumConfig::default(),
    };

    let converter = EnergyConverter::new(config.constants)?;
    let table = SpectrumTable::with_converter(&converter, config.ranges()?)?;
    info!("Rendering {} bands", table.len());

    print!("{table}");
    Ok(())
}
