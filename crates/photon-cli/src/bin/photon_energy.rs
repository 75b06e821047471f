//! Photon energy calculator
//!
//! Converts wavelengths in nanometres to photon energies in electron-volts
//! using `E = h·c/λ`. With no arguments the wavelength is read from stdin.
//!
//! Usage:
//! ```
//! cargo run --bin photon-energy
//! cargo run --bin photon-energy -- 405 532 633
//! ```

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use ndarray::Array1;
use photon_core::calculator::{parse_wavelength_nm, photon_report, prompt_wavelength_nm};
use photon_core::energy::EnergyConverter;
use photon_core::format::format_general;
use photon_core::spectrum::SpectrumTable;

#[derive(Parser, Debug)]
#[command(about = "Photon energy [eV] for a wavelength [nm]")]
struct Args {
    /// Wavelengths in nm; prompts on stdin when omitted
    wavelengths_nm: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging from environment variables
    env_logger::init();

    let args = Args::parse();
    let visible = SpectrumTable::visible()?;

    if args.wavelengths_nm.is_empty() {
        let stdin = std::io::stdin();
        let mut input = stdin.lock();
        let mut stdout = std::io::stdout();
        let wavelength_nm = prompt_wavelength_nm(&mut input, &mut stdout)
            .context("Failed to read wavelength")?;
        println!("{}", photon_report(wavelength_nm)?);
        log_band(&visible, wavelength_nm);
        return Ok(());
    }

    let parsed = args
        .wavelengths_nm
        .iter()
        .map(|text| {
            parse_wavelength_nm(text).with_context(|| format!("Invalid wavelength '{text}'"))
        })
        .collect::<anyhow::Result<Vec<f64>>>()?;
    let wavelengths = Array1::from_vec(parsed);
    debug!("Converting {} wavelengths", wavelengths.len());

    let energies = EnergyConverter::SI.photon_energies_ev(&wavelengths)?;
    for (nm, ev) in wavelengths.iter().zip(energies.iter()) {
        println!(
            "Photon with wavelength {} nm has energy {} eV",
            format_general(*nm),
            format_general(*ev)
        );
        log_band(&visible, *nm);
    }
    Ok(())
}

fn log_band(visible: &SpectrumTable, wavelength_nm: f64) {
    match visible.band_for_wavelength(wavelength_nm) {
        Some(band) => info!("{} nm lies in the {} band", format_general(wavelength_nm), band.name),
        None => info!("{} nm is outside the visible spectrum", format_general(wavelength_nm)),
    }
}
