// ─────────────────────────────────────────────────────────────────────
// SCPN Photon Spectrum — Spectrum Table
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Energy ranges of the visible-spectrum colour bands.
//!
//! Bands are stored red first (longest wavelength) and printed in
//! reverse, so violet sits at the top of the table.

use std::fmt;

use photon_types::band::{EnergyRange, WavelengthRange};
use photon_types::config::VISIBLE_BANDS;
use photon_types::error::PhotonResult;

use crate::energy::EnergyConverter;
use crate::format::format_general;

/// Column titles of the rendered table.
const HEADER_NAME: &str = "color";
const HEADER_WAVELENGTH: &str = "wavelength (nm)";
const HEADER_ENERGY: &str = "energy (eV)";

/// The seven visible bands in storage order (red → violet).
pub fn visible_spectrum() -> Vec<WavelengthRange> {
    VISIBLE_BANDS
        .iter()
        .map(|&(name, low_nm, high_nm)| WavelengthRange {
            name: name.to_string(),
            low_nm,
            high_nm,
        })
        .collect()
}

/// Energy range [eV] of every band, SI constants.
pub fn build_energy_table(ranges: &[WavelengthRange]) -> PhotonResult<Vec<EnergyRange>> {
    build_energy_table_with(&EnergyConverter::SI, ranges)
}

/// Energy range [eV] of every band.
///
/// The longer wavelength bound gives the lower energy:
/// `low_ev = E(high_nm)`, `high_ev = E(low_nm)`.
pub fn build_energy_table_with(
    converter: &EnergyConverter,
    ranges: &[WavelengthRange],
) -> PhotonResult<Vec<EnergyRange>> {
    let table = ranges
        .iter()
        .map(|range| -> PhotonResult<EnergyRange> {
            range.validate()?;
            Ok(EnergyRange {
                low_ev: converter.photon_energy_ev_from_nm(range.high_nm)?,
                high_ev: converter.photon_energy_ev_from_nm(range.low_nm)?,
            })
        })
        .collect::<PhotonResult<Vec<_>>>()?;
    log::debug!("Built energy table for {} bands", table.len());
    Ok(table)
}

/// Header line, without trailing newline.
pub fn header() -> String {
    format!("{HEADER_NAME:<10} {HEADER_WAVELENGTH:<12} {HEADER_ENERGY:<9}")
}

/// One table row, without trailing newline.
pub fn format_row(range: &WavelengthRange, energy: &EnergyRange) -> String {
    format!(
        "{:<10}     {:>3}-{:>3}      {:4.2}-{:4.2}",
        range.name,
        format_general(range.low_nm),
        format_general(range.high_nm),
        energy.low_ev,
        energy.high_ev
    )
}

/// Render header, dash rule and one row per band in reverse storage order.
///
/// Both sequences are walked from the end; when their lengths differ the
/// shorter one decides the row count.
pub fn render(ranges: &[WavelengthRange], energies: &[EnergyRange]) -> String {
    if ranges.len() != energies.len() {
        log::warn!(
            "Band/energy length mismatch ({} vs {}), truncating to {}",
            ranges.len(),
            energies.len(),
            ranges.len().min(energies.len())
        );
    }

    let header = header();
    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(header.chars().count()));
    out.push('\n');
    for (range, energy) in ranges.iter().rev().zip(energies.iter().rev()) {
        out.push_str(&format_row(range, energy));
        out.push('\n');
    }
    out
}

/// Bands together with their computed energy ranges.
#[derive(Debug, Clone)]
pub struct SpectrumTable {
    pub ranges: Vec<WavelengthRange>,
    pub energies: Vec<EnergyRange>,
}

impl SpectrumTable {
    /// Visible spectrum with SI constants.
    pub fn visible() -> PhotonResult<Self> {
        Self::from_ranges(visible_spectrum())
    }

    pub fn from_ranges(ranges: Vec<WavelengthRange>) -> PhotonResult<Self> {
        Self::with_converter(&EnergyConverter::SI, ranges)
    }

    pub fn with_converter(
        converter: &EnergyConverter,
        ranges: Vec<WavelengthRange>,
    ) -> PhotonResult<Self> {
        let energies = build_energy_table_with(converter, &ranges)?;
        Ok(SpectrumTable { ranges, energies })
    }

    pub fn len(&self) -> usize {
        self.ranges.len().min(self.energies.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows in print order (reverse of storage).
    pub fn rows(&self) -> impl Iterator<Item = (&WavelengthRange, &EnergyRange)> {
        self.ranges.iter().rev().zip(self.energies.iter().rev())
    }

    /// Band containing `wavelength_nm`, if any. Shared boundaries resolve
    /// to the first band in storage order.
    pub fn band_for_wavelength(&self, wavelength_nm: f64) -> Option<&WavelengthRange> {
        self.ranges.iter().find(|r| r.contains_nm(wavelength_nm))
    }

    pub fn render(&self) -> String {
        render(&self.ranges, &self.energies)
    }
}

impl fmt::Display for SpectrumTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
