// ─────────────────────────────────────────────────────────────────────
// SCPN Photon Spectrum — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::band::WavelengthRange;
use crate::constants::PhysicalConstants;
use crate::error::{PhotonError, PhotonResult};

/// Visible spectrum bands (name, low nm, high nm), red first.
/// Source: https://en.wikipedia.org/wiki/Visible_spectrum#Spectral_colors
/// Storage order matters: tables are printed in reverse, violet on top.
pub const VISIBLE_BANDS: [(&str, f64, f64); 7] = [
    ("red", 625.0, 750.0),
    ("orange", 590.0, 625.0),
    ("yellow", 565.0, 590.0),
    ("green", 500.0, 565.0),
    ("cyan", 485.0, 500.0),
    ("blue", 450.0, 485.0),
    ("violet", 380.0, 450.0),
];

/// Top-level spectrum configuration.
/// Both keys are optional in JSON; missing keys fall back to SI constants
/// and the visible bands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectrumConfig {
    #[serde(default)]
    pub constants: PhysicalConstants,
    #[serde(default = "default_bands")]
    pub bands: Vec<BandConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandConfig {
    pub name: String,
    /// `[low, high]` in nanometres.
    pub wavelength_nm: [f64; 2],
}

fn default_bands() -> Vec<BandConfig> {
    VISIBLE_BANDS
        .iter()
        .map(|&(name, low, high)| BandConfig {
            name: name.to_string(),
            wavelength_nm: [low, high],
        })
        .collect()
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        SpectrumConfig {
            constants: PhysicalConstants::default(),
            bands: default_bands(),
        }
    }
}

impl SpectrumConfig {
    /// Load from JSON file and validate.
    pub fn from_file(path: &str) -> PhotonResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        log::info!(
            "Loaded spectrum config from {path}: {} bands",
            config.bands.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> PhotonResult<()> {
        self.constants.validate()?;
        if self.bands.is_empty() {
            return Err(PhotonError::ConfigError(
                "at least one band is required".to_string(),
            ));
        }
        self.ranges().map(|_| ())
    }

    /// Bands as validated wavelength ranges, in file order.
    pub fn ranges(&self) -> PhotonResult<Vec<WavelengthRange>> {
        self.bands
            .iter()
            .map(|b| WavelengthRange::new(b.name.clone(), b.wavelength_nm[0], b.wavelength_nm[1]))
            .collect()
    }
}
