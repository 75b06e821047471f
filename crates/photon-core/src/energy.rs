// ─────────────────────────────────────────────────────────────────────
// SCPN Photon Spectrum — Photon Energy
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Planck relation `E = h·c/λ` and the joule → electron-volt conversion.

use ndarray::Array1;
use photon_types::constants::{PhysicalConstants, NM_TO_M};
use photon_types::error::{PhotonError, PhotonResult};

/// Converter bound to a set of physical constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyConverter {
    pub constants: PhysicalConstants,
}

impl EnergyConverter {
    pub const SI: EnergyConverter = EnergyConverter {
        constants: PhysicalConstants::SI,
    };

    /// Create with custom constants; rejects non-positive values.
    pub fn new(constants: PhysicalConstants) -> PhotonResult<Self> {
        constants.validate()?;
        Ok(EnergyConverter { constants })
    }

    /// Photon energy [J] for a wavelength [m].
    ///
    /// `E = h * c / lambda`. Zero, negative and non-finite wavelengths are
    /// rejected, as is any result that overflows (only reachable with
    /// overridden constants).
    pub fn photon_energy(&self, wavelength_m: f64) -> PhotonResult<f64> {
        if !wavelength_m.is_finite() || wavelength_m <= 0.0 {
            return Err(PhotonError::InvalidWavelength {
                value: wavelength_m,
            });
        }
        let energy = self.constants.hc() / wavelength_m;
        if !energy.is_finite() {
            return Err(PhotonError::InvalidWavelength {
                value: wavelength_m,
            });
        }
        Ok(energy)
    }

    /// Energy [J] → [eV].
    pub fn joules_to_ev(&self, energy_j: f64) -> f64 {
        energy_j / self.constants.elementary_charge
    }

    /// Photon energy [eV] for a wavelength given in nanometres.
    /// Errors carry the nm value, also when the nm → m step underflows to 0.
    pub fn photon_energy_ev_from_nm(&self, wavelength_nm: f64) -> PhotonResult<f64> {
        let energy = self
            .photon_energy(wavelength_nm * NM_TO_M)
            .map_err(|_| PhotonError::InvalidWavelength {
                value: wavelength_nm,
            })?;
        Ok(self.joules_to_ev(energy))
    }

    /// Inverse relation: wavelength [m] of a photon with energy [J].
    pub fn wavelength_from_energy(&self, energy_j: f64) -> PhotonResult<f64> {
        if !energy_j.is_finite() || energy_j <= 0.0 {
            return Err(PhotonError::InvalidEnergy { value: energy_j });
        }
        Ok(self.constants.hc() / energy_j)
    }

    /// Vectorised [`photon_energy_ev_from_nm`](Self::photon_energy_ev_from_nm).
    /// Fails on the first invalid wavelength.
    pub fn photon_energies_ev(&self, wavelengths_nm: &Array1<f64>) -> PhotonResult<Array1<f64>> {
        let energies = wavelengths_nm
            .iter()
            .map(|&nm| self.photon_energy_ev_from_nm(nm))
            .collect::<PhotonResult<Vec<f64>>>()?;
        Ok(Array1::from_vec(energies))
    }
}

impl Default for EnergyConverter {
    fn default() -> Self {
        Self::SI
    }
}

/// Photon energy [J] with SI constants.
pub fn photon_energy(wavelength_m: f64) -> PhotonResult<f64> {
    EnergyConverter::SI.photon_energy(wavelength_m)
}

/// Energy [J] → [eV] with the SI elementary charge.
pub fn joules_to_ev(energy_j: f64) -> f64 {
    EnergyConverter::SI.joules_to_ev(energy_j)
}

/// Photon energy [eV] for a wavelength [nm] with SI constants.
pub fn photon_energy_ev_from_nm(wavelength_nm: f64) -> PhotonResult<f64> {
    EnergyConverter::SI.photon_energy_ev_from_nm(wavelength_nm)
}

/// Wavelength [m] for a photon energy [J] with SI constants.
pub fn wavelength_from_energy(energy_j: f64) -> PhotonResult<f64> {
    EnergyConverter::SI.wavelength_from_energy(energy_j)
}
