// ─────────────────────────────────────────────────────────────────────
// SCPN Photon Spectrum — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{PhotonError, PhotonResult};

/// Planck constant (J·s) - exact SI value.
pub const H_PLANCK: f64 = 6.62607015e-34;

/// Speed of light in vacuum (m/s) - exact SI value.
pub const C_LIGHT: f64 = 299_792_458.0;

/// Elementary charge (C = A·s) - exact SI value.
pub const Q_ELECTRON: f64 = 1.602176634e-19;

/// Nanometre to metre.
pub const NM_TO_M: f64 = 1e-9;

/// The three constants entering `E = h·c/λ` and the J → eV conversion.
/// Defaults to the SI values above; a config file may override them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    #[serde(default = "default_planck")]
    pub planck: f64,
    #[serde(default = "default_speed_of_light")]
    pub speed_of_light: f64,
    #[serde(default = "default_elementary_charge")]
    pub elementary_charge: f64,
}

fn default_planck() -> f64 {
    H_PLANCK
}
fn default_speed_of_light() -> f64 {
    C_LIGHT
}
fn default_elementary_charge() -> f64 {
    Q_ELECTRON
}

impl PhysicalConstants {
    pub const SI: PhysicalConstants = PhysicalConstants {
        planck: H_PLANCK,
        speed_of_light: C_LIGHT,
        elementary_charge: Q_ELECTRON,
    };

    /// Product `h·c` [J·m].
    pub fn hc(&self) -> f64 {
        self.planck * self.speed_of_light
    }

    pub fn validate(&self) -> PhotonResult<()> {
        let fields = [
            ("planck", self.planck),
            ("speed_of_light", self.speed_of_light),
            ("elementary_charge", self.elementary_charge),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(PhotonError::InvalidConstant { name, value });
            }
        }
        Ok(())
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::SI
    }
}
