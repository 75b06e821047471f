// ─────────────────────────────────────────────────────────────────────
// SCPN Photon Spectrum — Bands
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{PhotonError, PhotonResult};

/// Named wavelength interval [nm], e.g. red = 625–750 nm.
/// Invariant: `0 < low_nm < high_nm`, both finite.
#[derive(Debug, Clone, PartialEq)]
pub struct WavelengthRange {
    pub name: String,
    pub low_nm: f64,
    pub high_nm: f64,
}

impl WavelengthRange {
    pub fn new(name: impl Into<String>, low_nm: f64, high_nm: f64) -> PhotonResult<Self> {
        let range = WavelengthRange {
            name: name.into(),
            low_nm,
            high_nm,
        };
        range.validate()?;
        Ok(range)
    }

    /// Check the bound invariant. Fields are public, so ranges built by
    /// struct literal are re-checked before any conversion.
    pub fn validate(&self) -> PhotonResult<()> {
        let (low_nm, high_nm) = (self.low_nm, self.high_nm);
        let message = if !low_nm.is_finite() || !high_nm.is_finite() {
            format!("bounds must be finite, got {low_nm}-{high_nm} nm")
        } else if low_nm <= 0.0 {
            format!("lower bound must be positive, got {low_nm} nm")
        } else if low_nm >= high_nm {
            format!("lower bound {low_nm} nm must be below upper bound {high_nm} nm")
        } else {
            return Ok(());
        };
        Err(PhotonError::InvalidBand {
            name: self.name.clone(),
            message,
        })
    }

    pub fn contains_nm(&self, wavelength_nm: f64) -> bool {
        wavelength_nm >= self.low_nm && wavelength_nm <= self.high_nm
    }
}

/// Photon energy interval [eV] of one band.
///
/// Energy is inversely proportional to wavelength, so `low_ev` belongs to
/// the band's `high_nm` and `high_ev` to its `low_nm`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyRange {
    pub low_ev: f64,
    pub high_ev: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_range() {
        let red = WavelengthRange::new("red", 625.0, 750.0).unwrap();
        assert_eq!(red.name, "red");
        assert!(red.contains_nm(700.0));
        assert!(red.contains_nm(625.0));
        assert!(!red.contains_nm(600.0));
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        let err = WavelengthRange::new("bad", 750.0, 625.0).unwrap_err();
        assert!(matches!(err, PhotonError::InvalidBand { ref name, .. } if name == "bad"));
        assert!(WavelengthRange::new("flat", 500.0, 500.0).is_err());
    }

    #[test]
    fn test_rejects_non_positive_and_non_finite() {
        assert!(WavelengthRange::new("zero", 0.0, 10.0).is_err());
        assert!(WavelengthRange::new("neg", -5.0, 10.0).is_err());
        assert!(WavelengthRange::new("nan", f64::NAN, 10.0).is_err());
        assert!(WavelengthRange::new("inf", 10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_struct_literal() {
        let literal = WavelengthRange {
            name: "hand-built".to_string(),
            low_nm: 450.0,
            high_nm: 380.0,
        };
        assert!(literal.validate().is_err());
    }
}
