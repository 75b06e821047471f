// ─────────────────────────────────────────────────────────────────────
// SCPN Photon Spectrum — Single-Wavelength Calculator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Prompt for a wavelength [nm] and report the photon energy [eV].

use std::io::{BufRead, ErrorKind, Write};

use photon_types::error::{PhotonError, PhotonResult};

use crate::energy::EnergyConverter;
use crate::format::format_general;

/// Console prompt, printed without newline.
pub const PROMPT: &str = "Enter wavelength in nm -> ";

/// Parse free-form numeric text as a wavelength [nm].
pub fn parse_wavelength_nm(text: &str) -> PhotonResult<f64> {
    let trimmed = text.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|e| PhotonError::Parse(format!("'{trimmed}' is not a wavelength: {e}")))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(PhotonError::InvalidWavelength { value });
    }
    Ok(value)
}

/// Write [`PROMPT`], read one line and parse it. No retry on bad input.
pub fn prompt_wavelength_nm<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> PhotonResult<f64> {
    writer.write_all(PROMPT.as_bytes())?;
    writer.flush()?;

    let mut line = String::new();
    match reader.read_line(&mut line) {
        Ok(0) => Err(PhotonError::Parse("no wavelength entered".to_string())),
        Ok(_) => parse_wavelength_nm(&line),
        Err(e) if e.kind() == ErrorKind::InvalidData => Err(PhotonError::Parse(format!(
            "input is not a wavelength: {e}"
        ))),
        Err(e) => Err(e.into()),
    }
}

/// `Photon with wavelength <W> nm has energy <E> eV`, SI constants.
pub fn photon_report(wavelength_nm: f64) -> PhotonResult<String> {
    photon_report_with(&EnergyConverter::SI, wavelength_nm)
}

pub fn photon_report_with(converter: &EnergyConverter, wavelength_nm: f64) -> PhotonResult<String> {
    let energy_ev = converter.photon_energy_ev_from_nm(wavelength_nm)?;
    Ok(format!(
        "Photon with wavelength {} nm has energy {} eV",
        format_general(wavelength_nm),
        format_general(energy_ev)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_accepts_whitespace() {
        assert_eq!(parse_wavelength_nm(" 532\n").unwrap(), 532.0);
        assert_eq!(parse_wavelength_nm("6.328e2").unwrap(), 632.8);
    }

    #[test]
    fn test_parse_rejects_text() {
        assert!(matches!(
            parse_wavelength_nm("green"),
            Err(PhotonError::Parse(_))
        ));
        assert!(matches!(parse_wavelength_nm(""), Err(PhotonError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert!(matches!(
            parse_wavelength_nm("0"),
            Err(PhotonError::InvalidWavelength { .. })
        ));
        assert!(matches!(
            parse_wavelength_nm("-400"),
            Err(PhotonError::InvalidWavelength { .. })
        ));
        assert!(parse_wavelength_nm("inf").is_err());
        assert!(parse_wavelength_nm("NaN").is_err());
    }

    #[test]
    fn test_prompt_reads_one_line() {
        let mut input = Cursor::new("500\n700\n");
        let mut output = Vec::new();
        let nm = prompt_wavelength_nm(&mut input, &mut output).unwrap();
        assert_eq!(nm, 500.0);
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn test_prompt_eof() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert!(matches!(
            prompt_wavelength_nm(&mut input, &mut output),
            Err(PhotonError::Parse(_))
        ));
    }

    #[test]
    fn test_prompt_non_utf8_is_parse_error() {
        let mut input = Cursor::new(vec![0xff, 0xfe, b'\n']);
        let mut output = Vec::new();
        assert!(matches!(
            prompt_wavelength_nm(&mut input, &mut output),
            Err(PhotonError::Parse(_))
        ));
    }

    #[test]
    fn test_report_subnormal_wavelength() {
        match photon_report(1e-320) {
            Err(PhotonError::InvalidWavelength { value }) => assert_eq!(value, 1e-320),
            other => panic!("expected InvalidWavelength, got {other:?}"),
        }
    }

    #[test]
    fn test_report_line() {
        assert_eq!(
            photon_report(500.0).unwrap(),
            "Photon with wavelength 500 nm has energy 2.47968 eV"
        );
        assert!(photon_report(0.0).is_err());
    }
}
