// ─────────────────────────────────────────────────────────────────────
// SCPN Photon Spectrum — Photon Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Photon energy conversion and visible-spectrum tables.

pub mod calculator;
pub mod energy;
pub mod format;
pub mod spectrum;
pub mod step;
