// ─────────────────────────────────────────────────────────────────────
// SCPN Photon Spectrum — Spectrum Table Benchmark
// © 1998–2026 Miroslav Šotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────

use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::Array1;
use photon_core::energy::EnergyConverter;
use photon_core::spectrum::{build_energy_table, render, visible_spectrum};
use std::hint::black_box;

fn bench_spectrum_table(c: &mut Criterion) {
    let ranges = visible_spectrum();
    let energies = build_energy_table(&ranges).expect("visible bands are valid");
    let mut group = c.benchmark_group("spectrum_table");

    group.bench_function("build_energy_table", |b| {
        b.iter(|| {
            let table = build_energy_table(black_box(&ranges)).expect("table should build");
            black_box(table[0].low_ev);
        })
    });
    group.bench_function("render", |b| {
        b.iter(|| black_box(render(black_box(&ranges), black_box(&energies)).len()))
    });

    group.finish();
}

fn bench_vectorised_energy(c: &mut Criterion) {
    let converter = EnergyConverter::SI;
    let mut group = c.benchmark_group("photon_energies_ev");

    for &n in &[64usize, 1024, 16384] {
        let wavelengths = Array1::linspace(380.0, 750.0, n);
        let label = format!("{n}_samples");
        group.bench_function(&label, |b| {
            b.iter(|| {
                let ev = converter
                    .photon_energies_ev(&wavelengths)
                    .expect("visible wavelengths are valid");
                black_box(ev[n / 2]);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spectrum_table, bench_vectorised_energy);
criterion_main!(benches);
