use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use prism_units::{ReducedKind, UnitConverter, UnitRegistry};
use std::hint::black_box;

fn polyethylene() -> UnitConverter {
    UnitConverter::new(1.0, "nanometer", 14.02, "gram/mole", 2.48, "kilojoule/mole")
        .expect("valid scales")
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    group.bench_function("unit_converter_new", |b| {
        b.iter(|| {
            UnitConverter::new(
                black_box(1.0),
                black_box("nanometer"),
                14.02,
                "gram/mole",
                2.48,
                "kilojoule/mole",
            )
        });
    });

    let ureg = UnitRegistry::global();
    for expr in ["nm", "kilojoule/mole", "J/(K*mol)", "g/cm^3"] {
        group.bench_with_input(BenchmarkId::new("parse_unit", expr), &expr, |b, input| {
            b.iter(|| ureg.parse_unit(black_box(input)));
        });
    }

    group.finish();
}

fn bench_conversions(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversions");
    let uc = polyethylene();

    group.bench_function("to_kelvin_scalar", |b| {
        b.iter(|| uc.to_kelvin(black_box(1.25)));
    });

    for n in [10usize, 1_000, 100_000] {
        let reduced: Vec<f64> = (0..n).map(|i| 0.01 * i as f64).collect();
        group.bench_with_input(BenchmarkId::new("to_inv_angstrom_array", n), &reduced, |b, input| {
            b.iter(|| uc.to_inv_angstrom(black_box(input.clone())));
        });
    }

    let pressure = uc.to_pressure(1.0);
    group.bench_function("to_reduced_pressure", |b| {
        b.iter(|| uc.to_reduced(ReducedKind::Pressure, black_box(&pressure)));
    });

    group.finish();
}

criterion_group!(benches, bench_construction, bench_conversions);
criterion_main!(benches);
