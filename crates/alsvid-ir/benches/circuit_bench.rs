//! Benchmarks for Alsvid circuit operations
//!
//! Run with: cargo bench -p alsvid-ir

use alsvid_ir::{Circuit, QubitId, inverse};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::f64::consts::PI;

/// Benchmark circuit creation
fn bench_circuit_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_creation");

    for num_qubits in &[2, 5, 10, 20, 50] {
        group.bench_with_input(
            BenchmarkId::new("with_size", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| Circuit::with_size(black_box("bench"), black_box(n), black_box(n)));
            },
        );
    }

    group.finish();
}

/// Benchmark adding gates to a circuit
fn bench_gate_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("gate_addition");

    group.bench_function("h_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10, 0);
        b.iter(|| {
            circuit.h(black_box(QubitId(0))).unwrap();
        });
    });

    group.bench_function("rx_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10, 0);
        b.iter(|| {
            circuit
                .rx(black_box(PI / 4.0), black_box(QubitId(0)))
                .unwrap();
        });
    });

    group.bench_function("ccx_gate", |b| {
        let mut circuit = Circuit::with_size("bench", 10, 0);
        b.iter(|| {
            circuit
                .ccx(
                    black_box(QubitId(0)),
                    black_box(QubitId(1)),
                    black_box(QubitId(2)),
                )
                .unwrap();
        });
    });

    group.finish();
}

/// Benchmark inverting GHZ circuits, trailing measurements included
fn bench_ghz_inversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("ghz_inversion");

    for num_qubits in &[3, 5, 10, 20, 50, 100] {
        // GHZ ends in measurements, so every iteration takes the
        // strip-and-retry path.
        let circuit = Circuit::ghz(*num_qubits).unwrap();

        group.bench_with_input(
            BenchmarkId::new("inverse", num_qubits),
            &circuit,
            |b, circuit| {
                b.iter(|| black_box(inverse(circuit).unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark the adjoint of a QFT, all gates parameterized or swaps
fn bench_qft_adjoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("qft_adjoint");

    for num_qubits in &[3, 5, 10, 20] {
        let circuit = Circuit::qft(*num_qubits).unwrap();

        group.bench_with_input(
            BenchmarkId::new("adjoint", num_qubits),
            &circuit,
            |b, circuit| {
                b.iter(|| black_box(circuit.adjoint().unwrap()));
            },
        );
    }

    group.finish();
}

/// Benchmark circuit depth calculation
fn bench_circuit_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("circuit_depth");

    for num_qubits in &[5, 10, 20, 50] {
        let mut circuit = Circuit::with_size("bench", *num_qubits, 0);

        for _layer in 0..5 {
            for i in 0..*num_qubits {
                circuit.h(QubitId(i)).unwrap();
            }
            for i in (0..*num_qubits - 1).step_by(2) {
                circuit.cx(QubitId(i), QubitId(i + 1)).unwrap();
            }
        }

        group.bench_with_input(
            BenchmarkId::new("depth", num_qubits),
            &circuit,
            |b, circuit| {
                b.iter(|| black_box(circuit.depth()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_circuit_creation,
    bench_gate_addition,
    bench_ghz_inversion,
    bench_qft_adjoint,
    bench_circuit_depth,
);

criterion_main!(benches);
