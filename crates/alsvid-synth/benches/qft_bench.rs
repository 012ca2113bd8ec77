//! Benchmarks for QFT synthesis
//!
//! Run with: cargo bench -p alsvid-synth

use alsvid_ir::Circuit;
use alsvid_synth::{qft, qft_circuit};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Benchmark building the full QFT circuit from scratch
fn bench_qft_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("qft_circuit");

    for num_qubits in &[2_u32, 5, 10, 20, 50] {
        group.bench_with_input(
            BenchmarkId::new("build", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| qft_circuit(black_box(n)).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark emitting into a pre-allocated circuit
fn bench_qft_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("qft_emit");

    for num_qubits in &[10_u32, 50] {
        group.bench_with_input(
            BenchmarkId::new("emit", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| {
                    let mut circuit = Circuit::with_size("bench", n);
                    qft(&mut circuit, black_box(n)).unwrap();
                    circuit
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_qft_circuit, bench_qft_emit);
criterion_main!(benches);
