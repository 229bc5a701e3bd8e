//! Benchmarks for ansatz construction and statevector energy evaluation
//!
//! Run with: cargo bench -p aavqe-circuit

use aavqe_circuit::{Ansatz, Statevector, evaluate_energy};
use aavqe_model::Hamiltonian;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Benchmark building the layered ansatz topology
fn bench_ansatz_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("ansatz_construction");

    for num_qubits in &[2, 4, 6, 8, 10] {
        group.bench_with_input(
            BenchmarkId::new("layered", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| Ansatz::layered(black_box(n), black_box(2)));
            },
        );
    }

    group.finish();
}

/// Benchmark running the full gate sequence against a fresh statevector
fn bench_statevector_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("statevector_run");

    for num_qubits in &[2, 4, 6, 8] {
        let ansatz = Ansatz::layered(*num_qubits, 2);
        let params = vec![0.005; ansatz.num_parameters()];

        group.bench_with_input(
            BenchmarkId::new("run", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| {
                    let mut state = Statevector::zero(n);
                    state.run(&ansatz, black_box(&params));
                    black_box(state)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the full objective call the optimizer sees
fn bench_energy_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy_evaluation");

    for num_qubits in &[2, 4, 6, 8] {
        let ansatz = Ansatz::layered(*num_qubits, 2);
        let params = vec![0.005; ansatz.num_parameters()];
        let hamiltonian = Hamiltonian::transverse_ising(*num_qubits, 1.0);

        group.bench_with_input(
            BenchmarkId::new("transverse_ising", num_qubits),
            num_qubits,
            |b, _| {
                b.iter(|| {
                    evaluate_energy(
                        black_box(&ansatz),
                        black_box(&params),
                        hamiltonian.matrix(),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_ansatz_construction,
    bench_statevector_run,
    bench_energy_evaluation,
);

criterion_main!(benches);
