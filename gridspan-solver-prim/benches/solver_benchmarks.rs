//! Criterion benchmarks for the Prim solver.
//!
//! Measures spanning-tree construction time across network sizes up to
//! the capacity bound to track the O(V²) growth curve.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package gridspan-solver-prim
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gridspan_core::{SpanRequest, SpanningTreeSolver};
use gridspan_solver_prim::PrimSolver;


use bench_support::{BENCHMARK_SEED, generate_city_network};

/// Network sizes to benchmark, up to the capacity bound.
const NETWORK_SIZES: &[usize] = &[10, 50, 100];

fn bench_span_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("span_time");
    let solver = PrimSolver::new();
    let request = SpanRequest::from_hub();

    for &size in NETWORK_SIZES {
        // Pre-generate the network outside the measurement loop.
        let network = generate_city_network(size, BENCHMARK_SEED);

        #[expect(
            clippy::as_conversions,
            reason = "Safe conversion for small network sizes"
        )]
        let throughput_size = size as u64;
        group.throughput(Throughput::Elements(throughput_size));
        group.bench_with_input(BenchmarkId::new("facilities", size), &size, |b, _| {
            b.iter(|| {
                #[expect(
                    clippy::let_underscore_must_use,
                    reason = "Benchmarking span performance, result is intentionally discarded"
                )]
                let _ = solver.solve(&network, &request);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_span_times);
criterion_main!(benches);
