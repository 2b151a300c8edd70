use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

use classic_sort_rs::Algorithm;
use sort_test_tools::patterns;

// The generator writes 1_000 and 10_000 element files, the smaller sizes show the constant
// factors.
const BENCH_SIZES: [usize; 4] = [16, 256, 1_000, 10_000];

fn pin_thread_to_core() {
    // Skip core 0, it services most interrupts.
    let Some(core_ids) = core_affinity::get_core_ids() else {
        return;
    };

    if let Some(core_id) = core_ids.into_iter().nth(1) {
        core_affinity::set_for_current(core_id);
    }
}

fn bench_patterns(c: &mut Criterion) {
    pin_thread_to_core();

    let pattern_providers: [(&str, fn(usize) -> Vec<i32>); 4] = [
        ("random", patterns::random),
        ("random_unique", patterns::random_unique),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
    ];

    for (pattern_name, pattern_provider) in pattern_providers {
        let mut group = c.benchmark_group(pattern_name);

        for len in BENCH_SIZES {
            for algorithm in Algorithm::ALL {
                group.bench_with_input(
                    BenchmarkId::new(algorithm.name(), len),
                    &len,
                    |b, &len| {
                        b.iter_batched_ref(
                            || pattern_provider(len),
                            |v| algorithm.sort(black_box(v.as_mut_slice())),
                            BatchSize::SmallInput,
                        )
                    },
                );
            }
        }

        group.finish();
    }
}

criterion_group!(benches, bench_patterns);
criterion_main!(benches);
