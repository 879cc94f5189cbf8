// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;
use yuletide_almanac::{
    chain::{StageChain, StageChainBuilder},
    mapping::RangeMapping,
};
use yuletide_core::math::interval::Interval;

/// Builds a chain of `num_stages` stages with `mappings_per_stage` disjoint
/// windows each. Destinations are scattered by a seeded RNG so results stay
/// deterministic.
fn build_chain(num_stages: usize, mappings_per_stage: usize) -> StageChain<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut builder = StageChainBuilder::new("c0");
    for k in 0..num_stages {
        let mut cursor = 0i64;
        let mappings = (0..mappings_per_stage)
            .map(|_| {
                let source = cursor + rng.random_range(0..1_000);
                let length = rng.random_range(1..=1_000_000);
                cursor = source + length;
                let destination = rng.random_range(0..1_000_000_000);
                RangeMapping::new(source, destination, length).expect("valid mapping")
            })
            .collect();
        builder.add_stage(&format!("c{k}"), &format!("c{}", k + 1), mappings);
    }
    builder.build().expect("valid chain")
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_resolve");

    for &(stages, mappings) in &[(7usize, 8usize), (7, 64), (16, 256)] {
        let chain = build_chain(stages, mappings);
        let id = format!("{stages}x{mappings}");
        group.throughput(Throughput::Elements(stages as u64));

        group.bench_with_input(BenchmarkId::new("interval", &id), &chain, |b, chain| {
            b.iter(|| chain.resolve(black_box(Interval::new(0, 500_000_000))));
        });

        group.bench_with_input(BenchmarkId::new("point", &id), &chain, |b, chain| {
            b.iter(|| chain.resolve_point(black_box(123_456_789)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
