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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use euler_core::primes::{divisors, factorize, Sieve};
use std::hint::black_box;

fn bench_sieve(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve");
    for limit in [10_000usize, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(limit as u64));
        group.bench_with_input(BenchmarkId::from_parameter(limit), &limit, |b, &limit| {
            b.iter(|| Sieve::below(black_box(limit)).count());
        });
    }
    group.finish();
}

fn bench_factorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorize");
    for n in [600_851_475_143u64, 76_576_500, 9_999_991] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| factorize(black_box(n)));
        });
    }
    group.finish();
}

fn bench_divisors(c: &mut Criterion) {
    c.bench_function("divisors/76576500", |b| {
        b.iter(|| divisors(black_box(76_576_500)));
    });
}

criterion_group!(benches, bench_sieve, bench_factorize, bench_divisors);
criterion_main!(benches);
