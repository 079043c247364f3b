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
use ez_core::math::interval::Interval;
use std::hint::black_box;

const SIZES: [i64; 3] = [1_000, 100_000, 1_000_000];

fn bench_forward_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepped_forward");

    for &n in &SIZES {
        for step in [1_i64, 7] {
            let range = Interval::closed_open(0_i64, n).step(step);
            group.throughput(Throughput::Elements(range.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("step_{step}"), n),
                &range,
                |b, range| b.iter(|| black_box(range).iter().fold(0_i64, |acc, v| acc ^ v)),
            );
        }
    }
    group.finish();
}

fn bench_cursor_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepped_cursor");

    for &n in &SIZES {
        let range = Interval::closed(0_i64, n).step(3);
        group.throughput(Throughput::Elements(range.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &range, |b, range| {
            b.iter(|| {
                let end = range.end();
                let mut it = range.begin();
                let mut acc = 0_i64;
                while it != end {
                    acc ^= *it.get();
                    it.inc();
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

fn bench_reverse_steps(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepped_reverse");

    for &n in &SIZES {
        let range = Interval::closed(0_i64, n).reverse();
        group.throughput(Throughput::Elements(range.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &range, |b, range| {
            b.iter(|| black_box(range).iter().fold(0_i64, |acc, v| acc.wrapping_add(v)))
        });
    }
    group.finish();
}

fn bench_arithmetic(c: &mut Criterion) {
    let a = Interval::closed(-2.5_f64, 4.0);
    let b = Interval::open_closed(1.0_f64, 3.0);

    c.bench_function("interval_mul", |bench| {
        bench.iter(|| black_box(a) * black_box(b))
    });
    c.bench_function("interval_div", |bench| {
        bench.iter(|| black_box(a) / black_box(b))
    });
}

criterion_group!(
    benches,
    bench_forward_steps,
    bench_cursor_walk,
    bench_reverse_steps,
    bench_arithmetic
);
criterion_main!(benches);
