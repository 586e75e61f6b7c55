// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use conposel_points::{PointStore, Side};
use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size, Vec2};

const IMAGE: Size = Size::new(4096.0, 4096.0);

fn filled_store(len: usize) -> PointStore {
    let mut store = PointStore::new();
    store.set_bounds(Side::A, IMAGE);
    store.set_bounds(Side::B, IMAGE);
    let cols = (len as f64).sqrt().ceil().max(1.0);
    let step = IMAGE.width / cols;
    for i in 0..len {
        let p = Point::new(
            (i as f64 % cols) * step + step / 2.0,
            (i as f64 / cols).floor() * step + step / 2.0,
        );
        let Ok(id) = store.begin_pair(p) else {
            continue;
        };
        let _ = store.complete_pair(id, p + Vec2::new(3.0, -2.0));
    }
    store
}

fn bench_find_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("points/find_nearest");

    // Hit testing is a linear scan; these sizes cover realistic landmark sets
    // and a few orders of magnitude past them.
    for len in [16usize, 128, 1_024, 8_192] {
        let store = filled_store(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("hit", len), &store, |b, store| {
            let target = store.pairs()[len / 2].a + Vec2::new(1.0, 1.0);
            b.iter(|| black_box(store.find_nearest(Side::A, black_box(target), 10.0)));
        });

        group.bench_with_input(BenchmarkId::new("miss", len), &store, |b, store| {
            b.iter(|| {
                black_box(store.find_nearest(Side::B, black_box(Point::new(-50.0, -50.0)), 10.0))
            });
        });
    }

    group.finish();
}

fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("points/pairing");

    for len in [128usize, 1_024] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("begin_complete", len), &len, |b, &len| {
            b.iter_batched(
                PointStore::new,
                |mut store| {
                    for i in 0..len {
                        let p = Point::new(i as f64, i as f64);
                        if let Ok(id) = store.begin_pair(p) {
                            let _ = store.complete_pair(id, p);
                        }
                    }
                    black_box(store);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("delete_front", len), &len, |b, &len| {
            b.iter_batched(
                || filled_store(len),
                |mut store| {
                    while let Some(first) = store.pairs().first().map(|p| p.id) {
                        store.delete_pair(first);
                    }
                    black_box(store);
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_nearest, bench_pairing);
criterion_main!(benches);
