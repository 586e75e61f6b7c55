// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use conposel_points::{PointStore, Side};
use conposel_render::{
    ImageId, ImageRef, Recorder, RenderStyle, SideView, render_detail_view, render_full_view,
};
use conposel_view::{MagnifierMode, ZoomState};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

const IMAGE: Size = Size::new(2048.0, 1536.0);

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/views");
    let style = RenderStyle::default();

    for len in [32usize, 512] {
        let mut store = PointStore::new();
        for i in 0..len {
            let p = Point::new((i * 37 % 2048) as f64, (i * 53 % 1536) as f64);
            if let Ok(id) = store.begin_pair(p) {
                let _ = store.complete_pair(id, p);
            }
        }
        let mut zoom = ZoomState::new(IMAGE, MagnifierMode::FollowPointer);
        zoom.set_factor(4.0);
        zoom.set_focus(Point::new(1024.0, 768.0));
        let view = SideView {
            side: Side::A,
            image: Some(ImageRef {
                id: ImageId(0),
                size: IMAGE,
            }),
            canvas_size: IMAGE,
            store: &store,
            hover: None,
            zoom: &zoom,
        };
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("full", len), &view, |b, view| {
            let mut rec = Recorder::new();
            b.iter(|| {
                rec.clear();
                render_full_view(&mut rec, view, &style);
                black_box(rec.ops().len());
            });
        });

        group.bench_with_input(BenchmarkId::new("detail", len), &view, |b, view| {
            let mut rec = Recorder::new();
            b.iter(|| {
                rec.clear();
                render_detail_view(&mut rec, view, &style);
                black_box(rec.ops().len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_views);
criterion_main!(benches);
