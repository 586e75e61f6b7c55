// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use conposel::{Session, SessionConfig};
use conposel_interaction::{Interaction, InteractionEvent, Surface};
use conposel_points::{PointStore, Side};
use conposel_view::{MagnifierMode, ZoomState};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};

const IMAGE: Size = Size::new(2048.0, 1536.0);
const MOVES: usize = 1_000;

fn path() -> Vec<Point> {
    (0..MOVES)
        .map(|i| {
            let t = i as f64 / MOVES as f64;
            Point::new(t * IMAGE.width, (1.0 - t) * IMAGE.height)
        })
        .collect()
}

fn seeded_store(len: usize) -> PointStore {
    let mut store = PointStore::new();
    store.set_bounds(Side::A, IMAGE);
    store.set_bounds(Side::B, IMAGE);
    for i in 0..len {
        let p = Point::new((i * 37 % 2048) as f64, (i * 53 % 1536) as f64);
        if let Ok(id) = store.begin_pair(p) {
            let _ = store.complete_pair(id, p);
        }
    }
    store
}

fn bench_hover_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer/hover");
    let path = path();
    group.throughput(Throughput::Elements(MOVES as u64));

    for mode in [MagnifierMode::FollowPointer, MagnifierMode::PanRectangle] {
        for len in [32usize, 512] {
            let id = BenchmarkId::new(format!("{mode:?}"), len);
            group.bench_with_input(id, &len, |b, &len| {
                let mut store = seeded_store(len);
                let mut zooms = [ZoomState::new(IMAGE, mode), ZoomState::new(IMAGE, mode)];
                let mut ix = Interaction::default();
                b.iter(|| {
                    for &point in &path {
                        let event = InteractionEvent::PointerMove {
                            side: Side::A,
                            surface: Surface::Full,
                            point,
                        };
                        black_box(ix.handle(event, &mut store, &mut zooms));
                    }
                });
            });
        }
    }

    group.finish();
}

fn bench_session_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointer/session_drag");
    let path = path();
    group.throughput(Throughput::Elements(MOVES as u64));

    group.bench_function("scaled_display", |b| {
        let mut session = Session::<()>::new(SessionConfig::default()).unwrap();
        for side in Side::ALL {
            let ticket = session.begin_load(side);
            session.finish_load(ticket, Ok(((), IMAGE))).unwrap();
            session.set_display_size(
                side,
                Surface::Full,
                Size::new(IMAGE.width / 2.0, IMAGE.height / 2.0),
            );
        }
        session.pointer_down(Side::A, Surface::Full, Point::new(100.0, 100.0));
        session.pointer_up();
        session.pointer_down(Side::B, Surface::Full, Point::new(100.0, 100.0));
        session.pointer_up();

        b.iter(|| {
            session.pointer_down(Side::A, Surface::Full, Point::new(100.0, 100.0));
            for &point in &path {
                let display = Point::new(point.x / 2.0, point.y / 2.0);
                black_box(session.pointer_move(Side::A, Surface::Full, display));
            }
            session.pointer_move(Side::A, Surface::Full, Point::new(100.0, 100.0));
            session.pointer_up();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_hover_moves, bench_session_drag);
criterion_main!(benches);
