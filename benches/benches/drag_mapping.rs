// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use understory_drag_transform::{DragTransformState, LayoutMetrics, alpha_for, scale_for};
use understory_transition::{Easing, Transition, TransitionTiming};

const SCREEN: Size = Size::new(1080.0, 2340.0);

fn metrics() -> LayoutMetrics {
    LayoutMetrics::new(SCREEN, Rect::new(40.0, 300.0, 400.0, 660.0))
        .unwrap_or_else(|e| panic!("bench layout: {e}"))
}

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_transform/mapping");
    let offsets: Vec<f64> = (0..4_096).map(|i| f64::from(i) * 0.75 - 1_500.0).collect();
    group.throughput(Throughput::Elements(offsets.len() as u64));

    group.bench_function("scale_and_alpha", |b| {
        b.iter(|| {
            for &dy in &offsets {
                black_box(scale_for(black_box(dy), 0.33, SCREEN.height).ok());
                black_box(alpha_for(black_box(dy), SCREEN.height).ok());
            }
        });
    });

    // One sample per pointer move, as the container does while dragging.
    group.bench_function("state_drag_by", |b| {
        let metrics = metrics();
        b.iter(|| {
            let mut state = DragTransformState::new();
            for _ in 0..offsets.len() {
                let _ = state.drag_by(Vec2::new(0.1, 0.75), &metrics);
            }
            black_box(state.current())
        });
    });

    group.finish();
}

fn bench_transition_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition/sample");
    let metrics = metrics();

    for easing in [
        Easing::Linear,
        Easing::Decelerate,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
    ] {
        let timing = TransitionTiming::new(300, easing);
        let transition = Transition::enter(&metrics, timing);
        group.throughput(Throughput::Elements(301));
        group.bench_with_input(
            BenchmarkId::new("enter", format!("{easing:?}")),
            &transition,
            |b, transition| {
                b.iter(|| {
                    for elapsed in 0..=300_u64 {
                        black_box(transition.sample(black_box(elapsed)));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_mapping, bench_transition_sampling);
criterion_main!(benches);
