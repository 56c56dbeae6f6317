// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use understory_gesture::classifier::{GestureClassifier, GestureContext};
use understory_gesture::intercept::InterceptionPolicy;
use understory_gesture::pointer::{PointerPhase, PointerSample};

/// One interaction: a press, `moves` samples along `step`, then a release.
fn interaction(moves: u32, step: Vec2, pinch_every: u32) -> Vec<PointerSample> {
    let start = Point::new(540.0, 900.0);
    let mut samples = Vec::with_capacity(moves as usize + 2);
    samples.push(PointerSample::down(start, 0));
    let mut pos = start;
    for i in 1..=moves {
        pos += step;
        let t = u64::from(i) * 8;
        if pinch_every != 0 && i % pinch_every == 0 {
            samples.push(PointerSample::with_pointers(
                PointerPhase::Move,
                [pos, pos + Vec2::new(200.0, 0.0)],
                t,
            ));
        } else {
            samples.push(PointerSample::moved(pos, t));
        }
    }
    samples.push(PointerSample::up(pos, u64::from(moves + 1) * 8));
    samples
}

fn bench_classifier(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture/classify");

    let cases = [
        ("vertical_drag", interaction(512, Vec2::new(0.0, 2.0), 0)),
        ("pinch_mixed", interaction(512, Vec2::new(0.5, 1.0), 4)),
        ("page_swipe", interaction(512, Vec2::new(-3.0, 0.0), 0)),
    ];

    for (name, samples) in &cases {
        group.throughput(Throughput::Elements(samples.len() as u64));
        group.bench_with_input(BenchmarkId::new("paging", name), samples, |b, samples| {
            // A horizontal swipe already in progress routes page swipes to the pager.
            let ctx = GestureContext {
                translation: Vec2::new(-12.0, 0.0),
                ..GestureContext::default()
            };
            b.iter_batched(
                || GestureClassifier::new(InterceptionPolicy::paging()),
                |mut classifier| {
                    for sample in samples {
                        black_box(classifier.handle(sample, ctx));
                    }
                    classifier
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classifier);
criterion_main!(benches);
