// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::rc::Rc;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use understory_dismiss::{
    Container, ContentLoader, DismissConfig, Host, LaunchParams, PhotoLayer, RenderFrame,
};
use understory_drag_transform::DragDescriptor;
use understory_gesture::pointer::PointerSample;

const SCREEN: Size = Size::new(1080.0, 2340.0);

const CONFIG_JSON: &str = r#"{
    "dismiss_fraction": 0.2,
    "exit": { "duration_ms": 250, "easing": "FastOutSlowIn" },
    "reveal_delay_ms": 80
}"#;

struct NoopLoader;

impl ContentLoader<u32> for NoopLoader {
    fn load(&self, _content: &u32, _thumbnail: Option<&u32>) {}
    fn cancel(&self, _content: &u32) {}
}

#[derive(Debug, Default)]
struct CountingHost {
    frames: usize,
    dismissed: bool,
}

impl Host for CountingHost {
    fn render(&mut self, frame: &RenderFrame) {
        black_box(frame);
        self.frames += 1;
    }
    fn on_dismissed(&mut self) {
        self.dismissed = true;
    }
}

fn viewer(items: u32, config: DismissConfig) -> Container<u32, CountingHost> {
    let loader: Rc<dyn ContentLoader<u32>> = Rc::new(NoopLoader);
    let descriptors = (0..items)
        .map(|i| DragDescriptor::new(Rect::new(40.0, 300.0, 400.0, 660.0), i))
        .collect();
    let launch = LaunchParams::carousel(descriptors, 0)
        .unwrap_or_else(|e| panic!("bench launch: {e}"));
    Container::new(launch, config, CountingHost::default(), move |_, item, config| {
        Box::new(PhotoLayer::new(item, loader.clone(), config.max_zoom))
    })
}

/// Enter, drag past the threshold at 120 Hz, release, and run the exit to completion.
fn session(mut viewer: Container<u32, CountingHost>) -> Container<u32, CountingHost> {
    viewer.layout(SCREEN, 0);
    let mut now = 0;
    while viewer.tick(now) {
        now += 8;
    }
    let mut y = 400.0;
    viewer.handle_pointer(&PointerSample::down(Point::new(540.0, y), now));
    for _ in 0..150 {
        now += 8;
        y += 6.0;
        viewer.handle_pointer(&PointerSample::moved(Point::new(540.0, y), now));
    }
    viewer.handle_pointer(&PointerSample::up(Point::new(540.0, y), now));
    while viewer.tick(now) {
        now += 8;
    }
    viewer
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("dismiss/session");

    group.bench_function("config_from_json", |b| {
        b.iter(|| {
            let config: DismissConfig = serde_json::from_str(black_box(CONFIG_JSON))
                .unwrap_or_else(|e| panic!("invalid config JSON: {e}"));
            black_box(config)
        });
    });

    let config: DismissConfig =
        serde_json::from_str(CONFIG_JSON).unwrap_or_else(|e| panic!("invalid config JSON: {e}"));
    for items in [1_u32, 16] {
        group.bench_function(format!("drag_dismiss/{items}_items"), |b| {
            b.iter_batched(
                || viewer(items, config),
                |viewer| {
                    let viewer = session(viewer);
                    assert!(viewer.host().dismissed, "session should end dismissed");
                    black_box(viewer.host().frames)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_session);
criterion_main!(benches);
