// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use tendril_gesture::{GestureConfig, GestureSession, NullHost};
use tendril_style::TransformStyle;
use tendril_touch::TouchFrame;

/// Synthetic one-finger drag: a straight sweep of `n` move frames.
fn gen_drag_frames(n: usize) -> Vec<TouchFrame> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64;
        out.push(TouchFrame::from(vec![Point::new(10.0 + t, 10.0 + t * 0.5)]));
    }
    out
}

/// Synthetic two-finger gesture: pinch out while rotating a full turn.
fn gen_pinch_frames(n: usize) -> Vec<TouchFrame> {
    let center = Point::new(160.0, 120.0);
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let t = i as f64 / n as f64;
        let radius = 40.0 + 80.0 * t;
        let rad = (360.0 * t).to_radians();
        let (sin, cos) = rad.sin_cos();
        out.push(TouchFrame::from(vec![
            Point::new(center.x - radius * cos, center.y - radius * sin),
            Point::new(center.x + radius * cos, center.y + radius * sin),
        ]));
    }
    out
}

fn run_session(grant: &TouchFrame, frames: &[TouchFrame]) -> TransformStyle {
    let mut session: GestureSession<NullHost> = GestureSession::new(
        GestureConfig::default(),
        TransformStyle::default(),
        NullHost,
    );
    session.start(grant);
    for frame in frames {
        session.update(frame);
    }
    let style = session.style().clone();
    session.end(frames.last().unwrap_or(grant));
    style
}

fn bench_sessions(c: &mut Criterion) {
    const FRAMES: usize = 1024;

    let mut group = c.benchmark_group("session");
    group.throughput(Throughput::Elements(FRAMES as u64));

    let drag = gen_drag_frames(FRAMES);
    group.bench_function("drag_1k_frames", |b| {
        b.iter_batched(
            || drag.clone(),
            |frames| black_box(run_session(&frames[0], &frames)),
            BatchSize::SmallInput,
        );
    });

    let pinch = gen_pinch_frames(FRAMES);
    group.bench_function("pinch_rotate_1k_frames", |b| {
        b.iter_batched(
            || pinch.clone(),
            |frames| black_box(run_session(&frames[0], &frames)),
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_sessions);
criterion_main!(benches);
