// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session basics.
//!
//! This minimal example drives one drag gesture through a session — grant,
//! a few move frames, release — and prints every style the host receives.
//!
//! Run:
//! - `cargo run -p tendril_demos --example session_basics`

use kurbo::Point;
use tendril_gesture::{GestureConfig, GestureHost, GestureSession};
use tendril_style::TransformStyle;
use tendril_touch::TouchFrame;

/// Prints every interaction the session has with the host.
#[derive(Default)]
struct PrintingHost;

impl GestureHost for PrintingHost {
    fn apply_style(&mut self, style: &TransformStyle) {
        println!("  surface   left={} top={}", style.left, style.top);
    }
    fn on_start(&mut self, frame: &TouchFrame, _style: &TransformStyle) {
        println!("  on_start  {} touch(es)", frame.len());
    }
    fn on_change(&mut self, _frame: &TouchFrame, style: &TransformStyle) {
        println!("  on_change left={} top={}", style.left, style.top);
    }
    fn on_release(&mut self, _frame: &TouchFrame, style: &TransformStyle) {
        println!("  on_release left={} top={}", style.left, style.top);
    }
}

fn frame(points: &[(f64, f64)]) -> TouchFrame {
    points.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

fn main() {
    let mut session: GestureSession<PrintingHost> = GestureSession::new(
        GestureConfig::default(),
        TransformStyle::default(),
        PrintingHost,
    );

    println!("== One-finger drag (grant → move × 3 → release) ==");
    session.start(&frame(&[(10.0, 10.0)]));
    for step in 1..=3 {
        let x = 10.0 + 15.0 * step as f64;
        session.update(&frame(&[(x, 10.0)]));
    }
    session.end(&frame(&[(55.0, 10.0)]));

    println!("final style: left={} top={}", session.style().left, session.style().top);
}
