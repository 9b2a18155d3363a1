// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch and twist, with diagnostics.
//!
//! Drives a pinch-out combined with a slow twist across the 0°/360°
//! boundary, lifts one finger mid-gesture, and shows that scale and rotation
//! continue smoothly afterwards. A tracer prints when the angle unwrap
//! engages.
//!
//! Run:
//! - `cargo run -p tendril_demos --example session_pinch`

use kurbo::Point;
use tendril_gesture::{GestureConfig, GestureSession, NullHost, SessionTracer};
use tendril_style::TransformStyle;
use tendril_touch::TouchFrame;

/// Prints the diagnostics a production host might feed into its logger.
#[derive(Default)]
struct PrintingTracer;

impl SessionTracer for PrintingTracer {
    fn grant(&mut self, frame: &TouchFrame, _style: &TransformStyle) {
        println!("  trace: granted with {} touch(es)", frame.len());
    }
    fn angle_unwrapped(&mut self, raw: f64, chosen: f64) {
        println!("  trace: unwrap {raw:.1}° → {chosen:.1}°");
    }
    fn degenerate_geometry(&mut self) {
        println!("  trace: coincident touches, distance ignored this frame");
    }
}

/// Two touches on a circle of radius `r` around `center`, rotated by `deg`.
fn pair(center: Point, r: f64, deg: f64) -> TouchFrame {
    let rad = deg.to_radians();
    let (sin, cos) = rad.sin_cos();
    TouchFrame::from(vec![
        Point::new(center.x - r * cos, center.y - r * sin),
        Point::new(center.x + r * cos, center.y + r * sin),
    ])
}

fn main() {
    let center = Point::new(160.0, 120.0);
    let mut session: GestureSession<NullHost, PrintingTracer> = GestureSession::with_tracer(
        GestureConfig::default(),
        TransformStyle::default(),
        NullHost,
        PrintingTracer,
    );

    println!("== Pinch out while twisting through the wrap boundary ==");
    session.start(&pair(center, 50.0, 170.0));
    let mut deg = 170.0;
    let mut radius = 50.0;
    for _ in 0..8 {
        deg += 30.0; // crosses 360° on the way
        radius += 10.0;
        session.update(&pair(center, radius, deg));
        let style = session.style();
        println!("  scale={:.3} rotation={:.1}°", style.scale(), style.rotation());
    }

    println!("== One finger lifts; the other keeps dragging ==");
    session.update(&TouchFrame::from(vec![Point::new(center.x, center.y)]));
    session.update(&TouchFrame::from(vec![Point::new(center.x + 25.0, center.y)]));
    let style = session.style();
    println!(
        "  left={} top={} scale={:.3} rotation={:.1}°",
        style.left,
        style.top,
        style.scale(),
        style.rotation()
    );

    session.end(&TouchFrame::new());
    println!("released; session active: {}", session.is_active());
}
