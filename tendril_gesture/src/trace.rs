// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Injectable session diagnostics.
//!
//! The interpreter never logs on its own. Hosts that want visibility inject a
//! [`SessionTracer`]; everyone else gets [`NoTrace`], whose methods compile
//! to nothing. Trace points are the handful of places where the math degrades
//! or corrects itself: session grant, a percent drag without a usable surface
//! size, coincident touch points, and the angle unwrap engaging.

use tendril_style::TransformStyle;
use tendril_touch::TouchFrame;

/// Drag axis identifier carried by diagnostics.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The `left` offset, measured against the surface width.
    Horizontal,
    /// The `top` offset, measured against the surface height.
    Vertical,
}

/// Receiver for session diagnostics.
///
/// Every method has a no-op default, so tracers implement only what they
/// observe. Supply one via
/// [`GestureSession::with_tracer`](crate::session::GestureSession::with_tracer).
pub trait SessionTracer {
    /// A session was granted the gesture.
    fn grant(&mut self, frame: &TouchFrame, style: &TransformStyle) {
        let _ = (frame, style);
    }

    /// A percent-encoded drag axis was skipped because no usable surface
    /// size was available.
    fn missing_size(&mut self, axis: Axis) {
        let _ = axis;
    }

    /// The two touch points coincided at the pinch baseline; the distance
    /// contribution is zero for this frame.
    fn degenerate_geometry(&mut self) {}

    /// The angle unwrap replaced a raw delta with a wrapped candidate, i.e.
    /// the touch pair crossed the 0°/360° boundary.
    fn angle_unwrapped(&mut self, raw: f64, chosen: f64) {
        let _ = (raw, chosen);
    }
}

/// A tracer that ignores everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoTrace;

impl SessionTracer for NoTrace {}
