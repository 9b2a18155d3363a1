// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag calculator: total displacement since grant → updated offsets.
//!
//! ## Usage
//!
//! 1) Seed a [`DragTracker`] with the primary touch position at grant.
//! 2) On each same-count move frame, [`DragTracker::advance`] folds the
//!    primary touch movement into the running total; on a touch-count change,
//!    [`DragTracker::rebase`] re-anchors without losing the total.
//! 3) [`compute`] maps the total displacement onto the grant-time style.
//!
//! The calculator always recomputes from the immutable grant-time style and
//! the total displacement, never from the previous frame's output, so
//! per-frame rounding cannot accumulate into drift.

use kurbo::{Point, Size, Vec2};
use tendril_style::{Offset, StyleDelta, TransformStyle};

use crate::config::GestureConfig;
use crate::trace::{Axis, SessionTracer};

/// Accumulates total primary-touch displacement across a session.
///
/// The total survives finger add/remove: a touch-count change re-anchors the
/// tracker ([`rebase`](Self::rebase)) but keeps the displacement gathered so
/// far, so the dragged surface does not snap when a second finger lands or
/// lifts.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragTracker {
    /// Primary-touch position at the last accounted frame.
    last: Option<Point>,
    /// Displacement accumulated since grant.
    total: Vec2,
}

impl DragTracker {
    /// Start tracking from the primary touch at grant (if any).
    pub fn start(pos: Option<Point>) -> Self {
        Self {
            last: pos,
            total: Vec2::ZERO,
        }
    }

    /// Fold one same-count frame's primary-touch movement into the total.
    pub fn advance(&mut self, pos: Option<Point>) {
        if let (Some(last), Some(cur)) = (self.last, pos) {
            self.total += cur - last;
        }
        self.last = pos;
    }

    /// Re-anchor after a touch-count change, keeping the accumulated total.
    pub fn rebase(&mut self, pos: Option<Point>) {
        self.last = pos;
    }

    /// Total displacement since grant.
    pub fn total(&self) -> Vec2 {
        self.total
    }
}

/// Map total displacement since grant onto the grant-time offsets.
///
/// Per axis:
/// - Percent-encoded: `new = initial + axis_delta / dimension * 100 *
///   position_factor`, where `dimension` is the surface width for `left` and
///   height for `top`. Without a usable dimension (no size, zero, or
///   non-finite) the axis is skipped and a [`missing-size`] diagnostic is
///   emitted.
/// - Absolute: `new = initial + axis_delta`. `position_factor` is not
///   applied on absolute axes; the asymmetry is inherited behavior, kept
///   as-is.
///
/// Returns an empty delta when dragging is disabled.
///
/// [`missing-size`]: SessionTracer::missing_size
pub fn compute<T: SessionTracer>(
    initial: &TransformStyle,
    delta: Vec2,
    config: &GestureConfig,
    size: Option<Size>,
    tracer: &mut T,
) -> StyleDelta {
    if !config.draggable() {
        return StyleDelta::default();
    }
    StyleDelta {
        left: axis_offset(
            initial.left,
            delta.x,
            size.map(|s| s.width),
            Axis::Horizontal,
            config.position_factor,
            tracer,
        ),
        top: axis_offset(
            initial.top,
            delta.y,
            size.map(|s| s.height),
            Axis::Vertical,
            config.position_factor,
            tracer,
        ),
        transform: None,
    }
}

fn axis_offset<T: SessionTracer>(
    initial: Offset,
    delta: f64,
    dimension: Option<f64>,
    axis: Axis,
    position_factor: f64,
    tracer: &mut T,
) -> Option<Offset> {
    match initial {
        Offset::Absolute(v) => Some(Offset::Absolute(v + delta)),
        Offset::Percent(p) => match dimension {
            Some(d) if d.is_finite() && d > 0.0 => {
                Some(Offset::Percent(p + delta / d * 100.0 * position_factor))
            }
            _ => {
                tracer.missing_size(axis);
                None
            }
        },
    }
}
