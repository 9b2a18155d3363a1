// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch frames: the simultaneous contact points reported by one input event.

use alloc::vec::Vec;

use kurbo::Point;

/// An ordered snapshot of the contact points reported by one input event.
///
/// Points are in surface-local coordinates. A frame of length 0 means no
/// active touches, length 1 a single finger, length ≥ 2 a multi-touch frame.
///
/// ## Identity
///
/// Identity is positional: the first two points drive all two-finger math and
/// there is no per-touch id. Sessions detect finger add/remove by comparing
/// frame lengths, not by tracking individual touches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchFrame {
    points: Vec<Point>,
}

impl TouchFrame {
    /// Create an empty frame (no active touches).
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Number of active touch points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the frame carries no touch points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True if the frame carries at least two touch points.
    pub fn is_multi_touch(&self) -> bool {
        self.points.len() >= 2
    }

    /// Append a touch point at the end of the frame.
    pub fn push(&mut self, pt: Point) {
        self.points.push(pt);
    }

    /// The first (primary) touch point, if any.
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// The first two touch points, if the frame is multi-touch.
    pub fn pair(&self) -> Option<(Point, Point)> {
        match self.points.as_slice() {
            [a, b, ..] => Some((*a, *b)),
            _ => None,
        }
    }

    /// All touch points in report order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl From<Vec<Point>> for TouchFrame {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for TouchFrame {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
