// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry over touch frames: first-pair distance and angle.
//!
//! Both functions are deterministic, side-effect free, and read only the
//! first two points of the frame. Frames with fewer than two points yield
//! [`FrameError::TooFewPoints`]; callers in the gesture layer recover by
//! treating the affected computation as a no-op for that frame.

use crate::frame::TouchFrame;

/// A touch frame did not satisfy an operation's shape requirements.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameError {
    /// The frame holds fewer touch points than the operation requires.
    TooFewPoints {
        /// Points the operation needs.
        required: usize,
        /// Points actually present in the frame.
        actual: usize,
    },
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooFewPoints { required, actual } => {
                write!(f, "frame has {actual} touch points, operation needs {required}")
            }
        }
    }
}

impl core::error::Error for FrameError {}

/// Euclidean distance between the first two points of a multi-touch frame.
pub fn distance(frame: &TouchFrame) -> Result<f64, FrameError> {
    let (a, b) = frame.pair().ok_or(FrameError::TooFewPoints {
        required: 2,
        actual: frame.len(),
    })?;
    Ok(a.distance(b))
}

/// Angle of the vector from the first point to the second, in degrees.
///
/// Normalized to `[0, 360)`, measured from the positive x axis toward
/// positive y. With y-down surface coordinates the angle grows clockwise on
/// screen. This is the one angle convention used across the whole system.
pub fn angle(frame: &TouchFrame) -> Result<f64, FrameError> {
    let (a, b) = frame.pair().ok_or(FrameError::TooFewPoints {
        required: 2,
        actual: frame.len(),
    })?;
    // atan2 yields (-180, 180]; shift the negative half up into [0, 360).
    let deg = (b - a).atan2().to_degrees();
    Ok(if deg < 0.0 { deg + 360.0 } else { deg })
}
