// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session configuration: enabled axes, clamp bounds, sensitivities.
//!
//! A [`GestureConfig`] is resolved once and is immutable for the lifetime of
//! a session. Every recognized option has a documented default, so hosts can
//! build configs with struct-update syntax:
//!
//! ```
//! use tendril_gesture::{GestureAxes, GestureConfig};
//!
//! let drag_only = GestureConfig {
//!     axes: GestureAxes::DRAG,
//!     ..Default::default()
//! };
//! assert!(drag_only.draggable());
//! assert!(!drag_only.scalable());
//! ```

bitflags::bitflags! {
    /// The transform axes a session is allowed to drive.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GestureAxes: u8 {
        /// Translate the surface with a one-finger drag.
        const DRAG   = 0b0000_0001;
        /// Rotate the surface with a two-finger twist.
        const ROTATE = 0b0000_0010;
        /// Scale the surface with a two-finger pinch.
        const SCALE  = 0b0000_0100;
    }
}

impl Default for GestureAxes {
    fn default() -> Self {
        Self::all()
    }
}

/// Immutable per-session configuration.
///
/// Defaults match the conventional free-manipulation surface: every axis
/// enabled, scale clamped to `[0.33, 2.0]`, unit sensitivities, and host
/// preemption allowed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GestureConfig {
    /// Enabled transform axes. Default: all of them.
    pub axes: GestureAxes,
    /// Inclusive lower clamp bound for the output scale. Default `0.33`.
    pub min_scale: f64,
    /// Inclusive upper clamp bound for the output scale. Default `2.0`.
    pub max_scale: f64,
    /// Pinch sensitivity multiplier. Default `1.0`.
    pub scale_factor: f64,
    /// Twist sensitivity multiplier. Default `1.0`.
    pub rotate_factor: f64,
    /// Drag sensitivity multiplier for percent-encoded offsets. Default
    /// `1.0`. Absolute offsets deliberately ignore it (see
    /// [`drag`](crate::drag)).
    pub position_factor: f64,
    /// Whether the host's gesture arbiter may preempt an active session.
    /// Default `true`.
    pub allow_termination: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            axes: GestureAxes::default(),
            min_scale: 0.33,
            max_scale: 2.0,
            scale_factor: 1.0,
            rotate_factor: 1.0,
            position_factor: 1.0,
            allow_termination: true,
        }
    }
}

impl GestureConfig {
    /// True when the drag axis is enabled.
    pub fn draggable(&self) -> bool {
        self.axes.contains(GestureAxes::DRAG)
    }

    /// True when the rotate axis is enabled.
    pub fn rotatable(&self) -> bool {
        self.axes.contains(GestureAxes::ROTATE)
    }

    /// True when the scale axis is enabled.
    pub fn scalable(&self) -> bool {
        self.axes.contains(GestureAxes::SCALE)
    }

    /// True when at least one axis is enabled; a disabled session never
    /// claims a gesture.
    pub fn enabled(&self) -> bool {
        !self.axes.is_empty()
    }
}
