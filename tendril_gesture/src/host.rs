// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host seam: surface updates and lifecycle callbacks.
//!
//! The session treats the rendered surface as a black box reached through
//! [`GestureHost::apply_style`] — fire-and-forget, no return value consulted.
//! The lifecycle callbacks mirror the same merged style back to the host for
//! state propagation (persisting the final style, driving a declarative
//! tree, etc.). Callback failures are the host's responsibility; the session
//! assumes they do not fail.

use tendril_style::TransformStyle;
use tendril_touch::TouchFrame;

/// Host-side receiver for a session's output.
///
/// All methods default to no-ops, so hosts implement only the surface they
/// have. [`apply_style`](Self::apply_style) is invoked ahead of
/// [`on_change`](Self::on_change) every frame for low-latency visual
/// feedback.
pub trait GestureHost {
    /// Push the merged style to the live surface.
    fn apply_style(&mut self, style: &TransformStyle) {
        let _ = style;
    }

    /// The session was granted the gesture. Carries the style at grant time.
    fn on_start(&mut self, frame: &TouchFrame, style: &TransformStyle) {
        let _ = (frame, style);
    }

    /// A move event was processed. Fires once per move, including
    /// synchronization frames whose style is unchanged.
    fn on_change(&mut self, frame: &TouchFrame, style: &TransformStyle) {
        let _ = (frame, style);
    }

    /// The gesture ended (release or permitted termination). Carries the
    /// final merged style.
    fn on_release(&mut self, frame: &TouchFrame, style: &TransformStyle) {
        let _ = (frame, style);
    }
}

/// A host that discards everything. Useful for tests and headless drivers.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullHost;

impl GestureHost for NullHost {}
