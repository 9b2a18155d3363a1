// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture session state machine.
//!
//! ## Overview
//!
//! A [`GestureSession`] is the long-lived interpreter for one gesture
//! surface. It owns the resolved configuration, the host-configured base
//! style, the current merged style, and — while a gesture is in flight — one
//! [`GestureState`]. The host drives it with its event stream:
//!
//! - [`start`](GestureSession::start) on grant (Idle → Active),
//! - [`update`](GestureSession::update) on every move (Active → Active),
//! - [`end`](GestureSession::end) / [`terminate`](GestureSession::terminate)
//!   on release (Active → Ended, the state is discarded).
//!
//! Events arrive synchronously and serially; the session processes each to
//! completion before the next is delivered, and it relies on the host's
//! grant → move × N → release ordering rather than defending against
//! reordering.
//!
//! ## Touch-count changes
//!
//! A move frame whose touch count differs from the session baseline is a
//! synchronization frame: the baseline is re-captured and the calculators are
//! skipped, but the cumulative rotation/distance state and the computed
//! deltas survive, so scale and rotation continue smoothly when a finger
//! lands or lifts. Synchronization frames still fire
//! [`on_change`](crate::host::GestureHost::on_change).
//!
//! ## Arbiter surface
//!
//! The host's gesture arbiter consults
//! [`should_claim`](GestureSession::should_claim),
//! [`should_capture`](GestureSession::should_capture), and
//! [`allows_termination`](GestureSession::allows_termination), all derived
//! from the session's [`GestureConfig`].

use kurbo::{Size, Vec2};
use tendril_style::{StyleDelta, TransformStyle, merge};
use tendril_touch::TouchFrame;

use crate::config::GestureConfig;
use crate::drag::{self, DragTracker};
use crate::host::GestureHost;
use crate::pinch;
use crate::trace::{NoTrace, SessionTracer};

/// Mutable per-gesture state: created at grant, discarded at release.
///
/// Fields are public so transition functions stay auditable and testable;
/// outside of tests the session owns the only live instance.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureState {
    /// Touch baseline; re-captured when the touch count changes.
    pub initial_touches: TouchFrame,
    /// Merged style snapshot at grant time; drags recompute from it.
    pub initial_style: TransformStyle,
    /// Rotation anchor, captured once on the first multi-touch frame and
    /// never re-captured within a session.
    pub initial_angle: Option<f64>,
    /// Cumulative unwrapped rotation; survives touch-count re-baselines.
    pub prev_angle: f64,
    /// Cumulative distance increment; survives touch-count re-baselines.
    pub prev_distance: f64,
    /// Primary-touch displacement accumulator.
    pub drag: DragTracker,
    /// Latest drag output (offsets only).
    pub drag_delta: StyleDelta,
    /// Latest pinch output (transform list only).
    pub pinch_delta: StyleDelta,
}

impl GestureState {
    /// Fresh state for a grant with the given touch frame and style snapshot.
    pub fn new(initial_touches: TouchFrame, initial_style: TransformStyle) -> Self {
        let drag = DragTracker::start(initial_touches.first());
        Self {
            initial_touches,
            initial_style,
            initial_angle: None,
            prev_angle: 0.0,
            prev_distance: 0.0,
            drag,
            drag_delta: StyleDelta::default(),
            pinch_delta: StyleDelta::default(),
        }
    }
}

/// The gesture interpreter for one surface.
///
/// ## Usage
///
/// - Construct with [`GestureSession::new`], or
///   [`GestureSession::with_tracer`] to inject diagnostics.
/// - Feed it the host's grant/move/release events.
/// - Read the merged style back via [`style`](Self::style), the host's
///   [`apply_style`](crate::host::GestureHost::apply_style), or the
///   lifecycle callbacks.
///
/// Exactly one gesture is interpreted at a time; a fresh grant replaces any
/// state left behind by a host that skipped the release event.
pub struct GestureSession<H: GestureHost, T: SessionTracer = NoTrace> {
    config: GestureConfig,
    /// Host-configured style; the merge base for every frame.
    base_style: TransformStyle,
    /// Latest merged style, the single source of truth for the surface.
    style: TransformStyle,
    /// Surface size for percent-encoded drags, if known.
    size: Option<Size>,
    host: H,
    tracer: T,
    /// `Some` while a gesture is in flight (Active); `None` is Idle.
    active: Option<GestureState>,
}

impl<H: GestureHost, T: SessionTracer> core::fmt::Debug for GestureSession<H, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GestureSession")
            .field("config", &self.config)
            .field("style", &self.style)
            .field("size", &self.size)
            .field("active", &self.active.is_some())
            .finish_non_exhaustive()
    }
}

impl<H: GestureHost, T: SessionTracer + Default> GestureSession<H, T> {
    /// Create a session with the given configuration, base style, and host.
    pub fn new(config: GestureConfig, style: TransformStyle, host: H) -> Self {
        Self::with_tracer(config, style, host, T::default())
    }
}

impl<H: GestureHost, T: SessionTracer> GestureSession<H, T> {
    /// Create a session with an explicit tracer.
    pub fn with_tracer(config: GestureConfig, style: TransformStyle, host: H, tracer: T) -> Self {
        Self {
            config,
            base_style: style.clone(),
            style,
            size: None,
            host,
            tracer,
            active: None,
        }
    }

    /// The session configuration (immutable for the session's lifetime).
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// The current merged style.
    pub fn style(&self) -> &TransformStyle {
        &self.style
    }

    /// The in-flight gesture state, if any.
    pub fn state(&self) -> Option<&GestureState> {
        self.active.as_ref()
    }

    /// True while a gesture is in flight.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The host, for reading back recorded output.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The tracer, for reading back recorded diagnostics.
    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    /// Record the measured surface size (layout callback or explicit).
    ///
    /// Percent-encoded drag axes need a size as denominator; without one
    /// they are skipped with a diagnostic.
    pub fn set_size(&mut self, size: Size) {
        self.size = Some(size);
    }

    /// Whether the arbiter should grant this session the gesture.
    pub fn should_claim(&self) -> bool {
        self.config.enabled()
    }

    /// Whether the arbiter should hand over an in-progress movement:
    /// true once the displacement has a non-zero component on both axes.
    pub fn should_capture(&self, delta: Vec2) -> bool {
        delta.x != 0.0 && delta.y != 0.0
    }

    /// Whether the arbiter may preempt an active session.
    pub fn allows_termination(&self) -> bool {
        self.config.allow_termination
    }

    /// Grant: begin a gesture (Idle → Active).
    ///
    /// Refused (no state, no callback) while the session is disabled.
    /// Captures the touch baseline and a snapshot of the current merged
    /// style, and zeroes all cumulative state.
    pub fn start(&mut self, frame: &TouchFrame) {
        if !self.config.enabled() {
            return;
        }
        self.tracer.grant(frame, &self.style);
        self.active = Some(GestureState::new(frame.clone(), self.style.clone()));
        self.host.on_start(frame, &self.style);
    }

    /// Move: process one touch frame (Active → Active).
    ///
    /// No-op while disabled or Idle. A frame whose touch count differs from
    /// the baseline is a synchronization frame (see module docs); any other
    /// frame runs the drag and pinch calculators. Every processed frame
    /// pushes the merged style to the surface and fires
    /// [`on_change`](crate::host::GestureHost::on_change).
    pub fn update(&mut self, frame: &TouchFrame) {
        if !self.config.enabled() {
            return;
        }
        let Some(state) = self.active.as_mut() else {
            return;
        };

        if frame.len() != state.initial_touches.len() {
            // Finger added or removed: re-baseline and skip this frame's
            // math. Cumulative angle/distance state survives.
            state.initial_touches = frame.clone();
            state.drag.rebase(frame.first());
        } else {
            state.drag.advance(frame.first());
            state.drag_delta = drag::compute(
                &state.initial_style,
                state.drag.total(),
                &self.config,
                self.size,
                &mut self.tracer,
            );
            if let Some(pinch_delta) =
                pinch::compute(frame, state, &self.style, &self.config, &mut self.tracer)
            {
                state.pinch_delta = pinch_delta;
            }
        }

        self.style = merge(&self.base_style, &state.drag_delta, &state.pinch_delta);
        self.host.apply_style(&self.style);
        self.host.on_change(frame, &self.style);
    }

    /// Release: finish the gesture (Active → Ended).
    ///
    /// Discards the per-gesture state and fires
    /// [`on_release`](crate::host::GestureHost::on_release) with the final
    /// merged style. No-op while Idle.
    pub fn end(&mut self, frame: &TouchFrame) {
        if self.active.take().is_some() {
            self.host.on_release(frame, &self.style);
        }
    }

    /// Host-initiated preemption.
    ///
    /// When termination is allowed this behaves exactly like
    /// [`end`](Self::end) and returns `true`. Otherwise the session stays
    /// Active and returns `false`, signalling the arbiter to retain the
    /// gesture.
    pub fn terminate(&mut self, frame: &TouchFrame) -> bool {
        if !self.config.allow_termination {
            return false;
        }
        self.end(frame);
        true
    }

    /// Host style change, accepted in any state.
    ///
    /// Replaces the base style, drops any computed deltas, and recomputes
    /// the merged style immediately — the surface reflects the change
    /// without waiting for the next move event.
    pub fn set_style(&mut self, style: TransformStyle) {
        self.base_style = style;
        if let Some(state) = self.active.as_mut() {
            state.drag_delta.clear();
            state.pinch_delta.clear();
        }
        self.style = self.base_style.clone();
        self.host.apply_style(&self.style);
    }
}
