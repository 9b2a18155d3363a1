// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tendril_gesture --heading-base-level=0

//! Tendril Gesture: a session-scoped multi-touch gesture interpreter.
//!
//! ## Overview
//!
//! This crate turns a stream of raw [`TouchFrame`](tendril_touch::TouchFrame)
//! snapshots into incremental visual-transform deltas — translation, scale,
//! rotation — applied to a rectangular surface. It does not perform gesture
//! recognition beyond drag and pinch/rotate, and it does not render: the host
//! owns the UI tree, reports touch events, and receives merged
//! [`TransformStyle`](tendril_style::TransformStyle)s back through a narrow
//! [`GestureHost`] seam.
//!
//! The hard part lives in [`session`]: tracking a gesture from first contact
//! to release, surviving touch-count changes mid-gesture without losing
//! cumulative rotation/scale state, unwrapping angular discontinuities at the
//! 0°/360° boundary, and producing numerically stable, clamped output every
//! frame.
//!
//! ## Workflow
//!
//! 1) Build a [`GestureConfig`] (axes, clamp bounds, sensitivities) and a
//!    [`GestureSession`] around the host's base style.
//! 2) Drive the session with the host's event stream:
//!    [`start`](session::GestureSession::start) on grant,
//!    [`update`](session::GestureSession::update) on every move,
//!    [`end`](session::GestureSession::end) (or
//!    [`terminate`](session::GestureSession::terminate)) on release.
//! 3) The session pushes the merged style to the surface via
//!    [`GestureHost::apply_style`] and mirrors it through the
//!    `on_start`/`on_change`/`on_release` callbacks.
//!
//! The host dispatches events synchronously and serially; every calculator is
//! a pure function and the per-gesture [`GestureState`](session::GestureState)
//! is owned exclusively by the session, so there is no shared-state hazard by
//! construction.
//!
//! ## Failure semantics
//!
//! Nothing in this crate is fatal. Malformed frames, missing surface sizes,
//! and degenerate geometry all degrade to a no-op for the affected frame or
//! axis, optionally surfacing through the injectable [`SessionTracer`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use tendril_gesture::{GestureConfig, GestureSession, NullHost};
//! use tendril_style::TransformStyle;
//! use tendril_touch::TouchFrame;
//!
//! let mut session: GestureSession<NullHost> =
//!     GestureSession::new(GestureConfig::default(), TransformStyle::default(), NullHost);
//!
//! let grant = TouchFrame::from(vec![Point::new(10.0, 10.0)]);
//! session.start(&grant);
//!
//! let moved = TouchFrame::from(vec![Point::new(30.0, 25.0)]);
//! session.update(&moved);
//! assert_eq!(session.style().left, tendril_style::Offset::Absolute(20.0));
//!
//! session.end(&moved);
//! assert!(!session.is_active());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod drag;
pub mod host;
pub mod pinch;
pub mod session;
pub mod trace;

pub use config::{GestureAxes, GestureConfig};
pub use host::{GestureHost, NullHost};
pub use session::{GestureSession, GestureState};
pub use trace::{Axis, NoTrace, SessionTracer};
