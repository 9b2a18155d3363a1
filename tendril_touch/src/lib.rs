// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tendril_touch --heading-base-level=0

//! Tendril Touch: Kurbo-native touch frames and the pure geometry over them.
//!
//! ## Overview
//!
//! A [`TouchFrame`] is the ordered set of simultaneous contact points reported
//! by one input event, in surface-local coordinates. This crate owns the frame
//! type and the small set of pure functions gesture math needs on top of it:
//! the [`distance`](geometry::distance) and [`angle`](geometry::angle) of the
//! first touch pair, and the multi-touch predicate.
//!
//! Touch identity is positional. Two-finger math always reads the first two
//! points of a frame; a finger appearing or disappearing changes the frame
//! length, and higher layers react to that length change rather than to any
//! per-touch id.
//!
//! ## Angle convention
//!
//! [`angle`](geometry::angle) returns degrees in `[0, 360)`, measured from the
//! positive x axis toward positive y. Surface coordinates are y-down, so the
//! angle grows clockwise on screen. Every consumer of this crate holds that
//! single convention; cumulative angles and unwrap baselines in higher layers
//! are all expressed in it.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use tendril_touch::{TouchFrame, geometry};
//!
//! let frame = TouchFrame::from(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
//! assert!(frame.is_multi_touch());
//! assert_eq!(geometry::distance(&frame).unwrap(), 5.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod frame;
pub mod geometry;

pub use frame::TouchFrame;
pub use geometry::FrameError;
