// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=tendril_style --heading-base-level=0

//! Tendril Style: the visual-transform data model for gesture-driven surfaces.
//!
//! ## Overview
//!
//! A [`TransformStyle`] is what a gesture session pushes to its surface every
//! frame: a `left`/`top` [`Offset`] pair plus an ordered list of
//! [`TransformPart`]s (rotation in degrees, uniform scale). Offsets are either
//! absolute device pixels or percentages of the surface size, matching the
//! two host-side encodings (`12` and `"12%"`).
//!
//! Calculators produce [`StyleDelta`]s — partial styles carrying only the
//! properties they computed — and [`merge`] composes the base style with the
//! latest drag and pinch deltas into the single style that is the source of
//! truth for the surface and for host callbacks.
//!
//! ## Merge semantics
//!
//! `left`/`top` are overridden property-wise, drag first, pinch last. The
//! transform list is all-or-nothing: a non-empty pinch transform fully
//! replaces the base list (scale and rotation are always recomputed
//! together), and an empty one is ignored.
//!
//! ## Example
//!
//! ```
//! use tendril_style::{merge, Offset, StyleDelta, TransformStyle};
//!
//! let base = TransformStyle::default();
//! let drag = StyleDelta {
//!     left: Some(Offset::Percent(20.0)),
//!     ..Default::default()
//! };
//! let merged = merge(&base, &drag, &StyleDelta::default());
//! assert_eq!(merged.left, Offset::Percent(20.0));
//! assert_eq!(merged.scale(), 1.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! It is generic infrastructure: it does not depend on any geometry crate and
//! carries no gesture state of its own.

#![no_std]

extern crate alloc;

pub mod offset;
pub mod style;

pub use offset::{Offset, ParseOffsetError};
pub use style::{StyleDelta, TransformPart, TransformStyle, merge};
