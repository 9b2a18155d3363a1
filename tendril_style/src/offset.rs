// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positional offsets: absolute device pixels or a percentage of the surface.

use core::str::FromStr;

/// A `left`/`top` offset value.
///
/// Hosts express offsets in one of two encodings: a bare number (absolute
/// device pixels) or a number suffixed with `%` (relative to the surface
/// width for `left`, height for `top`). The variant is sticky: a drag on an
/// absolute axis stays absolute, a drag on a percent axis stays percent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Offset {
    /// Absolute offset in device pixels.
    Absolute(f64),
    /// Offset as a percentage of the corresponding surface dimension.
    Percent(f64),
}

impl Offset {
    /// True for the percent-encoded variant.
    pub fn is_percent(self) -> bool {
        matches!(self, Self::Percent(_))
    }

    /// The raw numeric value, ignoring the encoding.
    pub fn value(self) -> f64 {
        match self {
            Self::Absolute(v) | Self::Percent(v) => v,
        }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Self::Absolute(0.0)
    }
}

impl core::fmt::Display for Offset {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Absolute(v) => write!(f, "{v}"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// An offset string was neither a number nor a `%`-suffixed number.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseOffsetError;

impl core::fmt::Display for ParseOffsetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "expected a number or a %-suffixed number")
    }
}

impl core::error::Error for ParseOffsetError {}

impl FromStr for Offset {
    type Err = ParseOffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(number) = s.strip_suffix('%') {
            number
                .trim_end()
                .parse::<f64>()
                .map(Self::Percent)
                .map_err(|_| ParseOffsetError)
        } else {
            s.parse::<f64>().map(Self::Absolute).map_err(|_| ParseOffsetError)
        }
    }
}
