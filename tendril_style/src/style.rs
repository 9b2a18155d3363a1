// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform styles, partial deltas, and the merger.

use alloc::vec::Vec;

use crate::offset::Offset;

/// One entry of a transform list.
///
/// The list is ordered; hosts apply entries in sequence. Gesture calculators
/// only ever emit rotation and uniform scale.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TransformPart {
    /// Rotation in degrees. Rendered to hosts as `"{value}deg"`.
    Rotate(f64),
    /// Uniform scale factor.
    Scale(f64),
}

impl core::fmt::Display for TransformPart {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Rotate(deg) => write!(f, "{deg}deg"),
            Self::Scale(s) => write!(f, "{s}"),
        }
    }
}

/// The complete visual transform of a gesture surface.
///
/// This is the value pushed to the live surface and carried by every session
/// callback. [`Default`] is the untouched surface: zero offsets, zero
/// rotation, unit scale.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformStyle {
    /// Horizontal offset. Percent values are relative to the surface width.
    pub left: Offset,
    /// Vertical offset. Percent values are relative to the surface height.
    pub top: Offset,
    /// Ordered transform entries.
    pub transform: Vec<TransformPart>,
}

impl Default for TransformStyle {
    fn default() -> Self {
        Self {
            left: Offset::Absolute(0.0),
            top: Offset::Absolute(0.0),
            transform: alloc::vec![TransformPart::Rotate(0.0), TransformPart::Scale(1.0)],
        }
    }
}

impl TransformStyle {
    /// Effective scale: the last `Scale` entry, or `1.0` when absent.
    pub fn scale(&self) -> f64 {
        self.transform
            .iter()
            .rev()
            .find_map(|part| match part {
                TransformPart::Scale(s) => Some(*s),
                _ => None,
            })
            .unwrap_or(1.0)
    }

    /// Effective rotation in degrees: the last `Rotate` entry, or `0.0`.
    pub fn rotation(&self) -> f64 {
        self.transform
            .iter()
            .rev()
            .find_map(|part| match part {
                TransformPart::Rotate(deg) => Some(*deg),
                _ => None,
            })
            .unwrap_or(0.0)
    }
}

/// A partial style: only the properties a calculator actually computed.
///
/// Drag produces `left`/`top`; pinch produces `transform`. Absent properties
/// fall through to the base style in [`merge`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleDelta {
    /// Replacement horizontal offset, if computed.
    pub left: Option<Offset>,
    /// Replacement vertical offset, if computed.
    pub top: Option<Offset>,
    /// Replacement transform list, if computed.
    pub transform: Option<Vec<TransformPart>>,
}

impl StyleDelta {
    /// True if the delta carries no properties at all.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.top.is_none() && self.transform.is_none()
    }

    /// Drop all carried properties.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Compose the base style with the latest drag and pinch deltas.
///
/// `left`/`top` are overridden property-wise, drag first, pinch last. A
/// present and non-empty delta transform fully replaces the base transform
/// list; scale and rotation are always recomputed together, so element-wise
/// merging would only ever pair stale entries with fresh ones. A
/// present-but-empty list is ignored.
pub fn merge(base: &TransformStyle, drag: &StyleDelta, pinch: &StyleDelta) -> TransformStyle {
    let mut out = base.clone();
    for delta in [drag, pinch] {
        if let Some(left) = delta.left {
            out.left = left;
        }
        if let Some(top) = delta.top {
            out.top = top;
        }
        if let Some(transform) = &delta.transform
            && !transform.is_empty()
        {
            out.transform = transform.clone();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn default_style_is_identity() {
        let style = TransformStyle::default();
        assert_eq!(style.left, Offset::Absolute(0.0));
        assert_eq!(style.top, Offset::Absolute(0.0));
        assert_eq!(style.scale(), 1.0);
        assert_eq!(style.rotation(), 0.0);
    }

    #[test]
    fn readers_pick_the_last_entry() {
        let style = TransformStyle {
            transform: vec![
                TransformPart::Scale(2.0),
                TransformPart::Rotate(10.0),
                TransformPart::Scale(0.5),
            ],
            ..Default::default()
        };
        assert_eq!(style.scale(), 0.5);
        assert_eq!(style.rotation(), 10.0);
    }

    #[test]
    fn readers_fall_back_when_entries_are_absent() {
        let style = TransformStyle {
            transform: Vec::new(),
            ..Default::default()
        };
        assert_eq!(style.scale(), 1.0);
        assert_eq!(style.rotation(), 0.0);
    }

    #[test]
    fn rotate_renders_with_deg_suffix() {
        assert_eq!(TransformPart::Rotate(15.0).to_string(), "15deg");
        assert_eq!(TransformPart::Scale(1.5).to_string(), "1.5");
    }

    #[test]
    fn merge_overrides_offsets_property_wise() {
        let base = TransformStyle::default();
        let drag = StyleDelta {
            left: Some(Offset::Absolute(30.0)),
            top: Some(Offset::Absolute(-4.0)),
            ..Default::default()
        };
        let merged = merge(&base, &drag, &StyleDelta::default());
        assert_eq!(merged.left, Offset::Absolute(30.0));
        assert_eq!(merged.top, Offset::Absolute(-4.0));
        assert_eq!(merged.transform, base.transform);
    }

    #[test]
    fn pinch_overrides_drag_on_shared_properties() {
        let base = TransformStyle::default();
        let drag = StyleDelta {
            left: Some(Offset::Absolute(10.0)),
            ..Default::default()
        };
        let pinch = StyleDelta {
            left: Some(Offset::Absolute(99.0)),
            ..Default::default()
        };
        assert_eq!(merge(&base, &drag, &pinch).left, Offset::Absolute(99.0));
    }

    #[test]
    fn nonempty_pinch_transform_replaces_wholesale() {
        let base = TransformStyle::default();
        let pinch = StyleDelta {
            transform: Some(vec![TransformPart::Scale(1.8)]),
            ..Default::default()
        };
        let merged = merge(&base, &StyleDelta::default(), &pinch);
        // The base Rotate(0) entry is gone: replacement, not element merge.
        assert_eq!(merged.transform, vec![TransformPart::Scale(1.8)]);
    }

    #[test]
    fn empty_pinch_transform_is_ignored() {
        let base = TransformStyle::default();
        let pinch = StyleDelta {
            transform: Some(Vec::new()),
            ..Default::default()
        };
        let merged = merge(&base, &StyleDelta::default(), &pinch);
        assert_eq!(merged.transform, base.transform);
    }

    #[test]
    fn empty_deltas_reproduce_the_base() {
        let base = TransformStyle {
            left: Offset::Percent(10.0),
            top: Offset::Absolute(5.0),
            transform: vec![TransformPart::Rotate(45.0), TransformPart::Scale(1.2)],
        };
        let merged = merge(&base, &StyleDelta::default(), &StyleDelta::default());
        assert_eq!(merged, base);
    }

    #[test]
    fn delta_is_empty_tracks_all_properties() {
        let mut delta = StyleDelta::default();
        assert!(delta.is_empty());
        delta.transform = Some(Vec::new());
        assert!(!delta.is_empty());
        delta.clear();
        assert!(delta.is_empty());
    }
}
