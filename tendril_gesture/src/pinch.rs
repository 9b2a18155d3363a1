// Copyright 2026 the Tendril Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch/rotate calculator: a two-point touch frame → scale and rotation.
//!
//! ## Algorithm
//!
//! Distances and angles are measured between the first two touch points and
//! compared against the session baseline (`initial_touches`). Rotation is
//! anchored to `initial_angle`, captured on the first multi-touch frame of
//! the session; raw angle deltas are unwrapped at the 0°/360° boundary by
//! picking, among `raw`, `raw + 360`, and `raw - 360`, the candidate closest
//! to the previous cumulative angle, so no step ever jumps by more than 180°.
//!
//! The cumulative `prev_angle`/`prev_distance` pair updates on every
//! multi-touch frame, even when both output axes are disabled. Re-enabling an
//! axis mid-session therefore continues from the live gesture rather than
//! restarting, and the pair survives finger add/remove along with
//! `initial_angle`.
//!
//! Scale and rotation bases are read from the session's current merged style,
//! so each frame's diff extends the previous frame's output.

use alloc::vec::Vec;

use tendril_style::{StyleDelta, TransformPart, TransformStyle};
use tendril_touch::{TouchFrame, geometry};

use crate::config::GestureConfig;
use crate::session::GestureState;
use crate::trace::SessionTracer;

/// Distance-to-scale sensitivity divisor: a 100 px pinch at unit
/// `scale_factor` changes the scale by 0.25. Chosen for a natural default
/// feel; hosts tune per-session via `scale_factor`.
pub const SCALE_SENSITIVITY: f64 = 400.0;

/// Compute scale/rotation deltas for one multi-touch frame.
///
/// Returns `None` — leaving the session state untouched — unless `frame` is
/// multi-touch and both the frame and the baseline have a measurable first
/// pair. The returned delta carries only a transform list; it may be empty
/// when both axes are disabled (the merger ignores it), but the cumulative
/// state still advances.
///
/// A zero baseline distance (coincident touches) contributes no scale change
/// for the frame and is reported through the tracer; the output is always
/// finite.
pub fn compute<T: SessionTracer>(
    frame: &TouchFrame,
    state: &mut GestureState,
    current: &TransformStyle,
    config: &GestureConfig,
    tracer: &mut T,
) -> Option<StyleDelta> {
    if !frame.is_multi_touch() {
        return None;
    }
    let current_distance = geometry::distance(frame).ok()?;
    let initial_distance = geometry::distance(&state.initial_touches).ok()?;
    let current_angle = geometry::angle(frame).ok()?;

    let incremental_distance = current_distance - initial_distance;
    let diff_distance = if initial_distance == 0.0 {
        tracer.degenerate_geometry();
        0.0
    } else {
        state.prev_distance - incremental_distance
    };

    let new_angle = match state.initial_angle {
        // First multi-touch frame: establish the rotation baseline only.
        None => {
            state.initial_angle = Some(current_angle);
            state.prev_angle
        }
        Some(initial_angle) => {
            unwrap_toward(current_angle - initial_angle, state.prev_angle, tracer)
        }
    };
    let diff_angle = (state.prev_angle - new_angle) * config.rotate_factor;

    let mut transform = Vec::new();
    if config.scalable() {
        let raw = current.scale() - diff_distance * config.scale_factor / SCALE_SENSITIVITY;
        // Nested min/max rather than clamp: inverted bounds must not panic.
        transform.push(TransformPart::Scale(
            raw.max(config.min_scale).min(config.max_scale),
        ));
    }
    if config.rotatable() {
        transform.push(TransformPart::Rotate(current.rotation() + diff_angle));
    }

    state.prev_angle = new_angle;
    state.prev_distance = incremental_distance;

    Some(StyleDelta {
        transform: Some(transform),
        ..Default::default()
    })
}

/// Pick the representation of `raw` (mod 360°) closest to `prev`.
fn unwrap_toward<T: SessionTracer>(raw: f64, prev: f64, tracer: &mut T) -> f64 {
    let mut best = raw;
    for candidate in [raw + 360.0, raw - 360.0] {
        if (prev - candidate).abs() < (prev - best).abs() {
            best = candidate;
        }
    }
    if best != raw {
        tracer.angle_unwrapped(raw, best);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Point;

    use crate::config::GestureAxes;
    use crate::trace::NoTrace;

    fn frame(points: &[(f64, f64)]) -> TouchFrame {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn state_for(baseline: &[(f64, f64)]) -> GestureState {
        GestureState::new(frame(baseline), TransformStyle::default())
    }

    #[derive(Default)]
    struct CountingTracer {
        degenerate: usize,
        unwrapped: usize,
    }

    impl SessionTracer for CountingTracer {
        fn degenerate_geometry(&mut self) {
            self.degenerate += 1;
        }
        fn angle_unwrapped(&mut self, _raw: f64, _chosen: f64) {
            self.unwrapped += 1;
        }
    }

    #[test]
    fn single_touch_frame_is_a_noop() {
        let mut state = state_for(&[(0.0, 0.0), (100.0, 0.0)]);
        let before = state.clone();
        let out = compute(
            &frame(&[(5.0, 5.0)]),
            &mut state,
            &TransformStyle::default(),
            &GestureConfig::default(),
            &mut NoTrace,
        );
        assert_eq!(out, None);
        assert_eq!(state, before);
    }

    #[test]
    fn first_multi_touch_frame_only_sets_the_baseline() {
        let mut state = state_for(&[(0.0, 0.0), (100.0, 0.0)]);
        let out = compute(
            &frame(&[(0.0, 0.0), (0.0, 100.0)]),
            &mut state,
            &TransformStyle::default(),
            &GestureConfig::default(),
            &mut NoTrace,
        )
        .unwrap();
        // 90° frame, but no rotation output: the frame only anchors the baseline.
        assert_eq!(state.initial_angle, Some(90.0));
        assert_eq!(state.prev_angle, 0.0);
        let style = tendril_style::merge(
            &TransformStyle::default(),
            &StyleDelta::default(),
            &out,
        );
        assert_eq!(style.rotation(), 0.0);
    }

    #[test]
    fn rotation_follows_the_anchored_delta() {
        let mut state = state_for(&[(0.0, 0.0), (100.0, 0.0)]);
        let style = TransformStyle::default();
        // Anchor at 0°.
        compute(
            &frame(&[(0.0, 0.0), (100.0, 0.0)]),
            &mut state,
            &style,
            &GestureConfig::default(),
            &mut NoTrace,
        )
        .unwrap();
        // Twist to 90°: new cumulative angle 90, diff (0 - 90) = -90.
        let out = compute(
            &frame(&[(0.0, 0.0), (0.0, 100.0)]),
            &mut state,
            &style,
            &GestureConfig::default(),
            &mut NoTrace,
        )
        .unwrap();
        let merged = tendril_style::merge(&style, &StyleDelta::default(), &out);
        assert_eq!(merged.rotation(), -90.0);
        assert_eq!(state.prev_angle, 90.0);
    }

    #[test]
    fn unwrap_picks_the_candidate_nearest_the_previous_angle() {
        // prev 350, baseline 340, current 5 → raw -335; candidates
        // {-335, 25, -695}; 25 is nearest to 350.
        let mut tracer = CountingTracer::default();
        assert_eq!(unwrap_toward(-335.0, 350.0, &mut tracer), 25.0);
        assert_eq!(tracer.unwrapped, 1);
    }

    #[test]
    fn unwrap_keeps_raw_when_already_nearest() {
        let mut tracer = CountingTracer::default();
        assert_eq!(unwrap_toward(10.0, 0.0, &mut tracer), 10.0);
        assert_eq!(tracer.unwrapped, 0);
    }

    #[test]
    fn unwrap_never_steps_more_than_half_a_turn() {
        let mut prev = 0.0;
        // Sweep a full turn and a half in 10° raw increments; the unwrapped
        // sequence must stay within 180° of its predecessor throughout.
        for i in 0..54 {
            let raw = ((i * 10) % 360) as f64;
            let chosen = unwrap_toward(raw, prev, &mut NoTrace);
            assert!(
                (prev - chosen).abs() <= 180.0,
                "step {i}: prev {prev}, chosen {chosen}"
            );
            prev = chosen;
        }
    }

    #[test]
    fn scale_accumulates_against_the_current_style() {
        let config = GestureConfig {
            axes: GestureAxes::SCALE,
            ..Default::default()
        };
        let mut state = state_for(&[(0.0, 0.0), (100.0, 0.0)]);
        let mut style = TransformStyle::default();
        // Spread to 200 px: incremental 100, diff -100 → scale 1.25.
        let out = compute(
            &frame(&[(0.0, 0.0), (200.0, 0.0)]),
            &mut state,
            &style,
            &config,
            &mut NoTrace,
        )
        .unwrap();
        style = tendril_style::merge(&style, &StyleDelta::default(), &out);
        assert_eq!(style.scale(), 1.25);
        // Spread to 300 px: incremental 200, diff -100 again → 1.5.
        let out = compute(
            &frame(&[(0.0, 0.0), (300.0, 0.0)]),
            &mut state,
            &style,
            &config,
            &mut NoTrace,
        )
        .unwrap();
        style = tendril_style::merge(&style, &StyleDelta::default(), &out);
        assert_eq!(style.scale(), 1.5);
    }

    #[test]
    fn scale_stays_inside_the_clamp_bounds() {
        let config = GestureConfig::default();
        for spread in [0.5_f64, 10.0, 50.0, 150.0, 400.0, 2000.0, 10_000.0] {
            let mut state = state_for(&[(0.0, 0.0), (100.0, 0.0)]);
            let out = compute(
                &frame(&[(0.0, 0.0), (spread, 0.0)]),
                &mut state,
                &TransformStyle::default(),
                &config,
                &mut NoTrace,
            )
            .unwrap();
            let merged = tendril_style::merge(
                &TransformStyle::default(),
                &StyleDelta::default(),
                &out,
            );
            let scale = merged.scale();
            assert!(
                (config.min_scale..=config.max_scale).contains(&scale),
                "spread {spread} produced scale {scale}"
            );
        }
    }

    #[test]
    fn coincident_baseline_produces_finite_output() {
        let config = GestureConfig {
            axes: GestureAxes::SCALE,
            ..Default::default()
        };
        let mut state = state_for(&[(50.0, 50.0), (50.0, 50.0)]);
        let mut tracer = CountingTracer::default();
        let out = compute(
            &frame(&[(0.0, 0.0), (50.0, 0.0)]),
            &mut state,
            &TransformStyle::default(),
            &config,
            &mut tracer,
        )
        .unwrap();
        let merged = tendril_style::merge(
            &TransformStyle::default(),
            &StyleDelta::default(),
            &out,
        );
        assert!(merged.scale().is_finite());
        assert_eq!(merged.scale(), 1.0);
        assert_eq!(tracer.degenerate, 1);
        // The cumulative pair still advanced.
        assert_eq!(state.prev_distance, 50.0);
    }

    #[test]
    fn disabled_axes_still_advance_cumulative_state() {
        let config = GestureConfig {
            axes: GestureAxes::DRAG,
            ..Default::default()
        };
        let mut state = state_for(&[(0.0, 0.0), (100.0, 0.0)]);
        // Anchor frame.
        let out = compute(
            &frame(&[(0.0, 0.0), (150.0, 0.0)]),
            &mut state,
            &TransformStyle::default(),
            &config,
            &mut NoTrace,
        )
        .unwrap();
        assert_eq!(out.transform, Some(vec![]));
        assert_eq!(state.prev_distance, 50.0);
        assert_eq!(state.initial_angle, Some(0.0));
    }

    #[test]
    fn rotate_factor_scales_the_angle_delta() {
        let config = GestureConfig {
            axes: GestureAxes::ROTATE,
            rotate_factor: 0.5,
            ..Default::default()
        };
        let mut state = state_for(&[(0.0, 0.0), (100.0, 0.0)]);
        let style = TransformStyle::default();
        compute(
            &frame(&[(0.0, 0.0), (100.0, 0.0)]),
            &mut state,
            &style,
            &config,
            &mut NoTrace,
        )
        .unwrap();
        let out = compute(
            &frame(&[(0.0, 0.0), (0.0, 100.0)]),
            &mut state,
            &style,
            &config,
            &mut NoTrace,
        )
        .unwrap();
        let merged = tendril_style::merge(&style, &StyleDelta::default(), &out);
        assert_eq!(merged.rotation(), -45.0);
    }
}
