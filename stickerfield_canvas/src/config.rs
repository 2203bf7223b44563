// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use serde::{Deserialize, Serialize};
use stickerfield_gesture::GestureConfig;

/// Settings of the canvas layer around the simulation.
///
/// Like [`stickerfield_sim::PhysicsConfig`], missing fields take their
/// defaults when deserializing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Canvas units added around the visible rectangle before culling.
    pub cull_buffer: f64,
    /// Minimum time between two redraw notifications.
    pub redraw_interval_ms: u64,
    /// Longest gap between the two taps of a double tap.
    pub double_tap_interval_ms: u64,
    /// Screen distance within which a press still counts as a tap.
    pub tap_slop: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            cull_buffer: 200.0,
            redraw_interval_ms: 33,
            double_tap_interval_ms: 300,
            tap_slop: 10.0,
        }
    }
}

impl CanvasConfig {
    /// Returns a copy with negative or non-finite distances replaced by defaults.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let distance = |value: f64, fallback: f64| {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                fallback
            }
        };
        Self {
            cull_buffer: distance(self.cull_buffer, defaults.cull_buffer),
            redraw_interval_ms: self.redraw_interval_ms,
            double_tap_interval_ms: self.double_tap_interval_ms,
            tap_slop: distance(self.tap_slop, defaults.tap_slop),
        }
    }

    /// The tap tolerances in the form the gesture router takes them.
    #[must_use]
    pub fn gesture(&self) -> GestureConfig {
        GestureConfig {
            double_tap_interval_ms: self.double_tap_interval_ms,
            tap_slop: self.tap_slop,
        }
    }
}
