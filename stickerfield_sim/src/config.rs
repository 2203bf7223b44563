// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Allowed range of [`PhysicsConfig::attraction`].
pub const ATTRACTION_RANGE: RangeInclusive<f64> = 0.0..=0.002;

/// Allowed range of [`PhysicsConfig::repulsion`].
pub const REPULSION_RANGE: RangeInclusive<f64> = 0.0..=2000.0;

/// Tunables of the sticker simulation.
///
/// Missing fields fall back to their defaults when deserializing, so a host
/// can persist only the sliders it exposes. Values are never trusted as-is:
/// [`PhysicsConfig::sanitized`] clamps every field before the integrator
/// uses it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Pull towards the viewport center per unit of distance.
    pub attraction: f64,
    /// Numerator of the inverse-square repulsion between nearby nodes.
    pub repulsion: f64,
    /// Velocity multiplier applied every frame.
    pub friction: f64,
    /// Strength of the soft boundary's restoring force.
    pub boundary_force: f64,
    /// Distance beyond the viewport at which the soft boundary starts.
    pub boundary_margin: f64,
    /// Gap added to the sum of two radii to get the minimum comfortable distance.
    pub interaction_padding: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            attraction: 0.0003,
            repulsion: 600.0,
            friction: 0.9,
            boundary_force: 0.02,
            boundary_margin: 300.0,
            interaction_padding: 15.0,
        }
    }
}

impl PhysicsConfig {
    /// Sets the center attraction, clamped to [`ATTRACTION_RANGE`].
    pub fn set_attraction(&mut self, attraction: f64) {
        self.attraction = clamp_or(attraction, ATTRACTION_RANGE, Self::default().attraction);
    }

    /// Sets the repulsion strength, clamped to [`REPULSION_RANGE`].
    pub fn set_repulsion(&mut self, repulsion: f64) {
        self.repulsion = clamp_or(repulsion, REPULSION_RANGE, Self::default().repulsion);
    }

    /// Returns a copy with every field forced into its valid range.
    ///
    /// Non-finite values are replaced by the field's default.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        Self {
            attraction: clamp_or(self.attraction, ATTRACTION_RANGE, defaults.attraction),
            repulsion: clamp_or(self.repulsion, REPULSION_RANGE, defaults.repulsion),
            friction: clamp_or(self.friction, 0.0..=1.0, defaults.friction),
            boundary_force: clamp_or(self.boundary_force, 0.0..=f64::MAX, defaults.boundary_force),
            boundary_margin: clamp_or(
                self.boundary_margin,
                0.0..=f64::MAX,
                defaults.boundary_margin,
            ),
            interaction_padding: clamp_or(
                self.interaction_padding,
                0.0..=f64::MAX,
                defaults.interaction_padding,
            ),
        }
    }
}

fn clamp_or(value: f64, range: RangeInclusive<f64>, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(*range.start(), *range.end())
    } else {
        fallback
    }
}
