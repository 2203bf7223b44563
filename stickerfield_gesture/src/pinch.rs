// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch tracking.

use kurbo::Point;

/// Separations below this are treated as a single point; no zoom factor can
/// be derived from them.
const MIN_SEPARATION: f64 = 1.0;

/// One step of a pinch: how much to zoom and around which screen point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchStep {
    /// Ratio of the new finger separation to the previous one.
    pub factor: f64,
    /// Midpoint of the two fingers, in screen space.
    pub anchor: Point,
}

/// Tracks finger separation across pinch moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinchState {
    last_distance: Option<f64>,
}

impl PinchState {
    /// Starts a pinch with the two given touch points.
    pub fn start(&mut self, a: Point, b: Point) {
        self.last_distance = Some(a.distance(b));
    }

    /// Updates with new touch positions and returns the zoom step.
    ///
    /// Returns `None` when no pinch is active or when either separation is
    /// too small to yield a meaningful ratio; the new separation is recorded
    /// either way.
    pub fn update(&mut self, a: Point, b: Point) -> Option<PinchStep> {
        let last = self.last_distance?;
        let distance = a.distance(b);
        self.last_distance = Some(distance);
        if last < MIN_SEPARATION || distance < MIN_SEPARATION {
            return None;
        }
        Some(PinchStep {
            factor: distance / last,
            anchor: a.midpoint(b),
        })
    }

    /// Ends the pinch.
    pub fn end(&mut self) {
        self.last_distance = None;
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_distance.is_some()
    }
}
