// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition with spatial and temporal tolerance.

use kurbo::Point;

/// Recognizes two taps on the same target in quick succession.
///
/// Touch platforms do not reliably deliver a double-click event, so taps
/// are paired here: the second tap counts if it lands on the same target,
/// within `max_interval_ms` of the first and within `max_distance` screen
/// pixels of it.
#[derive(Clone, Debug)]
pub struct DoubleTap<K> {
    previous: Option<(K, Point, u64)>,
    max_interval_ms: u64,
    max_distance: f64,
}

impl<K: PartialEq> DoubleTap<K> {
    /// Creates a recognizer with the given tolerances.
    #[must_use]
    pub fn new(max_interval_ms: u64, max_distance: f64) -> Self {
        Self {
            previous: None,
            max_interval_ms,
            max_distance,
        }
    }

    /// Records a completed tap, returning `true` if it completes a double tap.
    ///
    /// A recognized double tap is consumed, so a third tap starts over.
    pub fn tap(&mut self, target: K, pos: Point, time_ms: u64) -> bool {
        let paired = matches!(
            &self.previous,
            Some((prev, prev_pos, prev_time))
                if *prev == target
                    && time_ms.saturating_sub(*prev_time) <= self.max_interval_ms
                    && prev_pos.distance(pos) <= self.max_distance
        );
        self.previous = if paired {
            None
        } else {
            Some((target, pos, time_ms))
        };
        paired
    }

    /// Forgets any pending first tap.
    pub fn reset(&mut self) {
        self.previous = None;
    }
}
