// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-space pointer tracking: per-move deltas and distance travelled.

use kurbo::{Point, Vec2};

/// Tracks one pointer from press to release in screen space.
///
/// Panning consumes the per-move deltas from [`PointerTrack::advance`]; tap
/// recognition asks how far the pointer wandered from where it went down.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTrack {
    origin: Option<Point>,
    last: Option<Point>,
}

impl PointerTrack {
    /// Begins tracking at `pos`, discarding any previous track.
    pub fn start(&mut self, pos: Point) {
        self.origin = Some(pos);
        self.last = Some(pos);
    }

    /// Moves the pointer to `pos`, returning the delta since the last position.
    ///
    /// Returns `None` when no track is active.
    pub fn advance(&mut self, pos: Point) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(pos);
        Some(pos - last)
    }

    /// Distance between `pos` and the press position, if tracking.
    #[must_use]
    pub fn travel(&self, pos: Point) -> Option<f64> {
        self.origin.map(|origin| origin.distance(pos))
    }

    /// Last recorded pointer position.
    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.last
    }

    /// Stops tracking.
    pub fn end(&mut self) {
        self.origin = None;
        self.last = None;
    }

    /// Returns `true` between [`PointerTrack::start`] and [`PointerTrack::end`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::PointerTrack;

    #[test]
    fn idle_track_yields_nothing() {
        let mut track = PointerTrack::default();
        assert!(!track.is_active());
        assert_eq!(track.advance(Point::new(3.0, 4.0)), None);
        assert_eq!(track.travel(Point::new(3.0, 4.0)), None);
    }

    #[test]
    fn deltas_are_incremental() {
        let mut track = PointerTrack::default();
        track.start(Point::new(0.0, 0.0));
        assert_eq!(track.advance(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(track.advance(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(track.advance(Point::new(6.0, 7.0)), Some(Vec2::new(-2.0, 0.0)));
        assert_eq!(track.last(), Some(Point::new(6.0, 7.0)));
    }

    #[test]
    fn travel_measures_from_press() {
        let mut track = PointerTrack::default();
        track.start(Point::new(10.0, 10.0));
        track.advance(Point::new(40.0, 50.0));
        assert_eq!(track.travel(Point::new(13.0, 14.0)), Some(5.0));
    }

    #[test]
    fn restart_and_end_reset() {
        let mut track = PointerTrack::default();
        track.start(Point::new(1.0, 1.0));
        track.advance(Point::new(9.0, 9.0));
        track.start(Point::new(50.0, 60.0));
        assert_eq!(track.advance(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
        track.end();
        assert!(!track.is_active());
        assert_eq!(track.last(), None);
    }
}
