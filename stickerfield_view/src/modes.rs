// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Direction of a single mouse-wheel notch.
///
/// Each notch scales the canvas by a fixed multiplier, independent of how
/// large the platform's reported delta is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelZoom {
    /// Zoom in (content grows) by a factor of `1.1`.
    In,
    /// Zoom out (content shrinks) by a factor of `0.9`.
    Out,
}

impl WheelZoom {
    /// Classifies a raw vertical wheel delta.
    ///
    /// Positive deltas (scrolling down) zoom out, negative deltas zoom in.
    /// A zero or non-finite delta carries no direction and yields `None`.
    #[must_use]
    pub fn from_delta(delta_y: f64) -> Option<Self> {
        if !delta_y.is_finite() || delta_y == 0.0 {
            None
        } else if delta_y > 0.0 {
            Some(Self::Out)
        } else {
            Some(Self::In)
        }
    }

    /// Returns the scale multiplier for this notch.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::In => 1.1,
            Self::Out => 0.9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WheelZoom;

    #[test]
    fn delta_sign_picks_direction() {
        assert_eq!(WheelZoom::from_delta(120.0), Some(WheelZoom::Out));
        assert_eq!(WheelZoom::from_delta(-3.0), Some(WheelZoom::In));
        assert_eq!(WheelZoom::from_delta(0.0), None);
        assert_eq!(WheelZoom::from_delta(f64::NAN), None);
    }
}
