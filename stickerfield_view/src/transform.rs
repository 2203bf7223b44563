// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f64 = 0.2;

/// Largest allowed zoom factor.
pub const MAX_SCALE: f64 = 3.0;

/// Viewport size substituted when the host reports a zero, negative or
/// non-finite size (for example before first layout).
pub const FALLBACK_VIEW_SIZE: Size = Size::new(800.0, 600.0);

/// Replaces a degenerate viewport size with [`FALLBACK_VIEW_SIZE`].
///
/// Each axis is checked independently, so a host that knows its width but
/// not yet its height still keeps the width.
#[must_use]
pub fn sanitize_view_size(size: Size) -> Size {
    let width = if size.width.is_finite() && size.width > 0.0 {
        size.width
    } else {
        FALLBACK_VIEW_SIZE.width
    };
    let height = if size.height.is_finite() && size.height > 0.0 {
        size.height
    } else {
        FALLBACK_VIEW_SIZE.height
    };
    Size::new(width, height)
}

/// Plain `{x, y, scale}` view of a [`CanvasTransform`].
///
/// This is what gets handed to the render layer alongside the culled nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Horizontal screen offset of the canvas origin.
    pub x: f64,
    /// Vertical screen offset of the canvas origin.
    pub y: f64,
    /// Uniform zoom factor, always within [`MIN_SCALE`]..=[`MAX_SCALE`].
    pub scale: f64,
}

impl TransformState {
    /// Zoom level as a percentage, for status displays.
    #[must_use]
    pub fn zoom_percent(&self) -> f64 {
        self.scale * 100.0
    }
}

/// Pan/zoom mapping from canvas space onto the screen.
///
/// `CanvasTransform` tracks the logical viewport size in screen pixels and a
/// uniform pan+zoom transform mapping canvas coordinates into it. It can be
/// used to:
/// - Convert points between canvas and screen coordinates.
/// - Pan by screen deltas and zoom around a chosen anchor point.
/// - Compute the canvas-space rectangle currently visible on screen.
#[derive(Clone, Debug)]
pub struct CanvasTransform {
    view_size: Size,
    pan: Vec2,
    scale: f64,
    canvas_to_screen: Affine,
    screen_to_canvas: Affine,
}

impl CanvasTransform {
    /// Creates an identity transform over a viewport of `view_size` pixels.
    ///
    /// - Initial scale is `1.0`.
    /// - Initial pan is zero (canvas origin maps to the screen origin).
    /// - A degenerate `view_size` is replaced via [`sanitize_view_size`].
    #[must_use]
    pub fn new(view_size: Size) -> Self {
        let mut transform = Self {
            view_size: sanitize_view_size(view_size),
            pan: Vec2::ZERO,
            scale: 1.0,
            canvas_to_screen: Affine::IDENTITY,
            screen_to_canvas: Affine::IDENTITY,
        };
        transform.rebuild_transforms();
        transform
    }

    /// Returns the logical viewport size in screen pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the logical viewport size in screen pixels.
    ///
    /// Returns `false` when `size` was degenerate and the fallback size was
    /// used instead. Pan and scale are left untouched.
    pub fn set_view_size(&mut self, size: Size) -> bool {
        let sanitized = sanitize_view_size(size);
        self.view_size = sanitized;
        sanitized == size
    }

    /// Returns the canvas-space center of the logical viewport.
    ///
    /// This is the point the simulation attracts nodes towards; it does not
    /// move with pan or zoom.
    #[must_use]
    pub fn logical_center(&self) -> Point {
        Point::new(self.view_size.width / 2.0, self.view_size.height / 2.0)
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current screen offset of the canvas origin.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns the transform as plain `{x, y, scale}`.
    #[must_use]
    pub fn state(&self) -> TransformState {
        TransformState {
            x: self.pan.x,
            y: self.pan.y,
            scale: self.scale,
        }
    }

    /// Sets the zoom factor without moving the canvas origin.
    ///
    /// The value is clamped to [`MIN_SCALE`]..=[`MAX_SCALE`]; non-finite
    /// values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        let clamped = scale.clamp(MIN_SCALE, MAX_SCALE);
        if (self.scale - clamped).abs() < f64::EPSILON {
            return;
        }
        self.scale = clamped;
        self.rebuild_transforms();
    }

    /// Pans the canvas by a delta in screen space.
    ///
    /// The delta is applied as-is; it is not divided by the zoom factor.
    pub fn pan_by_screen(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO || !delta.is_finite() {
            return;
        }
        self.pan += delta;
        self.rebuild_transforms();
    }

    /// Multiplies the zoom factor by `factor` around a fixed screen point.
    ///
    /// The canvas point under `anchor` before the call is still under
    /// `anchor` afterwards. The resulting scale is clamped, so the effective
    /// factor may be smaller than requested; when the clamp leaves the scale
    /// unchanged the transform is not touched at all.
    pub fn zoom_about_screen_point(&mut self, anchor: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 || !anchor.is_finite() {
            return;
        }
        let old_scale = self.scale;
        let new_scale = (old_scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return;
        }

        let ratio = new_scale / old_scale;
        self.pan = Vec2::new(
            anchor.x - (anchor.x - self.pan.x) * ratio,
            anchor.y - (anchor.y - self.pan.y) * ratio,
        );
        self.scale = new_scale;
        self.rebuild_transforms();
    }

    /// Returns the canvas-space rectangle covered by the viewport.
    #[must_use]
    pub fn visible_canvas_rect(&self) -> Rect {
        let top_left = self.screen_to_canvas * Point::ORIGIN;
        let bottom_right = self.screen_to_canvas * self.view_size.to_vec2().to_point();
        Rect::from_points(top_left, bottom_right)
    }

    /// Converts a canvas-space point into screen coordinates.
    #[must_use]
    pub fn canvas_to_screen_point(&self, pt: Point) -> Point {
        self.canvas_to_screen * pt
    }

    /// Converts a screen-space point into canvas coordinates.
    #[must_use]
    pub fn screen_to_canvas_point(&self, pt: Point) -> Point {
        self.screen_to_canvas * pt
    }

    fn rebuild_transforms(&mut self) {
        // Canvas → screen: scale, then translate by pan.
        self.canvas_to_screen = Affine::translate(self.pan) * Affine::scale(self.scale);
        self.screen_to_canvas = self.canvas_to_screen.inverse();
    }
}
