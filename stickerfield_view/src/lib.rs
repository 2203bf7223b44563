// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stickerfield View: the pan/zoom transform of the sticker canvas.
//!
//! The sticker canvas is an unbounded 2D plane ("canvas space") on which the
//! physics simulation runs. This crate owns the single piece of global view
//! state that maps it onto the screen:
//!
//! ```text
//! screen = canvas * scale + (x, y)
//! ```
//!
//! It focuses on:
//! - Holding the `{x, y, scale}` transform with `scale` clamped to
//!   [`MIN_SCALE`]..=[`MAX_SCALE`].
//! - Converting points between screen and canvas space.
//! - Panning by unscaled screen deltas and zooming about a fixed screen point.
//! - Inverse-transforming the screen rectangle into canvas space for culling.
//!
//! It does **not** interpret input events or own any nodes. Gesture routing
//! lives in `stickerfield_gesture`, and the simulation in `stickerfield_sim`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use stickerfield_view::{CanvasTransform, WheelZoom};
//!
//! let mut transform = CanvasTransform::new(Size::new(800.0, 600.0));
//!
//! // Zoom in one wheel notch around the mouse position.
//! let mouse = Point::new(200.0, 150.0);
//! let before = transform.screen_to_canvas_point(mouse);
//! transform.zoom_about_screen_point(mouse, WheelZoom::In.factor());
//! let after = transform.canvas_to_screen_point(before);
//! assert!((after.x - mouse.x).abs() < 1e-9);
//! assert!((after.y - mouse.y).abs() < 1e-9);
//! ```
//!
//! ## Degenerate viewports
//!
//! A host that has not been laid out yet may report a zero or non-finite
//! viewport size. Such sizes are replaced by [`FALLBACK_VIEW_SIZE`] so that
//! downstream math never divides by zero.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod transform;

pub use modes::WheelZoom;
pub use transform::{
    CanvasTransform, FALLBACK_VIEW_SIZE, MAX_SCALE, MIN_SCALE, TransformState, sanitize_view_size,
};
