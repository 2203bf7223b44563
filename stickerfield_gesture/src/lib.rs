// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stickerfield Gesture: input routing for the sticker canvas.
//!
//! [`GestureRouter`] is a small state machine keyed by how many points are
//! down and what the first one landed on:
//!
//! - one point on the background pans the canvas by raw screen deltas;
//! - one point on a node drags that node;
//! - two points cancel both and pinch-zoom about their midpoint;
//! - a wheel notch zooms about the mouse by a fixed factor;
//! - releasing (pointer up, touch end, leaving the canvas) returns to idle.
//!
//! Double clicks, and two quick taps on the same node, are reported as an
//! activation of that node. What activation means is up to the host.
//!
//! The router is generic over the node key type and writes into the node
//! store only through the narrow [`DragFlags`] trait.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use stickerfield_gesture::{DragFlags, GestureRouter, HitTarget, InputEvent};
//! use stickerfield_view::CanvasTransform;
//!
//! struct NoNodes;
//! impl DragFlags<u32> for NoNodes {
//!     fn set_dragging(&mut self, _key: &u32, _dragging: bool) -> bool {
//!         false
//!     }
//! }
//!
//! let mut router = GestureRouter::<u32>::default();
//! let mut transform = CanvasTransform::new(Size::new(800.0, 600.0));
//!
//! router.handle(
//!     InputEvent::PointerDown { position: Point::new(10.0, 10.0), target: HitTarget::Background },
//!     &mut transform,
//!     &mut NoNodes,
//! );
//! let response = router.handle(
//!     InputEvent::PointerMove { position: Point::new(30.0, 15.0) },
//!     &mut transform,
//!     &mut NoNodes,
//! );
//! assert!(response.transform_changed);
//! assert_eq!(transform.state().x, 20.0);
//! assert_eq!(transform.state().y, 5.0);
//! ```

mod pinch;
mod router;
mod tap;
mod track;

pub use pinch::{PinchState, PinchStep};
pub use router::{
    DragFlags, GestureConfig, GestureMode, GestureResponse, GestureRouter, HitTarget, InputEvent,
    TouchPoints,
};
pub use tap::DoubleTap;
pub use track::PointerTrack;
