// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stickerfield Canvas: a force-directed sticker canvas for hosts that
//! bring their own renderer.
//!
//! [`PhysicsCanvas`] combines the pieces of the workspace:
//!
//! - the node store and integrator from `stickerfield_sim`;
//! - the pan/zoom transform from `stickerfield_view`;
//! - the gesture router from `stickerfield_gesture`.
//!
//! Around them it adds a frame loop behind the [`FrameScheduler`] trait,
//! viewport culling into read-only [`VisibleNode`]s, a throttled redraw
//! signal with an observer list, hit testing for press targets, and
//! routing of double-activated stickers to a host handler or a
//! [`FallbackPreview`].
//!
//! The [`data`] module loads sticker lists and cluster snapshots.
//!
//! Everything runs on one thread. Frames, input and list updates are plain
//! method calls that never block.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use stickerfield_canvas::{ManualFrameClock, PhysicsCanvas};
//!
//! let clock = ManualFrameClock::new();
//! let mut canvas = PhysicsCanvas::with_seed(Size::new(800.0, 600.0), clock.clone(), 3);
//! canvas.set_stickers(&["/s/a.png", "/s/b.png", "/s/c.png"], 100.0);
//! canvas.mount();
//!
//! let mut now = 0;
//! while now < 1000 && clock.fire().is_some() {
//!     canvas.on_animation_frame(now);
//!     now += 16;
//! }
//! assert_eq!(canvas.visible_nodes().len(), 3);
//!
//! drop(canvas);
//! assert_eq!(clock.pending(), None);
//! ```

mod activation;
mod canvas;
mod config;
mod cull;
pub mod data;
mod error;
mod frame;
mod throttle;

pub use activation::{ActivationHandler, FallbackPreview};
pub use canvas::PhysicsCanvas;
pub use config::CanvasConfig;
pub use cull::{VisibleNode, cull_rect, overlaps, visible_nodes};
pub use data::{ClusterSnapshot, StickerRecord};
pub use error::LoadError;
pub use frame::{FrameRequest, FrameScheduler, ManualFrameClock};
pub use throttle::{ObserverId, RedrawObservers, RedrawThrottle};
