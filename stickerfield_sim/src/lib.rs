// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stickerfield Sim: the force-directed physics behind the sticker canvas.
//!
//! This crate owns the simulation truth and nothing else. It provides:
//!
//! - [`Node`] / [`NodeId`]: one simulated sticker, keyed by the pair of its
//!   image path and its index in the input list.
//! - [`NodeStore`]: the mutable node array and its reconciliation against a
//!   new input list ([`NodeStore::reconcile`]).
//! - [`PhysicsConfig`]: the tunables (attraction, repulsion, friction and the
//!   soft boundary), serde-loadable and clamped before use.
//! - [`Integrator`]: one explicit Euler step per animation frame with center
//!   attraction, short-range pairwise repulsion, a soft boundary and damping.
//!
//! It does not know about screens, input events or rendering. The canvas
//! crate wires it to the transform, the gesture router and the frame loop.
//!
//! ## Write ownership
//!
//! Node positions and velocities are written only by the [`Integrator`]
//! (including the drag path, which snaps a dragged node to the pointer
//! position it is handed each frame) and by placement of newly inserted
//! nodes during reconciliation. The only field anything else may write is
//! the drag flag, through [`NodeStore::set_dragging`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use rand::{SeedableRng, rngs::StdRng};
//! use stickerfield_sim::{Integrator, NodeStore, PhysicsConfig};
//!
//! let bounds = Size::new(800.0, 600.0);
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut store = NodeStore::new();
//! store.reconcile(&["/static/a.png", "/static/b.png"], 100.0, bounds, &mut rng);
//!
//! let mut integrator = Integrator::new(PhysicsConfig::default());
//! for _ in 0..60 {
//!     integrator.step(&mut store, bounds, None);
//! }
//! assert_eq!(store.len(), 2);
//! ```

mod config;
mod integrator;
mod node;
mod store;

pub use config::{ATTRACTION_RANGE, PhysicsConfig, REPULSION_RANGE};
pub use integrator::Integrator;
pub use node::{Node, NodeId};
pub use store::{DEFAULT_NODE_SIZE, NodeStore, ReconcileReport, StickerSource};
