// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Rect, Vec2};

/// Stable identity of a simulated sticker.
///
/// Derived from the sticker's image path and its index in the input list at
/// first appearance. The id is not regenerated while the node persists, so
/// two list updates that keep `(path, index)` keep the same node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    path: String,
    index: usize,
}

impl NodeId {
    /// Builds the identity of the sticker at `index` with the given `path`.
    #[must_use]
    pub fn new(path: impl Into<String>, index: usize) -> Self {
        Self {
            path: path.into(),
            index,
        }
    }

    /// Image path component of the identity.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Input-list index component of the identity.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.path, self.index)
    }
}

/// One simulated sticker.
///
/// Fields are read-only outside this crate. Position and velocity belong to
/// the [`Integrator`](crate::Integrator); the drag flag is toggled through
/// [`NodeStore::set_dragging`](crate::NodeStore::set_dragging).
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    pub(crate) position: Point,
    pub(crate) velocity: Vec2,
    pub(crate) size: f64,
    pub(crate) dragging: bool,
}

impl Node {
    /// Creates a resting node at a fixed canvas position.
    ///
    /// Useful for restoring a saved layout or building deterministic scenes;
    /// list reconciliation uses randomized placement instead.
    #[must_use]
    pub fn at(id: NodeId, position: Point, size: f64) -> Self {
        Self::moving(id, position, Vec2::ZERO, size)
    }

    pub(crate) fn moving(id: NodeId, position: Point, velocity: Vec2, size: f64) -> Self {
        Self {
            id,
            position,
            velocity,
            size,
            dragging: false,
        }
    }

    /// Stable identity of this node.
    #[must_use]
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Image path; opaque to the simulation.
    #[must_use]
    pub fn path(&self) -> &str {
        self.id.path()
    }

    /// Center position in canvas space.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Velocity in canvas units per frame.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Display diameter, shared by every node of a store.
    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Whether the node is currently held by a drag gesture.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Square footprint of the node in canvas space.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_center_size(self.position, (self.size, self.size))
    }
}
