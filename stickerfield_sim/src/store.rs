// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

use hashbrown::HashSet;
use kurbo::{Point, Size, Vec2};
use rand::Rng;

use crate::node::{Node, NodeId};

/// Node size used when the host passes a non-positive or non-finite size.
pub const DEFAULT_NODE_SIZE: f64 = 100.0;

/// Innermost spawn radius around the viewport center.
const SPAWN_MIN_RADIUS: f64 = 50.0;

/// Spawn ring width as a fraction of the smaller viewport dimension.
const SPAWN_RING_FRACTION: f64 = 0.3;

/// Anything that can be shown as a sticker: it only needs an image path.
///
/// Other record fields (bounding boxes, scores) pass through untouched.
pub trait StickerSource {
    /// Image resource locator for this sticker.
    fn sticker_path(&self) -> &str;
}

impl StickerSource for str {
    fn sticker_path(&self) -> &str {
        self
    }
}

impl StickerSource for String {
    fn sticker_path(&self) -> &str {
        self
    }
}

impl<T: StickerSource + ?Sized> StickerSource for &T {
    fn sticker_path(&self) -> &str {
        (**self).sticker_path()
    }
}

/// What a call to [`NodeStore::reconcile`] changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Nodes created for identities new to the store.
    pub added: usize,
    /// Nodes dropped because their identity left the input.
    pub removed: usize,
    /// Surviving nodes whose size was refreshed.
    pub retained: usize,
}

/// The set of simulated sticker nodes.
///
/// Nodes keep the order in which they were first inserted; the render layer
/// draws them in that order, so later nodes sit on top.
#[derive(Clone, Debug, Default)]
pub struct NodeStore {
    nodes: Vec<Node>,
}

impl NodeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from pre-placed nodes.
    #[must_use]
    pub fn with_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the store holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in render order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Looks up a node by identity.
    #[must_use]
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    /// Sets or clears the drag flag of a node.
    ///
    /// Returns `false` if no node has this identity.
    pub fn set_dragging(&mut self, id: &NodeId, dragging: bool) -> bool {
        match self.nodes.iter_mut().find(|n| n.id() == id) {
            Some(node) => {
                node.dragging = dragging;
                true
            }
            None => false,
        }
    }

    /// Clears the drag flag on every node.
    pub fn release_all(&mut self) {
        for node in &mut self.nodes {
            node.dragging = false;
        }
    }

    /// Brings the store in line with a new input list and node size.
    ///
    /// - Nodes whose `(path, index)` identity is still present keep their
    ///   position, velocity and drag flag; only their size is overwritten.
    /// - Nodes whose identity disappeared are dropped.
    /// - New identities get a node on a random ring around the center of
    ///   `bounds`, with a small random velocity, appended after the
    ///   survivors in input order.
    ///
    /// A non-positive or non-finite `size` is replaced by
    /// [`DEFAULT_NODE_SIZE`].
    pub fn reconcile<S, R>(
        &mut self,
        stickers: &[S],
        size: f64,
        bounds: Size,
        rng: &mut R,
    ) -> ReconcileReport
    where
        S: StickerSource,
        R: Rng,
    {
        let size = if size.is_finite() && size > 0.0 {
            size
        } else {
            tracing::warn!(size, "invalid sticker size, using default");
            DEFAULT_NODE_SIZE
        };

        let wanted: Vec<NodeId> = stickers
            .iter()
            .enumerate()
            .map(|(index, sticker)| NodeId::new(sticker.sticker_path(), index))
            .collect();
        let before = self.nodes.len();
        {
            let wanted_set: HashSet<&NodeId> = wanted.iter().collect();
            self.nodes.retain(|node| wanted_set.contains(node.id()));
        }
        let removed = before - self.nodes.len();
        for node in &mut self.nodes {
            node.size = size;
        }
        let retained = self.nodes.len();

        let present: HashSet<NodeId> = self.nodes.iter().map(|n| n.id().clone()).collect();
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let ring = SPAWN_RING_FRACTION * bounds.width.min(bounds.height).max(0.0);
        let mut added = 0;
        for id in wanted {
            if present.contains(&id) {
                continue;
            }
            let (position, velocity) = spawn(center, ring, rng);
            self.nodes.push(Node::moving(id, position, velocity, size));
            added += 1;
        }

        let report = ReconcileReport {
            added,
            removed,
            retained,
        };
        tracing::debug!(
            added = report.added,
            removed = report.removed,
            retained = report.retained,
            size,
            "reconciled sticker nodes"
        );
        report
    }
}

fn spawn<R: Rng>(center: Point, ring: f64, rng: &mut R) -> (Point, Vec2) {
    let angle = rng.random_range(0.0..TAU);
    let radius = if ring > 0.0 {
        rng.random_range(SPAWN_MIN_RADIUS..SPAWN_MIN_RADIUS + ring)
    } else {
        SPAWN_MIN_RADIUS
    };
    let position = center + Vec2::from_angle(angle) * radius;
    let velocity = Vec2::new(rng.random_range(-1.0..=1.0), rng.random_range(-1.0..=1.0));
    (position, velocity)
}
