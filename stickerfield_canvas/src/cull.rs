// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport culling and the read-only node projection handed to renderers.

use kurbo::{Point, Rect};
use stickerfield_sim::{Node, NodeId};
use stickerfield_view::CanvasTransform;

/// What a renderer needs to place one sticker.
///
/// Borrowed from the node store; it cannot be used to change a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleNode<'a> {
    /// Stable identity.
    pub id: &'a NodeId,
    /// Center in canvas space.
    pub position: Point,
    /// Display diameter.
    pub size: f64,
    /// Whether the node is held by a drag.
    pub dragging: bool,
}

impl<'a> VisibleNode<'a> {
    /// Image locator.
    #[must_use]
    pub fn path(&self) -> &'a str {
        self.id.path()
    }

    fn of(node: &'a Node) -> Self {
        Self {
            id: node.id(),
            position: node.position(),
            size: node.size(),
            dragging: node.is_dragging(),
        }
    }
}

/// Canvas rectangle nodes must overlap to be drawn: the visible area grown
/// by `buffer` on every side.
#[must_use]
pub fn cull_rect(transform: &CanvasTransform, buffer: f64) -> Rect {
    transform.visible_canvas_rect().inflate(buffer, buffer)
}

/// Returns `true` if the node's square footprint strictly overlaps `area`.
///
/// Touching an edge is not enough. A footprint that crosses the edge is.
#[must_use]
pub fn overlaps(position: Point, size: f64, area: Rect) -> bool {
    let half = size / 2.0;
    position.x + half > area.x0
        && position.x - half < area.x1
        && position.y + half > area.y0
        && position.y - half < area.y1
}

/// The nodes worth drawing under `transform`, in store order.
pub fn visible_nodes<'a>(
    nodes: &'a [Node],
    transform: &CanvasTransform,
    buffer: f64,
) -> impl Iterator<Item = VisibleNode<'a>> + use<'a> {
    let area = cull_rect(transform, buffer);
    nodes
        .iter()
        .filter(move |node| overlaps(node.position(), node.size(), area))
        .map(VisibleNode::of)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};
    use stickerfield_sim::{Node, NodeId};
    use stickerfield_view::CanvasTransform;

    use super::{cull_rect, overlaps, visible_nodes};

    #[test]
    fn cull_rect_is_buffered_inverse_view() {
        let mut t = CanvasTransform::new(Size::new(800.0, 600.0));
        t.pan_by_screen(Vec2::new(100.0, -60.0));
        t.set_scale(2.0);
        // left = -tx/s, right = (W - tx)/s
        let rect = cull_rect(&t, 200.0);
        assert_eq!(rect, Rect::new(-250.0, -170.0, 550.0, 530.0));
    }

    #[test]
    fn edge_contact_is_not_overlap() {
        let area = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!overlaps(Point::new(-10.0, 50.0), 20.0, area));
        assert!(overlaps(Point::new(-9.0, 50.0), 20.0, area));
        assert!(!overlaps(Point::new(50.0, 110.0), 20.0, area));
        assert!(overlaps(Point::new(50.0, 109.0), 20.0, area));
    }

    #[test]
    fn culled_nodes_keep_store_order() {
        let t = CanvasTransform::new(Size::new(800.0, 600.0));
        let nodes = vec![
            Node::at(NodeId::new("a", 0), Point::new(700.0, 100.0), 100.0),
            Node::at(NodeId::new("b", 1), Point::new(5000.0, 100.0), 100.0),
            Node::at(NodeId::new("c", 2), Point::new(-100.0, -100.0), 100.0),
        ];
        let visible: Vec<_> = visible_nodes(&nodes, &t, 200.0).map(|v| v.path()).collect();
        assert_eq!(visible, ["a", "c"]);
    }
}
