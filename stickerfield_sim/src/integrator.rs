// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame force integration.

use kurbo::{Point, Size, Vec2};

use crate::config::PhysicsConfig;
use crate::node::Node;
use crate::store::NodeStore;

/// Extra scaling of the soft boundary force; keeps the pull-back gentle.
const BOUNDARY_SOFTNESS: f64 = 0.01;

/// Advances the simulation one frame at a time.
///
/// The integrator holds a sanitized copy of the [`PhysicsConfig`] and a
/// force buffer reused across frames. Each [`Integrator::step`]:
///
/// 1. accumulates center attraction, pairwise repulsion (each unordered pair
///    once, equal and opposite) and the soft boundary for every node that is
///    not being dragged,
/// 2. damps velocities by the friction factor,
/// 3. moves every node by its velocity (explicit Euler, one substep).
///
/// A dragged node skips all of that: it is placed on the drag pointer and
/// its velocity is zeroed.
///
/// Repulsion is brute-force `O(n²)`, which is fine for the tens to low
/// hundreds of stickers shown at once.
#[derive(Clone, Debug)]
pub struct Integrator {
    config: PhysicsConfig,
    forces: Vec<Vec2>,
}

impl Integrator {
    /// Creates an integrator; `config` is sanitized first.
    #[must_use]
    pub fn new(config: PhysicsConfig) -> Self {
        let mut integrator = Self {
            config: PhysicsConfig::default(),
            forces: Vec::new(),
        };
        integrator.set_config(config);
        integrator
    }

    /// The sanitized configuration in use.
    #[must_use]
    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Replaces the configuration, clamping out-of-range values.
    pub fn set_config(&mut self, config: PhysicsConfig) {
        let sanitized = config.sanitized();
        if sanitized != config {
            tracing::warn!(?config, ?sanitized, "physics config out of range, clamped");
        }
        self.config = sanitized;
    }

    /// Runs one frame of the simulation over `store`.
    ///
    /// `bounds` is the logical viewport size: its center is the attraction
    /// target and its edges (plus the configured margin) define the soft
    /// boundary. `drag_pointer` is the canvas-space pointer position of the
    /// active drag, if any. Does nothing on an empty store.
    pub fn step(&mut self, store: &mut NodeStore, bounds: Size, drag_pointer: Option<Point>) {
        let nodes = store.nodes_mut();
        if nodes.is_empty() {
            return;
        }
        let config = self.config;
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);

        self.forces.clear();
        self.forces.resize(nodes.len(), Vec2::ZERO);
        let forces = &mut self.forces[..];

        for (node, force) in nodes.iter().zip(forces.iter_mut()) {
            if node.dragging {
                continue;
            }
            *force += (center - node.position) * config.attraction;
            *force += boundary_force(node.position, bounds, &config);
        }

        accumulate_repulsion(nodes, forces, &config);

        for (node, force) in nodes.iter_mut().zip(forces.iter()) {
            if node.dragging {
                if let Some(pointer) = drag_pointer {
                    node.position = pointer;
                }
                node.velocity = Vec2::ZERO;
                continue;
            }
            node.velocity = (node.velocity + *force) * config.friction;
            node.position += node.velocity;
        }

        tracing::trace!(nodes = nodes.len(), "physics step");
    }
}

fn accumulate_repulsion(nodes: &[Node], forces: &mut [Vec2], config: &PhysicsConfig) {
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let (a, b) = (&nodes[i], &nodes[j]);
            if a.dragging && b.dragging {
                continue;
            }
            let delta = a.position - b.position;
            let dist_sq = delta.hypot2().max(1.0);
            let min_dist = (a.size + b.size) / 2.0 + config.interaction_padding;
            let reach = min_dist * 2.0;
            if dist_sq >= reach * reach {
                continue;
            }
            let dist = dist_sq.sqrt();
            let magnitude = config.repulsion / dist_sq;
            let impulse = delta / dist * magnitude;
            if !a.dragging {
                forces[i] += impulse;
            }
            if !b.dragging {
                forces[j] -= impulse;
            }
        }
    }
}

fn boundary_force(position: Point, bounds: Size, config: &PhysicsConfig) -> Vec2 {
    let strength = config.boundary_force * BOUNDARY_SOFTNESS;
    let margin = config.boundary_margin;
    Vec2::new(
        axis_restoring(position.x, -margin, bounds.width + margin) * strength,
        axis_restoring(position.y, -margin, bounds.height + margin) * strength,
    )
}

/// Signed distance back into `[min, max]`, or zero when inside.
fn axis_restoring(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min - value
    } else if value > max {
        max - value
    } else {
        0.0
    }
}
