// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use stickerfield_canvas::visible_nodes;
use stickerfield_sim::{Node, NodeId};
use stickerfield_view::CanvasTransform;

/// Nodes on a square grid, 150 canvas units apart, centered on the origin.
fn grid(side: usize) -> Vec<Node> {
    let offset = side as f64 * 75.0;
    (0..side * side)
        .map(|i| {
            let position = Point::new(
                (i % side) as f64 * 150.0 - offset,
                (i / side) as f64 * 150.0 - offset,
            );
            Node::at(NodeId::new(format!("/static/s{i}.png"), i), position, 100.0)
        })
        .collect()
}

fn bench_culling(c: &mut Criterion) {
    let mut group = c.benchmark_group("stickerfield_culling");

    for &side in &[16_usize, 64] {
        let nodes = grid(side);
        for &scale in &[0.2, 1.0, 3.0] {
            let mut transform = CanvasTransform::new(Size::new(1280.0, 800.0));
            transform.pan_by_screen(Vec2::new(640.0, 400.0));
            transform.set_scale(scale);
            let n = side * side;
            group.bench_function(format!("visible_nodes(n={n},scale={scale})"), |b| {
                b.iter(|| black_box(visible_nodes(&nodes, &transform, 200.0).count()));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_culling);
criterion_main!(benches);
