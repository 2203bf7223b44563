// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use rand::SeedableRng;
use rand::rngs::StdRng;
use stickerfield_sim::{Integrator, NodeStore, PhysicsConfig};

const BOUNDS: Size = Size::new(800.0, 600.0);

fn build_store(n: usize, seed: u64) -> NodeStore {
    let paths: Vec<String> = (0..n).map(|i| format!("/static/s{i}.png")).collect();
    let mut store = NodeStore::new();
    let mut rng = StdRng::seed_from_u64(seed);
    store.reconcile(paths.as_slice(), 100.0, BOUNDS, &mut rng);
    store
}

fn bench_integrator(c: &mut Criterion) {
    let mut group = c.benchmark_group("stickerfield_integrator");
    group.sample_size(50);

    for &n in &[16_usize, 64, 256, 1_024] {
        group.bench_function(format!("step(n={n})"), |b| {
            let mut integrator = Integrator::new(PhysicsConfig::default());
            b.iter_batched(
                || build_store(n, 0x57C1_0000_0000_0001),
                |mut store| {
                    integrator.step(&mut store, BOUNDS, None);
                    black_box(store);
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_function(format!("step_settled_with_drag(n={n})"), |b| {
            let mut integrator = Integrator::new(PhysicsConfig::default());
            let mut store = build_store(n, 0x57C1_0000_0000_0002);
            for _ in 0..200 {
                integrator.step(&mut store, BOUNDS, None);
            }
            let dragged = store.nodes()[0].id().clone();
            store.set_dragging(&dragged, true);
            let pointer = Some(Point::new(120.0, 80.0));
            b.iter(|| {
                integrator.step(&mut store, BOUNDS, pointer);
                black_box(store.nodes()[n / 2].position());
            });
        });
    }

    group.bench_function("reconcile_shift_by_one(n=256)", |b| {
        let paths: Vec<String> = (0..257).map(|i| format!("/static/s{i}.png")).collect();
        let mut rng = StdRng::seed_from_u64(0x57C1_0000_0000_0003);
        b.iter_batched(
            || build_store(256, 0x57C1_0000_0000_0004),
            |mut store| {
                let report = store.reconcile(&paths[1..], 100.0, BOUNDS, &mut rng);
                black_box(report);
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_integrator);
criterion_main!(benches);
