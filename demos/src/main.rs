// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless sticker canvas.
//!
//! Loads a cluster snapshot (or makes up a few stickers), runs the
//! simulation for a number of frames on a manual clock, optionally drags one
//! sticker across the canvas, and prints where everything ended up.
//!
//! ```text
//! RUST_LOG=debug cargo run -p stickerfield_demos -- --snapshot clusters.json --group 3
//! ```

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use kurbo::{Point, Size};
use stickerfield_canvas::{ClusterSnapshot, ManualFrameClock, PhysicsCanvas, StickerRecord};
use stickerfield_gesture::{HitTarget, InputEvent};
use stickerfield_sim::PhysicsConfig;
use tracing_subscriber::EnvFilter;

/// Frame spacing of a 60 Hz display.
const FRAME_MS: u64 = 16;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cluster snapshot JSON to load stickers from
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Show only this cluster; all stickers when omitted
    #[arg(short, long)]
    group: Option<i64>,

    /// Physics tunables as JSON; missing fields keep their defaults
    #[arg(long)]
    physics: Option<PathBuf>,

    /// Number of made-up stickers when no snapshot is given
    #[arg(long, default_value_t = 12)]
    count: usize,

    /// Sticker size in logical pixels
    #[arg(long, default_value_t = 100.0)]
    size: f64,

    /// Viewport width
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Viewport height
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Seed for sticker placement
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Drag the first visible sticker to this screen point, as `x,y`
    #[arg(long, value_parser = parse_point)]
    drag_to: Option<Point>,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok(Point::new(x, y))
}

fn load_stickers(args: &Args) -> Result<Vec<StickerRecord>> {
    let Some(path) = &args.snapshot else {
        return Ok((0..args.count)
            .map(|i| StickerRecord::new(format!("/static/sticker_{i:03}.png")))
            .collect());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading snapshot {}", path.display()))?;
    let snapshot = ClusterSnapshot::from_json(&json)
        .with_context(|| format!("parsing snapshot {}", path.display()))?;
    let stickers = match args.group {
        Some(id) => snapshot.group_stickers(id),
        None => snapshot.all_stickers(),
    };
    if stickers.is_empty() {
        bail!("no stickers to show");
    }
    Ok(stickers)
}

fn run(
    canvas: &mut PhysicsCanvas<ManualFrameClock>,
    clock: &ManualFrameClock,
    now: &mut u64,
    frames: u64,
) {
    for _ in 0..frames {
        if clock.fire().is_none() {
            break;
        }
        canvas.on_animation_frame(*now);
        *now += FRAME_MS;
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let stickers = load_stickers(&args)?;
    let clock = ManualFrameClock::new();
    let mut canvas =
        PhysicsCanvas::with_seed(Size::new(args.width, args.height), clock.clone(), args.seed);
    if let Some(path) = &args.physics {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading physics config {}", path.display()))?;
        let config: PhysicsConfig = serde_json::from_str(&json)
            .with_context(|| format!("parsing physics config {}", path.display()))?;
        canvas.set_physics_config(config);
    }

    let redraws = Rc::new(Cell::new(0_usize));
    let counter = redraws.clone();
    canvas.subscribe(move |_| counter.set(counter.get() + 1));
    canvas.set_activation_handler(|path| println!("activated {path}"));

    canvas.set_stickers(&stickers, args.size);
    canvas.mount();

    let mut now = 0;
    run(&mut canvas, &clock, &mut now, args.frames);

    if let Some(to) = args.drag_to {
        let grabbed = canvas.visible_nodes().first().map(|n| n.position);
        if let Some(from) = grabbed.map(|p| canvas.transform().canvas_to_screen_point(p)) {
            let target = canvas.target_at(from);
            if let HitTarget::Node(id) = &target {
                println!("dragging {id} to ({}, {})", to.x, to.y);
            }
            canvas.handle_input(InputEvent::PointerDown {
                position: from,
                target,
            });
            canvas.handle_input(InputEvent::PointerMove { position: to });
            run(&mut canvas, &clock, &mut now, 30);
            canvas.handle_input(InputEvent::PointerUp);
            run(&mut canvas, &clock, &mut now, args.frames);
        }
    }

    let state = canvas.transform_state();
    println!(
        "{} stickers, {} visible, {} redraws over {} ms, zoom {:.0}%",
        canvas.store().len(),
        canvas.visible_nodes().len(),
        redraws.get(),
        now,
        state.zoom_percent(),
    );
    for node in canvas.visible_nodes() {
        println!(
            "{:>8.1} {:>8.1}  {}",
            node.position.x,
            node.position.y,
            node.path()
        );
    }

    canvas.unmount();
    Ok(())
}
