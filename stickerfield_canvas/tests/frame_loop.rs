// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame loop lifecycle: scheduling, self-rescheduling, cancellation and
//! redraw throttling.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::Size;
use stickerfield_canvas::{ManualFrameClock, PhysicsCanvas};

fn canvas(clock: &ManualFrameClock) -> PhysicsCanvas<ManualFrameClock> {
    PhysicsCanvas::with_seed(Size::new(800.0, 600.0), clock.clone(), 11)
}

/// Delivers pending frames 16 ms apart, starting at `start`.
fn run_frames(
    clock: &ManualFrameClock,
    canvas: &mut PhysicsCanvas<ManualFrameClock>,
    start: u64,
    frames: u64,
) {
    for i in 0..frames {
        if clock.fire().is_none() {
            return;
        }
        canvas.on_animation_frame(start + i * 16);
    }
}

#[test]
fn mount_requests_and_every_frame_reschedules() {
    let clock = ManualFrameClock::new();
    let mut canvas = canvas(&clock);
    assert_eq!(clock.pending(), None);

    canvas.mount();
    canvas.mount();
    assert_eq!(clock.requested(), 1);
    assert!(canvas.is_mounted());

    run_frames(&clock, &mut canvas, 0, 10);
    assert_eq!(clock.requested(), 11);
    assert!(clock.pending().is_some());
}

#[test]
fn empty_canvas_keeps_scheduling_and_picks_up_new_nodes() {
    let clock = ManualFrameClock::new();
    let mut canvas = canvas(&clock);
    canvas.mount();
    run_frames(&clock, &mut canvas, 0, 5);
    assert!(clock.pending().is_some());
    assert!(canvas.store().is_empty());

    canvas.set_stickers(&["/s/a.png"], 100.0);
    let before = canvas.store().nodes()[0].position();
    run_frames(&clock, &mut canvas, 80, 1);
    assert_ne!(canvas.store().nodes()[0].position(), before);
}

#[test]
fn unmount_cancels_pending_frame() {
    let clock = ManualFrameClock::new();
    let mut canvas = canvas(&clock);
    canvas.set_stickers(&["/s/a.png"], 100.0);
    canvas.mount();
    run_frames(&clock, &mut canvas, 0, 3);

    canvas.unmount();
    assert_eq!(clock.pending(), None);
    assert_eq!(clock.cancelled(), 1);
    assert!(!canvas.is_mounted());

    // A late frame from the host is ignored and does not restart the loop.
    let before = canvas.store().nodes()[0].position();
    canvas.on_animation_frame(1000);
    assert_eq!(canvas.store().nodes()[0].position(), before);
    assert_eq!(clock.pending(), None);

    canvas.mount();
    assert!(clock.pending().is_some());
}

#[test]
fn drop_cancels_pending_frame() {
    let clock = ManualFrameClock::new();
    {
        let mut canvas = canvas(&clock);
        canvas.mount();
        run_frames(&clock, &mut canvas, 0, 2);
    }
    assert_eq!(clock.pending(), None);
    assert_eq!(clock.cancelled(), 1);
}

#[test]
fn dropping_unmounted_canvas_cancels_nothing() {
    let clock = ManualFrameClock::new();
    drop(canvas(&clock));
    assert_eq!(clock.cancelled(), 0);
}

#[test]
fn redraw_signals_are_throttled_but_physics_is_not() {
    let clock = ManualFrameClock::new();
    let mut canvas = canvas(&clock);
    canvas.set_stickers(&["/s/a.png", "/s/b.png"], 100.0);

    let redraws = Rc::new(RefCell::new(Vec::new()));
    let log = redraws.clone();
    let id = canvas.subscribe(move |now| log.borrow_mut().push(now));

    canvas.mount();
    let mut positions = Vec::new();
    for i in 0..7 {
        clock.fire();
        canvas.on_animation_frame(i * 16);
        positions.push(canvas.store().nodes()[0].position());
    }
    // Frames at 0, 16, ..., 96; signals at least 33 ms apart.
    assert_eq!(*redraws.borrow(), [0, 48, 96]);
    // Every frame moved the node.
    assert!(positions.windows(2).all(|w| w[0] != w[1]));

    assert!(canvas.unsubscribe(id));
    clock.fire();
    canvas.on_animation_frame(500);
    assert_eq!(redraws.borrow().len(), 3);
}
