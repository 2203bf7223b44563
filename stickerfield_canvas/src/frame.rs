// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame-timing seam between the canvas and its host.

use std::cell::RefCell;
use std::rc::Rc;

/// Handle of one requested animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// The host's frame-timing primitive.
///
/// A request asks for exactly one callback. When the frame comes, the host
/// calls [`PhysicsCanvas::on_animation_frame`](crate::PhysicsCanvas::on_animation_frame);
/// the canvas asks for the next frame itself. A cancelled request must not
/// be delivered.
pub trait FrameScheduler {
    /// Asks for one callback on the next frame.
    fn request_frame(&mut self) -> FrameRequest;

    /// Withdraws a request that has not fired yet.
    fn cancel_frame(&mut self, request: FrameRequest);
}

#[derive(Debug, Default)]
struct ClockState {
    next: u64,
    pending: Option<FrameRequest>,
    requested: usize,
    cancelled: usize,
}

/// A frame scheduler driven by hand, for tests and headless hosts.
///
/// Clones share state, so a test can hand one clone to the canvas and keep
/// another to see what is pending and to fire it.
#[derive(Clone, Debug, Default)]
pub struct ManualFrameClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualFrameClock {
    /// Creates a clock with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The request waiting to fire, if any.
    #[must_use]
    pub fn pending(&self) -> Option<FrameRequest> {
        self.state.borrow().pending
    }

    /// Takes the pending request so the caller can deliver the frame.
    ///
    /// Returns `None` when nothing was requested or the request was cancelled.
    pub fn fire(&self) -> Option<FrameRequest> {
        self.state.borrow_mut().pending.take()
    }

    /// Number of requests made so far.
    #[must_use]
    pub fn requested(&self) -> usize {
        self.state.borrow().requested
    }

    /// Number of requests withdrawn before they fired.
    #[must_use]
    pub fn cancelled(&self) -> usize {
        self.state.borrow().cancelled
    }
}

impl FrameScheduler for ManualFrameClock {
    fn request_frame(&mut self) -> FrameRequest {
        let mut state = self.state.borrow_mut();
        let request = FrameRequest(state.next);
        state.next += 1;
        state.requested += 1;
        state.pending = Some(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        let mut state = self.state.borrow_mut();
        if state.pending == Some(request) {
            state.pending = None;
            state.cancelled += 1;
        }
    }
}
