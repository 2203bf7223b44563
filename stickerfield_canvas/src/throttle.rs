// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Redraw notification throttling and the observer list it feeds.

use core::fmt;

/// Lets a signal through at most once per interval.
///
/// The first call always passes. Time only needs to be monotonic; a clock
/// that jumps backwards is treated as no time having passed.
#[derive(Clone, Copy, Debug)]
pub struct RedrawThrottle {
    interval_ms: u64,
    last: Option<u64>,
}

impl RedrawThrottle {
    /// Creates a throttle with the given minimum spacing.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last: None,
        }
    }

    /// Returns `true` if a signal at `now_ms` may go out, and records it.
    pub fn ready(&mut self, now_ms: u64) -> bool {
        match self.last {
            Some(last) if now_ms.saturating_sub(last) < self.interval_ms => false,
            _ => {
                self.last = Some(now_ms);
                true
            }
        }
    }

    /// Forgets the last signal so the next one passes immediately.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Handle returned by [`RedrawObservers::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(u64)>;

/// Callbacks told that node state is worth re-reading.
///
/// Each callback gets the frame time of the notification.
#[derive(Default)]
pub struct RedrawObservers {
    next: u64,
    entries: Vec<(ObserverId, Observer)>,
}

impl fmt::Debug for RedrawObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedrawObservers")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl RedrawObservers {
    /// Adds a callback.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(u64) + 'static,
    {
        let id = ObserverId(self.next);
        self.next += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Removes a callback; returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Number of subscribed callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nobody is listening.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Calls every callback in subscription order.
    pub fn notify(&mut self, now_ms: u64) {
        for (_, observer) in &mut self.entries {
            observer(now_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::{RedrawObservers, RedrawThrottle};

    #[test]
    fn throttle_spaces_signals() {
        let mut throttle = RedrawThrottle::new(33);
        let passed: Vec<u64> = (0..=100)
            .step_by(16)
            .filter(|&t| throttle.ready(t))
            .collect();
        assert_eq!(passed, [0, 48, 96]);
    }

    #[test]
    fn throttle_tolerates_clock_going_back() {
        let mut throttle = RedrawThrottle::new(33);
        assert!(throttle.ready(1000));
        assert!(!throttle.ready(10));
        throttle.reset();
        assert!(throttle.ready(10));
    }

    #[test]
    fn observers_subscribe_and_unsubscribe() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = RedrawObservers::default();

        let log = seen.clone();
        let a = observers.subscribe(move |t| log.borrow_mut().push(("a", t)));
        let log = seen.clone();
        observers.subscribe(move |t| log.borrow_mut().push(("b", t)));

        observers.notify(5);
        assert!(observers.unsubscribe(a));
        assert!(!observers.unsubscribe(a));
        observers.notify(40);

        assert_eq!(*seen.borrow(), [("a", 5), ("b", 5), ("b", 40)]);
        assert_eq!(observers.len(), 1);
    }
}
