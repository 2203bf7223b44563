// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine.

use core::fmt::Debug;

use kurbo::Point;
use smallvec::SmallVec;
use stickerfield_view::{CanvasTransform, WheelZoom};

use crate::pinch::PinchState;
use crate::tap::DoubleTap;
use crate::track::PointerTrack;

/// Positions of all touch points currently on the surface.
pub type TouchPoints = SmallVec<[Point; 2]>;

/// What a press landed on, as resolved by the host's hit test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget<K> {
    /// The pannable canvas surface.
    Background,
    /// A sticker node.
    Node(K),
}

/// Raw input delivered by the host.
///
/// Pointer events cover mouse and pen; touch events carry the full list of
/// touches still on the surface, as browsers report them. Times are in
/// milliseconds on any monotonic clock.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent<K> {
    /// A mouse button or pen went down.
    PointerDown {
        /// Screen position.
        position: Point,
        /// What was hit.
        target: HitTarget<K>,
    },
    /// The pointer moved.
    PointerMove {
        /// Screen position.
        position: Point,
    },
    /// The pointer was released.
    PointerUp,
    /// The pointer left the canvas.
    PointerLeave,
    /// One or more touches began.
    TouchStart {
        /// All touches now on the surface.
        touches: TouchPoints,
        /// What the newest touch hit.
        target: HitTarget<K>,
    },
    /// Touches moved.
    TouchMove {
        /// All touches now on the surface.
        touches: TouchPoints,
    },
    /// A touch ended or was cancelled.
    TouchEnd {
        /// Event time.
        time_ms: u64,
    },
    /// A wheel notch.
    Wheel {
        /// Mouse position in screen space.
        position: Point,
        /// Raw vertical delta; only its sign matters.
        delta_y: f64,
    },
    /// The platform reported a double click.
    DoubleClick {
        /// What was hit.
        target: HitTarget<K>,
    },
}

/// Write access the router needs into the node store: the drag flag only.
pub trait DragFlags<K> {
    /// Sets or clears the drag flag on `key`; returns `false` if it is unknown.
    fn set_dragging(&mut self, key: &K, dragging: bool) -> bool;
}

/// Current interaction mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GestureMode<K> {
    /// Nothing pressed.
    Idle,
    /// One point down on the background; moves pan the canvas.
    Panning,
    /// One point down on a node; moves drag it.
    Dragging(K),
    /// Two points down; moves zoom about their midpoint.
    Pinching,
}

/// What handling one event changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GestureResponse<K> {
    /// The transform was panned or zoomed.
    pub transform_changed: bool,
    /// A drag began on this node.
    pub drag_started: Option<K>,
    /// A drag on this node ended.
    pub drag_ended: Option<K>,
    /// This node was double-activated.
    pub activated: Option<K>,
}

impl<K> Default for GestureResponse<K> {
    fn default() -> Self {
        Self {
            transform_changed: false,
            drag_started: None,
            drag_ended: None,
            activated: None,
        }
    }
}

/// Tolerances for tap recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Longest gap between the two taps of a double tap.
    pub double_tap_interval_ms: u64,
    /// Farthest a pointer may move and still count as a tap, and farthest
    /// apart the two taps of a double tap may be, in screen pixels.
    pub tap_slop: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_tap_interval_ms: 300,
            tap_slop: 10.0,
        }
    }
}

/// Turns raw pointer, touch and wheel input into pan, zoom and drag.
///
/// The router writes to exactly two places: the [`CanvasTransform`] (pan and
/// zoom) and, through [`DragFlags`], the drag flag of the node under a drag.
/// It never moves a node. Instead it keeps the pointer's canvas-space
/// position up to date in [`GestureRouter::drag_pointer`], which the physics
/// integrator reads every frame to place the dragged node.
#[derive(Debug)]
pub struct GestureRouter<K> {
    mode: GestureMode<K>,
    track: PointerTrack,
    pinch: PinchState,
    drag_pointer: Option<Point>,
    taps: DoubleTap<K>,
    tap_slop: f64,
    // Node under a single touch that may still turn out to be a tap.
    tap_candidate: Option<K>,
}

impl<K> Default for GestureRouter<K>
where
    K: Clone + PartialEq + Debug,
{
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl<K> GestureRouter<K>
where
    K: Clone + PartialEq + Debug,
{
    /// Creates an idle router.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            mode: GestureMode::Idle,
            track: PointerTrack::default(),
            pinch: PinchState::default(),
            drag_pointer: None,
            taps: DoubleTap::new(config.double_tap_interval_ms, config.tap_slop),
            tap_slop: config.tap_slop,
            tap_candidate: None,
        }
    }

    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> &GestureMode<K> {
        &self.mode
    }

    /// Node currently being dragged, if any.
    #[must_use]
    pub fn drag_target(&self) -> Option<&K> {
        match &self.mode {
            GestureMode::Dragging(key) => Some(key),
            _ => None,
        }
    }

    /// Canvas-space pointer position of the active drag.
    #[must_use]
    pub fn drag_pointer(&self) -> Option<Point> {
        match self.mode {
            GestureMode::Dragging(_) => self.drag_pointer,
            _ => None,
        }
    }

    /// Handles one input event.
    pub fn handle<F>(
        &mut self,
        event: InputEvent<K>,
        transform: &mut CanvasTransform,
        flags: &mut F,
    ) -> GestureResponse<K>
    where
        F: DragFlags<K> + ?Sized,
    {
        let mut response = GestureResponse::default();
        match event {
            InputEvent::PointerDown { position, target } => {
                self.press(position, target, transform, flags, &mut response);
            }
            InputEvent::PointerMove { position } => {
                self.move_single(position, transform, &mut response);
            }
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                self.release(flags, &mut response);
            }
            InputEvent::TouchStart { touches, target } => match touches.as_slice() {
                [] => {}
                [only] => {
                    self.press(*only, target.clone(), transform, flags, &mut response);
                    self.tap_candidate = match target {
                        HitTarget::Node(key) => Some(key),
                        HitTarget::Background => None,
                    };
                }
                [a, b, ..] => self.start_pinch(*a, *b, flags, &mut response),
            },
            InputEvent::TouchMove { touches } => match touches.as_slice() {
                [a, b, ..] if self.pinch.is_active() => {
                    if let Some(step) = self.pinch.update(*a, *b) {
                        let before = transform.state();
                        transform.zoom_about_screen_point(step.anchor, step.factor);
                        response.transform_changed = transform.state() != before;
                    }
                }
                [only] if !self.pinch.is_active() => {
                    self.move_single(*only, transform, &mut response);
                }
                _ => {}
            },
            InputEvent::TouchEnd { time_ms } => {
                let tapped = self.finished_tap();
                self.release(flags, &mut response);
                if let Some((key, pos)) = tapped
                    && self.taps.tap(key.clone(), pos, time_ms)
                {
                    tracing::debug!(?key, "double tap");
                    response.activated = Some(key);
                }
            }
            InputEvent::Wheel { position, delta_y } => {
                if let Some(notch) = WheelZoom::from_delta(delta_y) {
                    let before = transform.state();
                    transform.zoom_about_screen_point(position, notch.factor());
                    response.transform_changed = transform.state() != before;
                }
            }
            InputEvent::DoubleClick { target } => {
                if let HitTarget::Node(key) = target {
                    tracing::debug!(?key, "double click");
                    response.activated = Some(key);
                }
            }
        }
        response
    }

    fn press<F>(
        &mut self,
        position: Point,
        target: HitTarget<K>,
        transform: &CanvasTransform,
        flags: &mut F,
        response: &mut GestureResponse<K>,
    ) where
        F: DragFlags<K> + ?Sized,
    {
        // A stray press while something is held restarts cleanly.
        self.release(flags, response);
        self.track.start(position);

        if let HitTarget::Node(key) = target {
            if flags.set_dragging(&key, true) {
                tracing::debug!(?key, "drag started");
                self.drag_pointer = Some(transform.screen_to_canvas_point(position));
                response.drag_started = Some(key.clone());
                self.mode = GestureMode::Dragging(key);
                return;
            }
            tracing::debug!(?key, "press on unknown node, panning instead");
        }
        tracing::debug!("pan started");
        self.mode = GestureMode::Panning;
    }

    fn move_single(
        &mut self,
        position: Point,
        transform: &mut CanvasTransform,
        response: &mut GestureResponse<K>,
    ) {
        match self.mode {
            GestureMode::Panning => {
                if let Some(delta) = self.track.advance(position) {
                    transform.pan_by_screen(delta);
                    response.transform_changed = true;
                }
            }
            GestureMode::Dragging(_) => {
                self.track.advance(position);
                self.drag_pointer = Some(transform.screen_to_canvas_point(position));
            }
            GestureMode::Idle | GestureMode::Pinching => {}
        }
    }

    fn start_pinch<F>(
        &mut self,
        a: Point,
        b: Point,
        flags: &mut F,
        response: &mut GestureResponse<K>,
    ) where
        F: DragFlags<K> + ?Sized,
    {
        self.release(flags, response);
        self.taps.reset();
        tracing::debug!("pinch started");
        self.pinch.start(a, b);
        self.mode = GestureMode::Pinching;
    }

    /// Node and position of a single-touch press that ended close to where it began.
    fn finished_tap(&self) -> Option<(K, Point)> {
        let key = self.tap_candidate.clone()?;
        let pos = self.track.last()?;
        match self.track.travel(pos) {
            Some(travel) if travel <= self.tap_slop => Some((key, pos)),
            _ => None,
        }
    }

    fn release<F>(&mut self, flags: &mut F, response: &mut GestureResponse<K>)
    where
        F: DragFlags<K> + ?Sized,
    {
        match core::mem::replace(&mut self.mode, GestureMode::Idle) {
            GestureMode::Dragging(key) => {
                flags.set_dragging(&key, false);
                tracing::debug!(?key, "drag ended");
                response.drag_ended = Some(key);
            }
            GestureMode::Panning => tracing::debug!("pan ended"),
            GestureMode::Pinching => tracing::debug!("pinch ended"),
            GestureMode::Idle => {}
        }
        self.track.end();
        self.pinch.end();
        self.drag_pointer = None;
        self.tap_candidate = None;
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};
    use smallvec::smallvec;
    use stickerfield_view::CanvasTransform;

    use super::{DragFlags, GestureMode, GestureRouter, HitTarget, InputEvent};

    #[derive(Default)]
    struct Flags {
        known: Vec<u32>,
        dragging: Vec<u32>,
    }

    impl DragFlags<u32> for Flags {
        fn set_dragging(&mut self, key: &u32, dragging: bool) -> bool {
            if !self.known.contains(key) {
                return false;
            }
            self.dragging.retain(|k| k != key);
            if dragging {
                self.dragging.push(*key);
            }
            true
        }
    }

    fn setup() -> (GestureRouter<u32>, CanvasTransform, Flags) {
        let flags = Flags {
            known: vec![1, 2],
            dragging: Vec::new(),
        };
        (
            GestureRouter::default(),
            CanvasTransform::new(Size::new(800.0, 600.0)),
            flags,
        )
    }

    #[test]
    fn press_on_unknown_node_pans() {
        let (mut router, mut t, mut flags) = setup();
        let r = router.handle(
            InputEvent::PointerDown {
                position: Point::ORIGIN,
                target: HitTarget::Node(99),
            },
            &mut t,
            &mut flags,
        );
        assert_eq!(r.drag_started, None);
        assert_eq!(router.mode(), &GestureMode::Panning);
    }

    #[test]
    fn single_touch_moves_while_pinching_are_ignored() {
        let (mut router, mut t, mut flags) = setup();
        router.handle(
            InputEvent::TouchStart {
                touches: smallvec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)],
                target: HitTarget::Background,
            },
            &mut t,
            &mut flags,
        );
        let before = t.state();
        let r = router.handle(
            InputEvent::TouchMove {
                touches: smallvec![Point::new(50.0, 50.0)],
            },
            &mut t,
            &mut flags,
        );
        assert!(!r.transform_changed);
        assert_eq!(t.state(), before);
    }

    #[test]
    fn second_press_ends_previous_drag() {
        let (mut router, mut t, mut flags) = setup();
        router.handle(
            InputEvent::PointerDown {
                position: Point::ORIGIN,
                target: HitTarget::Node(1),
            },
            &mut t,
            &mut flags,
        );
        let r = router.handle(
            InputEvent::PointerDown {
                position: Point::ORIGIN,
                target: HitTarget::Node(2),
            },
            &mut t,
            &mut flags,
        );
        assert_eq!(r.drag_ended, Some(1));
        assert_eq!(r.drag_started, Some(2));
        assert_eq!(flags.dragging, vec![2]);
    }
}
