// Copyright 2026 the Stickerfield Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The canvas facade tying simulation, gestures and the frame loop together.

use kurbo::{Point, Rect, Size};
use rand::SeedableRng;
use rand::rngs::StdRng;
use stickerfield_gesture::{
    DragFlags, GestureMode, GestureResponse, GestureRouter, HitTarget, InputEvent,
};
use stickerfield_sim::{
    Integrator, NodeId, NodeStore, PhysicsConfig, ReconcileReport, StickerSource,
};
use stickerfield_view::{CanvasTransform, TransformState};

use crate::activation::Activation;
use crate::config::CanvasConfig;
use crate::cull::{VisibleNode, visible_nodes};
use crate::frame::{FrameRequest, FrameScheduler};
use crate::throttle::{ObserverId, RedrawObservers, RedrawThrottle};

/// Gives the gesture router write access to drag flags and nothing else.
struct DragFlagWriter<'a>(&'a mut NodeStore);

impl DragFlags<NodeId> for DragFlagWriter<'_> {
    fn set_dragging(&mut self, key: &NodeId, dragging: bool) -> bool {
        self.0.set_dragging(key, dragging)
    }
}

/// A force-directed sticker canvas.
///
/// `PhysicsCanvas` owns the node store, the transform and the gesture state,
/// and is driven from three directions:
///
/// - the host's data layer calls [`set_stickers`](Self::set_stickers) with
///   the current list and node size;
/// - the host's input layer forwards events to
///   [`handle_input`](Self::handle_input), classifying presses with
///   [`target_at`](Self::target_at);
/// - the frame scheduler calls [`on_animation_frame`](Self::on_animation_frame)
///   once per requested frame, between [`mount`](Self::mount) and
///   [`unmount`](Self::unmount).
///
/// Renderers subscribe for throttled redraw signals and read
/// [`visible_nodes`](Self::visible_nodes) and [`transform`](Self::transform)
/// when told to.
///
/// Dropping the canvas cancels its pending frame.
#[derive(Debug)]
pub struct PhysicsCanvas<S: FrameScheduler> {
    config: CanvasConfig,
    transform: CanvasTransform,
    store: NodeStore,
    integrator: Integrator,
    router: GestureRouter<NodeId>,
    rng: StdRng,
    scheduler: S,
    pending: Option<FrameRequest>,
    throttle: RedrawThrottle,
    observers: RedrawObservers,
    activation: Activation,
    // Paths and size of the last reconciled input.
    input: Option<(Vec<String>, f64)>,
}

impl<S: FrameScheduler> PhysicsCanvas<S> {
    /// Creates an unmounted canvas with randomly seeded placement.
    pub fn new(view_size: Size, scheduler: S) -> Self {
        Self::with_rng(view_size, scheduler, StdRng::from_rng(&mut rand::rng()))
    }

    /// Creates an unmounted canvas whose node placement is reproducible.
    pub fn with_seed(view_size: Size, scheduler: S, seed: u64) -> Self {
        Self::with_rng(view_size, scheduler, StdRng::seed_from_u64(seed))
    }

    fn with_rng(view_size: Size, scheduler: S, rng: StdRng) -> Self {
        let config = CanvasConfig::default();
        let transform = CanvasTransform::new(view_size);
        if transform.view_size() != view_size {
            tracing::warn!(?view_size, "degenerate view size, using fallback");
        }
        Self {
            config,
            transform,
            store: NodeStore::new(),
            integrator: Integrator::new(PhysicsConfig::default()),
            router: GestureRouter::new(config.gesture()),
            rng,
            scheduler,
            pending: None,
            throttle: RedrawThrottle::new(config.redraw_interval_ms),
            observers: RedrawObservers::default(),
            activation: Activation::default(),
            input: None,
        }
    }

    /// Current canvas settings.
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Replaces the canvas settings.
    ///
    /// Any gesture in progress is abandoned, since tap tolerances live in
    /// the gesture router.
    pub fn set_config(&mut self, config: CanvasConfig) {
        let sanitized = config.sanitized();
        if sanitized != config {
            tracing::warn!(?config, ?sanitized, "canvas config out of range, replaced");
        }
        self.config = sanitized;
        self.throttle = RedrawThrottle::new(sanitized.redraw_interval_ms);
        self.router = GestureRouter::new(sanitized.gesture());
        self.store.release_all();
    }

    /// Current physics tunables, as clamped for use.
    pub fn physics_config(&self) -> &PhysicsConfig {
        self.integrator.config()
    }

    /// Replaces the physics tunables; out-of-range values are clamped.
    pub fn set_physics_config(&mut self, config: PhysicsConfig) {
        self.integrator.set_config(config);
    }

    /// Sets the center attraction.
    pub fn set_attraction(&mut self, attraction: f64) {
        let mut config = *self.integrator.config();
        config.set_attraction(attraction);
        self.integrator.set_config(config);
    }

    /// Sets the repulsion strength.
    pub fn set_repulsion(&mut self, repulsion: f64) {
        let mut config = *self.integrator.config();
        config.set_repulsion(repulsion);
        self.integrator.set_config(config);
    }

    /// Starts the frame loop. Does nothing if it is already running.
    pub fn mount(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.scheduler.request_frame());
            self.throttle.reset();
            tracing::debug!("frame loop mounted");
        }
    }

    /// Stops the frame loop and abandons any gesture in progress.
    pub fn unmount(&mut self) {
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel_frame(request);
            tracing::debug!("frame loop unmounted");
        }
        self.router.handle(
            InputEvent::PointerLeave,
            &mut self.transform,
            &mut DragFlagWriter(&mut self.store),
        );
    }

    /// Returns `true` while a frame is requested.
    pub fn is_mounted(&self) -> bool {
        self.pending.is_some()
    }

    /// Runs one animation frame.
    ///
    /// Steps the simulation when there are nodes, requests the next frame
    /// either way, and tells observers to redraw if the throttle allows.
    /// A frame arriving while unmounted is ignored.
    pub fn on_animation_frame(&mut self, now_ms: u64) {
        if self.pending.take().is_none() {
            tracing::trace!(now_ms, "frame while unmounted, ignored");
            return;
        }
        if !self.store.is_empty() {
            self.integrator.step(
                &mut self.store,
                self.transform.view_size(),
                self.router.drag_pointer(),
            );
        }
        self.pending = Some(self.scheduler.request_frame());

        if self.throttle.ready(now_ms) {
            tracing::trace!(now_ms, nodes = self.store.len(), "redraw");
            self.observers.notify(now_ms);
        }
    }

    /// Brings the nodes in line with a sticker list and node size.
    ///
    /// Reconciles only when the list's paths or the size differ from the
    /// previous call; returns `None` when nothing changed. A drag whose node
    /// left the list ends here, as if the pointer had been released.
    pub fn set_stickers<T: StickerSource>(
        &mut self,
        stickers: &[T],
        size: f64,
    ) -> Option<ReconcileReport> {
        if let Some((paths, previous_size)) = &self.input
            && previous_size.to_bits() == size.to_bits()
            && paths.len() == stickers.len()
            && paths
                .iter()
                .zip(stickers)
                .all(|(path, sticker)| path == sticker.sticker_path())
        {
            return None;
        }
        let report = self.store.reconcile(
            stickers,
            size,
            self.transform.view_size(),
            &mut self.rng,
        );
        let orphaned = self
            .router
            .drag_target()
            .is_some_and(|id| self.store.get(id).is_none());
        if orphaned {
            tracing::debug!("dragged sticker removed, ending drag");
            self.router.handle(
                InputEvent::PointerUp,
                &mut self.transform,
                &mut DragFlagWriter(&mut self.store),
            );
        }
        self.input = Some((
            stickers
                .iter()
                .map(|s| s.sticker_path().to_owned())
                .collect(),
            size,
        ));
        Some(report)
    }

    /// Forwards an input event to the gesture router.
    ///
    /// Activations go to the handler, or to the fallback preview when none
    /// is set.
    pub fn handle_input(&mut self, event: InputEvent<NodeId>) -> GestureResponse<NodeId> {
        let response = self.router.handle(
            event,
            &mut self.transform,
            &mut DragFlagWriter(&mut self.store),
        );
        if let Some(id) = &response.activated {
            self.activation.activate(id.path());
        }
        response
    }

    /// The topmost drawn node under a screen point.
    pub fn hit_test(&self, screen: Point) -> Option<NodeId> {
        let canvas = self.transform.screen_to_canvas_point(screen);
        visible_nodes(self.store.nodes(), &self.transform, self.config.cull_buffer)
            .filter(|node| {
                Rect::from_center_size(node.position, Size::new(node.size, node.size))
                    .contains(canvas)
            })
            .last()
            .map(|node| node.id.clone())
    }

    /// What a press at `screen` lands on.
    pub fn target_at(&self, screen: Point) -> HitTarget<NodeId> {
        match self.hit_test(screen) {
            Some(id) => HitTarget::Node(id),
            None => HitTarget::Background,
        }
    }

    /// Nodes overlapping the buffered viewport, in draw order.
    pub fn visible_nodes(&self) -> Vec<VisibleNode<'_>> {
        visible_nodes(self.store.nodes(), &self.transform, self.config.cull_buffer).collect()
    }

    /// All nodes, read-only.
    pub fn store(&self) -> &NodeStore {
        &self.store
    }

    /// What the pointer is doing right now.
    pub fn gesture_mode(&self) -> &GestureMode<NodeId> {
        self.router.mode()
    }

    /// The current pan and zoom.
    pub fn transform(&self) -> &CanvasTransform {
        &self.transform
    }

    /// The current pan and zoom as plain numbers.
    pub fn transform_state(&self) -> TransformState {
        self.transform.state()
    }

    /// Updates the logical viewport size, e.g. after a layout change.
    pub fn set_view_size(&mut self, size: Size) {
        if !self.transform.set_view_size(size) {
            tracing::warn!(?size, "degenerate view size, using fallback");
        }
    }

    /// Subscribes to redraw signals.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(u64) + 'static,
    {
        self.observers.subscribe(observer)
    }

    /// Removes a redraw subscription.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Installs the host's activation handler.
    pub fn set_activation_handler<F>(&mut self, handler: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.activation.set_handler(Some(Box::new(handler)));
    }

    /// Removes the activation handler; activations go to the fallback preview.
    pub fn clear_activation_handler(&mut self) {
        self.activation.set_handler(None);
    }

    /// Path shown by the fallback preview, if any.
    pub fn fallback_preview(&self) -> Option<&str> {
        self.activation.fallback.current()
    }

    /// Closes the fallback preview.
    pub fn dismiss_preview(&mut self) -> Option<String> {
        self.activation.fallback.dismiss()
    }
}

impl<S: FrameScheduler> Drop for PhysicsCanvas<S> {
    fn drop(&mut self) {
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel_frame(request);
            tracing::debug!("pending frame cancelled on drop");
        }
    }
}
