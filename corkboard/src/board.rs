// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::{Duration, Instant};

use corkboard_camera::Camera;
use corkboard_cull::worker::{VisibilityWorker, WorkerError};
use corkboard_cull::{Culler, VisibilityDiff, VisibilitySet};
use corkboard_frame::{Frame, FrameHost, FramePolicy, FrameScheduler, FrameStats};
use corkboard_input::event::{PointerEvent, WheelEvent};
use corkboard_input::{InputController, InputResponse, InputState};
use kurbo::Size;
use tracing::{debug, trace, warn};

use crate::card::{Card, CardId, CardMeta};
use crate::config::{BoardConfig, CullMode};
use crate::store::{CardStore, StoreError};
use crate::surface::{Scene, Surface};

fn inline_culler(padding: f64, store: &CardStore) -> Culler<CardId> {
    let mut culler = Culler::new(padding);
    culler.set_items(store.geometry());
    culler
}

/// Visibility computed on the background worker.
#[derive(Debug)]
struct RemoteVisibility {
    worker: VisibilityWorker<CardId>,
    requested: Option<(Camera, Size)>,
    current: bool,
}

impl RemoteVisibility {
    fn spawn(padding: f64, store: &CardStore) -> Result<Self, WorkerError> {
        let worker = VisibilityWorker::spawn(padding)?;
        worker.init(store.geometry().collect())?;
        Ok(Self {
            worker,
            requested: None,
            current: false,
        })
    }

    fn reload(&mut self, store: &CardStore) -> Result<(), WorkerError> {
        self.worker.init(store.geometry().collect())?;
        self.invalidate();
        Ok(())
    }

    /// Forgets the last request so the next exchange asks again.
    fn invalidate(&mut self) {
        self.requested = None;
        self.current = false;
    }

    /// Asks for `camera`/`viewport` unless that was the last request, then
    /// takes whatever result has arrived.
    fn exchange(
        &mut self,
        camera: &Camera,
        viewport: Size,
    ) -> Result<Option<VisibilitySet<CardId>>, WorkerError> {
        let snapshot = (*camera, viewport);
        if self.requested != Some(snapshot) {
            self.worker.calculate(*camera, viewport)?;
            self.requested = Some(snapshot);
            self.current = false;
        }
        self.poll()
    }

    fn poll(&mut self) -> Result<Option<VisibilitySet<CardId>>, WorkerError> {
        let Some(update) = self.worker.try_recv_latest()? else {
            return Ok(None);
        };
        self.current = self
            .requested
            .is_some_and(|(camera, viewport)| update.answers(&camera, viewport));
        Ok(Some(update.visible))
    }
}

#[derive(Debug)]
enum Visibility {
    Inline(Culler<CardId>),
    Worker(RemoteVisibility),
}

/// A card board: cards, camera input, frame scheduling, culling and an
/// optional rendering surface.
///
/// The host forwards input events and frame callbacks; the board keeps a
/// single frame request outstanding and, on every frame, advances the camera,
/// applies it to the surface, recomputes visibility and presents the change.
///
/// ```rust
/// use corkboard::{Board, BoardConfig, GridFixture, PlaneSurface};
/// use corkboard_frame::FrameHost;
/// use kurbo::Size;
///
/// #[derive(Default)]
/// struct Host {
///     requested: bool,
/// }
///
/// impl FrameHost for Host {
///     fn request_frame(&mut self) {
///         self.requested = true;
///     }
/// }
///
/// let config = BoardConfig::default().with_fixture(GridFixture::default());
/// let mut board = Board::new(config).unwrap();
/// let mut host = Host::default();
/// board.attach(PlaneSurface::new(), &mut host);
/// board.resize(Size::new(1000.0, 800.0), &mut host);
///
/// assert!(host.requested);
/// board.on_frame(&mut host, 0.0).unwrap();
/// assert_eq!(board.visible().len(), 20);
/// assert_eq!(board.surface().unwrap().transform(), "translate(0px, 0px) scale(1)");
/// ```
#[derive(Debug)]
pub struct Board<S> {
    config: BoardConfig,
    store: CardStore,
    input: InputController,
    scheduler: FrameScheduler,
    visibility: Visibility,
    visible: VisibilitySet<CardId>,
    surface: Option<S>,
    alive: bool,
    stats: FrameStats,
}

impl<S: Surface> Board<S> {
    /// Creates a board from `config`, generating its fixture cards if any.
    ///
    /// Fails only if [`CullMode::Worker`] is requested and the worker thread
    /// cannot be started.
    pub fn new(config: BoardConfig) -> Result<Self, WorkerError> {
        let store = config
            .fixture
            .as_ref()
            .map(CardStore::fixture_grid)
            .unwrap_or_default();
        Self::with_store(config, store)
    }

    /// Creates a board over an existing store.
    pub fn with_store(config: BoardConfig, store: CardStore) -> Result<Self, WorkerError> {
        let input = InputController::new(config.zoom_limits, config.wheel);
        let scheduler = FrameScheduler::new(config.frame_policy, input.target());
        let visibility = match config.cull_mode {
            CullMode::Inline => Visibility::Inline(inline_culler(config.padding, &store)),
            CullMode::Worker => {
                Visibility::Worker(RemoteVisibility::spawn(config.padding, &store)?)
            }
        };
        debug!(cards = store.len(), mode = ?config.cull_mode, "board created");
        Ok(Self {
            config,
            store,
            input,
            scheduler,
            visibility,
            visible: VisibilitySet::new(),
            surface: None,
            alive: true,
            stats: FrameStats::new(),
        })
    }

    /// Configuration the board was built with.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Where visibility is computed right now.
    ///
    /// A board configured for [`CullMode::Worker`] reports
    /// [`CullMode::Inline`] after its worker has been lost.
    #[must_use]
    pub fn cull_mode(&self) -> CullMode {
        match self.visibility {
            Visibility::Inline(_) => CullMode::Inline,
            Visibility::Worker(_) => CullMode::Worker,
        }
    }

    /// The cards.
    #[must_use]
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// The input controller.
    #[must_use]
    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// Drag state.
    #[must_use]
    pub fn input_state(&self) -> InputState {
        self.input.state()
    }

    /// The frame scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Camera painted by the latest frame.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.scheduler.live()
    }

    /// Camera the input has asked for.
    #[must_use]
    pub fn target(&self) -> Camera {
        self.input.target()
    }

    /// Viewport size in screen pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.input.viewport()
    }

    /// Cards presented as visible.
    #[must_use]
    pub fn visible(&self) -> &VisibilitySet<CardId> {
        &self.visible
    }

    /// Returns `true` when the presented visibility matches the latest frame.
    ///
    /// Always `true` for inline culling.
    #[must_use]
    pub fn is_visibility_current(&self) -> bool {
        match &self.visibility {
            Visibility::Inline(_) => true,
            Visibility::Worker(remote) => remote.current,
        }
    }

    /// Latest frames-per-second reading.
    #[must_use]
    pub fn fps(&self) -> Option<u32> {
        self.stats.fps()
    }

    /// Attached surface.
    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Attached surface, mutably.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Returns `true` if a surface is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    /// Returns `true` unless the board has been detached.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Attaches a surface and requests a frame.
    ///
    /// The new surface starts from nothing shown, so the next frame presents
    /// every visible card. Returns the previously attached surface.
    pub fn attach(&mut self, mut surface: S, host: &mut impl FrameHost) -> Option<S> {
        surface.sync_cards(&self.store);
        let previous = self.surface.replace(surface);
        self.alive = true;
        self.forget_visibility();
        debug!(replaced = previous.is_some(), "surface attached");
        self.scheduler.request_redraw(host);
        previous
    }

    /// Detaches the surface and stops reacting to input and frames until the
    /// next [`Board::attach`].
    ///
    /// A frame callback that was already scheduled becomes a no-op.
    pub fn detach(&mut self) -> Option<S> {
        self.alive = false;
        self.scheduler.cancel();
        self.forget_visibility();
        debug!("surface detached");
        self.surface.take()
    }

    /// Records a surface resize and requests a frame if the size changed.
    ///
    /// A detached board still records the size but schedules nothing; the
    /// next [`Board::attach`] paints with it.
    pub fn resize(&mut self, viewport: Size, host: &mut impl FrameHost) -> bool {
        if !self.input.set_viewport(viewport) {
            return false;
        }
        trace!(width = viewport.width, height = viewport.height, "viewport resized");
        if self.alive {
            self.scheduler.request_redraw(host);
        }
        true
    }

    /// Switches the frame policy.
    pub fn set_frame_policy(&mut self, policy: FramePolicy, host: &mut impl FrameHost) {
        self.scheduler.set_policy(policy);
        self.scheduler.request_redraw(host);
    }

    /// Jumps the camera to `camera` (clamped) without easing.
    pub fn set_camera(&mut self, camera: Camera, host: &mut impl FrameHost) {
        self.input.set_target(camera);
        self.scheduler.snap_to(self.input.target(), host);
    }

    /// Handles a pointer event. The host acts on the returned capture,
    /// release and default-prevention requests.
    pub fn on_pointer(&mut self, event: &PointerEvent, host: &mut impl FrameHost) -> InputResponse {
        if !self.alive {
            return InputResponse::default();
        }
        let response = self.input.on_pointer(event);
        self.follow(&response, host);
        response
    }

    /// Handles a wheel event.
    pub fn on_wheel(&mut self, event: &WheelEvent, host: &mut impl FrameHost) -> InputResponse {
        if !self.alive {
            return InputResponse::default();
        }
        let response = self.input.on_wheel(event);
        self.follow(&response, host);
        response
    }

    fn follow(&mut self, response: &InputResponse, host: &mut impl FrameHost) {
        let Some(camera) = response.camera else {
            return;
        };
        if response.snap {
            self.scheduler.snap_to(camera, host);
        } else {
            self.scheduler.set_target(camera, host);
        }
    }

    /// Adds a card and requests a frame.
    pub fn add_card(&mut self, card: Card, host: &mut impl FrameHost) -> Result<CardId, StoreError> {
        let bounds = card.bounds();
        let id = self.store.add_card(card)?;
        match &mut self.visibility {
            Visibility::Inline(culler) => culler.insert(id, bounds),
            Visibility::Worker(remote) => {
                if let Err(err) = remote.reload(&self.store) {
                    self.fall_back_inline(&err);
                }
            }
        }
        self.store_changed(host);
        Ok(id)
    }

    /// Updates a card's title and/or content. Returns `Ok(true)` if it changed.
    pub fn update_card_meta(
        &mut self,
        id: CardId,
        meta: CardMeta,
        host: &mut impl FrameHost,
    ) -> Result<bool, StoreError> {
        let changed = self.store.update_card_meta(id, meta)?;
        if changed {
            self.store_changed(host);
        }
        Ok(changed)
    }

    fn store_changed(&mut self, host: &mut impl FrameHost) {
        if let Some(surface) = self.surface.as_mut() {
            surface.sync_cards(&self.store);
        }
        if self.alive {
            self.scheduler.request_redraw(host);
        }
    }

    /// Runs one frame from the host's frame callback.
    ///
    /// Order: advance the camera, apply it to the surface, recompute
    /// visibility, present the change. Without a surface the camera and
    /// visibility still advance but nothing is painted. Returns `None` for
    /// a spurious callback or a detached board.
    pub fn on_frame(&mut self, host: &mut impl FrameHost, timestamp_ms: f64) -> Option<Frame> {
        if !self.alive {
            self.scheduler.cancel();
            return None;
        }
        let frame = self.scheduler.on_frame(host)?;
        if let Some(fps) = self.stats.record(timestamp_ms) {
            trace!(fps, "frame rate");
        }
        let viewport = self.input.viewport();
        if let Some(surface) = self.surface.as_mut() {
            surface.apply_camera(&frame.camera, viewport);
        }

        let next = self.compute_visibility(&frame.camera, viewport);
        if !self.is_visibility_current() {
            // Keep polling the worker until it answers the latest camera.
            self.scheduler.request_redraw(host);
        }
        let diff = self.install(next);
        trace!(
            index = frame.index,
            settled = frame.settled,
            visible = self.visible.len(),
            shown = diff.shown.len(),
            hidden = diff.hidden.len(),
            "frame"
        );
        self.present(frame.camera, viewport, &diff);
        Some(frame)
    }

    /// Presents a worker result that arrived between frames.
    ///
    /// Returns `true` if something was repainted. Inline culling never has
    /// pending results.
    pub fn poll_visibility(&mut self) -> bool {
        let Visibility::Worker(remote) = &mut self.visibility else {
            return false;
        };
        match remote.poll() {
            Ok(Some(next)) => {
                self.repaint(next);
                true
            }
            Ok(None) => false,
            Err(err) => {
                self.fall_back_inline(&err);
                self.repaint_inline();
                true
            }
        }
    }

    /// Blocks until the worker has answered the latest frame or `timeout`
    /// elapses, presenting what arrives. Returns [`Board::is_visibility_current`].
    pub fn wait_for_visibility(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while !self.is_visibility_current() {
            let Visibility::Worker(remote) = &mut self.visibility else {
                break;
            };
            if remote.requested.is_none() {
                // Nothing asked yet; the next frame will.
                return false;
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            match remote.worker.recv_timeout(remaining) {
                Ok(Some(update)) => {
                    remote.current = remote
                        .requested
                        .is_some_and(|(camera, viewport)| update.answers(&camera, viewport));
                    self.repaint(update.visible);
                }
                Ok(None) => return false,
                Err(err) => {
                    self.fall_back_inline(&err);
                    self.repaint_inline();
                }
            }
        }
        true
    }

    fn compute_visibility(
        &mut self,
        camera: &Camera,
        viewport: Size,
    ) -> Option<VisibilitySet<CardId>> {
        let result = match &mut self.visibility {
            Visibility::Inline(culler) => return Some(culler.compute(camera, viewport)),
            Visibility::Worker(remote) => remote.exchange(camera, viewport),
        };
        match result {
            Ok(next) => next,
            Err(err) => {
                self.fall_back_inline(&err);
                match &self.visibility {
                    Visibility::Inline(culler) => Some(culler.compute(camera, viewport)),
                    Visibility::Worker(_) => None,
                }
            }
        }
    }

    /// Drops the presented set. The next frame recomputes from scratch and,
    /// in worker mode, sends a fresh request even for an unchanged camera.
    fn forget_visibility(&mut self) {
        self.visible.clear();
        if let Visibility::Worker(remote) = &mut self.visibility {
            remote.invalidate();
        }
    }

    fn fall_back_inline(&mut self, err: &WorkerError) {
        warn!(%err, "visibility worker lost; culling inline");
        self.visibility = Visibility::Inline(inline_culler(self.config.padding, &self.store));
    }

    fn install(&mut self, next: Option<VisibilitySet<CardId>>) -> VisibilityDiff<CardId> {
        let Some(next) = next else {
            return VisibilityDiff::default();
        };
        let diff = next.diff_from(&self.visible);
        self.visible = next;
        diff
    }

    /// Full paint with the live camera and a freshly delivered set.
    fn repaint(&mut self, next: VisibilitySet<CardId>) {
        let camera = self.scheduler.live();
        let viewport = self.input.viewport();
        if let Some(surface) = self.surface.as_mut() {
            surface.apply_camera(&camera, viewport);
        }
        let diff = self.install(Some(next));
        self.present(camera, viewport, &diff);
    }

    fn repaint_inline(&mut self) {
        let camera = self.scheduler.live();
        let viewport = self.input.viewport();
        if let Visibility::Inline(culler) = &self.visibility {
            let next = culler.compute(&camera, viewport);
            self.repaint(next);
        }
    }

    fn present(&mut self, camera: Camera, viewport: Size, diff: &VisibilityDiff<CardId>) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.present(&Scene {
            camera,
            viewport,
            cards: &self.store,
            visible: &self.visible,
            diff,
        });
    }
}

#[cfg(test)]
mod tests {
    use corkboard_camera::Camera;
    use corkboard_frame::{FrameHost, FramePolicy};
    use corkboard_input::event::{PointerButton, PointerEvent, PointerId, WheelEvent};
    use kurbo::{Point, Size, Vec2};

    use super::Board;
    use crate::config::BoardConfig;
    use crate::store::GridFixture;
    use crate::surface::{Display, PlaneSurface};

    #[derive(Default)]
    struct Host {
        requests: usize,
    }

    impl FrameHost for Host {
        fn request_frame(&mut self) {
            self.requests += 1;
        }
    }

    fn board(policy: FramePolicy) -> (Board<PlaneSurface>, Host) {
        let config = BoardConfig::default()
            .with_fixture(GridFixture::default())
            .with_frame_policy(policy);
        let mut board = Board::new(config).unwrap();
        let mut host = Host::default();
        board.attach(PlaneSurface::new(), &mut host);
        board.resize(Size::new(1000.0, 800.0), &mut host);
        (board, host)
    }

    #[test]
    fn mutations_between_frames_coalesce() {
        let (mut board, mut host) = board(FramePolicy::Direct);
        assert_eq!(host.requests, 1);
        for i in 0..10 {
            let wheel = WheelEvent::new(Vec2::new(f64::from(i), 0.0), Point::ZERO, false);
            board.on_wheel(&wheel, &mut host);
        }
        assert_eq!(host.requests, 1);
        assert!(board.on_frame(&mut host, 0.0).is_some());
        assert!(board.on_frame(&mut host, 16.0).is_none());
        assert_eq!(board.camera().offset(), Vec2::new(-45.0, 0.0));
    }

    #[test]
    fn frame_applies_transform_then_visibility() {
        let (mut board, mut host) = board(FramePolicy::Direct);
        board.on_frame(&mut host, 0.0);
        let plane = board.surface().unwrap();
        assert_eq!(plane.transform(), "translate(0px, 0px) scale(1)");
        assert_eq!(plane.displayed().count(), 20);
        assert_eq!(board.visible().len(), 20);
    }

    #[test]
    fn detach_invalidates_pending_frame() {
        let (mut board, mut host) = board(FramePolicy::Direct);
        let plane = board.detach().unwrap();
        assert!(plane.transform().is_empty());
        assert!(board.on_frame(&mut host, 0.0).is_none());

        // Input is ignored while detached.
        let down = PointerEvent::down(PointerId(1), PointerButton::Primary, Point::new(10.0, 10.0));
        assert!(board.on_pointer(&down, &mut host).is_ignored());
    }

    #[test]
    fn resize_while_detached_is_kept_for_reattach() {
        let (mut board, mut host) = board(FramePolicy::Direct);
        board.on_frame(&mut host, 0.0);
        let requests = host.requests;

        let plane = board.detach().unwrap();
        assert!(board.resize(Size::new(2000.0, 1600.0), &mut host));
        assert_eq!(host.requests, requests);
        assert_eq!(board.viewport(), Size::new(2000.0, 1600.0));

        board.attach(plane, &mut host);
        board.on_frame(&mut host, 16.0).unwrap();
        assert_eq!(board.viewport(), Size::new(2000.0, 1600.0));
        // Padded region [-400, 2400] x [-400, 2000]: columns 0..=7, rows 0..=5.
        assert_eq!(board.visible().len(), 48);
    }

    #[test]
    fn missing_surface_is_a_no_op() {
        let config = BoardConfig::default().with_fixture(GridFixture::default());
        let mut board = Board::<PlaneSurface>::new(config).unwrap();
        let mut host = Host::default();
        board.resize(Size::new(1000.0, 800.0), &mut host);
        let frame = board.on_frame(&mut host, 0.0).unwrap();
        assert_eq!(frame.index, 0);
        assert_eq!(board.visible().len(), 20);
        assert!(!board.is_attached());
    }

    #[test]
    fn eased_board_keeps_requesting_until_settled() {
        let (mut board, mut host) = board(FramePolicy::eased());
        board.on_frame(&mut host, 0.0);
        let wheel = WheelEvent::new(Vec2::new(-300.0, 0.0), Point::ZERO, false);
        board.on_wheel(&wheel, &mut host);

        let mut frames = 0;
        let mut t = 16.0;
        while let Some(frame) = board.on_frame(&mut host, t) {
            frames += 1;
            t += 16.0;
            if frame.settled {
                break;
            }
            assert!(frames < 200, "easing never settled");
        }
        assert!(frames > 1);
        assert_eq!(board.camera(), board.target());
        assert!(board.on_frame(&mut host, t).is_none());
    }

    #[test]
    fn set_camera_snaps_and_culls() {
        let (mut board, mut host) = board(FramePolicy::eased());
        board.on_frame(&mut host, 0.0);
        let far = Camera::new(Vec2::new(-100_000.0, -100_000.0), 1.0);
        board.set_camera(far, &mut host);
        let frame = board.on_frame(&mut host, 16.0).unwrap();
        assert!(frame.settled);
        assert!(board.visible().is_empty());
        let plane = board.surface().unwrap();
        let first = board.store().cards()[0].id();
        assert_eq!(plane.display(first), Some(Display::None));
    }
}
