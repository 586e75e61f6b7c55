// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use conposel_export::{Submission, to_csv};
use conposel_interaction::{
    CursorHint, Guidance, Interaction, InteractionEvent, Outcome, Response, Surface,
};
use conposel_points::{PairId, PointStore, Side};
use conposel_render::{RenderBackend, SideView, render_detail_view, render_full_view};
use conposel_view::{
    ZoomState, clamp_to_image, detail_to_intrinsic_unclamped, to_intrinsic_unclamped,
};
use kurbo::{Point, Size};
use tracing::{debug, info, trace, warn};

use crate::config::{ConfigError, SessionConfig};
use crate::error::SessionError;
use crate::slot::{ImageSlot, LoadTicket};
use crate::status::Status;

/// Keys the session reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Delete.
    Delete,
    /// Backspace.
    Backspace,
    /// Anything else; ignored.
    Other,
}

/// One point-correspondence session over two images.
///
/// Owns everything the engine mutates: both [`ImageSlot`]s, the
/// [`PointStore`], both magnifiers, and the pointer state machine. The host
/// forwards input in display coordinates, feeds load results back in, and
/// redraws when a [`Response`] asks for it.
///
/// `I` is the host's decoded image type. The session only stores it.
#[derive(Debug)]
pub struct Session<I> {
    config: SessionConfig,
    slots: [ImageSlot<I>; 2],
    points: PointStore,
    zooms: [ZoomState; 2],
    interaction: Interaction,
    notice: Option<Guidance>,
    load_failure: Option<(Side, String)>,
    next_generation: u32,
}

impl<I> Session<I> {
    /// Creates an empty session.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `config` does not validate.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            slots: [ImageSlot::default(), ImageSlot::default()],
            points: PointStore::new(),
            zooms: [new_zoom(&config), new_zoom(&config)],
            interaction: Interaction::new(config.interaction_settings()),
            notice: None,
            load_failure: None,
            next_generation: 0,
            config,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the image slot of `side`.
    #[must_use]
    pub fn slot(&self, side: Side) -> &ImageSlot<I> {
        &self.slots[side.index()]
    }

    /// Returns the landmarks.
    #[must_use]
    pub fn points(&self) -> &PointStore {
        &self.points
    }

    /// Returns the pointer state machine.
    #[must_use]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Returns the magnifier state of `side`.
    #[must_use]
    pub fn zoom(&self, side: Side) -> &ZoomState {
        &self.zooms[side.index()]
    }

    /// Returns `true` once both images are loaded.
    ///
    /// Pointer input is dropped until then.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.slots.iter().all(ImageSlot::is_loaded)
    }

    /// Marks `side` as loading and returns the ticket for its result.
    ///
    /// Any earlier ticket for the slot goes stale.
    pub fn begin_load(&mut self, side: Side) -> LoadTicket {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        self.slots[side.index()].start_loading(generation);
        if self.load_failure.as_ref().is_some_and(|(s, _)| *s == side) {
            self.load_failure = None;
        }
        info!(side = %side, generation, "image load started");
        LoadTicket::new(side, generation)
    }

    /// Completes a load started with [`Session::begin_load`].
    ///
    /// `result` carries the decoded image and its intrinsic size, or the
    /// failure reason from the image source. An image without area counts as
    /// a failure.
    ///
    /// # Errors
    ///
    /// - [`SessionError::StaleLoad`] if the slot was reset or reloaded since
    ///   the ticket was issued. Nothing changes.
    /// - [`SessionError::ImageLoadFailure`] on failure. The slot is empty
    ///   again and the status shows the reason.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<(I, Size), String>,
    ) -> Result<(), SessionError> {
        let side = ticket.side();
        if !self.slots[side.index()].accepts(ticket) {
            warn!(side = %side, "ignoring stale image load result");
            return Err(SessionError::StaleLoad { side });
        }
        let loaded = result.and_then(|(image, size)| {
            if has_area(size) {
                Ok((image, size))
            } else {
                Err(String::from("image has no pixels"))
            }
        });
        match loaded {
            Ok((image, size)) => {
                self.slots[side.index()].finish(image, size);
                self.points.set_bounds(side, size);
                self.zooms[side.index()].set_image_size(size);
                info!(
                    side = %side,
                    width = size.width,
                    height = size.height,
                    "image loaded"
                );
                if self.is_ready() {
                    info!("both images loaded, session ready");
                }
                Ok(())
            }
            Err(reason) => {
                self.slots[side.index()].clear();
                warn!(side = %side, reason = %reason, "image load failed");
                self.load_failure = Some((side, reason.clone()));
                Err(SessionError::ImageLoadFailure { side, reason })
            }
        }
    }

    /// Empties both slots and clears every point, ready for a new image pair.
    ///
    /// Pending load tickets go stale and zoom returns to the default. Pair
    /// ids keep counting up from where they were.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
        self.points.clear_all();
        self.zooms = [new_zoom(&self.config), new_zoom(&self.config)];
        self.interaction.reset();
        self.notice = None;
        self.load_failure = None;
        info!(next_id = self.points.next_id().0, "session reset");
    }

    /// Records the on-screen size of one of `side`'s canvases.
    ///
    /// Display coordinates are scaled by `intrinsic / display` per axis. A
    /// size without area makes the canvas "not ready": its events are
    /// dropped until a usable size is reported.
    pub fn set_display_size(&mut self, side: Side, surface: Surface, size: Size) {
        let slot = &mut self.slots[side.index()];
        match surface {
            Surface::Full => slot.set_display_size(size),
            Surface::Detail => slot.set_detail_display_size(size),
        }
    }

    /// Primary button pressed at `display` on one of `side`'s canvases.
    pub fn pointer_down(&mut self, side: Side, surface: Surface, display: Point) -> Response {
        let Some(point) = self.map_pointer(side, surface, display, true) else {
            return unchanged();
        };
        self.dispatch(InteractionEvent::PointerDown {
            side,
            surface,
            point,
        })
    }

    /// Secondary button pressed; deletes the pair under the pointer.
    pub fn secondary_down(&mut self, side: Side, surface: Surface, display: Point) -> Response {
        let Some(point) = self.map_pointer(side, surface, display, true) else {
            return unchanged();
        };
        self.dispatch(InteractionEvent::SecondaryDown {
            side,
            surface,
            point,
        })
    }

    /// Pointer moved over one of `side`'s canvases.
    ///
    /// While a drag is active the pointer is not clamped to the image, so a
    /// point grabbed off-center can still reach the far edges.
    pub fn pointer_move(&mut self, side: Side, surface: Surface, display: Point) -> Response {
        let clamp = !self.interaction.is_dragging();
        let Some(point) = self.map_pointer(side, surface, display, clamp) else {
            return unchanged();
        };
        self.dispatch(InteractionEvent::PointerMove {
            side,
            surface,
            point,
        })
    }

    /// Primary button released anywhere.
    pub fn pointer_up(&mut self) -> Response {
        self.dispatch(InteractionEvent::PointerUp)
    }

    /// Pointer left one of `side`'s canvases.
    pub fn pointer_leave(&mut self, side: Side, surface: Surface) -> Response {
        self.dispatch(InteractionEvent::PointerLeave { side, surface })
    }

    /// The window lost focus; ends any drag as if the button was released.
    pub fn window_blur(&mut self) -> Response {
        self.dispatch(InteractionEvent::PointerUp)
    }

    /// A key was pressed. Delete and Backspace remove the selected pair.
    pub fn key_down(&mut self, key: Key) -> Response {
        match key {
            Key::Delete | Key::Backspace => self.dispatch(InteractionEvent::Delete),
            Key::Other => unchanged(),
        }
    }

    /// Sets `side`'s zoom factor, clamped into the configured limits.
    ///
    /// Returns `true` if the factor changed.
    pub fn set_zoom(&mut self, side: Side, factor: f64) -> bool {
        let zoom = &mut self.zooms[side.index()];
        let changed = zoom.set_factor(factor);
        if changed {
            debug!(side = %side, factor = zoom.factor(), "zoom changed");
        }
        changed
    }

    /// Deletes the most recently created pair.
    pub fn reset_last_pair(&mut self) -> Option<PairId> {
        let removed = self.points.delete_last_pair()?;
        self.interaction.sync(&self.points);
        self.notice = None;
        debug!(pair = removed.id.0, "last pair removed");
        Some(removed.id)
    }

    /// Deletes every pair. Ids are not reused afterwards.
    pub fn clear_all(&mut self) {
        let removed = self.points.len();
        self.points.clear_all();
        self.interaction.sync(&self.points);
        self.notice = None;
        info!(removed, "all points cleared");
    }

    /// Returns `true` if there is at least one complete pair to export.
    #[must_use]
    pub fn can_export(&self) -> bool {
        self.is_ready() && self.points.complete_count() > 0
    }

    /// Formats the complete pairs as CSV in the configured layout.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotReady`] before both images are loaded and
    /// [`SessionError::Export`] when there is nothing to export.
    pub fn export_csv(&self) -> Result<String, SessionError> {
        if !self.is_ready() {
            return Err(SessionError::NotReady);
        }
        let csv = to_csv(self.points.completed_pairs(), self.config.csv_format)?;
        info!(
            pairs = self.points.complete_count(),
            format = ?self.config.csv_format,
            "exported CSV"
        );
        Ok(csv)
    }

    /// Builds the server submission payload from the complete pairs.
    ///
    /// # Errors
    ///
    /// Same as [`Session::export_csv`].
    pub fn submission(&self) -> Result<Submission, SessionError> {
        if !self.is_ready() {
            return Err(SessionError::NotReady);
        }
        let submission = Submission::from_pairs(self.points.completed_pairs())?;
        info!(pairs = submission.len(), "built submission payload");
        Ok(submission)
    }

    /// Returns the status line for the current state.
    #[must_use]
    pub fn status(&self) -> Status {
        if let Some((side, reason)) = &self.load_failure {
            return Status::LoadFailed {
                side: *side,
                reason: reason.clone(),
            };
        }
        if self.slots.iter().any(ImageSlot::is_loading) {
            return Status::Loading;
        }
        if !self.is_ready() {
            return Status::LoadImages;
        }
        if let Some(guidance) = self.notice {
            return Status::Guidance(guidance);
        }
        if let Some(id) = self.points.incomplete() {
            return Status::PlaceOnSideB(id);
        }
        match self.points.active() {
            Some(id) => Status::Selected(id),
            None => Status::Ready {
                complete: self.points.complete_count(),
            },
        }
    }

    /// Returns the cursor to show over `side`'s canvases.
    #[must_use]
    pub fn cursor_hint(&self, side: Side) -> CursorHint {
        self.interaction
            .cursor_hint(side, &self.points, &self.zooms[side.index()])
    }

    /// Number of complete pairs.
    #[must_use]
    pub fn complete_count(&self) -> usize {
        self.points.complete_count()
    }

    /// Number of points placed on `side`.
    #[must_use]
    pub fn point_count(&self, side: Side) -> usize {
        self.points.point_count(side)
    }

    /// Draws `side`'s full view.
    pub fn render_full<B: RenderBackend + ?Sized>(&self, side: Side, backend: &mut B) {
        render_full_view(backend, &self.side_view(side), &self.config.render_style());
    }

    /// Draws `side`'s detail view.
    pub fn render_detail<B: RenderBackend + ?Sized>(&self, side: Side, backend: &mut B) {
        render_detail_view(backend, &self.side_view(side), &self.config.render_style());
    }

    fn side_view(&self, side: Side) -> SideView<'_> {
        let slot = &self.slots[side.index()];
        SideView {
            side,
            image: slot.image_ref(),
            canvas_size: slot.display_size().unwrap_or(Size::ZERO),
            store: &self.points,
            hover: self.interaction.hover(side),
            zoom: &self.zooms[side.index()],
        }
    }

    fn map_pointer(
        &self,
        side: Side,
        surface: Surface,
        display: Point,
        clamp: bool,
    ) -> Option<Point> {
        if !self.is_ready() {
            trace!(side = %side, "dropping pointer event before both images are loaded");
            return None;
        }
        let slot = &self.slots[side.index()];
        let image_size = slot.size()?;
        let point = match surface {
            Surface::Full => to_intrinsic_unclamped(
                display,
                slot.display_size().unwrap_or(image_size),
                image_size,
            )?,
            Surface::Detail => {
                let side_px = self.config.detail_view_size;
                let canvas = Size::new(side_px, side_px);
                let shown = slot.detail_display_size().unwrap_or(canvas);
                if !has_area(shown) {
                    return None;
                }
                let local = Point::new(
                    display.x * canvas.width / shown.width,
                    display.y * canvas.height / shown.height,
                );
                let source = self.zooms[side.index()].sample_rect(side_px)?;
                detail_to_intrinsic_unclamped(local, canvas, source)?
            }
        };
        Some(if clamp {
            clamp_to_image(point, image_size)
        } else {
            point
        })
    }

    fn dispatch(&mut self, event: InteractionEvent) -> Response {
        let revision = self.points.revision();
        let response = self
            .interaction
            .handle(event, &mut self.points, &mut self.zooms);
        if let Outcome::Rejected(guidance) = response.outcome {
            self.notice = Some(guidance);
        } else if self.points.revision() != revision {
            self.notice = None;
        }
        self.log_outcome(response.outcome);
        response
    }

    fn log_outcome(&self, outcome: Outcome) {
        match outcome {
            Outcome::PairStarted(id) => {
                if let Some(pair) = self.points.get(id) {
                    debug!(pair = id.0, x = pair.a.x, y = pair.a.y, "pair started");
                }
            }
            Outcome::PairCompleted(id) => {
                if let Some(b) = self.points.get(id).and_then(|pair| pair.b) {
                    debug!(pair = id.0, x = b.x, y = b.y, "pair completed");
                }
            }
            Outcome::PointMoved { pair, side } => {
                if let Some(at) = self.points.get(pair).and_then(|p| p.coord(side)) {
                    debug!(pair = pair.0, side = %side, x = at.x, y = at.y, "point moved");
                }
            }
            Outcome::DragStarted { pair, side } => {
                debug!(pair = pair.0, side = %side, "point drag started");
            }
            Outcome::PanStarted(side) => debug!(side = %side, "magnifier drag started"),
            Outcome::Panned(side) => trace!(side = %side, "magnifier moved"),
            Outcome::DragEnded => debug!("drag ended"),
            Outcome::Selected(id) => debug!(pair = id.0, "pair selected"),
            Outcome::Deleted(id) => debug!(pair = id.0, "pair deleted"),
            Outcome::Rejected(guidance) => {
                warn!(guidance = %guidance, "pairing attempt rejected");
            }
            Outcome::HoverChanged { .. } | Outcome::None => {}
        }
    }
}

fn new_zoom(config: &SessionConfig) -> ZoomState {
    let mut zoom = ZoomState::new(Size::ZERO, config.magnifier);
    zoom.set_factor_limits(config.min_zoom, config.max_zoom);
    zoom.set_factor(config.default_zoom);
    zoom
}

fn unchanged() -> Response {
    Response {
        outcome: Outcome::None,
        redraw: false,
    }
}

fn has_area(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.width.is_finite() && size.height.is_finite()
}
