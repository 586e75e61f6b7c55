// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use conposel_points::{PairId, PairingError, PointStore, Side};
use conposel_view::{MagnifierMode, ZoomState};
use kurbo::Point;

use crate::drag::DragState;
use crate::event::{InteractionEvent, Surface};
use crate::outcome::{CursorHint, Guidance, Outcome, Response};

/// Tunables for hit testing and magnifier geometry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InteractionSettings {
    /// Radius around a point, in intrinsic pixels, that counts as a hit.
    pub hit_radius: f64,
    /// Side of the square detail view, in pixels.
    pub detail_view_size: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            hit_radius: 10.0,
            detail_view_size: 150.0,
        }
    }
}

/// Current gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// No button held; moves update hover and the magnifier.
    #[default]
    Idle,
    /// A landmark is being dragged.
    DraggingPoint {
        /// Pair being dragged.
        pair: PairId,
        /// Side whose coordinate is being dragged.
        side: Side,
        /// Canvas the drag started on. Moves from other canvases are ignored.
        surface: Surface,
    },
    /// A pan-mode magnifier rectangle is being dragged on the full view.
    DraggingZoomWindow {
        /// Side whose magnifier is being dragged.
        side: Side,
    },
}

/// Pointer interaction state machine.
///
/// See the [crate documentation](crate) for the transition rules.
#[derive(Clone, Debug, Default)]
pub struct Interaction {
    settings: InteractionSettings,
    mode: Mode,
    drag: DragState,
    hover: [Option<PairId>; 2],
    pointer: [Option<(Surface, Point)>; 2],
}

impl Interaction {
    /// Creates an idle state machine.
    #[must_use]
    pub fn new(settings: InteractionSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Returns the current settings.
    #[must_use]
    pub fn settings(&self) -> InteractionSettings {
        self.settings
    }

    /// Replaces the settings. Takes effect on the next event.
    pub fn set_settings(&mut self, settings: InteractionSettings) {
        self.settings = settings;
    }

    /// Returns the current gesture.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns `true` while a point or magnifier drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.mode != Mode::Idle
    }

    /// Returns the pair whose point on `side` is under the pointer.
    #[must_use]
    pub fn hover(&self, side: Side) -> Option<PairId> {
        self.hover[side.index()]
    }

    /// Feeds one event through the state machine.
    ///
    /// `zooms` holds the magnifier state of side A and side B, in that order.
    pub fn handle(
        &mut self,
        event: InteractionEvent,
        store: &mut PointStore,
        zooms: &mut [ZoomState; 2],
    ) -> Response {
        let revision = store.revision();
        let mut redraw = false;
        let outcome = match event {
            InteractionEvent::PointerDown {
                side,
                surface,
                point,
            } => self.pointer_down(side, surface, point, store, &zooms[side.index()]),
            InteractionEvent::SecondaryDown {
                side,
                surface,
                point,
            } => {
                self.pointer[side.index()] = Some((surface, point));
                self.end_drag();
                match store.find_nearest(side, point, self.settings.hit_radius) {
                    Some(id) => self.delete(id, store),
                    None => Outcome::None,
                }
            }
            InteractionEvent::PointerMove {
                side,
                surface,
                point,
            } => self.pointer_move(
                side,
                surface,
                point,
                store,
                &mut zooms[side.index()],
                &mut redraw,
            ),
            InteractionEvent::PointerUp => {
                let side = match self.mode {
                    Mode::Idle => None,
                    Mode::DraggingPoint { side, .. } | Mode::DraggingZoomWindow { side } => {
                        Some(side)
                    }
                };
                match side {
                    Some(side) => {
                        self.end_drag();
                        redraw |= self.refresh_hover(side, store);
                        Outcome::DragEnded
                    }
                    None => Outcome::None,
                }
            }
            InteractionEvent::PointerLeave { side, surface } => {
                self.pointer_leave(side, surface, &mut zooms[side.index()], &mut redraw)
            }
            InteractionEvent::Delete => match store.active() {
                Some(id) => self.delete(id, store),
                None => Outcome::None,
            },
        };
        Response {
            outcome,
            redraw: redraw || store.revision() != revision,
        }
    }

    /// Returns the cursor to show over `side`'s canvas.
    #[must_use]
    pub fn cursor_hint(&self, side: Side, store: &PointStore, zoom: &ZoomState) -> CursorHint {
        if self.is_dragging() {
            return CursorHint::Grabbing;
        }
        let Some((surface, point)) = self.pointer[side.index()] else {
            return CursorHint::Crosshair;
        };
        if store
            .find_nearest(side, point, self.settings.hit_radius)
            .is_some()
        {
            CursorHint::Move
        } else if surface == Surface::Full
            && zoom.overlay_contains(point, self.settings.detail_view_size)
        {
            CursorHint::Grab
        } else if side == Side::B && store.has_incomplete() {
            CursorHint::Copy
        } else {
            CursorHint::Crosshair
        }
    }

    /// Drops hover and drag targets that refer to pairs no longer in `store`.
    ///
    /// Call after mutating the store outside of [`Interaction::handle`].
    pub fn sync(&mut self, store: &PointStore) {
        for hover in &mut self.hover {
            if hover.is_some_and(|id| store.get(id).is_none()) {
                *hover = None;
            }
        }
        if let Mode::DraggingPoint { pair, .. } = self.mode
            && store.get(pair).is_none()
        {
            self.end_drag();
        }
    }

    /// Returns to a pristine idle state.
    pub fn reset(&mut self) {
        *self = Self::new(self.settings);
    }

    fn pointer_down(
        &mut self,
        side: Side,
        surface: Surface,
        point: Point,
        store: &mut PointStore,
        zoom: &ZoomState,
    ) -> Outcome {
        self.pointer[side.index()] = Some((surface, point));
        // A lost pointer-up must not leave a drag stuck.
        self.end_drag();

        if let Some(id) = store.find_nearest(side, point, self.settings.hit_radius) {
            store.select(id);
            let Some(pair) = store.get(id) else {
                return Outcome::None;
            };
            // The anchor of a pair in progress is selectable but stays put.
            if side == Side::A && !pair.is_complete() {
                return Outcome::Selected(id);
            }
            let Some(coord) = pair.coord(side) else {
                return Outcome::Selected(id);
            };
            self.drag.start(point, coord);
            self.mode = Mode::DraggingPoint {
                pair: id,
                side,
                surface,
            };
            return Outcome::DragStarted { pair: id, side };
        }

        if surface == Surface::Full
            && zoom.overlay_contains(point, self.settings.detail_view_size)
            && let Some(focus) = zoom.focus()
        {
            store.clear_selection();
            self.drag.start(point, focus);
            self.mode = Mode::DraggingZoomWindow { side };
            return Outcome::PanStarted(side);
        }

        match side {
            Side::A => match store.begin_pair(point) {
                Ok(id) => {
                    store.select(id);
                    Outcome::PairStarted(id)
                }
                Err(PairingError::IncompletePending(pending)) => {
                    store.select(pending);
                    Outcome::Rejected(Guidance::CompletePendingFirst(pending))
                }
                Err(PairingError::UnknownPair(_) | PairingError::AlreadyComplete(_)) => {
                    Outcome::None
                }
            },
            Side::B => {
                let target = store
                    .active_pair()
                    .filter(|pair| !pair.is_complete())
                    .map(|pair| pair.id)
                    .or_else(|| store.incomplete());
                let Some(id) = target else {
                    return Outcome::Rejected(Guidance::StartOnSideAFirst);
                };
                match store.complete_pair(id, point) {
                    Ok(()) => {
                        store.select(id);
                        Outcome::PairCompleted(id)
                    }
                    Err(_) => Outcome::Rejected(Guidance::StartOnSideAFirst),
                }
            }
        }
    }

    fn pointer_move(
        &mut self,
        side: Side,
        surface: Surface,
        point: Point,
        store: &mut PointStore,
        zoom: &mut ZoomState,
        redraw: &mut bool,
    ) -> Outcome {
        self.pointer[side.index()] = Some((surface, point));
        let follows = surface == Surface::Full && zoom.mode() == MagnifierMode::FollowPointer;

        match self.mode {
            Mode::DraggingPoint {
                pair,
                side: drag_side,
                surface: drag_surface,
            } => {
                if drag_side != side || drag_surface != surface {
                    return Outcome::None;
                }
                if store.get(pair).is_none() {
                    self.end_drag();
                    return Outcome::DragEnded;
                }
                let Some(target) = self.drag.target(point) else {
                    return Outcome::None;
                };
                let moved = store.move_point(pair, side, target);
                if follows && let Some(coord) = store.get(pair).and_then(|p| p.coord(side)) {
                    *redraw |= zoom.set_focus(coord);
                }
                if moved {
                    Outcome::PointMoved { pair, side }
                } else {
                    Outcome::None
                }
            }
            Mode::DraggingZoomWindow { side: drag_side } => {
                if drag_side != side || surface != Surface::Full {
                    return Outcome::None;
                }
                match self.drag.target(point) {
                    Some(center) if zoom.set_focus(center) => {
                        *redraw = true;
                        Outcome::Panned(side)
                    }
                    _ => Outcome::None,
                }
            }
            Mode::Idle => {
                if follows {
                    *redraw |= zoom.set_focus(point);
                }
                let hit = store.find_nearest(side, point, self.settings.hit_radius);
                if self.hover[side.index()] == hit {
                    return Outcome::None;
                }
                self.hover[side.index()] = hit;
                *redraw = true;
                Outcome::HoverChanged { side, pair: hit }
            }
        }
    }

    fn pointer_leave(
        &mut self,
        side: Side,
        surface: Surface,
        zoom: &mut ZoomState,
        redraw: &mut bool,
    ) -> Outcome {
        if self.pointer[side.index()].is_some_and(|(s, _)| s == surface) {
            self.pointer[side.index()] = None;
        }
        if surface == Surface::Full && !self.is_dragging() && zoom.focus().is_some() {
            zoom.clear_focus();
            *redraw |= zoom.focus().is_none();
        }
        match self.hover[side.index()].take() {
            Some(_) => {
                *redraw = true;
                Outcome::HoverChanged { side, pair: None }
            }
            None => Outcome::None,
        }
    }

    /// Recomputes `side`'s hover from the last known pointer position.
    ///
    /// Returns `true` if it changed.
    fn refresh_hover(&mut self, side: Side, store: &PointStore) -> bool {
        let hit = self.pointer[side.index()]
            .and_then(|(_, point)| store.find_nearest(side, point, self.settings.hit_radius));
        let hover = &mut self.hover[side.index()];
        let changed = *hover != hit;
        *hover = hit;
        changed
    }

    fn delete(&mut self, id: PairId, store: &mut PointStore) -> Outcome {
        if store.delete_pair(id).is_none() {
            return Outcome::None;
        }
        self.sync(store);
        Outcome::Deleted(id)
    }

    fn end_drag(&mut self) {
        self.drag.end();
        self.mode = Mode::Idle;
    }
}
