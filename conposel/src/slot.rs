// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use conposel_points::Side;
use conposel_render::{ImageId, ImageRef};
use kurbo::Size;

#[derive(Clone, Debug)]
enum SlotState<I> {
    Empty,
    Loading,
    Loaded { image: I, size: Size },
}

/// One side's image: empty, loading, or loaded.
///
/// A slot never holds a broken image; a failed load leaves it empty. The
/// slot also remembers the on-screen sizes of its two canvases.
#[derive(Clone, Debug)]
pub struct ImageSlot<I> {
    state: SlotState<I>,
    generation: u32,
    display_size: Option<Size>,
    detail_display_size: Option<Size>,
}

impl<I> Default for ImageSlot<I> {
    fn default() -> Self {
        Self {
            state: SlotState::Empty,
            generation: 0,
            display_size: None,
            detail_display_size: None,
        }
    }
}

impl<I> ImageSlot<I> {
    /// Returns `true` if no image is loaded or loading.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self.state, SlotState::Empty)
    }

    /// Returns `true` while a load is pending.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SlotState::Loading)
    }

    /// Returns `true` once an image is loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, SlotState::Loaded { .. })
    }

    /// Returns the loaded image.
    #[must_use]
    pub fn image(&self) -> Option<&I> {
        match &self.state {
            SlotState::Loaded { image, .. } => Some(image),
            _ => None,
        }
    }

    /// Returns the intrinsic size of the loaded image.
    #[must_use]
    pub fn size(&self) -> Option<Size> {
        match self.state {
            SlotState::Loaded { size, .. } => Some(size),
            _ => None,
        }
    }

    /// Handle the renderers use for the loaded image.
    ///
    /// Unique per load across both slots, so hosts can key textures by it.
    #[must_use]
    pub fn image_id(&self) -> Option<ImageId> {
        self.is_loaded().then_some(ImageId(self.generation))
    }

    /// Returns the loaded image as a render handle.
    #[must_use]
    pub fn image_ref(&self) -> Option<ImageRef> {
        Some(ImageRef {
            id: self.image_id()?,
            size: self.size()?,
        })
    }

    /// On-screen size of the full-view canvas, if the host reported one.
    ///
    /// Without one, display coordinates are taken as intrinsic.
    #[must_use]
    pub fn display_size(&self) -> Option<Size> {
        self.display_size
    }

    /// On-screen size of the detail canvas, if the host reported one.
    #[must_use]
    pub fn detail_display_size(&self) -> Option<Size> {
        self.detail_display_size
    }

    pub(crate) fn set_display_size(&mut self, size: Size) {
        self.display_size = Some(size);
    }

    pub(crate) fn set_detail_display_size(&mut self, size: Size) {
        self.detail_display_size = Some(size);
    }

    pub(crate) fn start_loading(&mut self, generation: u32) {
        self.state = SlotState::Loading;
        self.generation = generation;
    }

    pub(crate) fn accepts(&self, ticket: LoadTicket) -> bool {
        self.is_loading() && self.generation == ticket.generation
    }

    pub(crate) fn finish(&mut self, image: I, size: Size) {
        self.state = SlotState::Loaded { image, size };
    }

    pub(crate) fn clear(&mut self) {
        self.state = SlotState::Empty;
    }
}

/// Receipt for a pending image load.
///
/// Hand it back to [`crate::Session::finish_load`] with the result. A
/// ticket goes stale when its slot is reset or reloaded in the meantime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket {
    side: Side,
    generation: u32,
}

impl LoadTicket {
    pub(crate) fn new(side: Side, generation: u32) -> Self {
        Self { side, generation }
    }

    /// Slot this load is for.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }
}
