// Copyright 2025 the Conposel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::error::PairingError;
use crate::pair::{CompletePair, PairId, PointPair, Side};

/// Ordered store of point pairs with pairing invariants, selection and hit testing.
///
/// See the [crate documentation](crate) for the invariants it maintains.
#[derive(Clone, Debug, Default)]
pub struct PointStore {
    pairs: Vec<PointPair>,
    next_id: u64,
    active: Option<PairId>,
    bounds: [Option<Size>; 2],
    revision: u64,
}

impl PointStore {
    /// Creates an empty store without image bounds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pairs: Vec::new(),
            next_id: 0,
            active: None,
            bounds: [None, None],
            revision: 0,
        }
    }

    /// Sets the intrinsic image size coordinates on `side` are clamped into.
    ///
    /// Existing coordinates on that side are re-clamped, so a smaller
    /// replacement image never leaves points outside its bounds.
    pub fn set_bounds(&mut self, side: Side, size: Size) {
        if self.bounds[side.index()] == Some(size) {
            return;
        }
        self.bounds[side.index()] = Some(size);
        let mut changed = false;
        for pair in &mut self.pairs {
            match side {
                Side::A => {
                    let clamped = clamp(pair.a, size);
                    changed |= clamped != pair.a;
                    pair.a = clamped;
                }
                Side::B => {
                    if let Some(b) = pair.b {
                        let clamped = clamp(b, size);
                        changed |= clamped != b;
                        pair.b = Some(clamped);
                    }
                }
            }
        }
        if changed {
            self.bump_revision();
        }
    }

    /// Returns the bounds configured for `side`, if any.
    #[must_use]
    pub fn bounds(&self, side: Side) -> Option<Size> {
        self.bounds[side.index()]
    }

    /// Starts a new pair at side-A coordinate `a` and returns its id.
    ///
    /// Fails with [`PairingError::IncompletePending`] carrying the id of the
    /// outstanding pair if one is still waiting for its side-B coordinate;
    /// callers are expected to check [`PointStore::has_incomplete`] first and
    /// redirect the user to complete it.
    pub fn begin_pair(&mut self, a: Point) -> Result<PairId, PairingError> {
        if let Some(pending) = self.incomplete() {
            return Err(PairingError::IncompletePending(pending));
        }
        let id = PairId(self.next_id);
        self.next_id += 1;
        self.pairs.push(PointPair {
            id,
            a: self.clamp_for(Side::A, a),
            b: None,
        });
        self.bump_revision();
        Ok(id)
    }

    /// Sets the side-B coordinate of pair `id`.
    ///
    /// Fails if the pair does not exist or is already complete.
    pub fn complete_pair(&mut self, id: PairId, b: Point) -> Result<(), PairingError> {
        let b = self.clamp_for(Side::B, b);
        let pair = self
            .pair_mut(id)
            .ok_or(PairingError::UnknownPair(id))?;
        if pair.b.is_some() {
            return Err(PairingError::AlreadyComplete(id));
        }
        pair.b = Some(b);
        self.bump_revision();
        Ok(())
    }

    /// Moves the coordinate of pair `id` on `side` to `to`, clamped to bounds.
    ///
    /// Returns `true` if the coordinate changed. This is a no-op if the pair
    /// does not exist or has no coordinate on that side yet.
    pub fn move_point(&mut self, id: PairId, side: Side, to: Point) -> bool {
        let to = self.clamp_for(side, to);
        let Some(pair) = self.pair_mut(id) else {
            return false;
        };
        let slot = match side {
            Side::A => &mut pair.a,
            Side::B => match pair.b.as_mut() {
                Some(b) => b,
                None => return false,
            },
        };
        if *slot == to {
            return false;
        }
        *slot = to;
        self.bump_revision();
        true
    }

    /// Removes pair `id` and returns it.
    ///
    /// If it was the active pair, the selection is cleared.
    pub fn delete_pair(&mut self, id: PairId) -> Option<PointPair> {
        let idx = self.position_of(id)?;
        let removed = self.pairs.remove(idx);
        if self.active == Some(id) {
            self.active = None;
        }
        self.bump_revision();
        Some(removed)
    }

    /// Removes the most recently created pair, complete or not.
    pub fn delete_last_pair(&mut self) -> Option<PointPair> {
        let removed = self.pairs.pop()?;
        if self.active == Some(removed.id) {
            self.active = None;
        }
        self.bump_revision();
        Some(removed)
    }

    /// Removes every pair and clears the selection.
    ///
    /// The id counter is **not** reset; new pairs keep getting fresh ids.
    pub fn clear_all(&mut self) {
        if self.pairs.is_empty() && self.active.is_none() {
            return;
        }
        self.pairs.clear();
        self.active = None;
        self.bump_revision();
    }

    /// Returns `true` if a pair is waiting for its side-B coordinate.
    #[must_use]
    pub fn has_incomplete(&self) -> bool {
        self.incomplete().is_some()
    }

    /// Returns the id of the pair waiting for its side-B coordinate, if any.
    #[must_use]
    pub fn incomplete(&self) -> Option<PairId> {
        self.pairs
            .iter()
            .rev()
            .find(|pair| !pair.is_complete())
            .map(|pair| pair.id)
    }

    /// Returns the complete pairs in creation order.
    pub fn completed_pairs(&self) -> impl Iterator<Item = CompletePair> + '_ {
        self.pairs.iter().filter_map(PointPair::complete)
    }

    /// Returns the number of complete pairs.
    #[must_use]
    pub fn complete_count(&self) -> usize {
        self.pairs.iter().filter(|pair| pair.is_complete()).count()
    }

    /// Returns the number of coordinates placed on `side`.
    #[must_use]
    pub fn point_count(&self, side: Side) -> usize {
        match side {
            Side::A => self.pairs.len(),
            Side::B => self.complete_count(),
        }
    }

    /// Finds the pair whose `side` coordinate is nearest to `pt`.
    ///
    /// Only coordinates within `hit_radius` (inclusive) are candidates. Pairs
    /// are scanned newest-first and a candidate only wins when strictly
    /// closer, so equidistant hits resolve to the most recently created pair.
    #[must_use]
    pub fn find_nearest(&self, side: Side, pt: Point, hit_radius: f64) -> Option<PairId> {
        let mut best: Option<(PairId, f64)> = None;
        for pair in self.pairs.iter().rev() {
            let Some(coord) = pair.coord(side) else {
                continue;
            };
            let dist = coord.distance(pt);
            if dist > hit_radius {
                continue;
            }
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((pair.id, dist));
            }
        }
        best.map(|(id, _)| id)
    }

    /// Makes pair `id` the active pair.
    ///
    /// Returns `false` (and leaves the selection alone) if no such pair exists.
    pub fn select(&mut self, id: PairId) -> bool {
        if self.position_of(id).is_none() {
            return false;
        }
        if self.active != Some(id) {
            self.active = Some(id);
            self.bump_revision();
        }
        true
    }

    /// Clears the active pair.
    pub fn clear_selection(&mut self) {
        if self.active.take().is_some() {
            self.bump_revision();
        }
    }

    /// Returns the active pair id.
    ///
    /// Never returns an id that no longer exists.
    #[must_use]
    pub fn active(&self) -> Option<PairId> {
        self.active.filter(|id| self.position_of(*id).is_some())
    }

    /// Returns the active pair.
    #[must_use]
    pub fn active_pair(&self) -> Option<&PointPair> {
        self.active.and_then(|id| self.get(id))
    }

    /// Returns pair `id`, if it exists.
    #[must_use]
    pub fn get(&self, id: PairId) -> Option<&PointPair> {
        self.position_of(id).map(|idx| &self.pairs[idx])
    }

    /// Returns all pairs in creation order.
    #[must_use]
    pub fn pairs(&self) -> &[PointPair] {
        &self.pairs
    }

    /// Returns the number of pairs, complete or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if the store holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the id the next new pair will receive.
    #[must_use]
    pub fn next_id(&self) -> PairId {
        PairId(self.next_id)
    }

    /// Returns the current revision counter.
    ///
    /// The revision bumps only when pairs, coordinates or the selection
    /// actually change. Renderers can compare it to skip redundant redraws.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn position_of(&self, id: PairId) -> Option<usize> {
        // Ids are strictly increasing, so the list is sorted by id.
        self.pairs.binary_search_by_key(&id, |pair| pair.id).ok()
    }

    fn pair_mut(&mut self, id: PairId) -> Option<&mut PointPair> {
        let idx = self.position_of(id)?;
        Some(&mut self.pairs[idx])
    }

    fn clamp_for(&self, side: Side, pt: Point) -> Point {
        match self.bounds[side.index()] {
            Some(size) => clamp(pt, size),
            None => pt,
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn clamp(pt: Point, size: Size) -> Point {
    let axis = |v: f64, max: f64| {
        let max = max.max(0.0);
        if v.is_nan() || v <= 0.0 { 0.0 } else { v.min(max) }
    };
    Point::new(axis(pt.x, size.width), axis(pt.y, size.height))
}
