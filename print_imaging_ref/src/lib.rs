// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print Imaging Recording Backend.
//!
//! This crate provides a small, stateful implementation of
//! [`ImagingBackend`] and [`ResourceBackend`] for **op recording and state
//! tracing**.
//!
//! It does not rasterize. It exists so tests and demos can assert on the
//! operations an icon emits, the imaging state at the time each operation
//! was applied, and how many resources were created or are still alive.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use print_imaging::{
    Affine, DrawOp, FillRule, ImagingBackend, ImagingOp, PaintDesc, PaintId, PathDesc, PathId,
    ResourceBackend, StateOp,
};

/// Snapshot of the current imaging state inside the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Current transform.
    pub transform: Affine,
    /// Current paint, if set.
    pub paint: Option<PaintId>,
    /// Current fill rule used for filling paths.
    pub fill_rule: FillRule,
}

impl Default for StateSnapshot {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            paint: None,
            fill_rule: FillRule::NonZero,
        }
    }
}

/// Event recorded by the backend.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Recording implementation of the imaging backend.
///
/// This backend:
/// - Stores resource descriptors in vectors keyed by their IDs,
/// - Tracks current imaging state,
/// - Records high-level [`Event`]s as state and draw operations are applied.
#[derive(Default, Debug)]
pub struct RecordingBackend {
    paths: Vec<Option<PathDesc>>,
    paints: Vec<Option<PaintDesc>>,

    /// Log of events in the order they were applied.
    events: Vec<Event>,
    /// Underlying imaging ops.
    ops: Vec<ImagingOp>,
    /// Current imaging state.
    state: StateSnapshot,
}

impl RecordingBackend {
    /// Returns a slice of recorded events.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a slice of raw imaging operations.
    pub fn ops(&self) -> &[ImagingOp] {
        &self.ops
    }

    /// Returns the draw events only, in order.
    pub fn draws(&self) -> impl Iterator<Item = (&DrawOp, &StateSnapshot)> + '_ {
        self.events.iter().filter_map(|event| match event {
            Event::Draw { op, state } => Some((op, state)),
            Event::State { .. } => None,
        })
    }

    /// Clears all recorded events and ops but keeps resources.
    pub fn clear_events(&mut self) {
        self.events.clear();
        self.ops.clear();
    }

    /// Returns the current imaging state.
    pub fn current_state(&self) -> &StateSnapshot {
        &self.state
    }

    /// Look up a live path resource.
    pub fn path(&self, id: PathId) -> Option<&PathDesc> {
        self.paths.get(id.0 as usize)?.as_ref()
    }

    /// Look up a live paint resource.
    pub fn paint(&self, id: PaintId) -> Option<&PaintDesc> {
        self.paints.get(id.0 as usize)?.as_ref()
    }

    /// Total number of paths ever created, including destroyed ones.
    pub fn paths_created(&self) -> usize {
        self.paths.len()
    }

    /// Total number of paints ever created, including destroyed ones.
    pub fn paints_created(&self) -> usize {
        self.paints.len()
    }

    /// Number of paths that have not been destroyed.
    pub fn live_paths(&self) -> usize {
        self.paths.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of paints that have not been destroyed.
    pub fn live_paints(&self) -> usize {
        self.paints.iter().filter(|slot| slot.is_some()).count()
    }
}

impl ResourceBackend for RecordingBackend {
    fn create_path(&mut self, desc: PathDesc) -> PathId {
        let id = u32::try_from(self.paths.len())
            .expect("RecordingBackend: too many paths for u32 PathId");
        self.paths.push(Some(desc));
        PathId(id)
    }

    fn destroy_path(&mut self, id: PathId) {
        if let Some(slot) = self.paths.get_mut(id.0 as usize) {
            *slot = None;
        }
    }

    fn create_paint(&mut self, desc: PaintDesc) -> PaintId {
        let id = u32::try_from(self.paints.len())
            .expect("RecordingBackend: too many paints for u32 PaintId");
        self.paints.push(Some(desc));
        PaintId(id)
    }

    fn destroy_paint(&mut self, id: PaintId) {
        if let Some(slot) = self.paints.get_mut(id.0 as usize) {
            *slot = None;
        }
    }
}

impl ImagingBackend for RecordingBackend {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetTransform(tx) => self.state.transform = *tx,
            StateOp::SetPaint(id) => self.state.paint = Some(*id),
            StateOp::SetFillRule(rule) => self.state.fill_rule = *rule,
        }

        self.ops.push(ImagingOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ImagingOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use peniko::Color;
    use print_imaging::PathCmd;

    fn dot() -> PathDesc {
        PathDesc {
            commands: vec![PathCmd::MoveTo { x: 0.0, y: 0.0 }].into_boxed_slice(),
        }
    }

    #[test]
    fn basic_state_and_draw() {
        let mut backend = RecordingBackend::default();

        let paint = backend.create_paint(PaintDesc::solid(Color::WHITE));
        let path = backend.create_path(dot());

        backend.state(StateOp::SetPaint(paint));
        backend.draw(DrawOp::FillPath(path));

        assert_eq!(backend.events().len(), 2, "one state and one draw event");
        assert_eq!(backend.ops().len(), 2, "one state and one draw op");
    }

    #[test]
    fn draw_events_carry_the_active_state() {
        let mut backend = RecordingBackend::default();
        let paint = backend.create_paint(PaintDesc::solid(Color::BLACK));
        let path = backend.create_path(dot());
        let xf = Affine::translate((3.0, 5.0));

        backend.fill_path(path, paint, xf);

        let (op, state) = backend.draws().next().expect("one draw was recorded");
        assert_eq!(*op, DrawOp::FillPath(path), "draw should target the path");
        assert_eq!(state.transform, xf, "draw should see the set transform");
        assert_eq!(state.paint, Some(paint), "draw should see the set paint");
        assert_eq!(state.fill_rule, FillRule::NonZero, "default fill rule");
    }

    #[test]
    fn clear_events_keeps_resources_usable() {
        let mut backend = RecordingBackend::default();

        let paint = backend.create_paint(PaintDesc::solid(Color::WHITE));
        let path = backend.create_path(dot());

        backend.state(StateOp::SetPaint(paint));
        backend.draw(DrawOp::FillPath(path));
        backend.clear_events();
        assert!(backend.events().is_empty(), "events should be cleared");
        assert!(backend.ops().is_empty(), "ops should be cleared");

        assert!(backend.path(path).is_some(), "path survives clearing");
        assert!(backend.paint(paint).is_some(), "paint survives clearing");
    }

    #[test]
    fn resource_counters_track_creation_and_destruction() {
        let mut backend = RecordingBackend::default();

        let a = backend.create_path(dot());
        let b = backend.create_path(dot());
        let paint = backend.create_paint(PaintDesc::solid(Color::WHITE));
        backend.destroy_path(a);

        assert_eq!(backend.paths_created(), 2, "two paths were created");
        assert_eq!(backend.live_paths(), 1, "one path remains alive");
        assert!(backend.path(a).is_none(), "destroyed path is gone");
        assert!(backend.path(b).is_some(), "other path is untouched");

        backend.destroy_paint(paint);
        assert_eq!(backend.paints_created(), 1, "one paint was created");
        assert_eq!(backend.live_paints(), 0, "no paint remains alive");
    }

    #[test]
    fn resource_destroy_is_tolerant() {
        let mut backend = RecordingBackend::default();

        let path = backend.create_path(dot());
        let paint = backend.create_paint(PaintDesc::solid(Color::WHITE));

        backend.destroy_path(path);
        backend.destroy_paint(paint);

        // Double-destroy and unknown ids should not panic.
        backend.destroy_path(path);
        backend.destroy_paint(paint);
        backend.destroy_path(PathId(99));
        backend.destroy_paint(PaintId(99));
    }
}
