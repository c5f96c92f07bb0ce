// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use print_color::{ColorStateSpec, InteractionState};

/// The color an icon is currently painted with, and whether it is stale.
///
/// Re-resolving is skipped while the state is fresh and the interaction
/// state has not changed, so repeated queries are free and never report a
/// spurious change.
#[derive(Clone, Debug)]
pub struct ResolvedPaintState {
    color: Option<Color>,
    state: InteractionState,
    stale: bool,
}

impl Default for ResolvedPaintState {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolvedPaintState {
    /// A state that has never been resolved.
    pub const fn new() -> Self {
        Self {
            color: None,
            state: InteractionState::NORMAL,
            stale: true,
        }
    }

    /// Force the next [`update`](Self::update) to re-resolve.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Returns `true` if the next [`update`](Self::update) will re-resolve
    /// regardless of the interaction state.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// The last resolved color, with opacity applied.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Bring the color up to date and report whether it changed.
    ///
    /// `stateful` must be `spec.is_stateful()`; when it is `false` a
    /// change of `state` alone cannot change the color and is ignored.
    pub fn update(
        &mut self,
        spec: &ColorStateSpec,
        state: InteractionState,
        opacity: f32,
        stateful: bool,
    ) -> bool {
        let state_changed = state != self.state;
        self.state = state;
        if !self.stale && !(stateful && state_changed) {
            return false;
        }
        self.stale = false;

        let color = spec.resolve(state).multiply_alpha(opacity);
        if self.color == Some(color) {
            return false;
        }
        log::debug!("icon color is now {color:?} for {state:?}");
        self.color = Some(color);
        true
    }
}
