// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;
use print_color::InteractionState;
use print_glyph_path::GlyphOutliner;
use print_imaging::ImagingBackend;

use crate::IconGlyph;

/// The widget an icon is drawn into.
///
/// Any UI toolkit can host an icon by reporting its bounds and interaction
/// state and by accepting redraw requests.
pub trait IconHost {
    /// The rectangle the icon is centered in.
    fn bounds(&self) -> Rect;

    /// The currently active interaction flags.
    fn interaction_state(&self) -> InteractionState;

    /// Schedule a repaint.
    fn request_redraw(&mut self);
}

impl<O: GlyphOutliner> IconGlyph<O> {
    /// Forward the host's interaction state.
    ///
    /// Requests a redraw from the host only when the resolved color
    /// changed. Returns whether it did.
    pub fn sync_state<H: IconHost + ?Sized>(&mut self, host: &mut H) -> bool {
        let changed = self.on_state_changed(host.interaction_state());
        if changed {
            host.request_redraw();
        }
        changed
    }

    /// Render into the host's bounds with the host's interaction state.
    pub fn paint<H: IconHost + ?Sized, B: ImagingBackend + ?Sized>(
        &mut self,
        host: &H,
        backend: &mut B,
    ) -> bool {
        self.render_into(backend, host.bounds(), host.interaction_state())
    }
}
