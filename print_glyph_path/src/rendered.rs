// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, BezPath, Rect, Shape, Vec2};

use crate::{FontHandle, GlyphOutliner, IconSize, SkrifaOutliner};

/// The translation that moves the center of `path_bounds` onto the center
/// of `target`.
///
/// ```
/// use kurbo::{Rect, Vec2};
/// use print_glyph_path::center_offset;
///
/// let glyph = Rect::new(2.0, -18.0, 22.0, 2.0);
/// let target = Rect::new(0.0, 0.0, 48.0, 48.0);
/// assert_eq!(center_offset(glyph, target), Vec2::new(12.0, 32.0));
/// ```
pub fn center_offset(path_bounds: Rect, target: Rect) -> Vec2 {
    target.center() - path_bounds.center()
}

/// A glyph outline together with its tight bounding box.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedPath {
    path: BezPath,
    bounds: Rect,
}

impl RenderedPath {
    /// Measure `path`.
    pub fn new(path: BezPath) -> Self {
        let bounds = if path.elements().is_empty() {
            Rect::ZERO
        } else {
            path.bounding_box()
        };
        Self { path, bounds }
    }

    /// The outline of absent text: no elements and zero bounds.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if there is nothing to fill.
    pub fn is_empty(&self) -> bool {
        self.path.elements().is_empty()
    }

    /// The outline.
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Tight bounding box of the outline.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Consume the rendered path, returning the outline.
    pub fn into_path(self) -> BezPath {
        self.path
    }

    /// Translation that centers this path in `target`.
    pub fn center_offset(&self, target: Rect) -> Vec2 {
        center_offset(self.bounds, target)
    }

    /// A copy translated so that its bounds are centered in `target`.
    pub fn centered(&self, target: Rect) -> Self {
        let offset = self.center_offset(target);
        Self {
            path: Affine::translate(offset) * self.path.clone(),
            bounds: self.bounds + offset,
        }
    }
}

/// Builds glyph outlines for icons.
///
/// Paths are always built at a fixed origin; placement within a target
/// rectangle is a translation by [`RenderedPath::center_offset`]. A change
/// of target rectangle therefore never requires a new outline.
#[derive(Clone, Debug, Default)]
pub struct GlyphPathRenderer<O = SkrifaOutliner> {
    outliner: O,
}

impl GlyphPathRenderer {
    /// A renderer using the font's own outlines.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<O: GlyphOutliner> GlyphPathRenderer<O> {
    /// A renderer using a custom outliner.
    pub fn with_outliner(outliner: O) -> Self {
        Self { outliner }
    }

    /// The outliner used to build paths.
    pub fn outliner(&self) -> &O {
        &self.outliner
    }

    /// Outline `text` in `font` at `size`.
    ///
    /// Empty text produces [`RenderedPath::empty`] without consulting the
    /// outliner.
    pub fn build_path(&self, text: &str, font: &FontHandle, size: IconSize) -> RenderedPath {
        if text.is_empty() {
            return RenderedPath::empty();
        }
        let mut path = BezPath::new();
        self.outliner.outline(text, font, size, &mut path);
        let rendered = RenderedPath::new(path);
        log::debug!(
            "built path for {text:?} in `{}` at {}px: {} elements, bounds {:?}",
            font.key(),
            size.get(),
            rendered.path.elements().len(),
            rendered.bounds
        );
        rendered
    }

    /// Outline `text` and center it in `target`.
    pub fn build_centered(
        &self,
        text: &str,
        font: &FontHandle,
        size: IconSize,
        target: Rect,
    ) -> RenderedPath {
        let rendered = self.build_path(text, font, size);
        if rendered.is_empty() {
            return rendered;
        }
        rendered.centered(target)
    }
}
