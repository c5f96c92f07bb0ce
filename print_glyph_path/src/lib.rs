// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print Glyph Path: icon font glyphs as centered vector paths.
//!
//! An icon is one glyph (occasionally a short string) drawn from an icon
//! font. Icon fonts rarely agree on glyph metrics: advances and baselines
//! vary between codepoints, so drawing a glyph at its origin misplaces it.
//! This crate instead outlines the text at a fixed origin, measures the
//! tight bounding box of the result and centers that box in whatever
//! rectangle the icon is given.
//!
//! - [`IconSize`]: a validated pixel size. Zero, negative and non-finite
//!   sizes are rejected with [`InvalidSize`] when the size is created.
//! - [`GlyphOutliner`]: converts text in a font at a size into a
//!   [`BezPath`]. [`SkrifaOutliner`] is the implementation backed by the
//!   font's own outlines.
//! - [`GlyphPathRenderer`]: builds a [`RenderedPath`] (path plus bounds)
//!   from text, a [`FontHandle`] and an [`IconSize`].
//! - [`center_offset`]: the translation that centers one rectangle in
//!   another.
//!
//! ```
//! use kurbo::{BezPath, Rect, Shape};
//! use print_glyph_path::{GlyphOutliner, GlyphPathRenderer, IconSize};
//! use print_typeface::FontHandle;
//!
//! /// Draws every icon as a square the size of the font.
//! struct Squares;
//!
//! impl GlyphOutliner for Squares {
//!     fn outline(&self, _text: &str, _font: &FontHandle, size: IconSize, path: &mut BezPath) {
//!         let s = f64::from(size.get());
//!         path.extend(Rect::new(0.0, -s, s, 0.0).path_elements(0.1));
//!     }
//! }
//!
//! # let data = peniko::FontData::new(peniko::Blob::from(vec![0_u8, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 0);
//! # let font = FontHandle::from_data("icons", data)?;
//! let renderer = GlyphPathRenderer::with_outliner(Squares);
//! let rendered = renderer.build_path("x", &font, IconSize::new(10.0)?);
//! let placed = rendered.centered(Rect::new(0.0, 0.0, 40.0, 40.0));
//! assert_eq!(placed.bounds(), Rect::new(15.0, 15.0, 25.0, 25.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod outline;
mod rendered;

pub use kurbo::{BezPath, Rect, Vec2};
pub use print_typeface::FontHandle;

pub use outline::{GlyphOutliner, SkrifaOutliner};
pub use rendered::{GlyphPathRenderer, RenderedPath, center_offset};

/// A size that is not a positive, finite number of pixels.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("icon size must be a positive, finite number of pixels (got {0})")]
pub struct InvalidSize(pub f32);

/// Glyph size in pixels; always positive and finite.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct IconSize(f32);

impl IconSize {
    /// The size used when none is configured.
    pub const DEFAULT: Self = Self(24.0);

    /// Validate `px` as a glyph size.
    pub fn new(px: f32) -> Result<Self, InvalidSize> {
        if px.is_finite() && px > 0.0 {
            Ok(Self(px))
        } else {
            Err(InvalidSize(px))
        }
    }

    /// The size in pixels.
    #[inline]
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl Default for IconSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for IconSize {
    type Error = InvalidSize;

    fn try_from(px: f32) -> Result<Self, Self::Error> {
        Self::new(px)
    }
}

impl From<IconSize> for f32 {
    fn from(size: IconSize) -> Self {
        size.0
    }
}
