// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{BezPath, Point};
use skrifa::MetadataProvider;
use skrifa::instance::{LocationRef, Size};
use skrifa::metrics::GlyphMetrics;
use skrifa::outline::OutlinePen;

use crate::{FontHandle, IconSize};

/// Converts text in a font into a fillable outline.
///
/// Implementations append to `path` the outline of `text` set on a
/// baseline at `y = 0`, starting at `x = 0`, in y-down coordinates. Where
/// the outline lands relative to the origin does not matter to callers:
/// [`GlyphPathRenderer`](crate::GlyphPathRenderer) measures the result
/// and centers it.
pub trait GlyphOutliner {
    /// Append the outline of `text` in `font` at `size` to `path`.
    fn outline(&self, text: &str, font: &FontHandle, size: IconSize, path: &mut BezPath);
}

impl<O: GlyphOutliner + ?Sized> GlyphOutliner for &O {
    fn outline(&self, text: &str, font: &FontHandle, size: IconSize, path: &mut BezPath) {
        (**self).outline(text, font, size, path);
    }
}

/// Outlines glyphs with the font's own vector data.
///
/// Each `char` is mapped through the font's character map and drawn
/// unhinted at the requested size. Glyphs are laid out left to right by
/// their advance widths, with `0.6 * size` standing in when the font has
/// no horizontal metrics. Characters the font does not map are skipped.
#[derive(Clone, Copy, Debug, Default)]
pub struct SkrifaOutliner;

impl GlyphOutliner for SkrifaOutliner {
    fn outline(&self, text: &str, font: &FontHandle, size: IconSize, path: &mut BezPath) {
        let font_ref = match font.font_ref() {
            Ok(f) => f,
            Err(err) => {
                log::warn!("font `{}` no longer parses: {err}", font.key());
                return;
            }
        };
        let px = size.get();
        let outline_size = Size::new(px);
        let charmap = font_ref.charmap();
        let outlines = font_ref.outline_glyphs();
        let metrics = GlyphMetrics::new(&font_ref, outline_size, LocationRef::default());

        let mut pen = FlipPen { path, x: 0.0 };
        for ch in text.chars() {
            let Some(gid) = charmap.map(ch) else {
                log::debug!("font `{}` has no glyph for {ch:?}", font.key());
                continue;
            };
            if let Some(glyph) = outlines.get(gid)
                && let Err(err) = glyph.draw(outline_size, &mut pen)
            {
                log::debug!("failed to draw glyph {gid:?} for {ch:?}: {err}");
            }
            pen.x += f64::from(metrics.advance_width(gid).unwrap_or(px * 0.6));
        }
    }
}

/// Records outline commands into a [`BezPath`], flipping Y so glyphs are
/// upright in y-down space and shifting by the pen position.
struct FlipPen<'a> {
    path: &'a mut BezPath,
    x: f64,
}

impl FlipPen<'_> {
    fn point(&self, x: f32, y: f32) -> Point {
        Point::new(self.x + f64::from(x), -f64::from(y))
    }
}

impl OutlinePen for FlipPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.move_to(p);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let p = self.point(x, y);
        self.path.line_to(p);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        let (c, p) = (self.point(cx0, cy0), self.point(x, y));
        self.path.quad_to(c, p);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        let (c0, c1, p) = (
            self.point(cx0, cy0),
            self.point(cx1, cy1),
            self.point(x, y),
        );
        self.path.curve_to(c0, c1, p);
    }

    fn close(&mut self) {
        self.path.close_path();
    }
}
