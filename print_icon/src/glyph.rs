// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Rect, Size};
use peniko::Color;
use print_color::{ColorStateSpec, InteractionState};
use print_glyph_path::{GlyphOutliner, GlyphPathRenderer, IconSize, RenderedPath, SkrifaOutliner};
use print_imaging::{ImagingBackend, PaintDesc, PaintId, PathDesc, PathId, ResourceBackend};
use print_typeface::FontHandle;

use crate::{IconError, InvalidSize, ResolvedPaintState};

/// Everything that determines what an icon looks like.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphSpec {
    /// Text to draw; usually one codepoint. Empty text draws nothing.
    pub text: String,
    /// Font the text is drawn from.
    pub font: FontHandle,
    /// Glyph size in pixels.
    pub size: IconSize,
    /// Colors by interaction state.
    pub color: ColorStateSpec,
}

impl GlyphSpec {
    /// A spec for `text` in `font` with the default size and color.
    pub fn new(text: impl Into<String>, font: FontHandle) -> Self {
        Self {
            text: text.into(),
            font,
            size: IconSize::DEFAULT,
            color: ColorStateSpec::solid(Color::BLACK),
        }
    }
}

/// Backend resources uploaded for the current path and paint.
#[derive(Debug, Default)]
struct Uploaded {
    path: Option<PathId>,
    paint: Option<(PaintId, Color)>,
}

/// A single icon glyph, drawn centered in whatever bounds it is given.
///
/// See the [crate documentation](crate) for the overall life cycle.
#[derive(Debug)]
pub struct IconGlyph<O = SkrifaOutliner> {
    spec: GlyphSpec,
    stateful: bool,
    renderer: GlyphPathRenderer<O>,
    rendered: RenderedPath,
    path_stale: bool,
    paint: ResolvedPaintState,
    state: InteractionState,
    opacity: f32,
    edit_mode: bool,
    needs_redraw: bool,
    uploaded: Uploaded,
}

impl IconGlyph {
    /// An icon drawn with the font's own outlines.
    pub fn new(spec: GlyphSpec) -> Self {
        Self::with_outliner(spec, SkrifaOutliner)
    }
}

impl<O: GlyphOutliner> IconGlyph<O> {
    /// An icon drawn with a custom outliner.
    pub fn with_outliner(spec: GlyphSpec, outliner: O) -> Self {
        Self {
            stateful: spec.color.is_stateful(),
            spec,
            renderer: GlyphPathRenderer::with_outliner(outliner),
            rendered: RenderedPath::empty(),
            path_stale: true,
            paint: ResolvedPaintState::new(),
            state: InteractionState::NORMAL,
            opacity: 1.0,
            edit_mode: false,
            needs_redraw: true,
            uploaded: Uploaded::default(),
        }
    }

    /// The current spec.
    pub fn spec(&self) -> &GlyphSpec {
        &self.spec
    }

    /// The text drawn.
    pub fn text(&self) -> &str {
        &self.spec.text
    }

    /// The font the text is drawn from.
    pub fn font(&self) -> &FontHandle {
        &self.spec.font
    }

    /// The glyph size.
    pub fn size(&self) -> IconSize {
        self.spec.size
    }

    /// The color spec.
    pub fn color_spec(&self) -> &ColorStateSpec {
        &self.spec.color
    }

    /// Opacity multiplied into the resolved color.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Returns `true` if the icon is in edit mode and never draws.
    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Returns `true` if the color depends on the interaction state.
    pub fn is_stateful(&self) -> bool {
        self.stateful
    }

    /// The interaction state last seen.
    pub fn interaction_state(&self) -> InteractionState {
        self.state
    }

    /// The last resolved color, if the icon has been resolved yet.
    pub fn resolved_color(&self) -> Option<Color> {
        self.paint.color()
    }

    /// Returns `true` if something changed since the last render.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// The outliner used to build glyph paths.
    pub fn outliner(&self) -> &O {
        self.renderer.outliner()
    }

    /// The glyph occupies a square as wide as the font size, whatever the
    /// actual outline bounds are.
    pub fn intrinsic_size(&self) -> Size {
        let px = f64::from(self.spec.size.get());
        Size::new(px, px)
    }

    fn invalidate_path(&mut self) {
        self.path_stale = true;
        self.needs_redraw = true;
    }

    fn invalidate_paint(&mut self) {
        self.paint.invalidate();
        self.needs_redraw = true;
    }

    /// Replace the text. Empty text makes the icon draw nothing.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.spec.text {
            self.spec.text = text;
            self.invalidate_path();
        }
    }

    /// Replace the text with a single codepoint.
    ///
    /// Fails without changing the icon if `codepoint` is not a Unicode
    /// scalar value.
    pub fn set_codepoint(&mut self, codepoint: u32) -> Result<(), IconError> {
        let ch = char::from_u32(codepoint).ok_or(IconError::InvalidCodepoint(codepoint))?;
        self.set_text(ch);
        Ok(())
    }

    /// Replace the font.
    pub fn set_font(&mut self, font: FontHandle) {
        if font != self.spec.font {
            self.spec.font = font;
            self.invalidate_path();
        }
    }

    /// Replace the size.
    pub fn set_size(&mut self, size: IconSize) {
        if size != self.spec.size {
            self.spec.size = size;
            self.invalidate_path();
        }
    }

    /// Replace the size with a pixel value.
    ///
    /// Fails without changing the icon if `px` is not positive and finite.
    pub fn set_size_px(&mut self, px: f32) -> Result<(), InvalidSize> {
        self.set_size(IconSize::new(px)?);
        Ok(())
    }

    /// Replace the color spec.
    pub fn set_color_spec(&mut self, color: ColorStateSpec) {
        self.stateful = color.is_stateful();
        self.spec.color = color;
        self.invalidate_paint();
    }

    /// Use a single color regardless of state.
    pub fn set_color(&mut self, color: Color) {
        self.set_color_spec(ColorStateSpec::solid(color));
    }

    /// Set the opacity, clamped to `[0, 1]`. NaN is treated as opaque.
    pub fn set_opacity(&mut self, opacity: f32) {
        let opacity = if opacity.is_nan() {
            1.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        if opacity != self.opacity {
            self.opacity = opacity;
            self.invalidate_paint();
        }
    }

    /// Enter or leave edit mode. An icon in edit mode never draws.
    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        if edit_mode != self.edit_mode {
            self.edit_mode = edit_mode;
            self.needs_redraw = true;
        }
    }

    /// Replace the whole spec.
    pub fn set_spec(&mut self, spec: GlyphSpec) {
        let GlyphSpec {
            text,
            font,
            size,
            color,
        } = spec;
        self.set_text(text);
        self.set_font(font);
        self.set_size(size);
        if color != self.spec.color {
            self.set_color_spec(color);
        }
    }

    /// Record a new interaction state.
    ///
    /// Returns `true`, and marks the icon for redraw, only if the color
    /// spec is stateful and the newly resolved color differs from the
    /// previous one.
    pub fn on_state_changed(&mut self, state: InteractionState) -> bool {
        if !self.stateful {
            self.state = state;
            return false;
        }
        self.state = state;
        let changed = self
            .paint
            .update(&self.spec.color, state, self.opacity, self.stateful);
        if changed {
            self.needs_redraw = true;
        }
        changed
    }

    /// Draw the icon centered in `bounds`.
    ///
    /// Returns `true` if a fill was emitted. Nothing is drawn in edit mode,
    /// for empty text, or when the font has no outline for the text.
    ///
    /// The glyph path is rebuilt and re-uploaded only after the text, font
    /// or size changed; the paint is re-uploaded only when the resolved
    /// color changed. Repeated calls with unchanged inputs reuse both.
    pub fn render_into<B: ImagingBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        bounds: Rect,
        state: InteractionState,
    ) -> bool {
        self.state = state;
        self.needs_redraw = false;
        if self.edit_mode || self.spec.text.is_empty() {
            return false;
        }

        self.paint
            .update(&self.spec.color, state, self.opacity, self.stateful);
        let Some(color) = self.paint.color() else {
            return false;
        };

        let Some(path) = self.upload_path(backend) else {
            return false;
        };
        let paint = self.upload_paint(backend, color);
        let transform = Affine::translate(self.rendered.center_offset(bounds));
        backend.fill_path(path, paint, transform);
        true
    }

    fn upload_path<B: ResourceBackend + ?Sized>(&mut self, backend: &mut B) -> Option<PathId> {
        if self.path_stale {
            let spec = &self.spec;
            self.rendered = self.renderer.build_path(&spec.text, &spec.font, spec.size);
            self.path_stale = false;
            if let Some(old) = self.uploaded.path.take() {
                backend.destroy_path(old);
            }
        }
        if self.uploaded.path.is_none() && !self.rendered.is_empty() {
            let desc = PathDesc::from_bez_path(self.rendered.path());
            self.uploaded.path = Some(backend.create_path(desc));
        }
        self.uploaded.path
    }

    fn upload_paint<B: ResourceBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        color: Color,
    ) -> PaintId {
        if let Some((id, uploaded)) = self.uploaded.paint
            && uploaded == color
        {
            return id;
        }
        if let Some((old, _)) = self.uploaded.paint.take() {
            backend.destroy_paint(old);
        }
        let id = backend.create_paint(PaintDesc::solid(color));
        self.uploaded.paint = Some((id, color));
        id
    }

    /// Destroy the backend resources held by this icon.
    ///
    /// The icon stays usable; the next render uploads fresh resources from
    /// the outline it already built.
    pub fn release<B: ResourceBackend + ?Sized>(&mut self, backend: &mut B) {
        if let Some(path) = self.uploaded.path.take() {
            backend.destroy_path(path);
        }
        if let Some((paint, _)) = self.uploaded.paint.take() {
            backend.destroy_paint(paint);
        }
    }
}
