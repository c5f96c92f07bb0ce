// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `IconGlyph` rendering through the recording backend.
//!
//! The outliner here is a fake that draws a fixed, deliberately
//! off-center box and counts how often it is asked, so these tests can
//! check placement and caching without a real icon font.

use std::cell::Cell;

use kurbo::{Affine, BezPath, Rect, Shape};
use print_color::{ColorStateSpec, InteractionState, color_from_rgb};
use print_icon::{
    FontHandle, GlyphOutliner, GlyphSpec, IconConfig, IconEnvironment, IconGlyph, IconHost,
    IconSize,
};
use print_imaging::{DrawOp, PaintDesc};
use print_imaging_ref::RecordingBackend;
use print_typeface::{EmbeddedAssets, TypefaceCache};

const EMPTY_SFNT: [u8; 12] = [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

/// Outlines every text as the box `(s/8, -3s/4) .. (5s/8, s/4)`.
#[derive(Default)]
struct BoxOutliner {
    calls: Cell<usize>,
}

impl BoxOutliner {
    fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl GlyphOutliner for BoxOutliner {
    fn outline(&self, _text: &str, _font: &FontHandle, size: IconSize, path: &mut BezPath) {
        self.calls.set(self.calls.get() + 1);
        let s = f64::from(size.get());
        path.move_to((0.125 * s, -0.75 * s));
        path.line_to((0.625 * s, -0.75 * s));
        path.line_to((0.625 * s, 0.25 * s));
        path.line_to((0.125 * s, 0.25 * s));
        path.close_path();
    }
}

fn font() -> FontHandle {
    let assets = EmbeddedAssets::new().with("fonts/icons.ttf", EMPTY_SFNT.to_vec());
    TypefaceCache::new()
        .load_asset(&assets, "fonts/icons.ttf")
        .unwrap()
}

fn icon(size: f32) -> IconGlyph<BoxOutliner> {
    let mut spec = GlyphSpec::new("\u{e900}", font());
    spec.size = IconSize::new(size).unwrap();
    IconGlyph::with_outliner(spec, BoxOutliner::default())
}

fn black() -> peniko::Color {
    color_from_rgb(0x000000)
}

fn red() -> peniko::Color {
    color_from_rgb(0xFF0000)
}

fn black_and_red() -> ColorStateSpec {
    ColorStateSpec::builder()
        .normal(black())
        .selected(red())
        .build()
        .unwrap()
}

const BOUNDS: Rect = Rect::new(0.0, 0.0, 48.0, 48.0);

#[test]
fn glyph_is_centered_in_the_bounds() {
    let mut icon = icon(16.0);
    let mut backend = RecordingBackend::default();

    assert!(icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL));

    // The box is (2, -12) .. (10, 4): center (6, -4), moved to (24, 24).
    let (op, state) = backend.draws().next().unwrap();
    assert!(matches!(op, DrawOp::FillPath(_)));
    assert_eq!(state.transform, Affine::translate((18.0, 28.0)));
}

#[test]
fn centering_tracks_the_bounds_without_rebuilding() {
    let mut icon = icon(16.0);
    let mut backend = RecordingBackend::default();

    icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL);
    icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL);
    icon.render_into(
        &mut backend,
        Rect::new(100.0, 0.0, 120.0, 20.0),
        InteractionState::NORMAL,
    );

    assert_eq!(backend.draws().count(), 3);
    assert_eq!(icon.outliner().calls(), 1);
    assert_eq!(backend.paths_created(), 1);
    assert_eq!(backend.paints_created(), 1);

    let (_, last) = backend.draws().last().unwrap();
    assert_eq!(last.transform, Affine::translate((104.0, 14.0)));
}

#[test]
fn empty_text_draws_nothing_and_builds_nothing() {
    let mut icon = icon(16.0);
    icon.set_text("");
    let mut backend = RecordingBackend::default();

    assert!(!icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL));
    assert_eq!(backend.events().len(), 0);
    assert_eq!(backend.paths_created(), 0);
    assert_eq!(icon.outliner().calls(), 0);
}

#[test]
fn text_font_and_size_changes_rebuild_the_path_once() {
    let mut icon = icon(16.0);
    let mut backend = RecordingBackend::default();
    icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL);

    icon.set_text("\u{e901}");
    icon.set_size(IconSize::new(20.0).unwrap());
    icon.set_font(font());
    assert_eq!(icon.outliner().calls(), 1, "mutations are lazy");

    icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL);
    icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL);
    assert_eq!(icon.outliner().calls(), 2);
    assert_eq!(backend.paths_created(), 2);
    assert_eq!(backend.live_paths(), 1, "the old path is released");
}

#[test]
fn color_changes_do_not_touch_the_path() {
    let mut icon = icon(16.0);
    let mut backend = RecordingBackend::default();
    icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL);

    icon.set_color(red());
    icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL);

    assert_eq!(icon.outliner().calls(), 1);
    assert_eq!(backend.paths_created(), 1);
    assert_eq!(backend.paints_created(), 2);
    assert_eq!(backend.live_paints(), 1);
}

#[test]
fn paint_is_replaced_only_when_the_color_changes() {
    let mut icon = icon(16.0);
    icon.set_color_spec(black_and_red());
    let mut backend = RecordingBackend::default();

    icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL);
    // Pressed has no entry of its own and falls back to normal.
    icon.render_into(&mut backend, BOUNDS, InteractionState::PRESSED);
    assert_eq!(backend.paints_created(), 1);

    icon.render_into(&mut backend, BOUNDS, InteractionState::SELECTED);
    assert_eq!(backend.paints_created(), 2);
    assert_eq!(backend.live_paints(), 1);

    let (_, state) = backend.draws().last().unwrap();
    let paint = backend.paint(state.paint.unwrap()).unwrap();
    assert_eq!(*paint, PaintDesc::solid(red()));
}

#[test]
fn color_scenario_resolves_selected_and_normal() {
    let spec = black_and_red();
    assert_eq!(spec.resolve(InteractionState::SELECTED), red());
    assert_eq!(spec.resolve(InteractionState::NORMAL), black());
}

#[test]
fn opacity_multiplies_the_alpha() {
    let mut icon = icon(16.0);
    icon.set_color(red());
    icon.set_opacity(0.5);
    let mut backend = RecordingBackend::default();
    icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL);

    let (_, state) = backend.draws().next().unwrap();
    let paint = backend.paint(state.paint.unwrap()).unwrap();
    assert_eq!(*paint, PaintDesc::solid(red().multiply_alpha(0.5)));
}

#[test]
fn edit_mode_never_draws() {
    let mut icon = icon(16.0);
    icon.set_edit_mode(true);
    let mut backend = RecordingBackend::default();

    assert!(!icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL));
    assert_eq!(backend.events().len(), 0);

    icon.set_edit_mode(false);
    assert!(icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL));
}

#[test]
fn invalid_size_is_rejected_and_the_old_size_kept() {
    let mut icon = icon(16.0);
    assert!(icon.set_size_px(0.0).is_err());
    assert_eq!(icon.size().get(), 16.0);
    assert_eq!(icon.intrinsic_size(), kurbo::Size::new(16.0, 16.0));
}

#[test]
fn release_frees_resources_and_later_renders_reupload() {
    let mut icon = icon(16.0);
    let mut backend = RecordingBackend::default();
    icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL);

    icon.release(&mut backend);
    assert_eq!(backend.live_paths(), 0);
    assert_eq!(backend.live_paints(), 0);

    assert!(icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL));
    assert_eq!(backend.live_paths(), 1);
    assert_eq!(backend.live_paints(), 1);
    assert_eq!(backend.paths_created(), 2);
    assert_eq!(icon.outliner().calls(), 1, "the built outline is reused");
}

/// A host that records redraw requests.
struct TestHost {
    bounds: Rect,
    state: InteractionState,
    redraws: usize,
}

impl IconHost for TestHost {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn interaction_state(&self) -> InteractionState {
        self.state
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

#[test]
fn host_redraws_only_when_the_color_changes() {
    let mut icon = icon(16.0);
    icon.set_color_spec(black_and_red());
    let mut host = TestHost {
        bounds: BOUNDS,
        state: InteractionState::NORMAL,
        redraws: 0,
    };
    let mut backend = RecordingBackend::default();
    assert!(icon.paint(&host, &mut backend));
    assert!(!icon.needs_redraw());

    host.state = InteractionState::FOCUSED;
    assert!(!icon.sync_state(&mut host), "focused falls back to black");
    assert_eq!(host.redraws, 0);

    host.state = InteractionState::SELECTED | InteractionState::FOCUSED;
    assert!(icon.sync_state(&mut host), "selected entry applies");
    assert_eq!(host.redraws, 1);
    assert!(icon.needs_redraw());

    host.state = InteractionState::SELECTED;
    assert!(!icon.sync_state(&mut host), "still red");
    assert_eq!(host.redraws, 1);

    icon.paint(&host, &mut backend);
    assert_eq!(icon.resolved_color(), Some(red()));
}

#[test]
fn solid_colors_ignore_state_changes() {
    let mut icon = icon(16.0);
    let mut host = TestHost {
        bounds: BOUNDS,
        state: InteractionState::SELECTED,
        redraws: 0,
    };
    assert!(!icon.sync_state(&mut host));
    assert_eq!(host.redraws, 0);
}

#[test]
fn configured_icons_use_the_default_font() {
    let assets = EmbeddedAssets::new().with("fonts/icons.ttf", EMPTY_SFNT.to_vec());
    let typefaces = TypefaceCache::new();
    let loaded = typefaces.load_asset(&assets, "fonts/icons.ttf").unwrap();
    let env = IconEnvironment::new(&typefaces, &assets);

    let mut icon = IconConfig::new()
        .codepoint(0xE900)
        .color_spec(black_and_red())
        .size_px(16.0)
        .build_with_outliner(&env, BoxOutliner::default())
        .unwrap();
    assert_eq!(icon.font(), &loaded);
    assert_eq!(icon.text(), "\u{e900}");

    let mut backend = RecordingBackend::default();
    assert!(icon.render_into(&mut backend, BOUNDS, InteractionState::SELECTED));
    let (_, state) = backend.draws().next().unwrap();
    assert_eq!(
        *backend.paint(state.paint.unwrap()).unwrap(),
        PaintDesc::solid(red())
    );
}

#[test]
fn real_glyph_outline_is_centered_in_the_bounds() {
    let bytes: &[u8] = include_bytes!("../../assets/fonts/print_test/PrintTest.ttf");
    let assets = EmbeddedAssets::new().with("fonts/PrintTest.ttf", bytes.to_vec());
    let font = TypefaceCache::new()
        .load_asset(&assets, "fonts/PrintTest.ttf")
        .unwrap();
    let mut spec = GlyphSpec::new("\u{e900}", font);
    spec.size = IconSize::new(40.0).unwrap();
    let mut icon = IconGlyph::new(spec);
    let mut backend = RecordingBackend::default();

    assert!(icon.render_into(&mut backend, BOUNDS, InteractionState::NORMAL));

    let (DrawOp::FillPath(id), state) = backend.draws().next().unwrap();
    let outline = backend.path(*id).unwrap().to_bez_path();
    let glyph = outline.bounding_box();
    assert!(glyph.y0 < glyph.y1, "upright glyph");
    assert!(glyph.y1 <= 0.05, "built above the baseline");

    let placed = (state.transform * outline).bounding_box();
    let center = placed.center();
    assert!((center.x - 24.0).abs() < 1e-3, "centered horizontally: {center:?}");
    assert!((center.y - 24.0).abs() < 1e-3, "centered vertically: {center:?}");
}
