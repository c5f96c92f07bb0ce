// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print Icon: icon font glyphs as stateful drawables.
//!
//! An [`IconGlyph`] owns everything needed to draw one icon: the text
//! (usually a single codepoint), the [`FontHandle`] it comes from, the
//! pixel [`IconSize`] and a [`ColorStateSpec`] mapping interaction states
//! to colors. The host widget drives it:
//!
//! - it reports [`IconGlyph::intrinsic_size`] to its layout system,
//! - it forwards interaction state changes through
//!   [`IconGlyph::on_state_changed`] (or [`IconGlyph::sync_state`]), which
//!   only reports a change when the resolved color actually differs,
//! - and it calls [`IconGlyph::render_into`] (or [`IconGlyph::paint`])
//!   with its bounds during each paint pass.
//!
//! Mutations are cheap: they only mark cached artifacts stale. The glyph
//! outline is rebuilt, and uploaded to the backend as a path resource, on
//! the next render after the text, font or size changed. The paint
//! resource is replaced only when the resolved color changes. Bounds are
//! applied as a centering transform and never force an outline rebuild.
//!
//! Icons are usually created from an [`IconConfig`], which accepts every
//! way of naming text, color, size and font (direct values, resource ids,
//! asset paths, logical font names) and resolves them against an
//! [`IconEnvironment`]:
//!
//! ```
//! use print_color::{ColorStateSpec, InteractionState, color_from_rgb};
//! use print_icon::{IconConfig, IconEnvironment};
//! use print_imaging_ref::RecordingBackend;
//! use print_typeface::{EmbeddedAssets, TypefaceCache};
//! use kurbo::Rect;
//!
//! # let sfnt = vec![0_u8, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
//! let assets = EmbeddedAssets::new().with("fonts/icons.ttf", sfnt);
//! let typefaces = TypefaceCache::new();
//! let env = IconEnvironment::new(&typefaces, &assets);
//!
//! let colors = ColorStateSpec::builder()
//!     .normal(color_from_rgb(0x000000))
//!     .selected(color_from_rgb(0xFF0000))
//!     .build()?;
//! let mut icon = IconConfig::new()
//!     .codepoint(0xE900)
//!     .font_asset("fonts/icons.ttf")
//!     .size_px(32.0)
//!     .color_spec(colors)
//!     .build(&env)?;
//!
//! assert_eq!(icon.intrinsic_size(), kurbo::Size::new(32.0, 32.0));
//! assert!(icon.on_state_changed(InteractionState::SELECTED));
//!
//! let mut backend = RecordingBackend::default();
//! // This test font has no glyphs, so nothing is drawn.
//! let bounds = Rect::new(0.0, 0.0, 48.0, 48.0);
//! assert!(!icon.render_into(&mut backend, bounds, InteractionState::SELECTED));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod glyph;
mod host;
mod paint;

pub use print_color::{ColorStateSpec, InteractionState, UnresolvedColorState};
pub use print_glyph_path::{GlyphOutliner, IconSize, InvalidSize, SkrifaOutliner};
pub use print_typeface::{FontHandle, TypefaceError};

pub use config::{
    ColorOption, DisplayMetrics, FontOption, IconConfig, IconEnvironment, NoResources,
    ResourceId, ResourceTable, Resources, SizeOption, SizeUnit, TextOption, looks_like_font_path,
};
pub use glyph::{GlyphSpec, IconGlyph};
pub use host::IconHost;
pub use paint::ResolvedPaintState;

/// Errors produced while configuring an icon.
///
/// Every error is reported by the call that would have put the icon into
/// an invalid configuration; the icon is left unchanged.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The font could not be loaded or found.
    #[error(transparent)]
    Typeface(#[from] TypefaceError),
    /// The size is not a positive, finite number of pixels.
    #[error(transparent)]
    InvalidSize(#[from] InvalidSize),
    /// A keyed color spec has no normal entry.
    #[error(transparent)]
    UnresolvedColorState(#[from] UnresolvedColorState),
    /// The codepoint is not a Unicode scalar value.
    #[error("{0:#x} is not a Unicode scalar value")]
    InvalidCodepoint(u32),
    /// A resource id has no value of the requested kind.
    #[error("no {kind} resource with id {id:?}")]
    MissingResource {
        /// Kind of value that was requested.
        kind: &'static str,
        /// The id that was looked up.
        id: ResourceId,
    },
}
