// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icon configuration: every way of naming text, color, size and font,
//! resolved against the host's fonts and resources.

use core::fmt;

use hashbrown::HashMap;
use peniko::Color;
use print_color::ColorStateSpec;
use print_glyph_path::{GlyphOutliner, IconSize, SkrifaOutliner};
use print_typeface::{FontAssets, FontHandle, TypefaceCache};

use crate::{GlyphSpec, IconError, IconGlyph};

/// Identifier of a value in the host's resource table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u32);

/// Screen metrics used to turn device-independent sizes into pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Pixels per density-independent pixel.
    pub density: f32,
    /// Pixels per scale-independent pixel; includes the user's font scale.
    pub scaled_density: f32,
    /// Physical pixels per inch along X.
    pub xdpi: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self {
            density: 1.0,
            scaled_density: 1.0,
            xdpi: 160.0,
        }
    }
}

/// Unit of a size value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SizeUnit {
    /// Raw pixels.
    Px,
    /// Density-independent pixels.
    Dp,
    /// Scale-independent pixels.
    Sp,
    /// Points, 1/72 of an inch.
    Pt,
}

impl SizeUnit {
    /// Convert `value` in this unit to pixels.
    pub fn to_px(self, value: f32, metrics: &DisplayMetrics) -> f32 {
        match self {
            Self::Px => value,
            Self::Dp => value * metrics.density,
            Self::Sp => value * metrics.scaled_density,
            Self::Pt => value * metrics.xdpi / 72.0,
        }
    }
}

/// The host's resource table.
///
/// Lookups return `None` for ids that are undefined or hold a value of
/// another kind.
pub trait Resources {
    /// A string resource.
    fn string(&self, id: ResourceId) -> Option<String>;

    /// An integer resource.
    fn integer(&self, id: ResourceId) -> Option<i32>;

    /// A color, or color state list, resource.
    fn color_state(&self, id: ResourceId) -> Option<ColorStateSpec>;

    /// A dimension resource, already converted to pixels.
    fn dimension_px(&self, id: ResourceId) -> Option<f32>;

    /// Metrics for unit conversion.
    fn display_metrics(&self) -> DisplayMetrics {
        DisplayMetrics::default()
    }
}

/// A resource table with nothing in it.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoResources;

impl Resources for NoResources {
    fn string(&self, _id: ResourceId) -> Option<String> {
        None
    }

    fn integer(&self, _id: ResourceId) -> Option<i32> {
        None
    }

    fn color_state(&self, _id: ResourceId) -> Option<ColorStateSpec> {
        None
    }

    fn dimension_px(&self, _id: ResourceId) -> Option<f32> {
        None
    }
}

/// An in-memory resource table.
#[derive(Clone, Debug, Default)]
pub struct ResourceTable {
    strings: HashMap<ResourceId, String>,
    integers: HashMap<ResourceId, i32>,
    colors: HashMap<ResourceId, ColorStateSpec>,
    dimensions: HashMap<ResourceId, f32>,
    metrics: DisplayMetrics,
}

impl ResourceTable {
    /// An empty table with default metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `metrics` for unit conversion.
    pub fn with_metrics(mut self, metrics: DisplayMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Define a string resource.
    pub fn with_string(mut self, id: ResourceId, value: impl Into<String>) -> Self {
        self.strings.insert(id, value.into());
        self
    }

    /// Define an integer resource.
    pub fn with_integer(mut self, id: ResourceId, value: i32) -> Self {
        self.integers.insert(id, value);
        self
    }

    /// Define a color resource.
    pub fn with_color(mut self, id: ResourceId, value: impl Into<ColorStateSpec>) -> Self {
        self.colors.insert(id, value.into());
        self
    }

    /// Define a dimension resource in pixels.
    pub fn with_dimension_px(mut self, id: ResourceId, px: f32) -> Self {
        self.dimensions.insert(id, px);
        self
    }
}

impl Resources for ResourceTable {
    fn string(&self, id: ResourceId) -> Option<String> {
        self.strings.get(&id).cloned()
    }

    fn integer(&self, id: ResourceId) -> Option<i32> {
        self.integers.get(&id).copied()
    }

    fn color_state(&self, id: ResourceId) -> Option<ColorStateSpec> {
        self.colors.get(&id).cloned()
    }

    fn dimension_px(&self, id: ResourceId) -> Option<f32> {
        self.dimensions.get(&id).copied()
    }

    fn display_metrics(&self) -> DisplayMetrics {
        self.metrics
    }
}

/// The services an icon configuration is resolved against.
#[derive(Clone, Copy)]
pub struct IconEnvironment<'a> {
    /// Loaded fonts and the default font.
    pub typefaces: &'a TypefaceCache,
    /// Where font asset paths are read from.
    pub assets: &'a dyn FontAssets,
    /// Where resource ids are looked up.
    pub resources: &'a dyn Resources,
}

impl<'a> IconEnvironment<'a> {
    /// An environment without resources.
    pub fn new(typefaces: &'a TypefaceCache, assets: &'a dyn FontAssets) -> Self {
        Self {
            typefaces,
            assets,
            resources: &NoResources,
        }
    }

    /// Look resource ids up in `resources`.
    pub fn with_resources(mut self, resources: &'a dyn Resources) -> Self {
        self.resources = resources;
        self
    }

    fn missing(kind: &'static str, id: ResourceId) -> IconError {
        IconError::MissingResource { kind, id }
    }

    /// Resolve a text option to the text it names.
    pub fn resolve_text(&self, text: &TextOption) -> Result<String, IconError> {
        match text {
            TextOption::Text(text) => Ok(text.clone()),
            TextOption::Codepoint(cp) => codepoint_text(*cp),
            TextOption::StringRes(id) => self
                .resources
                .string(*id)
                .ok_or_else(|| Self::missing("string", *id)),
            TextOption::IntegerRes(id) => {
                let value = self
                    .resources
                    .integer(*id)
                    .ok_or_else(|| Self::missing("integer", *id))?;
                codepoint_text(value.cast_unsigned())
            }
        }
    }

    /// Resolve a color option to a color spec.
    pub fn resolve_color(&self, color: &ColorOption) -> Result<ColorStateSpec, IconError> {
        match color {
            ColorOption::Solid(color) => Ok(ColorStateSpec::solid(*color)),
            ColorOption::Keyed(spec) => Ok(spec.clone()),
            ColorOption::Res(id) => self
                .resources
                .color_state(*id)
                .ok_or_else(|| Self::missing("color", *id)),
        }
    }

    /// Resolve a size option to a validated pixel size.
    pub fn resolve_size(&self, size: &SizeOption) -> Result<IconSize, IconError> {
        let px = match *size {
            SizeOption::Value(unit, value) => {
                unit.to_px(value, &self.resources.display_metrics())
            }
            SizeOption::Res(id) => self
                .resources
                .dimension_px(id)
                .ok_or_else(|| Self::missing("dimension", id))?,
        };
        Ok(IconSize::new(px)?)
    }

    /// Resolve a font option to a loaded font. `None` means the default
    /// font.
    pub fn resolve_font(&self, font: Option<&FontOption>) -> Result<FontHandle, IconError> {
        let handle = match font {
            None => self.typefaces.default_font()?,
            Some(FontOption::Handle(handle)) => handle.clone(),
            Some(FontOption::Asset(path)) => self.typefaces.load_asset(self.assets, path)?,
            Some(FontOption::Name(name)) => self.typefaces.get_by_name(name)?,
            Some(FontOption::NameOrPath(s)) => self.font_by_name_or_path(s)?,
        };
        Ok(handle)
    }

    /// Load `s` as an asset path if [`looks_like_font_path`], otherwise
    /// look it up by name.
    pub fn font_by_name_or_path(&self, s: &str) -> Result<FontHandle, IconError> {
        let handle = if looks_like_font_path(s) {
            self.typefaces.load_asset(self.assets, s)?
        } else {
            self.typefaces.get_by_name(s)?
        };
        Ok(handle)
    }
}

impl fmt::Debug for IconEnvironment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconEnvironment")
            .field("typefaces", &self.typefaces)
            .finish_non_exhaustive()
    }
}

fn codepoint_text(codepoint: u32) -> Result<String, IconError> {
    char::from_u32(codepoint)
        .map(String::from)
        .ok_or(IconError::InvalidCodepoint(codepoint))
}

/// Returns `true` if `s` names a font file rather than a loaded font: it
/// contains a path separator or ends in a font file extension.
///
/// ```
/// use print_icon::looks_like_font_path;
///
/// assert!(looks_like_font_path("fonts/icons.ttf"));
/// assert!(looks_like_font_path("icons.OTF"));
/// assert!(!looks_like_font_path("icons"));
/// ```
pub fn looks_like_font_path(s: &str) -> bool {
    if s.contains(['/', '\\']) {
        return true;
    }
    let lower = s.to_ascii_lowercase();
    [".ttf", ".otf", ".ttc"].iter().any(|ext| lower.ends_with(ext))
}

/// Ways of naming the text of an icon.
#[derive(Clone, Debug, PartialEq)]
pub enum TextOption {
    /// Literal text.
    Text(String),
    /// A single codepoint.
    Codepoint(u32),
    /// A string resource.
    StringRes(ResourceId),
    /// An integer resource holding a codepoint.
    IntegerRes(ResourceId),
}

/// Ways of naming the color of an icon.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorOption {
    /// One color for every state.
    Solid(Color),
    /// Colors keyed by interaction state.
    Keyed(ColorStateSpec),
    /// A color or color state list resource.
    Res(ResourceId),
}

/// Ways of naming the size of an icon.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SizeOption {
    /// A value in a unit.
    Value(SizeUnit, f32),
    /// A dimension resource.
    Res(ResourceId),
}

/// Ways of naming the font of an icon.
#[derive(Clone, Debug, PartialEq)]
pub enum FontOption {
    /// An already loaded font.
    Handle(FontHandle),
    /// A font asset path, loaded through the typeface cache.
    Asset(String),
    /// The cache key of a loaded font; empty means the default font.
    Name(String),
    /// A path if it looks like one, otherwise a name.
    NameOrPath(String),
}

/// Builder-style icon configuration.
///
/// Unset options fall back to: empty text, solid black, 24 px and the
/// default font of the typeface cache.
#[derive(Clone, Debug)]
pub struct IconConfig {
    text: Option<TextOption>,
    color: Option<ColorOption>,
    size: Option<SizeOption>,
    font: Option<FontOption>,
    edit_mode: bool,
    opacity: f32,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            text: None,
            color: None,
            size: None,
            font: None,
            edit_mode: false,
            opacity: 1.0,
        }
    }
}

impl IconConfig {
    /// An empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text option.
    pub fn with_text(mut self, text: TextOption) -> Self {
        self.text = Some(text);
        self
    }

    /// Literal text.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.with_text(TextOption::Text(text.into()))
    }

    /// A single codepoint.
    pub fn codepoint(self, codepoint: u32) -> Self {
        self.with_text(TextOption::Codepoint(codepoint))
    }

    /// Text from a string resource.
    pub fn text_res(self, id: ResourceId) -> Self {
        self.with_text(TextOption::StringRes(id))
    }

    /// A codepoint from an integer resource.
    pub fn int_text_res(self, id: ResourceId) -> Self {
        self.with_text(TextOption::IntegerRes(id))
    }

    /// Set the color option.
    pub fn with_color(mut self, color: ColorOption) -> Self {
        self.color = Some(color);
        self
    }

    /// One color for every state.
    pub fn color(self, color: Color) -> Self {
        self.with_color(ColorOption::Solid(color))
    }

    /// Colors keyed by interaction state.
    pub fn color_spec(self, spec: ColorStateSpec) -> Self {
        self.with_color(ColorOption::Keyed(spec))
    }

    /// Colors from a resource.
    pub fn color_res(self, id: ResourceId) -> Self {
        self.with_color(ColorOption::Res(id))
    }

    /// Set the size option.
    pub fn with_size(mut self, size: SizeOption) -> Self {
        self.size = Some(size);
        self
    }

    /// Size in pixels.
    pub fn size_px(self, px: f32) -> Self {
        self.size(SizeUnit::Px, px)
    }

    /// Size in `unit`.
    pub fn size(self, unit: SizeUnit, value: f32) -> Self {
        self.with_size(SizeOption::Value(unit, value))
    }

    /// Size from a dimension resource.
    pub fn size_res(self, id: ResourceId) -> Self {
        self.with_size(SizeOption::Res(id))
    }

    /// Set the font option.
    pub fn with_font(mut self, font: FontOption) -> Self {
        self.font = Some(font);
        self
    }

    /// An already loaded font.
    pub fn font(self, font: FontHandle) -> Self {
        self.with_font(FontOption::Handle(font))
    }

    /// A font asset path.
    pub fn font_asset(self, path: impl Into<String>) -> Self {
        self.with_font(FontOption::Asset(path.into()))
    }

    /// A loaded font by cache key.
    pub fn font_name(self, name: impl Into<String>) -> Self {
        self.with_font(FontOption::Name(name.into()))
    }

    /// A font asset path or cache key; see [`looks_like_font_path`].
    pub fn font_name_or_path(self, s: impl Into<String>) -> Self {
        self.with_font(FontOption::NameOrPath(s.into()))
    }

    /// Edit mode: the icon never draws.
    pub fn edit_mode(mut self, edit_mode: bool) -> Self {
        self.edit_mode = edit_mode;
        self
    }

    /// Opacity multiplied into the color.
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Resolve every option into a [`GlyphSpec`].
    pub fn resolve(&self, env: &IconEnvironment<'_>) -> Result<GlyphSpec, IconError> {
        let text = match &self.text {
            Some(text) => env.resolve_text(text)?,
            None => String::new(),
        };
        let color = match &self.color {
            Some(color) => env.resolve_color(color)?,
            None => ColorStateSpec::solid(Color::BLACK),
        };
        let size = match &self.size {
            Some(size) => env.resolve_size(size)?,
            None => IconSize::DEFAULT,
        };
        let font = env.resolve_font(self.font.as_ref())?;
        Ok(GlyphSpec {
            text,
            font,
            size,
            color,
        })
    }

    /// Build an icon drawn with the font's own outlines.
    pub fn build(&self, env: &IconEnvironment<'_>) -> Result<IconGlyph, IconError> {
        self.build_with_outliner(env, SkrifaOutliner)
    }

    /// Build an icon drawn with a custom outliner.
    pub fn build_with_outliner<O: GlyphOutliner>(
        &self,
        env: &IconEnvironment<'_>,
        outliner: O,
    ) -> Result<IconGlyph<O>, IconError> {
        let spec = self.resolve(env)?;
        let mut icon = IconGlyph::with_outliner(spec, outliner);
        icon.set_edit_mode(self.edit_mode);
        icon.set_opacity(self.opacity);
        Ok(icon)
    }
}

/// Setters that resolve through an [`IconEnvironment`].
///
/// Each leaves the icon unchanged when resolution fails.
impl<O: GlyphOutliner> IconGlyph<O> {
    /// Text from a string resource.
    pub fn set_text_res(
        &mut self,
        env: &IconEnvironment<'_>,
        id: ResourceId,
    ) -> Result<(), IconError> {
        let text = env.resolve_text(&TextOption::StringRes(id))?;
        self.set_text(text);
        Ok(())
    }

    /// A codepoint from an integer resource.
    pub fn set_int_text_res(
        &mut self,
        env: &IconEnvironment<'_>,
        id: ResourceId,
    ) -> Result<(), IconError> {
        let text = env.resolve_text(&TextOption::IntegerRes(id))?;
        self.set_text(text);
        Ok(())
    }

    /// Colors from a resource.
    pub fn set_color_res(
        &mut self,
        env: &IconEnvironment<'_>,
        id: ResourceId,
    ) -> Result<(), IconError> {
        let spec = env.resolve_color(&ColorOption::Res(id))?;
        self.set_color_spec(spec);
        Ok(())
    }

    /// Size in `unit`, converted with the environment's display metrics.
    pub fn set_size_in(
        &mut self,
        env: &IconEnvironment<'_>,
        unit: SizeUnit,
        value: f32,
    ) -> Result<(), IconError> {
        let size = env.resolve_size(&SizeOption::Value(unit, value))?;
        self.set_size(size);
        Ok(())
    }

    /// Size from a dimension resource.
    pub fn set_size_res(
        &mut self,
        env: &IconEnvironment<'_>,
        id: ResourceId,
    ) -> Result<(), IconError> {
        let size = env.resolve_size(&SizeOption::Res(id))?;
        self.set_size(size);
        Ok(())
    }

    /// Font from an asset path.
    pub fn set_font_asset(
        &mut self,
        env: &IconEnvironment<'_>,
        path: &str,
    ) -> Result<(), IconError> {
        let font = env.typefaces.load_asset(env.assets, path)?;
        self.set_font(font);
        Ok(())
    }

    /// Font from an asset path or cache key; see [`looks_like_font_path`].
    pub fn set_font_by_name_or_path(
        &mut self,
        env: &IconEnvironment<'_>,
        s: &str,
    ) -> Result<(), IconError> {
        let font = env.font_by_name_or_path(s)?;
        self.set_font(font);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use print_color::{InteractionState, color_from_rgb};
    use print_typeface::{EmbeddedAssets, TypefaceError};

    const EMPTY_SFNT: [u8; 12] = [0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

    fn assets() -> EmbeddedAssets {
        EmbeddedAssets::new()
            .with("fonts/icons.ttf", EMPTY_SFNT.to_vec())
            .with("fonts/other.otf", EMPTY_SFNT.to_vec())
    }

    #[test]
    fn units_convert_with_display_metrics() {
        let metrics = DisplayMetrics {
            density: 2.0,
            scaled_density: 2.5,
            xdpi: 320.0,
        };
        assert_eq!(SizeUnit::Px.to_px(10.0, &metrics), 10.0, "px");
        assert_eq!(SizeUnit::Dp.to_px(10.0, &metrics), 20.0, "dp");
        assert_eq!(SizeUnit::Sp.to_px(10.0, &metrics), 25.0, "sp");
        assert_eq!(SizeUnit::Pt.to_px(9.0, &metrics), 40.0, "pt");
    }

    #[test]
    fn path_detection() {
        assert!(looks_like_font_path("a/b"), "slash");
        assert!(looks_like_font_path(r"a\b"), "backslash");
        assert!(looks_like_font_path("x.ttc"), "collection");
        assert!(!looks_like_font_path("material"), "name");
        assert!(!looks_like_font_path(""), "empty is the default name");
    }

    #[test]
    fn unset_options_use_defaults() {
        let typefaces = TypefaceCache::new();
        let assets = assets();
        let env = IconEnvironment::new(&typefaces, &assets);
        let default = typefaces.load_asset(&assets, "fonts/icons.ttf").expect("valid");

        let spec = IconConfig::new().resolve(&env).expect("defaults resolve");
        assert_eq!(spec.text, "", "no text");
        assert_eq!(spec.font, default, "default font");
        assert_eq!(spec.size, IconSize::DEFAULT, "24px");
        assert_eq!(spec.color, ColorStateSpec::solid(Color::BLACK), "black");
    }

    #[test]
    fn missing_default_font_is_an_error() {
        let typefaces = TypefaceCache::new();
        let assets = assets();
        let env = IconEnvironment::new(&typefaces, &assets);
        assert!(
            matches!(
                IconConfig::new().codepoint(0xE900).build(&env),
                Err(IconError::Typeface(TypefaceError::NoDefaultFont))
            ),
            "no font configured and none loaded"
        );
    }

    #[test]
    fn resources_resolve_every_option_kind() {
        let typefaces = TypefaceCache::new();
        let assets = assets();
        let red = color_from_rgb(0xFF0000);
        let keyed = ColorStateSpec::builder()
            .normal(color_from_rgb(0x000000))
            .selected(red)
            .build()
            .expect("has normal");
        let resources = ResourceTable::new()
            .with_metrics(DisplayMetrics {
                density: 3.0,
                ..DisplayMetrics::default()
            })
            .with_string(ResourceId(1), "\u{e001}")
            .with_integer(ResourceId(2), 0xE002)
            .with_color(ResourceId(3), keyed.clone())
            .with_dimension_px(ResourceId(4), 36.0);
        let env = IconEnvironment::new(&typefaces, &assets).with_resources(&resources);

        let spec = IconConfig::new()
            .text_res(ResourceId(1))
            .color_res(ResourceId(3))
            .size_res(ResourceId(4))
            .font_asset("fonts/icons.ttf")
            .resolve(&env)
            .expect("all resources defined");
        assert_eq!(spec.text, "\u{e001}", "string resource");
        assert_eq!(spec.color, keyed, "color resource");
        assert_eq!(spec.size.get(), 36.0, "dimension resource");
        assert_eq!(spec.font.key(), "icons", "asset font");

        let spec = IconConfig::new()
            .int_text_res(ResourceId(2))
            .size(SizeUnit::Dp, 8.0)
            .resolve(&env)
            .expect("default font is loaded by now");
        assert_eq!(spec.text, "\u{e002}", "integer resource");
        assert_eq!(spec.size.get(), 24.0, "8dp at density 3");
        assert_eq!(spec.color.resolve(InteractionState::SELECTED), Color::BLACK, "default");
    }

    #[test]
    fn missing_resources_are_reported() {
        let typefaces = TypefaceCache::new();
        let assets = assets();
        let env = IconEnvironment::new(&typefaces, &assets);
        match IconConfig::new()
            .color_res(ResourceId(7))
            .font_asset("fonts/icons.ttf")
            .resolve(&env)
        {
            Err(IconError::MissingResource { kind, id }) => {
                assert_eq!(kind, "color", "kind");
                assert_eq!(id, ResourceId(7), "id");
            }
            other => panic!("expected a missing resource, got {other:?}"),
        }
    }

    #[test]
    fn invalid_config_values_fail_the_build() {
        let typefaces = TypefaceCache::new();
        let assets = assets();
        let env = IconEnvironment::new(&typefaces, &assets);
        let base = IconConfig::new().font_asset("fonts/icons.ttf");

        assert!(
            matches!(
                base.clone().size_px(0.0).build(&env),
                Err(IconError::InvalidSize(_))
            ),
            "zero size"
        );
        assert!(
            matches!(
                base.clone().codepoint(0x11_0000).build(&env),
                Err(IconError::InvalidCodepoint(0x11_0000))
            ),
            "beyond Unicode"
        );
        assert!(
            matches!(
                base.font_name("missing").build(&env),
                Err(IconError::Typeface(TypefaceError::FontNotFound(_)))
            ),
            "unknown font name"
        );
    }

    #[test]
    fn name_or_path_picks_the_right_lookup() {
        let typefaces = TypefaceCache::new();
        let assets = assets();
        let env = IconEnvironment::new(&typefaces, &assets);

        let by_path = env.font_by_name_or_path("fonts/other.otf").expect("asset");
        assert_eq!(by_path.key(), "other", "loaded from the asset path");
        let by_name = env.font_by_name_or_path("other").expect("cached");
        assert_eq!(by_name, by_path, "found by name once loaded");
        assert!(
            matches!(
                env.font_by_name_or_path("icons"),
                Err(IconError::Typeface(TypefaceError::FontNotFound(_)))
            ),
            "names are not loaded implicitly"
        );
    }

    #[test]
    fn environment_setters_leave_the_icon_alone_on_failure() {
        let typefaces = TypefaceCache::new();
        let assets = assets();
        let resources = ResourceTable::new().with_dimension_px(ResourceId(1), -4.0);
        let env = IconEnvironment::new(&typefaces, &assets).with_resources(&resources);
        let mut icon = IconConfig::new()
            .codepoint(0xE900)
            .size_px(20.0)
            .font_asset("fonts/icons.ttf")
            .build(&env)
            .expect("valid");

        assert!(icon.set_size_res(&env, ResourceId(1)).is_err(), "negative dimension");
        assert!(icon.set_size_res(&env, ResourceId(2)).is_err(), "undefined dimension");
        assert!(icon.set_text_res(&env, ResourceId(3)).is_err(), "undefined string");
        assert!(
            icon.set_font_by_name_or_path(&env, "nope").is_err(),
            "unknown font name"
        );
        assert_eq!(icon.size().get(), 20.0, "size unchanged");
        assert_eq!(icon.text(), "\u{e900}", "text unchanged");
        assert_eq!(icon.font().key(), "icons", "font unchanged");

        icon.set_size_in(&env, SizeUnit::Pt, 36.0).expect("valid");
        assert_eq!(icon.size().get(), 80.0, "36pt at 160dpi");
        icon.set_font_asset(&env, "fonts/other.otf").expect("valid");
        assert_eq!(icon.font().key(), "other", "font replaced");
    }

    #[test]
    fn config_flags_reach_the_icon() {
        let typefaces = TypefaceCache::new();
        let assets = assets();
        let env = IconEnvironment::new(&typefaces, &assets);
        let icon = IconConfig::new()
            .font_asset("fonts/icons.ttf")
            .edit_mode(true)
            .opacity(0.25)
            .build(&env)
            .expect("valid");
        assert!(icon.is_edit_mode(), "edit mode");
        assert_eq!(icon.opacity(), 0.25, "opacity");
    }
}
