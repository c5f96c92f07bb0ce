// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print Typeface: shared, validated icon font handles.
//!
//! Icon fonts are loaded once and shared by every icon that draws from
//! them. This crate provides:
//!
//! - [`FontSource`]: where font bytes come from. [`FontFile`] reads from the
//!   filesystem, [`EmbeddedFont`] wraps bytes already in memory, and
//!   [`AssetFont`] adapts any [`FontAssets`] provider (an asset manager such
//!   as [`AssetDir`] or [`EmbeddedAssets`]) plus a relative path.
//! - [`FontHandle`]: a cheap-to-clone handle to validated font data. Two
//!   handles are equal only if they refer to the same loaded font.
//! - [`TypefaceCache`]: maps cache keys to handles, deduplicates loads and
//!   remembers one default font. It is an ordinary value that can be
//!   constructed per test, with [`TypefaceCache::shared`] as the
//!   process-wide instance.
//!
//! ```no_run
//! use print_typeface::{AssetDir, TypefaceCache};
//!
//! let assets = AssetDir::new("assets");
//! let cache = TypefaceCache::new();
//! let icons = cache.load_asset(&assets, "fonts/icons.ttf")?;
//! assert_eq!(icons.key(), "icons");
//! assert_eq!(cache.get_by_name("icons")?, icons);
//! assert_eq!(cache.default_font()?, icons);
//! # Ok::<(), print_typeface::TypefaceError>(())
//! ```
//!
//! ## Cache keys
//!
//! Unless a key is given explicitly, a font is cached under its source
//! path with directories and the extension stripped (see
//! [`cache_key_for_path`]). The first successful load for a key wins: a
//! later `load` with the same key returns the cached handle even when it
//! names different font data.

mod cache;
mod handle;
mod source;

use std::io;

pub use skrifa::raw::ReadError;

pub use cache::{TypefaceCache, cache_key_for_path};
pub use handle::FontHandle;
pub use source::{
    AssetDir, AssetFont, EmbeddedAssets, EmbeddedFont, FontAssets, FontFile, FontSource,
};

/// Errors produced while loading or looking up fonts.
#[derive(Debug, thiserror::Error)]
pub enum TypefaceError {
    /// The font data could not be read from its source.
    #[error("failed to read font data for `{key}` from `{path}`")]
    Read {
        /// Cache key the load was attempted under.
        key: String,
        /// Path reported by the font source.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The font data was read but is not a usable font.
    #[error("font data for `{key}` could not be parsed: {reason}")]
    Load {
        /// Cache key the load was attempted under.
        key: String,
        /// Parser failure.
        reason: ReadError,
    },
    /// The font source has an empty path and no key was given; the empty
    /// name is reserved for the default font.
    #[error("cannot cache a font without a name")]
    UnnamedFont,
    /// No font has been loaded yet, so there is no default.
    #[error("no default font has been loaded")]
    NoDefaultFont,
    /// The named font has not been loaded.
    #[error("font `{0}` has not been loaded")]
    FontNotFound(String),
}
