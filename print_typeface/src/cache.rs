// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hashbrown::HashMap;

use crate::{AssetFont, FontAssets, FontHandle, FontSource, TypefaceError};

/// Derive a cache key from a font path: directories and the final
/// extension are stripped. A path with no file name, such as `"fonts/"`,
/// is its own key.
///
/// ```
/// use print_typeface::cache_key_for_path;
///
/// assert_eq!(cache_key_for_path("fonts/icons.ttf"), "icons");
/// assert_eq!(cache_key_for_path(r"C:\fonts\material.otf"), "material");
/// assert_eq!(cache_key_for_path("glyphs"), "glyphs");
/// assert_eq!(cache_key_for_path("fonts/"), "fonts/");
/// ```
pub fn cache_key_for_path(path: &str) -> &str {
    let file = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let stem = match file.rfind('.') {
        Some(0) | None => file,
        Some(dot) => &file[..dot],
    };
    if stem.is_empty() { path } else { stem }
}

#[derive(Debug, Default)]
struct CacheState {
    fonts: HashMap<String, FontHandle>,
    default: Option<FontHandle>,
}

/// Deduplicating font cache with one default font.
///
/// Entries are never evicted. All methods take `&self` and are safe to
/// call from several threads: a load holds the write lock for the whole
/// lookup, read, parse and insert sequence, so two threads loading the same
/// uncached key end up with the same handle. Lookups only take the read
/// lock.
#[derive(Debug, Default)]
pub struct TypefaceCache {
    state: RwLock<CacheState>,
}

impl TypefaceCache {
    /// An empty cache with no default font.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache, created on first use.
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<TypefaceCache> = OnceLock::new();
        SHARED.get_or_init(Self::new)
    }

    // The state is consistent between statements, so a panic elsewhere while
    // the lock was held leaves nothing half-updated.
    fn read(&self) -> RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(|poisoned| {
            log::warn!("typeface cache lock was poisoned; continuing");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheState> {
        self.state.write().unwrap_or_else(|poisoned| {
            log::warn!("typeface cache lock was poisoned; continuing");
            PoisonError::into_inner(poisoned)
        })
    }

    /// Load a font, or return the handle already cached under its key.
    ///
    /// `key` defaults to [`cache_key_for_path`] of the source path. If the
    /// key is already cached, `source` is not read, even when it names
    /// different data than the cached font: the first load for a key wins.
    ///
    /// The first successful load into a cache without a default also makes
    /// that font the default. A failed load caches nothing, so the same key
    /// can be retried.
    pub fn load<S: FontSource + ?Sized>(
        &self,
        source: &S,
        key: Option<&str>,
    ) -> Result<FontHandle, TypefaceError> {
        let key = key
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| cache_key_for_path(source.path()));
        // The empty name is reserved for the default font.
        if key.is_empty() {
            return Err(TypefaceError::UnnamedFont);
        }

        let mut state = self.write();
        if let Some(cached) = state.fonts.get(key) {
            if cached.source_path() != source.path() {
                log::debug!(
                    "typeface `{key}` already loaded from `{}`; ignoring `{}`",
                    cached.source_path(),
                    source.path()
                );
            }
            return Ok(cached.clone());
        }

        log::debug!("loading typeface `{key}` from `{}`", source.path());
        let handle = FontHandle::load(key, source)?;
        state.fonts.insert(key.to_owned(), handle.clone());
        if state.default.is_none() {
            log::info!("using `{key}` as the default typeface");
            state.default = Some(handle.clone());
        }
        Ok(handle)
    }

    /// Load `path` from an asset provider, keyed by the stripped path.
    pub fn load_asset<A: FontAssets + ?Sized>(
        &self,
        assets: &A,
        path: &str,
    ) -> Result<FontHandle, TypefaceError> {
        self.load(&AssetFont::new(assets, path), None)
    }

    /// Load a font and make it the default, replacing any previous default.
    pub fn init_default<S: FontSource + ?Sized>(
        &self,
        source: &S,
        key: Option<&str>,
    ) -> Result<FontHandle, TypefaceError> {
        let handle = self.load(source, key)?;
        Ok(self.set_default(handle))
    }

    /// Make the font cached under `handle`'s key the default, and return it.
    ///
    /// A handle whose key is not cached yet is registered under that key.
    /// If the key is already cached, the cached handle stays authoritative
    /// and becomes the default, so lookups by name and the default always
    /// agree.
    pub fn set_default(&self, handle: FontHandle) -> FontHandle {
        let mut state = self.write();
        let cached = state
            .fonts
            .entry(handle.key().to_owned())
            .or_insert(handle)
            .clone();
        log::info!("using `{}` as the default typeface", cached.key());
        state.default = Some(cached.clone());
        cached
    }

    /// The default font.
    pub fn default_font(&self) -> Result<FontHandle, TypefaceError> {
        self.read()
            .default
            .clone()
            .ok_or(TypefaceError::NoDefaultFont)
    }

    /// Look up a font by cache key; an empty name means the default font.
    pub fn get_by_name(&self, name: &str) -> Result<FontHandle, TypefaceError> {
        if name.is_empty() {
            return self.default_font();
        }
        self.get(name)
            .ok_or_else(|| TypefaceError::FontNotFound(name.to_owned()))
    }

    /// The font cached under `key`, if any.
    pub fn get(&self, key: &str) -> Option<FontHandle> {
        self.read().fonts.get(key).cloned()
    }

    /// Returns `true` if a font is cached under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.read().fonts.contains_key(key)
    }

    /// Number of cached fonts.
    pub fn len(&self) -> usize {
        self.read().fonts.len()
    }

    /// Returns `true` if no font has been cached.
    pub fn is_empty(&self) -> bool {
        self.read().fonts.is_empty()
    }
}
