// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use peniko::FontData;
use skrifa::FontRef;

use crate::{FontSource, ReadError, TypefaceError};

/// Shared handle to a loaded, validated font.
///
/// Handles are immutable and cheap to clone. Equality is identity: two
/// handles compare equal only when they came from the same load.
#[derive(Clone)]
pub struct FontHandle {
    inner: Arc<FontEntry>,
}

struct FontEntry {
    key: String,
    source_path: String,
    data: FontData,
}

impl FontHandle {
    /// Validate `data` and wrap it in a handle without caching it.
    ///
    /// This is the entry point for callers that already hold font bytes;
    /// the handle can later be registered with
    /// [`TypefaceCache::set_default`](crate::TypefaceCache::set_default).
    pub fn from_data(key: impl Into<String>, data: FontData) -> Result<Self, TypefaceError> {
        let key = key.into();
        let source_path = key.clone();
        Self::validated(key, source_path, data)
    }

    pub(crate) fn load<S: FontSource + ?Sized>(
        key: &str,
        source: &S,
    ) -> Result<Self, TypefaceError> {
        let blob = source.read().map_err(|source_err| TypefaceError::Read {
            key: key.to_owned(),
            path: source.path().to_owned(),
            source: source_err,
        })?;
        Self::validated(
            key.to_owned(),
            source.path().to_owned(),
            FontData::new(blob, source.index()),
        )
    }

    fn validated(key: String, source_path: String, data: FontData) -> Result<Self, TypefaceError> {
        if let Err(reason) = FontRef::from_index(data.data.as_ref(), data.index) {
            return Err(TypefaceError::Load { key, reason });
        }
        Ok(Self {
            inner: Arc::new(FontEntry {
                key,
                source_path,
                data,
            }),
        })
    }

    /// The cache key this font was loaded under.
    pub fn key(&self) -> &str {
        &self.inner.key
    }

    /// The path reported by the source the font was read from.
    pub fn source_path(&self) -> &str {
        &self.inner.source_path
    }

    /// The raw font data and face index.
    pub fn data(&self) -> &FontData {
        &self.inner.data
    }

    /// Face index within the font data.
    pub fn index(&self) -> u32 {
        self.inner.data.index
    }

    /// Borrow the font for glyph lookup and outline extraction.
    ///
    /// The data was validated when the handle was created, so this only
    /// fails if the font parser disagrees with itself.
    pub fn font_ref(&self) -> Result<FontRef<'_>, ReadError> {
        FontRef::from_index(self.inner.data.data.as_ref(), self.inner.data.index)
    }

    /// Returns `true` if both handles refer to the same loaded font.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl PartialEq for FontHandle {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other)
    }
}

impl Eq for FontHandle {}

impl Hash for FontHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.inner).hash(state);
    }
}

impl fmt::Debug for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontHandle")
            .field("key", &self.inner.key)
            .field("source_path", &self.inner.source_path)
            .field("index", &self.inner.data.index)
            .finish_non_exhaustive()
    }
}
