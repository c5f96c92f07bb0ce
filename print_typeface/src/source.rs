// Copyright 2025 the Print Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font data providers.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use hashbrown::HashMap;
use peniko::Blob;

/// A provider of raw font bytes.
///
/// The cache calls [`FontSource::read`] at most once per uncached key.
/// Timeouts or retries, if a provider needs them, are the provider's
/// business.
pub trait FontSource {
    /// Path (or logical name) identifying the data, used to derive a cache
    /// key when none is given.
    fn path(&self) -> &str;

    /// Index of the face within a font collection.
    fn index(&self) -> u32 {
        0
    }

    /// Read the font bytes.
    fn read(&self) -> io::Result<Blob<u8>>;
}

/// A font file on the filesystem.
#[derive(Clone, Debug)]
pub struct FontFile {
    path: PathBuf,
    label: String,
    index: u32,
}

impl FontFile {
    /// Refer to the font at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.to_string_lossy().into_owned();
        Self {
            path,
            label,
            index: 0,
        }
    }

    /// Select a face within a font collection.
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }
}

impl FontSource for FontFile {
    fn path(&self) -> &str {
        &self.label
    }

    fn index(&self) -> u32 {
        self.index
    }

    fn read(&self) -> io::Result<Blob<u8>> {
        fs::read(&self.path).map(Blob::from)
    }
}

/// Font bytes that are already in memory.
#[derive(Clone)]
pub struct EmbeddedFont {
    path: String,
    data: Blob<u8>,
    index: u32,
}

impl EmbeddedFont {
    /// Wrap `data`, reporting it under `path`.
    pub fn new(path: impl Into<String>, data: impl Into<Blob<u8>>) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
            index: 0,
        }
    }

    /// Wrap static bytes such as the output of `include_bytes!`.
    pub fn from_static(path: impl Into<String>, data: &'static [u8]) -> Self {
        Self::new(path, Blob::new(Arc::new(data)))
    }

    /// Select a face within a font collection.
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }
}

impl fmt::Debug for EmbeddedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedFont")
            .field("path", &self.path)
            .field("len", &self.data.len())
            .field("index", &self.index)
            .finish()
    }
}

impl FontSource for EmbeddedFont {
    fn path(&self) -> &str {
        &self.path
    }

    fn index(&self) -> u32 {
        self.index
    }

    fn read(&self) -> io::Result<Blob<u8>> {
        Ok(self.data.clone())
    }
}

/// An asset manager: reads font data by relative path.
pub trait FontAssets {
    /// Read the asset at `path`.
    fn read(&self, path: &str) -> io::Result<Blob<u8>>;
}

/// Assets stored below a directory on the filesystem.
#[derive(Clone, Debug)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    /// Resolve asset paths relative to `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory assets are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FontAssets for AssetDir {
    fn read(&self, path: &str) -> io::Result<Blob<u8>> {
        fs::read(self.root.join(path)).map(Blob::from)
    }
}

/// Assets held in memory, keyed by path.
#[derive(Clone, Default)]
pub struct EmbeddedAssets {
    fonts: HashMap<String, Blob<u8>>,
}

impl EmbeddedAssets {
    /// An empty asset table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `data` under `path`, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<String>, data: impl Into<Blob<u8>>) {
        self.fonts.insert(path.into(), data.into());
    }

    /// Builder-style [`EmbeddedAssets::insert`].
    pub fn with(mut self, path: impl Into<String>, data: impl Into<Blob<u8>>) -> Self {
        self.insert(path, data);
        self
    }
}

impl fmt::Debug for EmbeddedAssets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedAssets")
            .field("paths", &self.fonts.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl FontAssets for EmbeddedAssets {
    fn read(&self, path: &str) -> io::Result<Blob<u8>> {
        self.fonts.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no embedded asset at `{path}`"),
            )
        })
    }
}

/// A [`FontSource`] reading one path from a [`FontAssets`] provider.
pub struct AssetFont<'a, A: ?Sized> {
    assets: &'a A,
    path: &'a str,
    index: u32,
}

impl<'a, A: FontAssets + ?Sized> AssetFont<'a, A> {
    /// Read `path` from `assets`.
    pub fn new(assets: &'a A, path: &'a str) -> Self {
        Self {
            assets,
            path,
            index: 0,
        }
    }

    /// Select a face within a font collection.
    pub fn with_index(mut self, index: u32) -> Self {
        self.index = index;
        self
    }
}

impl<A: ?Sized> fmt::Debug for AssetFont<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssetFont")
            .field("path", &self.path)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl<A: FontAssets + ?Sized> FontSource for AssetFont<'_, A> {
    fn path(&self) -> &str {
        self.path
    }

    fn index(&self) -> u32 {
        self.index
    }

    fn read(&self) -> io::Result<Blob<u8>> {
        self.assets.read(self.path)
    }
}
