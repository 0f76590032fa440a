//! # Asset Resolver
//!
//! Maps a feature identifier to the path of its precomputed PDP image.
//!
//! Sanitization replaces each space and each `/` with `_` and touches nothing
//! else. Two features may sanitize to the same file name; the resolver does
//! not detect this (see [`audit`](crate::audit)).
//!
//! Existence checks go through [`AssetProbe`] so rendering can run against
//! the real filesystem or an in-memory set.

use crate::FeatureId;
use crate::primitives::{ASSET_EXTENSION, DEFAULT_ASSET_DIR, SANITIZED_CHARS};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Replace spaces and forward slashes with underscores.
#[must_use]
pub fn sanitize_feature(feature: &str) -> String {
    feature.replace(SANITIZED_CHARS, "_")
}

// =============================================================================
// RESOLVER
// =============================================================================

/// Resolves features to image paths under a fixed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetResolver {
    dir: PathBuf,
    extension: String,
}

impl AssetResolver {
    /// Resolver rooted at `dir` with the given extension (no leading dot).
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Resolver for the default asset directory under `root`.
    #[must_use]
    pub fn under_root(root: &Path) -> Self {
        Self::new(root.join(DEFAULT_ASSET_DIR), ASSET_EXTENSION)
    }

    /// Directory the images live in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name (no directory) of a feature's image.
    #[must_use]
    pub fn file_name(&self, feature: &FeatureId) -> String {
        format!("{}.{}", sanitize_feature(feature.as_str()), self.extension)
    }

    /// Full path of a feature's image. Does not touch the filesystem.
    #[must_use]
    pub fn resolve(&self, feature: &FeatureId) -> PathBuf {
        self.dir.join(self.file_name(feature))
    }
}

// =============================================================================
// ASSET PROBE
// =============================================================================

/// Answers whether an asset exists.
pub trait AssetProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem. Only regular files count.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl AssetProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Probe backed by a fixed set of paths.
#[derive(Debug, Clone, Default)]
pub struct KnownAssets {
    paths: BTreeSet<PathBuf>,
}

impl KnownAssets {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a path as present.
    pub fn insert(&mut self, path: impl Into<PathBuf>) {
        self.paths.insert(path.into());
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for KnownAssets {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl AssetProbe for KnownAssets {
    fn exists(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }
}

// =============================================================================
// TESTS
// =============================================================================
