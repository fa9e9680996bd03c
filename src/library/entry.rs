//! Library entries and the ordered library they form

use crate::signature::QuadrantSignature;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A reference image on disk paired with its signature
///
/// Serialized as `{"filename": ..., "quadrant_colors": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryEntry {
    /// Path of the reference image, as given when the library was built
    #[serde(rename = "filename")]
    pub path: PathBuf,
    /// Signature of the image's centered square
    #[serde(rename = "quadrant_colors")]
    pub signature: QuadrantSignature,
}

impl LibraryEntry {
    /// Pair a path with its signature
    pub fn new(path: impl Into<PathBuf>, signature: QuadrantSignature) -> Self {
        Self {
            path: path.into(),
            signature,
        }
    }

    /// Path of the reference image
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Reference images in the order they were processed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    entries: Vec<LibraryEntry>,
}

impl Library {
    /// Create a library from entries in insertion order
    pub const fn new(entries: Vec<LibraryEntry>) -> Self {
        Self { entries }
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, LibraryEntry> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the library has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<LibraryEntry> for Library {
    fn from_iter<T: IntoIterator<Item = LibraryEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a LibraryEntry;
    type IntoIter = std::slice::Iter<'a, LibraryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
