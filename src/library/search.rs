//! Linear nearest-match search over a library

use crate::io::error::{MosaicError, Result};
use crate::library::entry::{Library, LibraryEntry};
use crate::signature::QuadrantSignature;
use crate::signature::distance::distance;

/// Closest library entry to a query signature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    /// Position of the entry in the library
    pub index: usize,
    /// The matched entry
    pub entry: &'a LibraryEntry,
    /// Distance between the query and the entry's signature
    pub distance: f64,
}

/// Find the entry whose signature is closest to `query`
///
/// Scans every entry once. A candidate replaces the running best only when
/// strictly closer, so the earliest entry wins ties.
///
/// # Errors
///
/// Returns `EmptyLibrary` if `entries` is empty
pub fn nearest<'a>(query: &QuadrantSignature, entries: &'a [LibraryEntry]) -> Result<Match<'a>> {
    let mut best: Option<Match<'a>> = None;
    let mut best_distance = f64::INFINITY;

    for (index, entry) in entries.iter().enumerate() {
        let candidate = distance(query, &entry.signature);
        if candidate < best_distance {
            best_distance = candidate;
            best = Some(Match {
                index,
                entry,
                distance: candidate,
            });
        }
    }

    best.ok_or(MosaicError::EmptyLibrary)
}

impl Library {
    /// Find the entry whose signature is closest to `query`
    ///
    /// # Errors
    ///
    /// Returns `EmptyLibrary` if the library has no entries
    pub fn nearest(&self, query: &QuadrantSignature) -> Result<Match<'_>> {
        nearest(query, self.entries())
    }
}
