//! Catalog: the fixed, ordered collection of playable content.

use serde::Serialize;

use crate::content::{Content, ContentKind, Movie, Song};

/// Ordered collection of content entries.
///
/// Insertion order is display order. The catalog is assembled once at
/// startup and only read afterwards; there is no add/remove surface
/// beyond construction.
#[derive(Default)]
pub struct Catalog {
    entries: Vec<Box<dyn Content>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The built-in catalog of the demo digital library.
    pub fn demo() -> Self {
        let mut catalog = Self::new();
        catalog.add(Box::new(Movie::new(
            "Interstellar",
            169.0,
            "2160p",
            "Christopher Nolan",
        )));
        catalog.add(Box::new(Movie::new("Feast", 7.0, "480p", "Patrick Osborne")));
        catalog.add(Box::new(Song::new(
            "Bohemian Rhapsody",
            6.0,
            320.0,
            "Protected",
        )));
        catalog.add(Box::new(Song::new(
            "The House of the Rising Sun",
            5.0,
            120.0,
            "Free",
        )));
        catalog
    }

    /// Appends an entry at construction time.
    pub fn add(&mut self, entry: Box<dyn Content>) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by zero-based index.
    pub fn get(&self, index: usize) -> Option<&dyn Content> {
        self.entries.get(index).map(|entry| entry.as_ref())
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Content> {
        self.entries.iter().map(|entry| entry.as_ref())
    }

    /// Movies only, in catalog order.
    pub fn movies(&self) -> impl Iterator<Item = &dyn Content> {
        self.iter().filter(|entry| entry.kind() == ContentKind::Movie)
    }

    /// Songs only, in catalog order.
    pub fn songs(&self) -> impl Iterator<Item = &dyn Content> {
        self.iter().filter(|entry| entry.kind() == ContentKind::Song)
    }

    /// Renders the playback block for a one-based catalog position, as
    /// shown in listings.
    ///
    /// # Errors
    /// - `CatalogError::SelectionOutOfRange` - position is zero or past
    ///   the end of the catalog
    pub fn play(&self, position: usize) -> Result<String, CatalogError> {
        let entry = position
            .checked_sub(1)
            .and_then(|index| self.get(index))
            .ok_or(CatalogError::SelectionOutOfRange {
                selected: position,
                available: self.entries.len(),
            })?;

        tracing::debug!("playing catalog entry {position}: {}", entry.describe());
        Ok(entry.play())
    }

    /// One-line serializable summaries for machine-readable listings.
    pub fn entries(&self) -> Vec<CatalogEntry> {
        self.iter()
            .enumerate()
            .map(|(index, entry)| CatalogEntry {
                position: index + 1,
                kind: entry.kind(),
                description: entry.describe(),
            })
            .collect()
    }
}

/// One row of a catalog listing.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    /// One-based display position.
    pub position: usize,
    pub kind: ContentKind,
    pub description: String,
}

/// Errors that can occur in catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Selection {selected} is out of range (catalog has {available} entries)")]
    SelectionOutOfRange { selected: usize, available: usize },
}
