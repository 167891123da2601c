use serde::{Deserialize, Serialize};

use crate::models::{CollectionId, MediaKind, MediaOrigin};

use super::sort::SortKey;

/// Origin dropdown value. `Both` is the no-op sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFilter {
    Both,
    Plex,
    Jellyfin,
}

impl Default for SourceFilter {
    fn default() -> Self {
        Self::Both
    }
}

impl SourceFilter {
    pub fn matches(self, origin: Option<MediaOrigin>) -> bool {
        match self {
            Self::Both => true,
            Self::Plex => origin == Some(MediaOrigin::Plex),
            Self::Jellyfin => origin == Some(MediaOrigin::Jellyfin),
        }
    }
}

/// The single mutable filter record for a browsing session. Owned by
/// [`crate::core::browser::LibraryBrowser`]; every mutation goes through
/// it so a recompute can follow.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Active tab; exactly one category is shown at a time.
    pub category: MediaKind,
    pub genre: Option<String>,
    /// Exact string match against the item's year, as the year dropdown
    /// submits it.
    pub year: Option<String>,
    /// Case-insensitive substring match against titles only.
    pub search: String,
    pub source: SourceFilter,
    pub collection: Option<CollectionId>,
    pub sort: SortKey,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: MediaKind::Movie,
            genre: None,
            year: None,
            search: String::new(),
            source: SourceFilter::default(),
            collection: None,
            sort: SortKey::default(),
        }
    }
}

impl FilterState {
    /// Entering a collection starts from a clean slate: genre, year and
    /// search are dropped and the sort returns to its default. The
    /// collection itself still composes with category and source.
    pub fn activate_collection(&mut self, id: CollectionId) {
        self.genre = None;
        self.year = None;
        self.search.clear();
        self.sort = SortKey::default();
        self.collection = Some(id);
    }

    /// Resets every filter axis, keeping only the active tab.
    pub fn clear(&mut self) {
        *self = Self {
            category: self.category,
            ..Self::default()
        };
    }
}
