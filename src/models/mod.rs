mod identifiers;

pub use identifiers::{CollectionId, ItemId};

use serde::{Deserialize, Serialize};

/// 100-nanosecond ticks per minute of runtime, the unit the feed reports
/// `runtime_ticks` in.
pub const TICKS_PER_MINUTE: i64 = 600_000_000;

/// The two card categories the catalog renders as tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Series,
}

impl MediaKind {
    /// Folds the feed's capitalized and legacy spellings into the fixed
    /// vocabulary. `"show"` is the older name for a series entry.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "movie" => Some(Self::Movie),
            "series" | "show" => Some(Self::Series),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Series => "series",
        }
    }
}

/// Which upstream library an item was exported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaOrigin {
    Plex,
    Jellyfin,
}

impl MediaOrigin {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "plex" => Some(Self::Plex),
            "jellyfin" => Some(Self::Jellyfin),
            _ => None,
        }
    }

    /// Stable tag used to namespace collection identifiers per origin.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Plex => "plex",
            Self::Jellyfin => "jellyfin",
        }
    }
}

/// A named grouping of items. Identifiers are namespaced by origin so
/// same-named collections from different servers never collide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub origin: MediaOrigin,
}

impl Collection {
    pub fn new(origin: MediaOrigin, name: impl Into<String>) -> Self {
        let name = name.into();
        let id = CollectionId::new(format!("{}:{}", origin.tag(), slugify(&name)));
        Self { id, name, origin }
    }
}

/// Lowercases and collapses every run of non-alphanumeric characters
/// into a single hyphen.
pub fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_dash = false;
    for c in raw.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// One catalog entry, immutable once the store is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: ItemId,
    pub title: String,
    /// Derived ordering key, see [`crate::core::sort::sort_title`].
    pub sort_title: String,
    pub kind: MediaKind,
    pub origin: Option<MediaOrigin>,
    pub year: Option<i32>,
    pub size_bytes: u64,
    /// Display order preserved from the feed.
    pub genres: Vec<String>,
    pub directors: Vec<String>,
    pub community_rating: Option<f32>,
    pub official_rating: Option<String>,
    pub runtime_ticks: Option<i64>,
    pub overview: String,
    pub poster_path: Option<String>,
    pub season_count: Option<u32>,
    pub episode_count: Option<u32>,
    pub collections: Vec<Collection>,
}

impl MediaItem {
    /// The single rating shown on cards and in the detail panel: the
    /// official certification when present, else the community score.
    pub fn display_rating(&self) -> Option<String> {
        if let Some(official) = &self.official_rating {
            return Some(official.clone());
        }
        self.community_rating.map(|r| format!("{r:.1}"))
    }

    pub fn runtime_minutes(&self) -> Option<i64> {
        self.runtime_ticks
            .map(|ticks| (ticks as f64 / TICKS_PER_MINUTE as f64).round() as i64)
    }

    pub fn size_gib(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0 * 1024.0)
    }

    pub fn in_collection(&self, id: &CollectionId) -> bool {
        self.collections.iter().any(|c| &c.id == id)
    }
}
