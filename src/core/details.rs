use crate::models::{Collection, MediaItem};

/// Flattened, display-ready view of one item for the detail panel. The
/// panel never reads the card back; it is built from the item record the
/// grid click carried.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDetails {
    pub title: String,
    pub year: Option<i32>,
    /// Joined with ", ", empty when the feed listed nobody.
    pub directors: String,
    pub rating: Option<String>,
    pub runtime_minutes: Option<i64>,
    pub size_line: String,
    pub overview: String,
    pub season_count: Option<u32>,
    pub episode_count: Option<u32>,
    /// For cross-navigation back into the collection filter.
    pub collections: Vec<Collection>,
}

impl ItemDetails {
    pub fn from_item(item: &MediaItem) -> Self {
        Self {
            title: item.title.clone(),
            year: item.year,
            directors: item.directors.join(", "),
            rating: item.display_rating(),
            runtime_minutes: item.runtime_minutes(),
            size_line: format!("{:.2} GB", item.size_gib()),
            overview: item.overview.clone(),
            season_count: item.season_count,
            episode_count: item.episode_count,
            collections: item.collections.clone(),
        }
    }
}
