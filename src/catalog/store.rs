use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::sort::sort_title;
use crate::models::{Collection, ItemId, MediaItem, MediaKind, MediaOrigin};

use super::feed::FeedRecord;

/// Load-time failures. Anything past `load` is a total function; a feed
/// that decodes but is structurally unusable must be refused here rather
/// than half-loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("feed document is not an array of items (or an object with an `items` array)")]
    NotAnArray,
    #[error("feed document could not be decoded: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("feed item {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },
}

/// The immutable-after-load catalog plus its lookup indices. Built once
/// at startup; every working set is derived from it.
#[derive(Debug, Default)]
pub struct CatalogStore {
    items: Vec<Arc<MediaItem>>,
    movies: Vec<Arc<MediaItem>>,
    series: Vec<Arc<MediaItem>>,
    genres: Vec<String>,
    years: Vec<i32>,
    collections: BTreeMap<String, Collection>,
}

impl CatalogStore {
    pub fn load(records: Vec<FeedRecord>) -> Result<Self, CatalogError> {
        let mut store = Self::default();
        let mut genres = BTreeSet::new();
        let mut years = BTreeSet::new();

        for (index, record) in records.into_iter().enumerate() {
            let id = record
                .item_id()
                .filter(|id| !id.is_empty())
                .ok_or(CatalogError::MissingField { index, field: "id" })?
                .to_string();
            let title = record
                .title
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .ok_or(CatalogError::MissingField {
                    index,
                    field: "title",
                })?
                .to_string();

            let Some(kind) = record.kind.as_deref().and_then(MediaKind::parse) else {
                warn!(id = %id, title = %title, raw = record.kind.as_deref(), "skipping item with unknown kind");
                continue;
            };
            let origin = record.source.as_deref().and_then(MediaOrigin::parse);

            let mut collections = Vec::new();
            for entry in &record.collections {
                collections.push(Collection::new(MediaOrigin::Jellyfin, entry.name.clone()));
            }
            for name in &record.plex_collections {
                collections.push(Collection::new(MediaOrigin::Plex, name.clone()));
            }

            let item = Arc::new(MediaItem {
                id: ItemId::new(id),
                sort_title: sort_title(&title),
                title,
                kind,
                origin,
                year: record.year,
                size_bytes: record.size,
                genres: record.genres,
                directors: record.directors,
                community_rating: record.community_rating,
                official_rating: record.official_rating,
                runtime_ticks: record.runtime_ticks,
                overview: record.overview.unwrap_or_default(),
                poster_path: record.poster_path.filter(|p| !p.is_empty()),
                season_count: record.season_count,
                episode_count: record.episode_count,
                collections,
            });

            for genre in &item.genres {
                genres.insert(genre.clone());
            }
            if let Some(year) = item.year {
                years.insert(year);
            }
            for collection in &item.collections {
                store
                    .collections
                    .entry(collection.id.as_str().to_string())
                    .or_insert_with(|| collection.clone());
            }

            match item.kind {
                // Movies without artwork are a feed-quality defect; they
                // stay visible through `all()` but never reach the grid.
                MediaKind::Movie if item.poster_path.is_none() => {
                    warn!(id = %item.id, title = %item.title, "movie has no poster, excluded from grid");
                }
                MediaKind::Movie => store.movies.push(item.clone()),
                MediaKind::Series => store.series.push(item.clone()),
            }
            store.items.push(item);
        }

        store.genres = genres.into_iter().collect();
        store.years = years.into_iter().rev().collect();

        debug!(
            total = store.items.len(),
            movies = store.movies.len(),
            series = store.series.len(),
            collections = store.collections.len(),
            "catalog store built"
        );
        Ok(store)
    }

    /// Every loaded item, including ones excluded from grid iteration.
    pub fn all(&self) -> &[Arc<MediaItem>] {
        &self.items
    }

    /// Items eligible for card construction in the given tab, in feed
    /// order.
    pub fn by_kind(&self, kind: MediaKind) -> &[Arc<MediaItem>] {
        match kind {
            MediaKind::Movie => &self.movies,
            MediaKind::Series => &self.series,
        }
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// All genre strings across the catalog, sorted and deduplicated.
    /// Feeds the genre dropdown.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// All present years, newest first. Feeds the year dropdown.
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn collections(&self) -> impl Iterator<Item = &Collection> {
        self.collections.values()
    }
}
