use std::sync::Arc;
use tracing::debug;

use crate::catalog::CatalogStore;
use crate::models::MediaItem;

use super::state::FilterState;

/// Derives the ordered subset of the catalog matching `state`. Pure and
/// idempotent; recomputed wholesale on every state change, which is fine
/// because the catalog is in memory and bounded by library size.
pub fn compute_working_set(store: &CatalogStore, state: &FilterState) -> Vec<Arc<MediaItem>> {
    let query = state.search.trim().to_lowercase();

    let mut set: Vec<Arc<MediaItem>> = store
        .by_kind(state.category)
        .iter()
        .filter(|item| matches(item, state, &query))
        .cloned()
        .collect();

    // Stable, so equal keys keep catalog order across re-renders.
    set.sort_by(|a, b| state.sort.compare(a, b));

    debug!(
        category = state.category.as_str(),
        sort = state.sort.as_str(),
        matched = set.len(),
        "working set recomputed"
    );
    set
}

fn matches(item: &MediaItem, state: &FilterState, query: &str) -> bool {
    if !state.source.matches(item.origin) {
        return false;
    }
    if let Some(collection) = &state.collection
        && !item.in_collection(collection)
    {
        return false;
    }
    if let Some(genre) = &state.genre
        && !item.genres.iter().any(|g| g == genre)
    {
        return false;
    }
    if let Some(year) = &state.year {
        match item.year {
            Some(y) if y.to_string() == *year => {}
            _ => return false,
        }
    }
    if !query.is_empty() && !item.title.to_lowercase().contains(query) {
        return false;
    }
    true
}
