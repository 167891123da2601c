mod common;

use std::sync::Arc;

use common::{FeedItemBuilder, RecordingSurface, feed};
use marquee::catalog::{CatalogStore, parse_feed};
use marquee::core::{JumpOutcome, LibraryBrowser, SortKey, SourceFilter};
use marquee::models::{CollectionId, MediaKind};

fn library() -> Arc<CatalogStore> {
    let document = feed(vec![
        FeedItemBuilder::movie("m1", "The Matrix")
            .year(2000)
            .size(8_000_000_000)
            .genres(&["Action", "Sci-Fi"])
            .source("plex")
            .build(),
        FeedItemBuilder::movie("m2", "Alien")
            .year(1979)
            .size(6_000_000_000)
            .genres(&["Horror", "Sci-Fi"])
            .source("jellyfin")
            .jellyfin_collection("Alien Anthology")
            .build(),
        FeedItemBuilder::movie("m3", "Amélie")
            .year(2001)
            .size(4_000_000_000)
            .genres(&["Romance"])
            .source("jellyfin")
            .build(),
        FeedItemBuilder::movie("m4", "Skyfall")
            .year(2012)
            .size(10_000_000_000)
            .genres(&["Action"])
            .source("plex")
            .plex_collection("James Bond")
            .build(),
        FeedItemBuilder::movie("m5", "300").year(2006).build(),
        FeedItemBuilder::series("s1", "The Wire").year(2002).build(),
        FeedItemBuilder::series("s2", "Breaking Bad").year(2008).build(),
    ]);
    let records = parse_feed(document).expect("feed should parse");
    Arc::new(CatalogStore::load(records).expect("store should load"))
}

#[tokio::test]
async fn full_browse_session() {
    let surface = RecordingSurface::shared();
    let browser = LibraryBrowser::with_batch_size(library(), surface.clone(), 2);
    browser.start().await;

    // Lexicographic on sort titles, so digits sort before letters.
    assert_eq!(surface.lock().unwrap().movies, ["300", "Alien"]);
    assert_eq!(browser.working_set().get().len(), 5);

    // Scroll within the threshold pulls the next batch.
    browser.on_scroll(100.0).await;
    assert_eq!(
        surface.lock().unwrap().movies,
        ["300", "Alien", "Amélie", "The Matrix"]
    );

    // Jump to a letter that is not rendered yet: progressive load.
    assert_eq!(browser.jump_to('S').await, JumpOutcome::Loaded);
    assert_eq!(surface.lock().unwrap().movies.len(), 5);
    assert_eq!(
        surface.lock().unwrap().scrolls,
        [(MediaKind::Movie, 'S')]
    );

    // Year sort puts the oldest first and refills from scratch.
    browser.set_sort(SortKey::YearAsc).await;
    assert_eq!(surface.lock().unwrap().movies, ["Alien", "The Matrix"]);

    // Search composes with the active category.
    browser.set_search("a").await;
    let titles = surface.lock().unwrap().movies.clone();
    assert_eq!(titles, ["Alien", "The Matrix"]);
    assert_eq!(browser.working_set().get().len(), 4);

    // Source narrows further.
    browser.set_source(SourceFilter::Jellyfin).await;
    assert_eq!(
        browser
            .working_set()
            .get()
            .iter()
            .map(|i| i.title.clone())
            .collect::<Vec<_>>(),
        ["Alien", "Amélie"]
    );

    browser.clear_filters().await;
    assert_eq!(browser.working_set().get().len(), 5);
}

#[tokio::test]
async fn series_tab_has_its_own_surface_and_letters() {
    let surface = RecordingSurface::shared();
    let browser = LibraryBrowser::with_batch_size(library(), surface.clone(), 10);
    browser.start().await;

    browser.set_category(MediaKind::Series).await;
    // Sort titles: "breaking bad", "wire".
    assert_eq!(
        surface.lock().unwrap().series,
        ["Breaking Bad", "The Wire"]
    );
    let letters: Vec<char> = browser.enabled_letters().get().into_iter().collect();
    assert_eq!(letters, ['B', 'W']);

    // The movie lane survived the tab switch untouched.
    assert_eq!(surface.lock().unwrap().movies.len(), 5);
}

#[tokio::test]
async fn collection_navigation_round_trip() {
    let surface = RecordingSurface::shared();
    let browser = LibraryBrowser::with_batch_size(library(), surface.clone(), 10);
    browser.start().await;

    browser.set_search("matrix").await;
    assert_eq!(surface.lock().unwrap().movies, ["The Matrix"]);

    // Activating a collection drops the search and filters by membership.
    browser
        .activate_collection(CollectionId::new("plex:james-bond"))
        .await;
    assert!(browser.filter_state().search.is_empty());
    assert_eq!(surface.lock().unwrap().movies, ["Skyfall"]);

    // Same-named jellyfin collection would be a different id entirely.
    browser
        .activate_collection(CollectionId::new("jellyfin:james-bond"))
        .await;
    assert!(surface.lock().unwrap().movies.is_empty());
}

#[tokio::test]
async fn numeric_titles_jump_via_the_hash_bucket() {
    let surface = RecordingSurface::shared();
    let browser = LibraryBrowser::with_batch_size(library(), surface.clone(), 1);
    browser.start().await;

    assert_eq!(browser.jump_to('#').await, JumpOutcome::AlreadyVisible);

    // A letter with no matching item drains the set and stays inert.
    assert_eq!(browser.jump_to('Z').await, JumpOutcome::Exhausted);
    assert_eq!(browser.visible_count().get(), 5);
    assert_eq!(surface.lock().unwrap().scrolls.len(), 1);
}
