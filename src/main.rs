use anyhow::Result;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use marquee::catalog::{CatalogStore, FeedSource, FileFeed, parse_feed};
use marquee::config::Config;
use marquee::core::{CardSurface, LibraryBrowser};
use marquee::models::{MediaItem, MediaKind};

/// Headless surface: stands in for the card grid so the engine can be
/// driven from the command line. Appends are logged, not drawn.
#[derive(Default)]
struct LogSurface {
    movie_cards: usize,
    series_cards: usize,
}

impl CardSurface for LogSurface {
    fn clear(&mut self, kind: MediaKind) {
        match kind {
            MediaKind::Movie => self.movie_cards = 0,
            MediaKind::Series => self.series_cards = 0,
        }
    }

    fn append(&mut self, kind: MediaKind, items: &[Arc<MediaItem>]) {
        let count = match kind {
            MediaKind::Movie => {
                self.movie_cards += items.len();
                self.movie_cards
            }
            MediaKind::Series => {
                self.series_cards += items.len();
                self.series_cards
            }
        };
        debug!(
            kind = kind.as_str(),
            appended = items.len(),
            total = count,
            "batch rendered"
        );
    }

    fn scroll_to_letter(&mut self, kind: MediaKind, letter: char) {
        info!(kind = kind.as_str(), %letter, "scrolled to anchor");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee=info".into()),
        )
        .init();

    info!("Starting marquee");

    let config = Config::load()?;
    let feed_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.library.feed_path.clone());

    let document = FileFeed::new(feed_path).fetch().await?;
    let records = parse_feed(document)?;
    let store = Arc::new(CatalogStore::load(records)?);
    info!(
        movies = store.movie_count(),
        series = store.series_count(),
        genres = store.genres().len(),
        "catalog loaded"
    );

    let surface = Arc::new(Mutex::new(LogSurface::default()));
    let browser = LibraryBrowser::with_batch_size(store, surface, config.browser.batch_size);
    browser.start().await;

    info!(
        visible = browser.visible_count().get(),
        letters = ?browser.enabled_letters().get(),
        "movie tab filled"
    );

    browser.set_category(MediaKind::Series).await;
    info!(
        visible = browser.visible_count().get(),
        letters = ?browser.enabled_letters().get(),
        "series tab filled"
    );

    Ok(())
}
