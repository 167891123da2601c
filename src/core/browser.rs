use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::catalog::CatalogStore;
use crate::models::{CollectionId, MediaItem, MediaKind};

use super::jump::{AnchorRegistry, JumpOutcome, normalize_jump_letter};
use super::property::Property;
use super::render::{CARDS_PER_BATCH, CardSurface, IncrementalRenderer};
use super::sort::SortKey;
use super::state::{FilterState, SourceFilter};
use super::working_set::compute_working_set;

/// Single-writer owner of the browsing session: the filter state, the
/// derived working set, the render cursor and the anchor registry all
/// live here, keyed to a recompute generation. Every filter mutation
/// recomputes the working set, clears the active surface and refills the
/// first batch; scroll proximity and jump requests pull further batches
/// on demand.
///
/// There is no parallelism here, but the jump loop yields between
/// batches, so a recompute can interleave with an in-flight search. The
/// generation counter is the staleness guard: the loop re-validates it
/// every iteration and bails out instead of operating on a working set
/// it no longer describes.
pub struct LibraryBrowser {
    store: Arc<CatalogStore>,
    surface: Arc<Mutex<dyn CardSurface>>,
    inner: Mutex<BrowserInner>,
    generation: AtomicU64,
    working_set: Property<Vec<Arc<MediaItem>>>,
    visible_count: Property<usize>,
    enabled_letters: Property<BTreeSet<char>>,
}

struct BrowserInner {
    state: FilterState,
    set: Vec<Arc<MediaItem>>,
    renderer: IncrementalRenderer,
    anchors: AnchorRegistry,
}

impl LibraryBrowser {
    pub fn new(store: Arc<CatalogStore>, surface: Arc<Mutex<dyn CardSurface>>) -> Self {
        Self::with_batch_size(store, surface, CARDS_PER_BATCH)
    }

    pub fn with_batch_size(
        store: Arc<CatalogStore>,
        surface: Arc<Mutex<dyn CardSurface>>,
        batch_size: usize,
    ) -> Self {
        Self {
            store,
            surface,
            inner: Mutex::new(BrowserInner {
                state: FilterState::default(),
                set: Vec::new(),
                renderer: IncrementalRenderer::new(batch_size),
                anchors: AnchorRegistry::default(),
            }),
            generation: AtomicU64::new(0),
            working_set: Property::new(Vec::new(), "working_set"),
            visible_count: Property::new(0, "visible_count"),
            enabled_letters: Property::new(BTreeSet::new(), "enabled_letters"),
        }
    }

    /// Runs the initial recompute and fills the first batch.
    pub async fn start(&self) {
        self.recompute().await;
    }

    // ---- observable read surface ----

    pub fn working_set(&self) -> &Property<Vec<Arc<MediaItem>>> {
        &self.working_set
    }

    pub fn visible_count(&self) -> &Property<usize> {
        &self.visible_count
    }

    pub fn enabled_letters(&self) -> &Property<BTreeSet<char>> {
        &self.enabled_letters
    }

    pub fn filter_state(&self) -> FilterState {
        self.inner.lock().unwrap().state.clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    // ---- filter mutations ----

    pub async fn set_category(&self, category: MediaKind) {
        self.mutate(|state| state.category = category).await;
    }

    pub async fn set_genre(&self, genre: Option<String>) {
        self.mutate(|state| state.genre = genre).await;
    }

    pub async fn set_year(&self, year: Option<String>) {
        self.mutate(|state| state.year = year).await;
    }

    pub async fn set_search(&self, query: impl Into<String>) {
        let query = query.into();
        self.mutate(|state| state.search = query).await;
    }

    pub async fn set_source(&self, source: SourceFilter) {
        self.mutate(|state| state.source = source).await;
    }

    pub async fn set_sort(&self, sort: SortKey) {
        self.mutate(|state| state.sort = sort).await;
    }

    pub async fn activate_collection(&self, id: CollectionId) {
        self.mutate(|state| state.activate_collection(id)).await;
    }

    pub async fn clear_filters(&self) {
        self.mutate(FilterState::clear).await;
    }

    async fn mutate(&self, apply: impl FnOnce(&mut FilterState)) {
        {
            let mut inner = self.inner.lock().unwrap();
            apply(&mut inner.state);
        }
        self.recompute().await;
    }

    /// Recomputes the working set for the current state, resets the
    /// cursor and registry, clears the active surface and renders the
    /// first batch. Bumps the generation so in-flight jump searches
    /// notice they are stale.
    async fn recompute(&self) {
        let (set, visible, letters) = {
            let mut guard = self.inner.lock().unwrap();
            self.generation.fetch_add(1, Ordering::SeqCst);
            let inner = &mut *guard;
            let fresh = compute_working_set(&self.store, &inner.state);
            inner.set = fresh;
            inner.renderer.reset();
            inner.anchors.clear();

            let mut surface = self.surface.lock().unwrap();
            surface.clear(inner.state.category);
            let loaded =
                inner
                    .renderer
                    .load_next_batch(&inner.set, inner.state.category, &mut *surface);
            inner.anchors.extend(&inner.set[..loaded]);
            (
                inner.set.clone(),
                inner.renderer.cursor(),
                inner.anchors.letters(),
            )
        };

        self.working_set.set(set).await;
        self.visible_count.set(visible).await;
        self.enabled_letters.set(letters).await;
    }

    // ---- incremental rendering ----

    /// Scroll hook from the frontend. Loads the next batch once the
    /// viewport comes within the proximity threshold of the bottom.
    /// Returns the number of cards appended.
    pub async fn on_scroll(&self, distance_from_bottom_px: f32) -> usize {
        if !IncrementalRenderer::near_bottom(distance_from_bottom_px) {
            return 0;
        }
        self.load_more().await
    }

    async fn load_more(&self) -> usize {
        let (loaded, visible, letters) = {
            let mut guard = self.inner.lock().unwrap();
            let inner = &mut *guard;
            let before = inner.renderer.cursor();
            let mut surface = self.surface.lock().unwrap();
            let loaded =
                inner
                    .renderer
                    .load_next_batch(&inner.set, inner.state.category, &mut *surface);
            inner.anchors.extend(&inner.set[before..before + loaded]);
            (loaded, inner.renderer.cursor(), inner.anchors.letters())
        };

        if loaded > 0 {
            self.visible_count.set(visible).await;
            self.enabled_letters.set(letters).await;
        }
        loaded
    }

    // ---- jump navigation ----

    /// Resolves a jump-link click. If the anchor is already rendered
    /// this is a plain scroll; otherwise batches load one at a time,
    /// yielding to the scheduler between them so the frontend can paint,
    /// until the anchor appears or the working set is exhausted. A
    /// recompute during the search supersedes it.
    pub async fn jump_to(&self, letter: char) -> JumpOutcome {
        let letter = normalize_jump_letter(letter);
        let generation = self.generation.load(Ordering::SeqCst);

        {
            let inner = self.inner.lock().unwrap();
            if inner.anchors.contains(letter) {
                let mut surface = self.surface.lock().unwrap();
                surface.scroll_to_letter(inner.state.category, letter);
                return JumpOutcome::AlreadyVisible;
            }
        }

        loop {
            let step = {
                let mut guard = self.inner.lock().unwrap();
                if self.generation.load(Ordering::SeqCst) != generation {
                    debug!(letter = %letter, "jump search superseded by filter change");
                    return JumpOutcome::Superseded;
                }
                let inner = &mut *guard;
                let before = inner.renderer.cursor();
                let mut surface = self.surface.lock().unwrap();
                let loaded =
                    inner
                        .renderer
                        .load_next_batch(&inner.set, inner.state.category, &mut *surface);
                inner.anchors.extend(&inner.set[before..before + loaded]);
                let found = inner.anchors.contains(letter);
                if found {
                    surface.scroll_to_letter(inner.state.category, letter);
                }
                (
                    loaded,
                    found,
                    inner.renderer.cursor(),
                    inner.anchors.letters(),
                )
            };

            let (loaded, found, visible, letters) = step;
            if loaded > 0 {
                self.visible_count.set(visible).await;
                self.enabled_letters.set(letters).await;
            }
            if found {
                return JumpOutcome::Loaded;
            }
            if loaded == 0 {
                // Nothing of that letter matches the current filters.
                return JumpOutcome::Exhausted;
            }

            tokio::task::yield_now().await;
        }
    }
}
