use std::sync::Arc;

use crate::models::{MediaItem, MediaKind};

/// Cards materialized per batch.
pub const CARDS_PER_BATCH: usize = 200;

/// Pixel distance from the bottom of the page at which the next batch is
/// requested.
pub const SCROLL_THRESHOLD_PX: f32 = 300.0;

/// Scroll depth past which the scroll-to-top control is shown.
pub const SCROLL_TOP_VISIBLE_PX: f32 = 400.0;

/// Rendering collaborator. One output surface per category; the engine
/// appends in working-set order or clears a surface outright, and never
/// reads cards back. The surface is a pure projection of the working
/// set's rendered prefix.
pub trait CardSurface: Send {
    fn clear(&mut self, kind: MediaKind);
    fn append(&mut self, kind: MediaKind, items: &[Arc<MediaItem>]);
    fn scroll_to_letter(&mut self, kind: MediaKind, letter: char);
}

/// Cursor into the current working set. Reset whenever the set is
/// recomputed; only ever advances otherwise.
#[derive(Debug)]
pub struct IncrementalRenderer {
    cursor: usize,
    batch_size: usize,
}

impl IncrementalRenderer {
    pub fn new(batch_size: usize) -> Self {
        Self {
            cursor: 0,
            batch_size: batch_size.max(1),
        }
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Materializes the next slice of `set` onto the surface and
    /// advances the cursor by the count actually appended (short at the
    /// tail). Returns 0 and does nothing once the set is exhausted,
    /// which is the termination signal for jump loops.
    pub fn load_next_batch(
        &mut self,
        set: &[Arc<MediaItem>],
        kind: MediaKind,
        surface: &mut dyn CardSurface,
    ) -> usize {
        if self.cursor >= set.len() {
            return 0;
        }
        let end = (self.cursor + self.batch_size).min(set.len());
        let batch = &set[self.cursor..end];
        surface.append(kind, batch);
        self.cursor = end;
        batch.len()
    }

    pub fn near_bottom(distance_from_bottom_px: f32) -> bool {
        distance_from_bottom_px <= SCROLL_THRESHOLD_PX
    }

    pub fn show_scroll_top(scroll_y_px: f32) -> bool {
        scroll_y_px > SCROLL_TOP_VISIBLE_PX
    }
}
