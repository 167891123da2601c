use std::collections::BTreeSet;
use std::sync::Arc;

use crate::models::MediaItem;

use super::sort::first_jump_letter;

/// Letters for which an anchor exists in the rendered prefix of the
/// working set. Invariant: a letter is present iff at least one already
/// rendered item buckets to it. Cleared and rebuilt on every recompute,
/// so it never describes a previous generation's output.
#[derive(Debug, Default)]
pub struct AnchorRegistry {
    letters: BTreeSet<char>,
}

impl AnchorRegistry {
    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Records the anchors materialized by one rendered batch.
    pub fn extend(&mut self, batch: &[Arc<MediaItem>]) {
        for item in batch {
            self.letters.insert(first_jump_letter(&item.title));
        }
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    /// Currently enabled jump links. A letter missing here may still
    /// resolve at click time once further batches load.
    pub fn letters(&self) -> BTreeSet<char> {
        self.letters.clone()
    }
}

/// How a jump request resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// The anchor was already rendered; only a scroll was needed.
    AlreadyVisible,
    /// One or more batches had to load before the anchor appeared.
    Loaded,
    /// The working set ran out without an item of that letter; the link
    /// stays inert for this filtered view.
    Exhausted,
    /// A filter change recomputed the working set mid-search.
    Superseded,
}

/// Normalizes a clicked jump link to its registry form: uppercase A-Z,
/// everything else the `#` bucket.
pub fn normalize_jump_letter(letter: char) -> char {
    if letter.is_ascii_alphabetic() {
        letter.to_ascii_uppercase()
    } else {
        '#'
    }
}
