use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::MediaItem;

/// Leading tokens ignored when deriving ordering keys and jump letters.
/// One canonical set, applied uniformly to both derivations.
static LEADING_ARTICLES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["a", "an", "the"].into_iter().collect());

/// Locale-independent ordering key: lowercased, with a single leading
/// article dropped when the title has more than one word.
pub fn sort_title(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut words: Vec<&str> = lowered.split_whitespace().collect();
    if words.len() > 1 && LEADING_ARTICLES.contains(words[0]) {
        words.remove(0);
    }
    words.join(" ")
}

/// The alphabet bucket a title belongs to: the uppercased first letter
/// of its sort title, or `'#'` when that character is not A-Z.
pub fn first_jump_letter(title: &str) -> char {
    match sort_title(title).chars().next() {
        Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => '#',
    }
}

/// Ordering selected from the sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    TitleAsc,
    TitleDesc,
    YearDesc,
    YearAsc,
    SizeDesc,
    SizeAsc,
}

impl Default for SortKey {
    fn default() -> Self {
        Self::TitleAsc
    }
}

impl SortKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TitleAsc => "title-asc",
            Self::TitleDesc => "title-desc",
            Self::YearDesc => "year-desc",
            Self::YearAsc => "year-asc",
            Self::SizeDesc => "size-desc",
            Self::SizeAsc => "size-asc",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "title-asc" => Some(Self::TitleAsc),
            "title-desc" => Some(Self::TitleDesc),
            "year-desc" => Some(Self::YearDesc),
            "year-asc" => Some(Self::YearAsc),
            "size-desc" => Some(Self::SizeDesc),
            "size-asc" => Some(Self::SizeAsc),
            _ => None,
        }
    }

    /// Comparator for the working-set sort. Missing years compare as 0.
    /// Callers must use a stable sort so ties keep catalog order.
    pub fn compare(self, a: &MediaItem, b: &MediaItem) -> Ordering {
        match self {
            Self::TitleAsc => a.sort_title.cmp(&b.sort_title),
            Self::TitleDesc => b.sort_title.cmp(&a.sort_title),
            Self::YearDesc => b.year.unwrap_or(0).cmp(&a.year.unwrap_or(0)),
            Self::YearAsc => a.year.unwrap_or(0).cmp(&b.year.unwrap_or(0)),
            Self::SizeDesc => b.size_bytes.cmp(&a.size_bytes),
            Self::SizeAsc => a.size_bytes.cmp(&b.size_bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_a_single_leading_article() {
        assert_eq!(sort_title("The Matrix"), "matrix");
        assert_eq!(sort_title("A Quiet Place"), "quiet place");
        assert_eq!(sort_title("An American Werewolf in London"), "american werewolf in london");
    }

    #[test]
    fn keeps_single_word_titles_intact() {
        // "It", "A"-style one-word titles must not collapse to nothing.
        assert_eq!(sort_title("It"), "it");
        assert_eq!(sort_title("The"), "the");
    }

    #[test]
    fn only_the_first_article_is_dropped() {
        assert_eq!(sort_title("The The Movie"), "the movie");
    }

    #[test]
    fn normalizes_whitespace() {
        assert_eq!(sort_title("  The   Matrix  "), "matrix");
    }

    #[test]
    fn jump_letters_bucket_non_alpha_into_hash() {
        assert_eq!(first_jump_letter("The Matrix"), 'M');
        assert_eq!(first_jump_letter("Amélie"), 'A');
        assert_eq!(first_jump_letter("300"), '#');
        assert_eq!(first_jump_letter("Élite"), '#');
        assert_eq!(first_jump_letter(""), '#');
    }

    #[test]
    fn sort_key_round_trips_through_strings() {
        for key in [
            SortKey::TitleAsc,
            SortKey::TitleDesc,
            SortKey::YearDesc,
            SortKey::YearAsc,
            SortKey::SizeDesc,
            SortKey::SizeAsc,
        ] {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("rating-desc"), None);
    }
}
