pub mod feed;
pub mod source;
pub mod store;

pub use feed::{FeedCollection, FeedRecord, parse_feed};
pub use source::{FeedSource, FileFeed};
pub use store::{CatalogError, CatalogStore};
