pub mod browser;
pub mod details;
pub mod jump;
pub mod property;
pub mod render;
pub mod sort;
pub mod state;
pub mod working_set;

pub use browser::LibraryBrowser;
pub use details::ItemDetails;
pub use jump::{AnchorRegistry, JumpOutcome};
pub use property::{Property, PropertySubscriber};
pub use render::{
    CARDS_PER_BATCH, CardSurface, IncrementalRenderer, SCROLL_THRESHOLD_PX, SCROLL_TOP_VISIBLE_PX,
};
pub use sort::{SortKey, first_jump_letter, sort_title};
pub use state::{FilterState, SourceFilter};
pub use working_set::compute_working_set;
