//! View state and screen models.

pub mod browser;
pub mod detail;
pub mod view_mode;

pub use browser::{Browser, Comparison, ScreenContent, ScreenView, SearchResults};
pub use detail::{compound_breakdown, CompoundRow, FoodDetail};
pub use view_mode::{Screen, SortMode, ViewState};
