//! This crate contains all shared UI for the workspace.

mod hero;
pub use hero::Hero;

mod theme;
pub use theme::AppTheme;

pub mod card;
pub use card::ResultCard;

pub mod pagination;
pub mod viewport;

mod search_bar;
pub use search_bar::{normalize_query, SearchBar};

mod search_results;
pub use search_results::{SearchResults, NO_DATA_MESSAGE};
