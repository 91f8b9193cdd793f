mod home;
pub use home::Home;

mod search;
pub use search::Search;
