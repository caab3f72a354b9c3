pub mod details;
pub mod providers;
pub mod recommendations;
pub mod similar;
pub mod title_search;

pub use details::DetailFetcher;
