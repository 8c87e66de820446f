//! Shop search module.
//!
//! Contains the query descriptor, the filter stages, the pure query
//! engine, and the browse session with its incremental reveal window.

mod engine;
mod filter;
mod query;
mod results;

pub use engine::search;
pub use query::{PriceRange, QuickFilter, ShopQuery, SortKey};
pub use results::{BrowseSession, DEFAULT_PAGE_SIZE};
