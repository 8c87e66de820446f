//! Storefront core for the Atelier boutique.
//!
//! This crate provides the domain logic behind the boutique's catalog
//! pages:
//!
//! - **Catalog**: immutable product records, the category registry, and
//!   id lookups
//! - **Search**: the filter/sort query engine and the browse session's
//!   "load more" window
//! - **Wishlist**: a persisted set of favorite pieces
//! - **Order**: pre-filled messaging-app inquiry links
//!
//! # Example
//!
//! ```rust,ignore
//! use atelier_commerce::prelude::*;
//! use atelier_store::MemoryStore;
//!
//! let catalog = Catalog::builtin();
//!
//! // Browse the shop page
//! let mut session = BrowseSession::new();
//! session.set_category("asoebi-wears");
//! session.toggle_quick_filter(QuickFilter::Sale);
//! let visible = session.visible(catalog.products());
//!
//! // Heart a piece
//! let mut wishlist = Wishlist::open(MemoryStore::new());
//! if let Some(piece) = catalog.get(ProductId::new(1)) {
//!     wishlist.toggle(piece);
//! }
//! ```

pub mod error;

pub mod catalog;
pub mod order;
pub mod search;
pub mod wishlist;

pub use error::CommerceError;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;

    // Catalog
    pub use crate::catalog::{format_naira, Catalog, Category, Product, ProductId, ALL_CATEGORIES};

    // Search
    pub use crate::search::{
        search, BrowseSession, PriceRange, QuickFilter, ShopQuery, SortKey, DEFAULT_PAGE_SIZE,
    };

    // Wishlist
    pub use crate::wishlist::{Wishlist, WISHLIST_KEY};

    // Order
    pub use crate::order::{contact_message, whatsapp_link, OrderInquiry};
}
