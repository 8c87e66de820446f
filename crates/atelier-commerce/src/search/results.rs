//! Browse session: query state plus the incremental reveal window.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::search::{engine, PriceRange, QuickFilter, ShopQuery, SortKey};

/// Default number of products revealed per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Query state for one visitor's trip through the shop page.
///
/// Owns the query descriptor and the "load more" window. Every
/// descriptor change resets the window to the first page. The full
/// filtered list is always recomputed; the window only limits what is
/// handed to the renderer, it never shapes the query itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrowseSession {
    query: ShopQuery,
    page_size: usize,
    displayed: usize,
}

impl BrowseSession {
    /// Start a fresh session with the default query and page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Start a session with a custom page size (clamped to at least 1).
    pub fn with_page_size(page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            query: ShopQuery::default(),
            page_size,
            displayed: page_size,
        }
    }

    /// Seed a session from a route's category parameter. Unknown keys
    /// are kept verbatim; they filter to an empty result rather than
    /// erroring.
    pub fn for_category(key: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.set_category(key);
        session
    }

    /// The current query descriptor.
    pub fn query(&self) -> &ShopQuery {
        &self.query
    }

    /// How many results are currently revealed.
    pub fn displayed(&self) -> usize {
        self.displayed
    }

    /// Replace the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.query.search = text.into();
        self.reset_window();
    }

    /// Switch category.
    pub fn set_category(&mut self, key: impl Into<String>) {
        self.query.category = key.into();
        self.reset_window();
    }

    /// Replace the price bounds.
    pub fn set_price_range(&mut self, range: PriceRange) {
        self.query.price_range = range;
        self.reset_window();
    }

    /// Flip one size facet on or off.
    pub fn toggle_size(&mut self, size: &str) {
        toggle_value(&mut self.query.sizes, size);
        self.reset_window();
    }

    /// Flip one color facet on or off.
    pub fn toggle_color(&mut self, color: &str) {
        toggle_value(&mut self.query.colors, color);
        self.reset_window();
    }

    /// Flip one quick filter on or off.
    pub fn toggle_quick_filter(&mut self, filter: QuickFilter) {
        if let Some(pos) = self.query.quick_filters.iter().position(|f| *f == filter) {
            self.query.quick_filters.remove(pos);
        } else {
            self.query.quick_filters.push(filter);
        }
        self.reset_window();
    }

    /// Change the result ordering.
    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.reset_window();
    }

    /// Reset every filter to its default in a single step: search
    /// empty, category "all", unrestricted prices, no facets, no quick
    /// filters, featured order, first page.
    pub fn clear_filters(&mut self) {
        self.query = ShopQuery::default();
        self.reset_window();
    }

    /// Reveal the next page of an already-computed result list of
    /// `total` items. Never re-runs the query.
    pub fn load_more(&mut self, total: usize) {
        self.displayed = (self.displayed + self.page_size).min(total);
    }

    /// Whether more filtered results exist beyond the window.
    pub fn has_more(&self, total: usize) -> bool {
        self.displayed < total
    }

    /// Run the query over `products`, returning the full filtered list.
    pub fn results<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        engine::search(products, &self.query)
    }

    /// Run the query and truncate to the reveal window.
    pub fn visible<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut results = self.results(products);
        results.truncate(self.displayed);
        results
    }

    fn reset_window(&mut self) {
        self.displayed = self.page_size;
    }
}

impl Default for BrowseSession {
    fn default() -> Self {
        Self::new()
    }
}

fn toggle_value(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}
