//! Shop query descriptor.

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ALL_CATEGORIES};

/// Inclusive price bounds, in whole naira.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest acceptable price.
    pub min: u64,
    /// Highest acceptable price.
    pub max: u64,
}

impl PriceRange {
    /// Create a range. An inverted range (`min > max`) is allowed; it
    /// matches nothing, which is well-defined rather than an error.
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// The unrestricted range.
    pub fn unbounded() -> Self {
        Self {
            min: 0,
            max: u64::MAX,
        }
    }

    /// Check whether `price` falls inside the bounds, both inclusive.
    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }

    /// True when the bounds differ from the unrestricted default.
    pub fn is_restricted(&self) -> bool {
        *self != Self::unbounded()
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// A named boolean predicate toggle.
///
/// Quick filters are OFF by default and each active one narrows the
/// result set (AND across filters). This is the deliberate asymmetry
/// with the size/color facets, where an empty selection means
/// unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuickFilter {
    /// Recently added pieces.
    New,
    /// Boutique bestsellers.
    Bestsellers,
    /// Discounted pieces.
    Sale,
    /// Pieces that can be ordered right now.
    InStock,
}

impl QuickFilter {
    /// The descriptor key, as used in routes and persisted state.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuickFilter::New => "new",
            QuickFilter::Bestsellers => "bestsellers",
            QuickFilter::Sale => "sale",
            QuickFilter::InStock => "in-stock",
        }
    }

    /// Parse a descriptor key. Unknown keys are `None` and are simply
    /// ignored by callers.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "new" => Some(QuickFilter::New),
            "bestsellers" => Some(QuickFilter::Bestsellers),
            "sale" => Some(QuickFilter::Sale),
            "in-stock" => Some(QuickFilter::InStock),
            _ => None,
        }
    }

    /// Widget label.
    pub fn label(&self) -> &'static str {
        match self {
            QuickFilter::New => "New Arrivals",
            QuickFilter::Bestsellers => "Bestsellers",
            QuickFilter::Sale => "On Sale",
            QuickFilter::InStock => "In Stock",
        }
    }

    /// The predicate this filter applies.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            QuickFilter::New => product.is_new,
            QuickFilter::Bestsellers => product.is_bestseller,
            QuickFilter::Sale => product.original_price.is_some(),
            QuickFilter::InStock => product.in_stock,
        }
    }
}

/// Orderings for shop results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Bestsellers first, then new arrivals, otherwise catalog order.
    /// The default, and the only ordering required to feel "natural"
    /// against the authored catalog.
    #[default]
    Featured,
    /// Price, low to high.
    PriceLow,
    /// Price, high to low.
    PriceHigh,
    /// Highest rated first.
    Rating,
    /// New arrivals before the rest.
    Newest,
    /// Most reviewed first.
    Popular,
}

impl SortKey {
    /// The descriptor key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
            SortKey::Popular => "popular",
        }
    }

    /// Parse a descriptor key, falling back to `Featured` for unknown
    /// input.
    pub fn parse(s: &str) -> Self {
        match s {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "rating" => SortKey::Rating,
            "newest" => SortKey::Newest,
            "popular" => SortKey::Popular,
            _ => SortKey::Featured,
        }
    }

    /// Dropdown label.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
            SortKey::Rating => "Highest Rated",
            SortKey::Newest => "Newest",
            SortKey::Popular => "Most Popular",
        }
    }
}

/// The complete set of filter/sort/search parameters describing one
/// catalog view request.
///
/// An explicit, immutable value object: the engine only ever sees what
/// is in here, never ambient UI state. Callers rebuild or mutate the
/// descriptor on every interaction and re-run the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopQuery {
    /// Free-text search. Empty or whitespace-only means no search
    /// filter, not "match nothing".
    pub search: String,
    /// Category key, or [`ALL_CATEGORIES`].
    pub category: String,
    /// Inclusive price bounds, applied to `price` (never
    /// `original_price`).
    pub price_range: PriceRange,
    /// Selected size facets. Empty means unrestricted.
    pub sizes: Vec<String>,
    /// Selected color facets. Empty means unrestricted.
    pub colors: Vec<String>,
    /// Active quick filters; each one narrows the result further.
    pub quick_filters: Vec<QuickFilter>,
    /// Result ordering, applied after all filters.
    pub sort: SortKey,
}

impl Default for ShopQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            price_range: PriceRange::default(),
            sizes: Vec::new(),
            colors: Vec::new(),
            quick_filters: Vec::new(),
            sort: SortKey::Featured,
        }
    }
}

impl ShopQuery {
    /// Create the default descriptor: everything unrestricted, featured
    /// order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Restrict to one category key. Unknown keys are kept verbatim and
    /// match nothing.
    pub fn with_category(mut self, key: impl Into<String>) -> Self {
        self.category = key.into();
        self
    }

    /// Set the price bounds.
    pub fn with_price_range(mut self, min: u64, max: u64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    /// Select size facets.
    pub fn with_sizes(mut self, sizes: Vec<String>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Select color facets.
    pub fn with_colors(mut self, colors: Vec<String>) -> Self {
        self.colors = colors;
        self
    }

    /// Activate a quick filter. Activating one twice has no extra
    /// effect.
    pub fn with_quick_filter(mut self, filter: QuickFilter) -> Self {
        if !self.quick_filters.contains(&filter) {
            self.quick_filters.push(filter);
        }
        self
    }

    /// Set the ordering.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Number of active filters, for the "Filters (n)" badge: one for
    /// search, category, and a restricted price range, plus one per
    /// selected size, color, and quick filter.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if !self.search.trim().is_empty() {
            count += 1;
        }
        if self.category != ALL_CATEGORIES {
            count += 1;
        }
        if self.price_range.is_restricted() {
            count += 1;
        }
        count + self.sizes.len() + self.colors.len() + self.quick_filters.len()
    }
}
