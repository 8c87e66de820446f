//! Shop category registry.
//!
//! The boutique works with a small, fixed set of categories; products
//! carry their category key and label inline, and the registry is what
//! the filter widgets and navigation render from.

/// Sentinel category key meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// A shop category: machine key plus display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Machine key used in query descriptors and route parameters.
    pub key: &'static str,
    /// Human-readable label.
    pub name: &'static str,
}

const CATEGORIES: &[Category] = &[
    Category { key: "asoebi-wears", name: "Asoebi Wears" },
    Category { key: "corset", name: "Corset" },
    Category { key: "corporate-wears", name: "Corporate Wears" },
    Category { key: "ready-to-wear", name: "Ready to Wear" },
    Category { key: "bubu", name: "Bubu" },
    Category { key: "bridal-robe", name: "Bridal Robe" },
    Category { key: "wedding-gowns", name: "Wedding Gowns" },
];

impl Category {
    /// Every category in display order. Does not include the
    /// [`ALL_CATEGORIES`] sentinel.
    pub fn all() -> &'static [Category] {
        CATEGORIES
    }

    /// Look up a category by key.
    ///
    /// Unknown keys (typos, stale links) are `None`, never an error;
    /// a query carrying one simply matches nothing.
    pub fn find(key: &str) -> Option<Category> {
        CATEGORIES.iter().copied().find(|c| c.key == key)
    }
}
