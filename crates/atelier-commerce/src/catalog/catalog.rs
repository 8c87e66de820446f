//! The product catalog: loaded once, read-only thereafter.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::{debug, error};

use crate::catalog::{Product, ProductId};
use crate::error::CommerceError;

/// JSON source for the boutique's shipped catalog.
const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// An immutable set of products.
///
/// The catalog is the single source of truth for product data. It is
/// built once from an authored document and never mutated; everything
/// downstream (queries, wishlists) borrows from it or snapshots it.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from already-parsed product records.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Parse a catalog from its JSON source: an array of product
    /// records in the authored camelCase format.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        debug!(count = products.len(), "loaded catalog");
        Ok(Self::new(products))
    }

    /// The boutique's shipped catalog.
    ///
    /// Parsed on first access and cached for the life of the process.
    pub fn builtin() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(|| match Catalog::from_json(BUILTIN_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                error!(error = %e, "shipped catalog failed to parse");
                Catalog::new(Vec::new())
            }
        })
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, treating a miss as an error.
    ///
    /// For callers (detail pages, deep links) that need to report "not
    /// found" rather than silently render nothing.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    /// Distinct sizes across the catalog, sorted. Feeds the size facet
    /// widget.
    pub fn sizes(&self) -> Vec<String> {
        distinct(self.products.iter().flat_map(|p| p.sizes.iter()))
    }

    /// Distinct colors across the catalog, sorted. Feeds the color
    /// facet widget.
    pub fn colors(&self) -> Vec<String> {
        distinct(self.products.iter().flat_map(|p| p.colors.iter()))
    }

    /// Product count per category key.
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for product in &self.products {
            *counts.entry(product.category.clone()).or_insert(0) += 1;
        }
        counts
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut out: Vec<String> = values.cloned().collect();
    out.sort();
    out.dedup();
    out
}
