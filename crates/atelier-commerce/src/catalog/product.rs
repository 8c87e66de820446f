//! Product records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique product identifier.
///
/// Newtype over the numeric id so it cannot be mixed up with prices,
/// counts, or other integers floating through the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Create an ID from its numeric value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// The numeric value.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A product in the boutique catalog.
///
/// Records are authored externally and loaded once at startup; nothing
/// in the storefront mutates them. Satellite state (wishlist entries)
/// snapshots products rather than editing catalog records in place.
///
/// Serialized camelCase to match the authored catalog documents and the
/// persisted wishlist format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Key of the category this product belongs to.
    pub category: String,
    /// Human-readable category label.
    pub category_name: String,
    /// Price in whole naira.
    pub price: u64,
    /// Pre-discount price; present only when the piece is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u64>,
    /// Image references, primary first. Never empty in authored data.
    pub images: Vec<String>,
    /// Average review rating in [0, 5].
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    /// Recently added to the collection.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_new: bool,
    /// Marked as a bestseller by the boutique.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_bestseller: bool,
    /// Full description shown on the detail page.
    pub description: String,
    /// Sizes the piece is offered in.
    pub sizes: Vec<String>,
    /// Colors the piece is offered in.
    pub colors: Vec<String>,
    /// Whether the piece can currently be ordered.
    pub in_stock: bool,
    /// Remaining stock when tracked. Meaningful only while `in_stock`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_count: Option<u32>,
    /// Free-text keywords picked up by search.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Check if the piece is discounted.
    pub fn is_on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    /// Discount percentage, when on sale and the original price is
    /// actually higher. The data contract says it always is, but that
    /// is not enforced at load time.
    pub fn discount_percent(&self) -> Option<u32> {
        self.original_price.and_then(|original| {
            if original > self.price {
                let savings = (original - self.price) as f64;
                Some(((savings / original as f64) * 100.0).round() as u32)
            } else {
                None
            }
        })
    }

    /// Format the price for display, e.g. `₦185,000`.
    pub fn display_price(&self) -> String {
        format_naira(self.price)
    }

    /// Case-insensitive substring match against name, description, and
    /// tags.
    pub fn matches_keyword(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Format a whole-naira amount with thousands separators.
pub fn format_naira(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 3);
    out.push('\u{20a6}');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn is_false(value: &bool) -> bool {
    !*value
}
