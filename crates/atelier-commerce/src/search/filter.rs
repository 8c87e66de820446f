//! Filter stages for the shop query.
//!
//! Every stage is conjunctive, so evaluation order cannot change the
//! outcome; the cheap comparisons run before the string scans.

use crate::catalog::{Product, ALL_CATEGORIES};
use crate::search::ShopQuery;

impl ShopQuery {
    /// Check whether a product passes every active filter stage.
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product)
            && self.matches_price(product)
            && self.matches_sizes(product)
            && self.matches_colors(product)
            && self.matches_quick_filters(product)
            && self.matches_search(product)
    }

    fn matches_search(&self, product: &Product) -> bool {
        let needle = self.search.trim();
        needle.is_empty() || product.matches_keyword(needle)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.category == ALL_CATEGORIES || product.category == self.category
    }

    fn matches_price(&self, product: &Product) -> bool {
        self.price_range.contains(product.price)
    }

    // Facet stages use OR within a facet: any overlap between the
    // selection and the product's values keeps the product. An empty
    // selection keeps everything.
    fn matches_sizes(&self, product: &Product) -> bool {
        self.sizes.is_empty() || product.sizes.iter().any(|s| self.sizes.contains(s))
    }

    fn matches_colors(&self, product: &Product) -> bool {
        self.colors.is_empty() || product.colors.iter().any(|c| self.colors.contains(c))
    }

    fn matches_quick_filters(&self, product: &Product) -> bool {
        self.quick_filters.iter().all(|f| f.matches(product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;
    use crate::search::QuickFilter;

    fn product(id: u32, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Piece {}", id),
            category: "ready-to-wear".to_string(),
            category_name: "Ready to Wear".to_string(),
            price,
            original_price: None,
            images: vec!["/assets/piece.jpg".to_string()],
            rating: 4.5,
            reviews: 10,
            is_new: false,
            is_bestseller: false,
            description: "A well-made piece.".to_string(),
            sizes: vec!["S".to_string(), "M".to_string()],
            colors: vec!["Navy".to_string()],
            in_stock: true,
            stock_count: None,
            tags: vec!["versatile".to_string()],
        }
    }

    #[test]
    fn test_empty_search_keeps_everything() {
        let p = product(1, 10_000);
        assert!(ShopQuery::new().matches(&p));
        assert!(ShopQuery::new().with_search("").matches(&p));
        assert!(ShopQuery::new().with_search("  \t ").matches(&p));
    }

    #[test]
    fn test_search_hits_name_description_and_tags() {
        let mut p = product(1, 10_000);
        p.name = "Emerald Gown".to_string();
        p.description = "Beaded bodice with a long train.".to_string();
        p.tags = vec!["owambe".to_string()];

        assert!(ShopQuery::new().with_search("emerald").matches(&p));
        assert!(ShopQuery::new().with_search("BODICE").matches(&p));
        assert!(ShopQuery::new().with_search("owambe").matches(&p));
        assert!(!ShopQuery::new().with_search("corset").matches(&p));
    }

    #[test]
    fn test_category_stage() {
        let p = product(1, 10_000);
        assert!(ShopQuery::new().with_category("ready-to-wear").matches(&p));
        assert!(!ShopQuery::new().with_category("corset").matches(&p));
        // Unknown keys match nothing rather than erroring.
        assert!(!ShopQuery::new().with_category("no-such-key").matches(&p));
    }

    #[test]
    fn test_size_or_semantics() {
        let p = product(1, 10_000); // sizes S, M
        let selected = ShopQuery::new().with_sizes(vec!["M".to_string(), "L".to_string()]);
        assert!(selected.matches(&p));

        let disjoint = ShopQuery::new().with_sizes(vec!["XL".to_string()]);
        assert!(!disjoint.matches(&p));

        let empty = ShopQuery::new().with_sizes(Vec::new());
        assert!(empty.matches(&p));
    }

    #[test]
    fn test_color_stage_is_independent() {
        let p = product(1, 10_000); // colors Navy
        let query = ShopQuery::new()
            .with_sizes(vec!["S".to_string()])
            .with_colors(vec!["Coral".to_string()]);
        assert!(!query.matches(&p));
    }

    #[test]
    fn test_quick_filters_and_semantics() {
        let mut p = product(1, 10_000);
        p.is_new = true;

        let new_only = ShopQuery::new().with_quick_filter(QuickFilter::New);
        assert!(new_only.matches(&p));

        let new_and_bestseller = new_only.clone().with_quick_filter(QuickFilter::Bestsellers);
        assert!(!new_and_bestseller.matches(&p));

        p.is_bestseller = true;
        assert!(new_and_bestseller.matches(&p));
    }

    #[test]
    fn test_sale_filter_keys_off_original_price() {
        let mut p = product(1, 10_000);
        let sale = ShopQuery::new().with_quick_filter(QuickFilter::Sale);
        assert!(!sale.matches(&p));

        p.original_price = Some(12_000);
        assert!(sale.matches(&p));
    }

    #[test]
    fn test_price_boundaries_inclusive() {
        let p = product(1, 45_000);
        assert!(ShopQuery::new().with_price_range(45_000, 100_000).matches(&p));
        assert!(ShopQuery::new().with_price_range(0, 45_000).matches(&p));
        assert!(!ShopQuery::new().with_price_range(45_001, 100_000).matches(&p));
    }
}
