//! The catalog query engine.

use tracing::debug;

use crate::catalog::Product;
use crate::search::{ShopQuery, SortKey};

/// Run `query` over `products`, returning the matching items in sorted
/// order.
///
/// Pure and stateless: cheap enough to call on every keystroke, and two
/// calls with the same inputs produce the same output. The result
/// borrows from `products`; the catalog itself is never touched.
pub fn search<'a>(products: &'a [Product], query: &ShopQuery) -> Vec<&'a Product> {
    let mut matched: Vec<&Product> = products.iter().filter(|p| query.matches(p)).collect();
    sort_products(&mut matched, query.sort);
    debug!(
        total = products.len(),
        matched = matched.len(),
        sort = query.sort.as_str(),
        "ran shop query"
    );
    matched
}

/// Order `products` by `sort`. Sorting is stable, so ties keep their
/// catalog order; `Featured` relies on this to feel natural.
fn sort_products(products: &mut [&Product], sort: SortKey) {
    match sort {
        SortKey::PriceLow => products.sort_by_key(|p| p.price),
        SortKey::PriceHigh => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Newest => products.sort_by_key(|p| !p.is_new),
        SortKey::Popular => products.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
        SortKey::Featured => products.sort_by_key(|p| (!p.is_bestseller, !p.is_new)),
    }
}
