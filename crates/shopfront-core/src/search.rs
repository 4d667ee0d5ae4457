//! # Search Module
//!
//! Client-side product search filtering.
//!
//! The whole catalog page is fetched up front, so search is a pure filter
//! over the in-memory product list: a case-insensitive substring match
//! against title, description and category. A blank query matches
//! everything.

use crate::types::Product;

/// Filters products by a free-text query.
///
/// Matches when the query appears (case-insensitively) in the product's
/// title, description or category. A query that is empty or whitespace-only
/// returns every product.
///
/// ## Example
/// ```rust
/// use shopfront_core::search::filter_products;
/// use shopfront_core::types::Product;
///
/// let mut phone = Product::new(1, "iPhone 9", 54900);
/// phone.category = "smartphones".to_string();
/// let laptop = Product::new(2, "HP Pavilion 15", 109900);
///
/// let products = vec![phone, laptop];
/// let hits = filter_products(&products, "smart");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, 1);
/// ```
pub fn filter_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return products.iter().collect();
    }

    products
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&query)
                || p.description.to_lowercase().contains(&query)
                || p.category.to_lowercase().contains(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Product> {
        let mut phone = Product::new(1, "iPhone 9", 54900);
        phone.description = "An apple mobile which is nothing like apple".to_string();
        phone.category = "smartphones".to_string();

        let mut laptop = Product::new(2, "MacBook Pro", 174900);
        laptop.description = "MacBook Pro 2021 with mini-LED display".to_string();
        laptop.category = "laptops".to_string();

        let mut perfume = Product::new(3, "perfume Oil", 1300);
        perfume.description = "Mega Discount, Impression of Acqua Di Gio".to_string();
        perfume.category = "fragrances".to_string();

        vec![phone, laptop, perfume]
    }

    #[test]
    fn test_blank_query_matches_all() {
        let products = catalog();
        assert_eq!(filter_products(&products, "").len(), 3);
        assert_eq!(filter_products(&products, "   ").len(), 3);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let products = catalog();
        let hits = filter_products(&products, "MACBOOK");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);
    }

    #[test]
    fn test_matches_title_description_or_category() {
        let products = catalog();

        // title
        assert_eq!(filter_products(&products, "iphone")[0].id, 1);
        // description
        assert_eq!(filter_products(&products, "acqua")[0].id, 3);
        // category
        assert_eq!(filter_products(&products, "laptops")[0].id, 2);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let products = catalog();
        assert!(filter_products(&products, "toaster").is_empty());
    }
}
