//! Catalog container and category index.

use std::collections::HashMap;

use crate::types::Product;

/// Flat product catalog with a per-category index.
///
/// The index maps each category to the positions of its products in
/// catalog order, so per-category candidate scans see products in the
/// order they appeared in the source file. Tie-breaking during ranking
/// depends on that order being preserved.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
    category_index: HashMap<String, Vec<usize>>,
}

impl Catalog {
    /// Build a catalog from flattened products.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut category_index: HashMap<String, Vec<usize>> = HashMap::new();

        for (pos, product) in products.iter().enumerate() {
            if let Some(category) = &product.category {
                category_index
                    .entry(category.clone())
                    .or_insert_with(Vec::new)
                    .push(pos);
            }
        }

        Self {
            products,
            category_index,
        }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products whose category exactly equals `category`, in catalog
    /// order. Unknown categories yield an empty iterator.
    pub fn in_category<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a Product> {
        self.category_index
            .get(category)
            .into_iter()
            .flatten()
            .map(|&pos| &self.products[pos])
    }
}
