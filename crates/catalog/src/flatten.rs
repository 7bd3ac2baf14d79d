//! Catalog flattening for the nested section layout.
//!
//! The storefront ships its catalog two levels deep:
//!
//! ```text
//! [ { "category": [ { "items": [Product, ...] }, ... ] },
//!   { "name": "...", ... },        <- occasional bare product
//!   ... ]
//! ```
//!
//! This module normalizes that shape into a flat product list,
//! concatenating every `items` array in traversal order, with bare
//! products following in their original order.

use serde_json::Value;

use crate::types::Product;

/// Flatten nested catalog JSON into products in encounter order.
///
/// Sections that do not match the expected shape are skipped, as are
/// entries that do not deserialize to a [`Product`]; a non-array input
/// yields an empty list. Never fails.
pub fn flatten_products(raw: &Value) -> Vec<Product> {
    let mut flat = Vec::new();
    let mut bare = Vec::new();

    let Value::Array(sections) = raw else {
        return flat;
    };

    for section in sections {
        let Value::Object(fields) = section else {
            continue;
        };

        if let Some(Value::Array(groups)) = fields.get("category") {
            for group in groups {
                if let Some(Value::Array(items)) = group.get("items") {
                    flat.extend(items.iter().filter_map(product_from_value));
                }
            }
        } else if fields.contains_key("name") {
            // A section with no item groups but a name is a bare product.
            if let Some(product) = product_from_value(section) {
                bare.push(product);
            }
        }
    }

    flat.append(&mut bare);
    flat
}

fn product_from_value(value: &Value) -> Option<Product> {
    serde_json::from_value(value.clone()).ok()
}
