//! Merging interaction history with fresh recommendations.

use std::collections::HashSet;

use catalog::{Product, User};

use crate::recommend::MAX_RECOMMENDATIONS;
use crate::trail::interaction_trail;

/// Merge the user's own interaction history with newly computed
/// recommendations into the list to persist.
///
/// The trail is deduplicated by name keeping the first occurrence, new
/// recommendations follow in order, and the result is truncated to
/// [`MAX_RECOMMENDATIONS`] entries.
pub fn merge_recommendations(user: &User, new_recommendations: Vec<Product>) -> Vec<Product> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged: Vec<Product> = Vec::new();

    for item in interaction_trail(user) {
        if seen.insert(item.product.name.clone()) {
            merged.push(item.product);
        }
    }

    merged.extend(new_recommendations);
    merged.truncate(MAX_RECOMMENDATIONS);
    merged
}
