//! Chronological interaction trail construction.
//!
//! The trail is the single ordering every downstream step agrees on:
//! viewed items oldest-first, then the cart newest-first, then the
//! wishlist newest-first. Tier order, the exclusion set and the final
//! merge all derive from it.

use std::collections::HashMap;

use catalog::{InteractionItem, InteractionSource, Product, User};

/// Build the chronological interaction trail for a user.
///
/// Cart and wishlist are reversed so their most recently added entries
/// lead; viewed items already arrive oldest-first.
pub fn interaction_trail(user: &User) -> Vec<InteractionItem> {
    let mut trail =
        Vec::with_capacity(user.viewed_items.len() + user.cart.len() + user.wishlist.len());

    for product in &user.viewed_items {
        trail.push(InteractionItem {
            product: product.clone(),
            source: InteractionSource::Viewed,
        });
    }
    for product in user.cart.iter().rev() {
        trail.push(InteractionItem {
            product: product.clone(),
            source: InteractionSource::Cart,
        });
    }
    for product in user.wishlist.iter().rev() {
        trail.push(InteractionItem {
            product: product.clone(),
            source: InteractionSource::Wishlist,
        });
    }

    trail
}

/// Group trail items by category, recording the order in which each
/// distinct category first appears.
///
/// Items with a missing or empty category join no group. Within a
/// group, trigger items keep trail order.
pub fn group_by_category(
    trail: &[InteractionItem],
) -> (Vec<String>, HashMap<String, Vec<&Product>>) {
    let mut tier_order: Vec<String> = Vec::new();
    let mut by_category: HashMap<String, Vec<&Product>> = HashMap::new();

    for item in trail {
        let Some(category) = item.product.tier_category() else {
            continue;
        };

        let triggers = by_category.entry(category.to_string()).or_default();
        if triggers.is_empty() {
            tier_order.push(category.to_string());
        }
        triggers.push(&item.product);
    }

    (tier_order, by_category)
}
