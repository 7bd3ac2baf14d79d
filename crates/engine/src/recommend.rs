//! The tiered recommender.
//!
//! ## Algorithm
//! 1. Build the chronological trail; an empty trail yields an empty
//!    output.
//! 2. Group trigger items by category; tiers run in the order each
//!    category first appears in the trail.
//! 3. Seed the exclusion set with every name in the trail.
//! 4. Per tier: collect catalog candidates not yet excluded, score each
//!    against every trigger keeping the maximum, stable-sort by
//!    descending score, keep the top [`TIER_LIMIT`], append them and
//!    grow the exclusion set so later tiers cannot reselect them.
//! 5. Stop once [`MAX_RECOMMENDATIONS`] have accumulated.
//!
//! Empty tiers are normal: a category with no remaining candidates
//! simply contributes nothing.

use std::cmp::Ordering;
use std::collections::HashSet;

use catalog::{Catalog, Product, User};
use scoring::score;
use tracing::debug;

use crate::trail::{group_by_category, interaction_trail};

/// Hard cap on the overall recommendation list.
pub const MAX_RECOMMENDATIONS: usize = 100;
/// Cap on the contribution of a single category tier.
pub const TIER_LIMIT: usize = 20;

/// A candidate paired with its best score across the tier's triggers.
#[derive(Debug, Clone)]
struct ScoredCandidate<'a> {
    product: &'a Product,
    score: f64,
}

/// Compute tiered recommendations for `user` against `catalog`.
///
/// Pure with respect to its inputs: calling it twice with the same
/// user and catalog returns the same list. Returns at most
/// [`MAX_RECOMMENDATIONS`] products, none of which share a name with
/// an interacted item.
pub fn recommend(user: &User, catalog: &Catalog) -> Vec<Product> {
    let trail = interaction_trail(user);
    if trail.is_empty() {
        return Vec::new();
    }

    let (tier_order, triggers_by_category) = group_by_category(&trail);

    // Exclusion set, owned by this invocation and threaded through the
    // tier loop: trail names up front, selected names as they are taken.
    let mut excluded: HashSet<String> =
        trail.iter().map(|item| item.product.name.clone()).collect();

    let mut recommendations: Vec<Product> = Vec::new();

    for category in &tier_order {
        if recommendations.len() >= MAX_RECOMMENDATIONS {
            break;
        }

        let triggers = &triggers_by_category[category];

        let candidates: Vec<&Product> = catalog
            .in_category(category)
            .filter(|p| !excluded.contains(&p.name))
            .collect();

        if candidates.is_empty() {
            debug!("tier {category}: no eligible candidates");
            continue;
        }

        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .map(|product| ScoredCandidate {
                product,
                score: best_score(product, triggers, category),
            })
            .collect();

        // Stable sort: equal scores keep catalog order.
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug!(
            "tier {category}: {} candidates against {} triggers",
            scored.len(),
            triggers.len()
        );

        for entry in scored.into_iter().take(TIER_LIMIT) {
            excluded.insert(entry.product.name.clone());
            recommendations.push(entry.product.clone());
        }
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Best score for a candidate across all trigger items of its tier.
fn best_score(candidate: &Product, triggers: &[&Product], category: &str) -> f64 {
    triggers
        .iter()
        .map(|trigger| score(candidate, trigger, category))
        .fold(0.0, f64::max)
}
