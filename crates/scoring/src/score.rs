//! Weighted similarity scoring between a candidate and a trigger item.

use catalog::Product;

use crate::attributes::{brand, gender_affinity, name_token_overlap};

/// Weight of an exact brand-token match.
pub const BRAND_WEIGHT: f64 = 0.5;
/// Weight applied to the name token overlap.
pub const NAME_OVERLAP_WEIGHT: f64 = 0.5;
/// Weight of the price proximity term (laptop and mobile tiers).
pub const PRICE_WEIGHT: f64 = 0.3;
/// Weight of a gender-affinity match (fashion tier).
pub const GENDER_WEIGHT: f64 = 0.4;

/// Categories whose conditional term is price proximity.
const PRICE_SENSITIVE: [&str; 2] = ["laptop", "mobile"];
/// Category whose conditional term is gender-affinity match.
const FASHION: &str = "fashion";

/// Score `candidate` against one trigger item from the same tier.
///
/// The score is the sum of the brand term, the weighted name overlap
/// and at most one category-conditional term, so it falls in
/// [0, 1.3]. Pure function of its three inputs.
///
/// Two products whose names both produce the empty brand token still
/// count as a brand match.
pub fn score(candidate: &Product, trigger: &Product, category: &str) -> f64 {
    let mut score = 0.0;

    if brand(&candidate.name) == brand(&trigger.name) {
        score += BRAND_WEIGHT;
    }

    score += name_token_overlap(&candidate.name, &trigger.name) * NAME_OVERLAP_WEIGHT;

    if PRICE_SENSITIVE.contains(&category) {
        score += price_proximity(candidate, trigger);
    } else if category == FASHION
        && gender_affinity(&candidate.name) == gender_affinity(&trigger.name)
    {
        score += GENDER_WEIGHT;
    }

    score
}

/// Price proximity term for price-sensitive tiers.
///
/// The trigger price must be convertible and strictly positive; a
/// present but non-convertible price on either side voids the term.
/// An absent candidate price coerces to zero and scores through the
/// formula like any other value.
fn price_proximity(candidate: &Product, trigger: &Product) -> f64 {
    let (Some(trigger_price), Some(candidate_price)) =
        (trigger.coerced_price(), candidate.coerced_price())
    else {
        return 0.0;
    };

    if trigger_price <= 0.0 {
        return 0.0;
    }

    let diff = ((candidate_price - trigger_price).abs() / trigger_price).min(1.0);
    PRICE_WEIGHT * (1.0 - diff)
}
