//! Attribute extractors derived from product names.
//!
//! Catalog entries carry no structured brand or gender fields, so all
//! three similarity signals are recovered from the display name.

use std::collections::HashSet;

/// Gender affinity inferred from a product name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenderAffinity {
    Male,
    Female,
    Unisex,
}

/// Brand token: the first space-delimited token of the lowercased name.
///
/// An empty name has the empty brand. The split is on the literal space
/// character, so a leading space also produces the empty brand.
pub fn brand(name: &str) -> String {
    name.split(' ').next().unwrap_or_default().to_lowercase()
}

/// Classify a name's gender affinity from marker substrings.
///
/// Male markers are checked first and win; "women" itself contains the
/// "men" marker, so only the "girl" marker can reach
/// [`GenderAffinity::Female`].
pub fn gender_affinity(name: &str) -> GenderAffinity {
    let lower = name.to_lowercase();

    if lower.contains("men") || lower.contains("men's") || lower.contains("boy") {
        return GenderAffinity::Male;
    }
    if lower.contains("women") || lower.contains("women's") || lower.contains("girl") {
        return GenderAffinity::Female;
    }

    GenderAffinity::Unisex
}

/// Jaccard similarity of the whitespace token sets of two names.
///
/// Tokens are lowercased and duplicates collapse. Returns 0 if either
/// name is empty or the union is empty.
pub fn name_token_overlap(name1: &str, name2: &str) -> f64 {
    if name1.is_empty() || name2.is_empty() {
        return 0.0;
    }

    let lower1 = name1.to_lowercase();
    let lower2 = name2.to_lowercase();
    let tokens1: HashSet<&str> = lower1.split_whitespace().collect();
    let tokens2: HashSet<&str> = lower2.split_whitespace().collect();

    let union = tokens1.union(&tokens2).count();
    if union == 0 {
        return 0.0;
    }

    tokens1.intersection(&tokens2).count() as f64 / union as f64
}
