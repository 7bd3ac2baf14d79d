//! Integration tests for the tiered recommender.
//!
//! These exercise the full recommend-then-merge flow against a small
//! hand-built catalog, the way the CLI drives it.

use catalog::{Catalog, Product, User};
use engine::{MAX_RECOMMENDATIONS, TIER_LIMIT, merge_recommendations, recommend};
use serde_json::{Map, json};
use std::collections::HashSet;

fn product(name: &str, category: &str, price: f64) -> Product {
    Product {
        name: name.to_string(),
        category: Some(category.to_string()),
        price: Some(json!(price)),
        extra: Map::new(),
    }
}

fn user(viewed: Vec<Product>, cart: Vec<Product>, wishlist: Vec<Product>) -> User {
    User {
        phone: "5550001111".to_string(),
        viewed_items: viewed,
        cart,
        wishlist,
        recommendations: Vec::new(),
        extra: Map::new(),
    }
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_empty_interaction_history_yields_nothing() {
    let catalog = Catalog::from_products(vec![product("Pixel 9", "mobile", 799.0)]);
    let empty = user(Vec::new(), Vec::new(), Vec::new());

    assert!(recommend(&empty, &catalog).is_empty());
}

#[test]
fn test_interacted_names_never_recommended() {
    let catalog = Catalog::from_products(vec![
        product("Pixel 9", "mobile", 799.0),
        product("Pixel 9 Pro", "mobile", 999.0),
        product("Galaxy S25", "mobile", 899.0),
    ]);

    // "Pixel 9 Pro" would outscore everything against a "Pixel 9 Pro"
    // trigger, but it is already in the wishlist.
    let user = user(
        vec![product("Pixel 9", "mobile", 799.0)],
        Vec::new(),
        vec![product("Pixel 9 Pro", "mobile", 999.0)],
    );

    let recs = recommend(&user, &catalog);
    assert_eq!(names(&recs), vec!["Galaxy S25"]);

    let trail_names: HashSet<&str> = ["Pixel 9", "Pixel 9 Pro"].into_iter().collect();
    assert!(recs.iter().all(|p| !trail_names.contains(p.name.as_str())));
}

#[test]
fn test_tier_order_follows_first_appearance_in_trail() {
    let catalog = Catalog::from_products(vec![
        product("Linen Shirt", "fashion", 40.0),
        product("Galaxy S25", "mobile", 899.0),
    ]);

    // Trail: viewed mobile item first, then the reversed cart puts the
    // second mobile item before the fashion item. Tiers: mobile, fashion.
    let user = user(
        vec![product("Pixel 9", "mobile", 799.0)],
        vec![
            product("Denim Jacket", "fashion", 80.0),
            product("Pixel 8", "mobile", 599.0),
        ],
        Vec::new(),
    );

    let recs = recommend(&user, &catalog);
    assert_eq!(names(&recs), vec!["Galaxy S25", "Linen Shirt"]);
}

#[test]
fn test_price_proximity_ranks_similar_laptop_first() {
    let catalog = Catalog::from_products(vec![
        // Unrelated brand, far price: scores ~0.
        product("Acme Tower 9000", "laptop", 5000.0),
        // Same brand, overlapping name, same price: scores ~1.05.
        product("Dell XPS 15", "laptop", 1000.0),
    ]);

    let user = user(vec![product("Dell XPS 13", "laptop", 1000.0)], Vec::new(), Vec::new());

    let recs = recommend(&user, &catalog);
    assert_eq!(names(&recs), vec!["Dell XPS 15", "Acme Tower 9000"]);
}

#[test]
fn test_ties_keep_catalog_order() {
    // Four candidates indistinguishable to the scorer: no brand match,
    // no token overlap, no price given.
    let catalog = Catalog::from_products(vec![
        Product { name: "Zeta Case".into(), category: Some("accessory".into()), price: None, extra: Map::new() },
        Product { name: "Alpha Strap".into(), category: Some("accessory".into()), price: None, extra: Map::new() },
        Product { name: "Mid Stand".into(), category: Some("accessory".into()), price: None, extra: Map::new() },
    ]);

    let user = user(
        vec![Product { name: "Holder".into(), category: Some("accessory".into()), price: None, extra: Map::new() }],
        Vec::new(),
        Vec::new(),
    );

    let recs = recommend(&user, &catalog);
    assert_eq!(names(&recs), vec!["Zeta Case", "Alpha Strap", "Mid Stand"]);
}

#[test]
fn test_tier_contributes_at_most_twenty() {
    let mut products = Vec::new();
    for i in 0..30 {
        products.push(product(&format!("Galaxy Model {i}"), "mobile", 500.0));
    }
    let catalog = Catalog::from_products(products);

    let user = user(vec![product("Galaxy S25", "mobile", 500.0)], Vec::new(), Vec::new());

    let recs = recommend(&user, &catalog);
    assert_eq!(recs.len(), TIER_LIMIT);
}

#[test]
fn test_scores_non_increasing_within_tier() {
    let catalog = Catalog::from_products(vec![
        product("Acme Slab", "mobile", 4000.0),
        product("Pixel 9 Pro", "mobile", 850.0),
        product("Pixel 9a", "mobile", 499.0),
        product("Offbrand Phone", "mobile", 801.0),
    ]);

    let trigger = product("Pixel 9", "mobile", 800.0);
    let user = user(vec![trigger.clone()], Vec::new(), Vec::new());

    let recs = recommend(&user, &catalog);
    let scores: Vec<f64> = recs
        .iter()
        .map(|p| scoring::score(p, &trigger, "mobile"))
        .collect();

    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_output_never_exceeds_cap() {
    // Six categories of 20 candidates each: enough to overrun 100.
    let mut products = Vec::new();
    let mut viewed = Vec::new();
    for (c, category) in ["mobile", "laptop", "fashion", "audio", "home", "toys"]
        .into_iter()
        .enumerate()
    {
        viewed.push(product(&format!("Seed {c}"), category, 100.0));
        for i in 0..TIER_LIMIT {
            products.push(product(&format!("{category} item {i}"), category, 100.0));
        }
    }

    let catalog = Catalog::from_products(products);
    let user = user(viewed, Vec::new(), Vec::new());

    let recs = recommend(&user, &catalog);
    assert_eq!(recs.len(), MAX_RECOMMENDATIONS);

    let merged = merge_recommendations(&user, recs);
    assert_eq!(merged.len(), MAX_RECOMMENDATIONS);
}

#[test]
fn test_earlier_tier_selection_excluded_from_later_tiers() {
    // The same product name is listed under two categories; once the
    // first tier takes it, the second tier cannot.
    let catalog = Catalog::from_products(vec![
        product("Crossover Item", "mobile", 100.0),
        product("Crossover Item", "audio", 100.0),
        product("Speaker", "audio", 100.0),
    ]);

    let user = user(
        vec![
            product("Some Phone", "mobile", 100.0),
            product("Some Headset", "audio", 100.0),
        ],
        Vec::new(),
        Vec::new(),
    );

    let recs = recommend(&user, &catalog);
    let crossover_count = recs.iter().filter(|p| p.name == "Crossover Item").count();
    assert_eq!(crossover_count, 1);
    assert!(recs.iter().any(|p| p.name == "Speaker"));
}

#[test]
fn test_recommend_is_idempotent() {
    let catalog = Catalog::from_products(vec![
        product("Dell XPS 15", "laptop", 1000.0),
        product("Acme Tower 9000", "laptop", 5000.0),
        product("Linen Shirt", "fashion", 40.0),
    ]);
    let user = user(
        vec![product("Dell XPS 13", "laptop", 1000.0)],
        vec![product("Denim Jacket", "fashion", 80.0)],
        Vec::new(),
    );

    let first = recommend(&user, &catalog);
    let second = recommend(&user, &catalog);
    assert_eq!(first, second);
}

#[test]
fn test_merge_puts_deduplicated_history_first() {
    let catalog = Catalog::from_products(vec![product("Galaxy S25", "mobile", 899.0)]);
    let user = user(
        vec![product("Pixel 9", "mobile", 799.0), product("Pixel 9", "mobile", 799.0)],
        Vec::new(),
        Vec::new(),
    );

    let fresh = recommend(&user, &catalog);
    let merged = merge_recommendations(&user, fresh);

    assert_eq!(names(&merged), vec!["Pixel 9", "Galaxy S25"]);
}
