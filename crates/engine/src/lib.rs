//! Tiered recommendation engine.
//!
//! This crate provides:
//! - Chronological interaction trail construction with provenance
//! - The tiered recommender (per-category scoring, ranking, exclusion)
//! - The merger that combines history with fresh recommendations
//!
//! ## Architecture
//! The engine processes one user in stages:
//! 1. The trail fixes a single chronology over viewed, cart and
//!    wishlist items
//! 2. Tiers form per category, ordered by first appearance in the trail
//! 3. Each tier scores its catalog candidates against its trigger items
//!    and contributes its top-ranked products
//! 4. The merger prepends the deduplicated history and caps the result
//!
//! ## Example Usage
//! ```ignore
//! use catalog::{Catalog, load_catalog};
//! use engine::{merge_recommendations, recommend};
//!
//! let catalog = Catalog::from_products(load_catalog(path)?);
//! let fresh = recommend(&user, &catalog);
//! let to_persist = merge_recommendations(&user, fresh);
//! ```
//!
//! The engine performs no I/O and holds no state: it is a pure function
//! of (user, catalog), so it can be unit-tested without any external
//! dependency.

pub mod merge;
pub mod recommend;
pub mod trail;

// Re-export main entry points
pub use merge::merge_recommendations;
pub use recommend::{MAX_RECOMMENDATIONS, TIER_LIMIT, recommend};
pub use trail::{group_by_category, interaction_trail};
