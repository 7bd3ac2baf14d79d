//! # Scoring Crate
//!
//! Pure similarity scoring between catalog candidates and the items a
//! user has already interacted with.
//!
//! ## Components
//!
//! ### Attribute extractors
//! Brand, gender affinity and name token overlap, all derived from the
//! product display name.
//!
//! ### Scorer
//! A weighted sum of the extracted signals plus one category-conditional
//! term (price proximity for laptops and mobiles, gender-affinity match
//! for fashion). See [`score`].
//!
//! Everything here is a pure function: no I/O, no shared state, no
//! failure modes. Degenerate inputs (empty names, junk prices) score
//! low or contribute nothing instead of erroring.

pub mod attributes;
pub mod score;

// Re-export commonly used items
pub use attributes::{GenderAffinity, brand, gender_affinity, name_token_overlap};
pub use score::{BRAND_WEIGHT, GENDER_WEIGHT, NAME_OVERLAP_WEIGHT, PRICE_WEIGHT, score};
