//! Core domain types shared across the workspace.
//!
//! Products and user documents come from JSON sources that carry more
//! fields than the engine cares about (images, ratings, descriptions);
//! the structs here keep those fields intact through `#[serde(flatten)]`
//! so a round trip through the store never loses data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single catalog entry.
///
/// `name` is the product's identity within one run: exclusion and
/// deduplication compare names as exact, case-sensitive strings. There
/// is no separate product ID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,

    /// Category key used for tier grouping and candidate filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Raw price as it appeared in the source. Kept as JSON so numeric,
    /// string and malformed prices all round-trip unmodified; use
    /// [`Product::coerced_price`] to read it as a number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,

    /// Every other catalog field, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Lenient numeric view of the price.
    ///
    /// An absent price counts as zero; a JSON number is taken as-is; a
    /// string is parsed after trimming. Anything else present (null,
    /// bool, object, unparsable string) is not convertible and returns
    /// `None`, which voids the whole price term during scoring.
    pub fn coerced_price(&self) -> Option<f64> {
        match &self.price {
            None => Some(0.0),
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(_) => None,
        }
    }

    /// Category for tier formation. An empty string counts as
    /// uncategorized: such items never form or join a tier.
    pub fn tier_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// Which interaction list a trail item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionSource {
    Viewed,
    Cart,
    Wishlist,
}

/// A product the user interacted with, tagged with its provenance.
///
/// Trail items are not persisted; provenance exists only while the
/// engine runs.
#[derive(Debug, Clone)]
pub struct InteractionItem {
    pub product: Product,
    pub source: InteractionSource,
}

/// A stored user document, keyed by phone number.
///
/// The three interaction lists are ordered oldest-to-newest as the
/// storefront appends to them. `recommendations` is output only and is
/// fully replaced on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub viewed_items: Vec<Product>,

    #[serde(default)]
    pub cart: Vec<Product>,

    #[serde(default)]
    pub wishlist: Vec<Product>,

    #[serde(default)]
    pub recommendations: Vec<Product>,

    /// Remaining profile fields (name, email, address, ...), passed
    /// through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
