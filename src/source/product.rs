//! The core data type delivered by every catalog source.
//!
//! `Product` is a single entry of the catalog as returned by the remote API.
//! Sources decode their wire format straight into this struct so the filter
//! and the renderer never see raw JSON.
//!
//! ## For contributors
//!
//! Only the fields the UI shows are decoded.  The public API sends more
//! (`description`, `rating`, ...) and serde silently skips them; add a field
//! here only when something actually renders it.

use serde::{Deserialize, Deserializer};

/// Text shown in place of a price that is missing or unusable.
pub const PRICE_FALLBACK: &str = "N/A";

/// A single catalog entry.
///
/// `id` and `title` are mandatory: a payload without them is a malformed
/// catalog.  Everything else tolerates absence so that one sloppy record
/// does not take the whole page down.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    /// Stable identifier assigned by the API; used as the card key.
    pub id: u64,

    /// Headline shown on the card and matched by the search box.
    pub title: String,

    /// Unit price.
    ///
    /// `None` when the API omitted it, sent `null`, or sent something that is
    /// not a finite number.
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,

    /// Product image URL.
    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub category: String,
}

impl Product {
    /// Price formatted for display: `$19.50`, or [`PRICE_FALLBACK`].
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Format a price with exactly two decimal places.
///
/// Zero is a real price and renders as `$0.00`; only a missing value falls
/// back to [`PRICE_FALLBACK`].
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() && p < 0.0 => format!("-${:.2}", -p),
        Some(p) if p.is_finite() => format!("${p:.2}"),
        _ => PRICE_FALLBACK.to_string(),
    }
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_f64())
        .filter(|p| p.is_finite()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
