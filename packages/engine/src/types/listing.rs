//! A single row of the real-estate dataset.

use serde::{Deserialize, Serialize};

/// One listing from the dataset.
///
/// Listings are read-only for the lifetime of the process: the
/// dataset is loaded once at startup and shared across requests,
/// no component ever mutates a row.
///
/// The serde renames match the CSV headers the dataset ships with
/// (`Property`, `City`, `Price Range`). `price_range` is a free-text
/// label in one of three formats — `"Less than {N}M"`,
/// `"More than {N}M"`, `"{N}M-{M}M"` — which the filter matches as
/// text, not as numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Property category, e.g. "Villa", "F3", "Apartment".
    #[serde(rename = "Property")]
    pub property_type: String,

    /// City the property is in.
    #[serde(rename = "City")]
    pub city: String,

    /// Price band label, e.g. "Less than 10M".
    #[serde(rename = "Price Range")]
    pub price_range: String,
}

impl Listing {
    /// Create a listing. Mostly useful in tests; production listings
    /// come from the CSV loader.
    pub fn new(
        property_type: impl Into<String>,
        city: impl Into<String>,
        price_range: impl Into<String>,
    ) -> Self {
        Self {
            property_type: property_type.into(),
            city: city.into(),
            price_range: price_range.into(),
        }
    }
}
