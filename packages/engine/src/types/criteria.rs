//! Structured criteria extracted from a free-text query.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The structured, immutable result of query extraction.
///
/// All three fields are optional and independent; an absent field
/// imposes no constraint when filtering. A `Criteria` with all
/// fields absent is rejected as an invalid query before the filter
/// ever runs — it is not a search with zero constraints.
///
/// Built fresh per request, consumed once by the filter, then
/// discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    /// Canonical city name, e.g. "oran".
    pub location: Option<String>,

    /// Acceptable canonical property types.
    pub property_types: Option<PropertyTypes>,

    /// Parsed price-range phrase.
    pub price_range: Option<PriceRange>,
}

impl Criteria {
    /// Create empty criteria.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the acceptable property types.
    pub fn with_property_types(mut self, types: PropertyTypes) -> Self {
        self.property_types = Some(types);
        self
    }

    /// Set the price range.
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    /// True when no field is present.
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.property_types.is_none() && self.price_range.is_none()
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self.location.as_deref().unwrap_or("any");
        let types = self
            .property_types
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "any".to_string());
        let price = self
            .price_range
            .as_ref()
            .map(|p| p.label())
            .unwrap_or_else(|| "any".to_string());
        write!(
            f,
            "location: {location}, property type: {types}, price range: {price}"
        )
    }
}

/// A small finite set of acceptable canonical property types.
///
/// Synonym expansion can map one informal term to several canonical
/// types (e.g. "f4" expands to "f3|f6"). Representing the expansion
/// as a set makes the filter a plain membership test instead of a
/// pattern match against listing fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTypes(Vec<String>);

impl PropertyTypes {
    /// Build from an alternation pattern like `"f3|f6"` or a single
    /// canonical type like `"villa"`. Duplicates are dropped,
    /// first-seen order is kept.
    pub fn from_pattern(pattern: &str) -> Self {
        let mut types = Vec::new();
        for part in pattern.split('|') {
            let part = part.trim();
            if !part.is_empty() && !types.iter().any(|t| t == part) {
                types.push(part.to_string());
            }
        }
        Self(types)
    }

    /// Build from a single canonical type.
    pub fn single(canonical: impl Into<String>) -> Self {
        Self(vec![canonical.into()])
    }

    /// The acceptable canonical types.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// True when the listing field matches any acceptable type
    /// (case-insensitive containment, mirroring the dataset's
    /// free-text category strings).
    pub fn matches(&self, listing_field: &str) -> bool {
        let field = listing_field.to_lowercase();
        self.0.iter().any(|t| field.contains(t.as_str()))
    }
}

impl fmt::Display for PropertyTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" or "))
    }
}

/// A parsed price-range phrase, unit always millions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceRange {
    LessThan { millions: u64 },
    MoreThan { millions: u64 },
    Between { low: u64, high: u64 },
}

impl PriceRange {
    /// The exact label the dataset uses for this band.
    ///
    /// The filter matches this text against the listing's
    /// `price_range` field as a case-insensitive substring. This is
    /// a deliberate string-format contract with the dataset, not a
    /// numeric comparison: if the dataset's label convention drifts,
    /// matching silently returns nothing.
    pub fn label(&self) -> String {
        match self {
            Self::LessThan { millions } => format!("Less than {millions}M"),
            Self::MoreThan { millions } => format!("More than {millions}M"),
            Self::Between { low, high } => format!("{low}M-{high}M"),
        }
    }
}
