//! Criteria extraction: three independent pattern scans over
//! normalized query text.
//!
//! Each scan takes the first (leftmost) match in its category and
//! ignores the rest; categories are independent, so any subset of
//! fields can be present. Input is expected to already be normalized
//! by [`crate::vocab::Vocabulary::normalize`], which also lowercases.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::types::{Criteria, PriceRange, PropertyTypes};

lazy_static! {
    /// Canonical city names (closed set).
    static ref LOCATION_REGEX: Regex =
        Regex::new(r"(?:oran|algiers|constantine|annaba|batna|bejaia|blida)")
            .expect("location regex compiles");

    /// Canonical property types, allowing `|`-joined alternation
    /// runs produced by synonym expansion ("f4" -> "f3|f6"). The
    /// run is matched as a whole so the alternation survives into
    /// [`PropertyTypes`] as a set instead of collapsing to its
    /// first member.
    static ref PROPERTY_REGEX: Regex =
        Regex::new(r"(?:villa|f3|f6|apartment)(?:\|(?:villa|f3|f6|apartment))*")
            .expect("property regex compiles");

    /// The three recognized price phrases. The unit is always "m"
    /// (millions); nothing else is recognized.
    static ref PRICE_REGEX: Regex =
        Regex::new(r"less than (\d+)m|more than (\d+)m|between (\d+)m and (\d+)m")
            .expect("price regex compiles");
}

/// Extract structured criteria from normalized, lowercased text.
///
/// Categories with no match are simply absent; that is never an
/// error here. Rejecting an all-empty result is the caller's job.
pub fn extract(normalized: &str) -> Criteria {
    let location = LOCATION_REGEX
        .find(normalized)
        .map(|m| m.as_str().to_string());

    let property_types = PROPERTY_REGEX
        .find(normalized)
        .map(|m| PropertyTypes::from_pattern(m.as_str()));

    let price_range = PRICE_REGEX
        .captures(normalized)
        .and_then(|caps| parse_price(&caps));

    Criteria {
        location,
        property_types,
        price_range,
    }
}

fn parse_price(caps: &Captures<'_>) -> Option<PriceRange> {
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u64>().ok());

    if let Some(millions) = number(1) {
        Some(PriceRange::LessThan { millions })
    } else if let Some(millions) = number(2) {
        Some(PriceRange::MoreThan { millions })
    } else if let (Some(low), Some(high)) = (number(3), number(4)) {
        Some(PriceRange::Between { low, high })
    } else {
        None
    }
}
