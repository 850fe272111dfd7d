//! The filter engine: applies extracted criteria to the listing
//! dataset.
//!
//! Sequential conjunctive narrowing — each present criterion shrinks
//! the working set, absent criteria impose no constraint. Matching
//! is case-insensitive containment throughout, mirroring how the
//! dataset stores free-text fields. Price matching compares against
//! the dataset's own label text ("Less than 10M", "5M-8M", ...)
//! rather than parsing numbers; see
//! [`crate::types::PriceRange::label`].

use crate::types::{Criteria, Listing};

/// Return the listings matching every present criterion, in dataset
/// order. An empty result is a valid outcome, not an error.
pub fn filter<'a>(criteria: &Criteria, listings: &'a [Listing]) -> Vec<&'a Listing> {
    let mut result: Vec<&Listing> = listings.iter().collect();

    if let Some(types) = &criteria.property_types {
        result.retain(|l| types.matches(&l.property_type));
    }

    if let Some(location) = &criteria.location {
        let needle = location.to_lowercase();
        result.retain(|l| l.city.to_lowercase().contains(&needle));
    }

    if let Some(range) = &criteria.price_range {
        let needle = range.label().to_lowercase();
        result.retain(|l| l.price_range.to_lowercase().contains(&needle));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PriceRange, PropertyTypes};

    fn dataset() -> Vec<Listing> {
        vec![
            Listing::new("Villa", "Oran", "Less than 10M"),
            Listing::new("Apartment", "Oran", "5M-8M"),
            Listing::new("F3", "Blida", "Less than 10M"),
            Listing::new("F6", "Constantine", "More than 20M"),
            Listing::new("Villa", "Algiers", "More than 20M"),
        ]
    }

    #[test]
    fn test_absent_criteria_keep_everything() {
        let listings = dataset();
        let result = filter(&Criteria::new(), &listings);
        assert_eq!(result.len(), listings.len());
    }

    #[test]
    fn test_single_field_narrowing() {
        let listings = dataset();

        let by_city = filter(&Criteria::new().with_location("oran"), &listings);
        assert_eq!(by_city.len(), 2);

        let by_type = filter(
            &Criteria::new().with_property_types(PropertyTypes::single("villa")),
            &listings,
        );
        assert_eq!(by_type.len(), 2);

        let by_price = filter(
            &Criteria::new().with_price_range(PriceRange::Between { low: 5, high: 8 }),
            &listings,
        );
        assert_eq!(by_price.len(), 1);
        assert_eq!(by_price[0].city, "Oran");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let listings = dataset();
        let criteria = Criteria::new()
            .with_location("oran")
            .with_property_types(PropertyTypes::single("villa"))
            .with_price_range(PriceRange::LessThan { millions: 10 });

        let combined = filter(&criteria, &listings);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0], &listings[0]);

        // Must equal the intersection of the per-field filters.
        let per_field: Vec<Vec<&Listing>> = [
            Criteria::new().with_location("oran"),
            Criteria::new().with_property_types(PropertyTypes::single("villa")),
            Criteria::new().with_price_range(PriceRange::LessThan { millions: 10 }),
        ]
        .iter()
        .map(|c| filter(c, &listings))
        .collect();

        let intersection: Vec<&Listing> = listings
            .iter()
            .filter(|l| per_field.iter().all(|set| set.contains(l)))
            .collect();
        assert_eq!(combined, intersection);
    }

    #[test]
    fn test_property_set_matches_any_member() {
        let listings = dataset();
        let criteria = Criteria::new().with_property_types(PropertyTypes::from_pattern("f3|f6"));

        let result = filter(&criteria, &listings);
        let types: Vec<&str> = result.iter().map(|l| l.property_type.as_str()).collect();
        assert_eq!(types, ["F3", "F6"]);
    }

    #[test]
    fn test_price_label_contract_is_exact_text() {
        let listings = dataset();

        // A band the dataset never uses: silent zero-match, no error.
        let off_label = filter(
            &Criteria::new().with_price_range(PriceRange::LessThan { millions: 9 }),
            &listings,
        );
        assert!(off_label.is_empty());
    }

    #[test]
    fn test_result_preserves_dataset_order() {
        let listings = dataset();
        let result = filter(
            &Criteria::new().with_price_range(PriceRange::LessThan { millions: 10 }),
            &listings,
        );
        let cities: Vec<&str> = result.iter().map(|l| l.city.as_str()).collect();
        assert_eq!(cities, ["Oran", "Blida"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let listings = vec![Listing::new("VILLA", "ORAN", "LESS THAN 10M")];
        let criteria = Criteria::new()
            .with_location("oran")
            .with_property_types(PropertyTypes::single("villa"))
            .with_price_range(PriceRange::LessThan { millions: 10 });
        assert_eq!(filter(&criteria, &listings).len(), 1);
    }
}
