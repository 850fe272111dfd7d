//! Dataset loading.
//!
//! The listing dataset is a CSV with `Property`, `City`, and
//! `Price Range` columns. It is loaded once at startup and shared
//! read-only for the process lifetime (wrap in an `Arc`); no
//! component mutates it, so unsynchronized concurrent reads are
//! fine. Extra columns are ignored — no schema validation beyond
//! the columns actually read.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{EngineError, Result};
use crate::types::Listing;

/// The in-memory listing dataset.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    listings: Vec<Listing>,
}

impl Dataset {
    /// Build a dataset from listings already in memory.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Load from a CSV file on disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(EngineError::dataset)?;
        let dataset = Self::from_reader(file)?;
        tracing::info!(
            path = %path.display(),
            listings = dataset.len(),
            "Loaded listing dataset"
        );
        Ok(dataset)
    }

    /// Load from any CSV reader (headers required).
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut listings = Vec::new();
        for record in csv_reader.deserialize() {
            let listing: Listing = record.map_err(EngineError::dataset)?;
            listings.push(listing);
        }
        Ok(Self { listings })
    }

    /// All listings, in file order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// True when the dataset holds no listings.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_expected_columns() {
        let csv = "\
Property,City,Price Range
Villa,Oran,Less than 10M
Apartment,Blida,5M-8M
";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.listings()[0].property_type, "Villa");
        assert_eq!(dataset.listings()[1].city, "Blida");
        assert_eq!(dataset.listings()[1].price_range, "5M-8M");
    }

    #[test]
    fn test_ignores_extra_columns() {
        let csv = "\
Property,City,Price Range,Agent
Villa,Oran,Less than 10M,Samir
";
        let dataset = Dataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_missing_column_is_a_dataset_error() {
        let csv = "\
Property,City
Villa,Oran
";
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, EngineError::Dataset(_)));
    }
}
