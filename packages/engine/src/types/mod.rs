//! Domain types for listings and parsed query criteria.

pub mod criteria;
pub mod listing;

pub use criteria::{Criteria, PriceRange, PropertyTypes};
pub use listing::Listing;
