//! Query Interpretation and Filter Engine for real-estate listings.
//!
//! Turns free-text queries into structured search criteria and
//! filters an in-memory listing dataset against them. When nothing
//! matches, an external advisory gateway is consulted for a
//! human-readable suggestion, with a fixed fallback when the
//! gateway is unreachable.
//!
//! # Pipeline
//!
//! raw text -> [`vocab::Vocabulary::normalize`] ->
//! [`extract::extract`] -> [`types::Criteria`] ->
//! [`filter::filter`] -> matches, or no matches + advisory
//! suggestion via [`service::QueryService`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use engine::{Dataset, NoopAdvisor, QueryService};
//!
//! let dataset = Arc::new(Dataset::from_csv_path("listings.csv")?);
//! let service = QueryService::new(dataset, Arc::new(NoopAdvisor));
//! let outcome = service.query("villa in oran less than 10m").await?;
//! ```

pub mod advisor;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod filter;
pub mod service;
pub mod testing;
pub mod types;
pub mod vocab;

// Re-export core types at crate root
pub use advisor::{Advisor, NoopAdvisor, OpenAiAdvisor, FALLBACK_SUGGESTION};
pub use dataset::Dataset;
pub use error::{AdvisoryError, EngineError, Result};
pub use service::{QueryOutcome, QueryService, DEFAULT_ADVISOR_TIMEOUT};
pub use types::{Criteria, Listing, PriceRange, PropertyTypes};
pub use vocab::{MatchPolicy, SynonymTable, Vocabulary};
