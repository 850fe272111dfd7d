//! The inbound query operation: normalize, extract, filter, and —
//! on a zero-match outcome — consult the advisory gateway.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::advisor::{Advisor, FALLBACK_SUGGESTION};
use crate::dataset::Dataset;
use crate::error::{EngineError, Result};
use crate::types::{Criteria, Listing};
use crate::vocab::Vocabulary;
use crate::{extract, filter};

/// Default upper bound on the advisory call. The advisor's own
/// transport timeout usually fires first; this is the hard ceiling.
pub const DEFAULT_ADVISOR_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of a successfully processed query.
///
/// An invalid query (no criteria extracted) is an
/// [`EngineError::InvalidQuery`] instead, raised before filtering.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// At least one listing matched. The full match list, in
    /// dataset order; truncation for display is the caller's
    /// concern.
    Matches { listings: Vec<Listing> },

    /// Nothing matched. Carries the advisory suggestion, or the
    /// fixed fallback when the gateway failed — never empty.
    NoMatches {
        criteria: Criteria,
        suggestion: String,
    },
}

/// Answers free-text queries against a shared read-only dataset.
///
/// Request-scoped and synchronous apart from the bounded advisory
/// call; holds no per-query state, so one instance serves any
/// number of concurrent requests.
pub struct QueryService {
    dataset: Arc<Dataset>,
    advisor: Arc<dyn Advisor>,
    vocabulary: Vocabulary,
    advisor_timeout: Duration,
}

impl QueryService {
    pub fn new(dataset: Arc<Dataset>, advisor: Arc<dyn Advisor>) -> Self {
        Self {
            dataset,
            advisor,
            vocabulary: Vocabulary::default(),
            advisor_timeout: DEFAULT_ADVISOR_TIMEOUT,
        }
    }

    /// Replace the default vocabulary.
    pub fn with_vocabulary(mut self, vocabulary: Vocabulary) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Set the advisory call ceiling.
    pub fn with_advisor_timeout(mut self, timeout: Duration) -> Self {
        self.advisor_timeout = timeout;
        self
    }

    /// Parse a raw query into criteria without running the filter.
    pub fn parse(&self, raw_query: &str) -> Result<Criteria> {
        let normalized = self.vocabulary.normalize(raw_query);
        let criteria = extract::extract(&normalized);
        if criteria.is_empty() {
            return Err(EngineError::InvalidQuery);
        }
        Ok(criteria)
    }

    /// Answer one query end to end.
    pub async fn query(&self, raw_query: &str) -> Result<QueryOutcome> {
        let criteria = self.parse(raw_query)?;
        tracing::debug!(%criteria, "Extracted query criteria");

        let matches: Vec<Listing> = filter::filter(&criteria, self.dataset.listings())
            .into_iter()
            .cloned()
            .collect();

        if matches.is_empty() {
            tracing::info!(%criteria, "No listings matched, consulting advisory gateway");
            let suggestion = self.suggest_or_fallback(&criteria).await;
            return Ok(QueryOutcome::NoMatches {
                criteria,
                suggestion,
            });
        }

        tracing::debug!(count = matches.len(), "Query matched listings");
        Ok(QueryOutcome::Matches { listings: matches })
    }

    /// Ask the advisor, degrading to the fixed fallback on any
    /// failure or timeout. Advisory failures never propagate.
    async fn suggest_or_fallback(&self, criteria: &Criteria) -> String {
        match tokio::time::timeout(self.advisor_timeout, self.advisor.suggest(criteria)).await {
            Ok(Ok(suggestion)) if !suggestion.trim().is_empty() => suggestion,
            Ok(Ok(_)) => {
                tracing::warn!("Advisor returned an empty suggestion, using fallback");
                FALLBACK_SUGGESTION.to_string()
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Advisory gateway failed, using fallback");
                FALLBACK_SUGGESTION.to_string()
            }
            Err(_) => {
                tracing::warn!(
                    timeout_secs = self.advisor_timeout.as_secs(),
                    "Advisory gateway timed out, using fallback"
                );
                FALLBACK_SUGGESTION.to_string()
            }
        }
    }
}
