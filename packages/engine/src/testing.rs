//! Testing utilities including mock advisors.
//!
//! Useful for exercising the query service without real network
//! calls to the advisory provider.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;

use crate::advisor::Advisor;
use crate::error::{AdvisoryError, AdvisoryResult};
use crate::types::Criteria;

/// A mock advisor returning a canned suggestion and recording every
/// call for assertions.
#[derive(Default)]
pub struct MockAdvisor {
    suggestion: Option<String>,
    calls: Arc<RwLock<Vec<Criteria>>>,
}

impl MockAdvisor {
    /// Mock with a default suggestion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock with a specific canned suggestion.
    pub fn with_suggestion(suggestion: impl Into<String>) -> Self {
        Self {
            suggestion: Some(suggestion.into()),
            ..Default::default()
        }
    }

    /// Number of `suggest` calls made.
    pub fn calls(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Criteria handed to the advisor, in call order.
    pub fn recorded_criteria(&self) -> Vec<Criteria> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl Advisor for MockAdvisor {
    async fn suggest(&self, criteria: &Criteria) -> AdvisoryResult<String> {
        self.calls.write().unwrap().push(criteria.clone());
        Ok(self
            .suggestion
            .clone()
            .unwrap_or_else(|| "Consider widening your search.".to_string()))
    }
}

/// An advisor that always fails, for exercising the fallback path.
pub struct FailingAdvisor;

#[async_trait]
impl Advisor for FailingAdvisor {
    async fn suggest(&self, _criteria: &Criteria) -> AdvisoryResult<String> {
        Err(AdvisoryError::Network("connection refused".to_string()))
    }
}

/// An advisor that never answers in time, for exercising the
/// service-level timeout.
pub struct SlowAdvisor {
    delay: Duration,
}

impl SlowAdvisor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Advisor for SlowAdvisor {
    async fn suggest(&self, _criteria: &Criteria) -> AdvisoryResult<String> {
        tokio::time::sleep(self.delay).await;
        Ok("too late".to_string())
    }
}
