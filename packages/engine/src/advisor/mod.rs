//! Advisory gateway: an external text-generation collaborator
//! consulted only when filtering finds nothing.
//!
//! The engine hands over the structured [`Criteria`] (never the raw
//! query text) and gets back a free-text suggestion for broadening
//! the search. The call is allowed to fail; the service layer
//! substitutes [`FALLBACK_SUGGESTION`] and never surfaces advisory
//! failures to the caller.

mod openai;

pub use openai::OpenAiAdvisor;

use async_trait::async_trait;

use crate::error::{AdvisoryError, AdvisoryResult};
use crate::types::Criteria;

/// Fixed suggestion used whenever the advisory gateway fails or is
/// not configured.
pub const FALLBACK_SUGGESTION: &str =
    "Sorry, I couldn't generate a suggestion at the moment. \
     Try broadening your location, property type, or price range.";

/// External suggestion provider.
///
/// Implementations wrap a specific text-generation service and own
/// its transport details. They must bound their own request time;
/// the service layer adds an outer timeout as well.
#[async_trait]
pub trait Advisor: Send + Sync {
    /// Produce a human-readable suggestion for a search that
    /// matched nothing.
    async fn suggest(&self, criteria: &Criteria) -> AdvisoryResult<String>;
}

/// Build the natural-language prompt handed to the provider.
pub fn suggestion_prompt(criteria: &Criteria) -> String {
    format!(
        "The user searched for real estate with the following criteria: {criteria}. \
         Could you suggest how they might broaden their search or what alternatives \
         they might consider?"
    )
}

/// No-op advisor for deployments without a provider credential.
pub struct NoopAdvisor;

#[async_trait]
impl Advisor for NoopAdvisor {
    async fn suggest(&self, _criteria: &Criteria) -> AdvisoryResult<String> {
        tracing::warn!("NoopAdvisor: suggest called but no advisory provider configured");
        Err(AdvisoryError::NotConfigured)
    }
}
