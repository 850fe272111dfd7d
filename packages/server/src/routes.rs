//! Request handlers for the query endpoint.
//!
//! The JSON envelopes mirror the original service contract:
//! `status` is one of `error`, `no_results`, `success`; listing
//! rows keep their dataset column names (`Property`, `City`,
//! `Price Range`).

use std::sync::Arc;

use axum::{extract::State, Json};
use engine::{EngineError, Listing, QueryOutcome, QueryService};
use serde::{Deserialize, Serialize};

/// Display cap on returned listings. Truncation happens here, at
/// the presentation boundary; the engine returns the full match
/// list.
pub const MAX_RESULTS: usize = 5;

const INVALID_QUERY_MESSAGE: &str = "Please specify property type, location, or price range.";
const NO_RESULTS_MESSAGE: &str = "No matching properties found.";

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryResponse {
    Error { message: String },
    NoResults { message: String, suggestion: String },
    Success { data: Vec<Listing> },
}

/// POST /query
pub async fn query_handler(
    State(service): State<Arc<QueryService>>,
    Json(request): Json<QueryRequest>,
) -> Json<QueryResponse> {
    match service.query(&request.query).await {
        Ok(QueryOutcome::Matches { mut listings }) => {
            listings.truncate(MAX_RESULTS);
            Json(QueryResponse::Success { data: listings })
        }
        Ok(QueryOutcome::NoMatches { suggestion, .. }) => Json(QueryResponse::NoResults {
            message: NO_RESULTS_MESSAGE.to_string(),
            suggestion,
        }),
        Err(EngineError::InvalidQuery) => Json(QueryResponse::Error {
            message: INVALID_QUERY_MESSAGE.to_string(),
        }),
        Err(e) => {
            tracing::error!(error = %e, "Query processing failed");
            Json(QueryResponse::Error {
                message: "Internal error.".to_string(),
            })
        }
    }
}

/// GET /health
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::testing::FailingAdvisor;
    use engine::{Dataset, FALLBACK_SUGGESTION};

    fn test_service() -> Arc<QueryService> {
        let listings = (0..8)
            .map(|i| Listing::new("Villa", "Oran", format!("More than {}M", 10 + i)))
            .collect();
        Arc::new(QueryService::new(
            Arc::new(Dataset::from_listings(listings)),
            Arc::new(FailingAdvisor),
        ))
    }

    async fn post_query(query: &str) -> QueryResponse {
        let Json(response) = query_handler(
            State(test_service()),
            Json(QueryRequest {
                query: query.to_string(),
            }),
        )
        .await;
        response
    }

    #[tokio::test]
    async fn test_success_truncates_to_five() {
        match post_query("villa in oran").await {
            QueryResponse::Success { data } => {
                assert_eq!(data.len(), MAX_RESULTS);
                // Order-preserving: the first dataset rows survive.
                assert_eq!(data[0].price_range, "More than 10M");
            }
            other => panic!("expected success, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_query_envelope() {
        match post_query("hello there").await {
            QueryResponse::Error { message } => assert_eq!(message, INVALID_QUERY_MESSAGE),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_results_carries_fallback_suggestion() {
        // Advisor always fails; the envelope still carries a
        // non-empty suggestion.
        match post_query("apartment in blida between 5m and 8m").await {
            QueryResponse::NoResults {
                message,
                suggestion,
            } => {
                assert_eq!(message, NO_RESULTS_MESSAGE);
                assert_eq!(suggestion, FALLBACK_SUGGESTION);
            }
            other => panic!("expected no_results, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_listing_rows_keep_dataset_column_names() {
        match post_query("villa in oran").await {
            QueryResponse::Success { data } => {
                let row = serde_json::to_value(&data[0]).unwrap();
                assert!(row.get("Property").is_some());
                assert!(row.get("City").is_some());
                assert!(row.get("Price Range").is_some());
            }
            other => panic!("expected success, got {other:?}"),
        }
    }
}
