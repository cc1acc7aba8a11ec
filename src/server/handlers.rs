// Route handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use super::types::{
    BillStanceResponse, BillSummaryResponse, ErrorResponse, FetchBillRequest, PlaceholderStance,
    StanceScores,
};
use super::AppState;
use crate::preprocess::clean_text;
use crate::training::HOUSE_BILL_TYPE;

// Stance keys looked up in the classifier output; absent classes default to 0
const DEMOCRAT_CLASS: &str = "Democrat";
const REPUBLICAN_CLASS: &str = "Republican";
const INDEPENDENT_CLASS: &str = "Independent";

/// Handler-level error: validation failures map to 400, everything else is
/// stringified into a generic 500 payload.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// `GET /api/bill/{number}` — fetch a House bill from the current session
/// and return its title with the placeholder stance payload.
pub async fn get_bill(
    State(state): State<Arc<AppState>>,
    Path(bill_number): Path<u32>,
) -> Result<Json<BillStanceResponse>, ApiError> {
    let bill = state
        .congress
        .fetch_bill(state.congress_session, HOUSE_BILL_TYPE, bill_number)
        .await?;

    Ok(Json(BillStanceResponse {
        title: bill.title,
        stance: PlaceholderStance::default(),
    }))
}

/// `POST /fetch-bill` — fetch, summarize, preprocess, classify and respond.
pub async fn fetch_bill(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FetchBillRequest>,
) -> Result<Json<BillSummaryResponse>, ApiError> {
    let (Some(congress), Some(bill_num)) = (request.congress, request.bill_num) else {
        return Err(ApiError::BadRequest(
            "Congress number and Bill number are required".to_string(),
        ));
    };

    let bill = state
        .congress
        .fetch_bill(congress, HOUSE_BILL_TYPE, bill_num)
        .await?;

    if bill.title.is_empty() {
        return Err(ApiError::BadRequest(
            "The fetched bill has no title. Cannot proceed with summarization.".to_string(),
        ));
    }

    let summary = state.gemini.summarize_bill(&bill.title).await?;

    let cleaned = clean_text(&bill.text);
    let predicted = state.pipeline.predict(&cleaned);
    tracing::info!(congress, bill_num, %predicted, "Classified bill");

    let classification: HashMap<String, f64> =
        state.pipeline.predict_proba(&cleaned).into_iter().collect();

    let stance = StanceScores {
        democrat: probability_for(&classification, DEMOCRAT_CLASS),
        republican: probability_for(&classification, REPUBLICAN_CLASS),
        independent: probability_for(&classification, INDEPENDENT_CLASS),
    };

    Ok(Json(BillSummaryResponse {
        title: bill.title,
        summary,
        classification,
        stance,
    }))
}

/// Probability of a class label, 0 when the model doesn't know the class
fn probability_for(classification: &HashMap<String, f64>, class: &str) -> f64 {
    classification.get(class).copied().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_for_known_and_unknown_classes() {
        let mut classification = HashMap::new();
        classification.insert("Republican".to_string(), 0.7);

        assert_eq!(probability_for(&classification, REPUBLICAN_CLASS), 0.7);
        assert_eq!(probability_for(&classification, DEMOCRAT_CLASS), 0.0);
        assert_eq!(probability_for(&classification, INDEPENDENT_CLASS), 0.0);
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = ApiError::BadRequest("missing field".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = ApiError::Internal(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
