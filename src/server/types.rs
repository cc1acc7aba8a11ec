// HTTP request/response types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Body of `POST /fetch-bill`. Fields are optional so missing ones can be
/// rejected with a 400 instead of a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct FetchBillRequest {
    pub congress: Option<u32>,
    pub bill_num: Option<u32>,
}

/// Per-party stance weights
#[derive(Debug, Clone, Serialize)]
pub struct StanceScores {
    pub democrat: f64,
    pub republican: f64,
    pub independent: f64,
}

/// Response of `GET /api/bill/{number}`. The stance here is the fixed
/// placeholder payload, not a model output.
#[derive(Debug, Serialize)]
pub struct BillStanceResponse {
    pub title: String,
    pub stance: PlaceholderStance,
}

/// The fixed 40/50/10 placeholder returned by the GET route
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderStance {
    pub democrat: u32,
    pub republican: u32,
    pub independent: u32,
}

impl Default for PlaceholderStance {
    fn default() -> Self {
        Self {
            democrat: 40,
            republican: 50,
            independent: 10,
        }
    }
}

/// Response of `POST /fetch-bill`
#[derive(Debug, Serialize)]
pub struct BillSummaryResponse {
    pub title: String,
    pub summary: String,
    /// Probability per model class label
    pub classification: HashMap<String, f64>,
    pub stance: StanceScores,
}

/// Error payload returned with 400/500 statuses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_stance_constants() {
        let stance = PlaceholderStance::default();
        assert_eq!((stance.democrat, stance.republican, stance.independent), (40, 50, 10));
    }

    #[test]
    fn test_fetch_bill_request_tolerates_missing_fields() {
        let request: FetchBillRequest = serde_json::from_str(r#"{"congress": 117}"#).unwrap();
        assert_eq!(request.congress, Some(117));
        assert_eq!(request.bill_num, None);
    }
}
