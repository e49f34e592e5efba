use serde::{Deserialize, Serialize};

use crate::sizing::SummaryTargetSpec;

pub const STATUS_SUCCESS: &str = "success";

/// Body returned by `POST /api/summarize` on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub content: String,
    pub status: String,
    pub summary_totals: Option<SummaryTargetSpec>,
}

impl SummarizeResponse {
    #[must_use]
    pub fn success(content: String, summary_totals: Option<SummaryTargetSpec>) -> Self {
        Self {
            content,
            status: STATUS_SUCCESS.to_string(),
            summary_totals,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
