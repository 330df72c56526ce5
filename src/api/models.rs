use serde::{Deserialize, Serialize};

/// Body of `POST <summarize_path>`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// Query string of `GET /summary`.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}
