use axum::{extract::State, Extension, Json};
use headline_core::Article;
use headline_digest::{compose_digest, DigestError};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SummarizeRequest {
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Serialize)]
pub(super) struct SummarizeResponse {
    pub summary: String,
    /// `true` when the model was unavailable and `summary` is the plain
    /// title briefing.
    pub fallback: bool,
}

pub(super) async fn summarize(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Some(generator) = state.generator.as_deref() else {
        tracing::error!("summarize requested without a Gemini key");
        return Err(ApiError::new(
            req_id.0,
            "config_error",
            "Gemini API Key not configured",
        ));
    };

    match compose_digest(generator, &request.articles).await {
        Ok(digest) => Ok(Json(SummarizeResponse {
            summary: digest.text().to_string(),
            fallback: digest.is_fallback(),
        })),
        Err(DigestError::NoArticles) => Err(ApiError::new(
            req_id.0,
            "bad_request",
            "No articles provided",
        )),
        Err(e) => {
            tracing::error!(error = %e, "digest composition failed");
            Err(ApiError::new(
                req_id.0,
                "internal_error",
                "Failed to generate summary",
            ))
        }
    }
}
