use axum::{extract::State, Extension, Json};
use chrono::Utc;
use headline_core::ConfigError;
use headline_ingest::run_ingestion;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct IngestResponse {
    pub success: bool,
    /// Records that survived normalization, duplicates included.
    pub count: usize,
    /// Rows written after duplicate urls were collapsed.
    pub written: u64,
}

pub(super) async fn run_ingest(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<IngestResponse>, ApiError> {
    let Some(source) = state.source.as_deref() else {
        let err = ConfigError::MissingEnvVar("NEWS_API_KEY".to_string());
        tracing::error!(error = %err, "ingest requested without a NewsAPI key");
        return Err(ApiError::new(req_id.0, "config_error", err.to_string()));
    };

    let today = Utc::now().date_naive();
    match run_ingestion(source, &state.pool, &state.plan, today).await {
        Ok(report) => Ok(Json(IngestResponse {
            success: true,
            count: report.normalized,
            written: report.written,
        })),
        Err(e) => {
            tracing::error!(error = %e, "ingestion failed");
            Err(ApiError::new(req_id.0, "internal_error", e.to_string()))
        }
    }
}
