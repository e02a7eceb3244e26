use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

const DEFAULT_WINDOW_DAYS: i64 = 3;
const MAX_WINDOW_DAYS: i64 = 30;

#[derive(Debug, Serialize)]
pub(super) struct ArticleItem {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub source: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArticlesQuery {
    pub days: Option<i64>,
}

pub(super) fn normalize_days(days: Option<i64>) -> i64 {
    days.unwrap_or(DEFAULT_WINDOW_DAYS).clamp(1, MAX_WINDOW_DAYS)
}

pub(super) async fn list_recent_articles(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ArticlesQuery>,
) -> Result<Json<ApiResponse<Vec<ArticleItem>>>, ApiError> {
    let since = Utc::now() - Duration::days(normalize_days(query.days));
    let rows = headline_db::list_articles_since(&state.pool, since)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let data = rows
        .into_iter()
        .map(|row| ArticleItem {
            id: row.id,
            title: row.title,
            description: row.description,
            url: row.url,
            published_at: row.published_at,
            source: row.source,
            content: row.content,
            summary: row.summary,
        })
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
