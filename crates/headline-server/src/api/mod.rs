mod articles;
mod digest;
mod ingest;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use headline_core::AppConfig;
use headline_digest::{GeminiClient, TextGenerator};
use headline_ingest::{news_client_from_config, HeadlineSource, SourcePlan};
use serde::Serialize;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

/// Shared handler state.
///
/// `source` and `generator` are `None` when their API key is not configured;
/// the routes that need them answer with a configuration error.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub source: Option<Arc<dyn HeadlineSource>>,
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub plan: Arc<SourcePlan>,
}

impl AppState {
    /// Builds clients for whichever upstream keys are present.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn from_config(pool: PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let source: Option<Arc<dyn HeadlineSource>> = if config.news_api_key.is_some() {
            Some(Arc::new(news_client_from_config(config)?))
        } else {
            tracing::warn!("NEWS_API_KEY not set; ingestion disabled");
            None
        };

        let generator: Option<Arc<dyn TextGenerator>> = match config.gemini_api_key.as_deref() {
            Some(key) => Some(Arc::new(GeminiClient::new(
                key,
                &config.gemini_model,
                config.request_timeout_secs,
            )?)),
            None => {
                tracing::warn!("GEMINI_API_KEY not set; digest endpoint disabled");
                None
            }
        };

        Ok(Self {
            pool,
            source,
            generator,
            plan: Arc::new(SourcePlan::from_app_config(config)),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

/// Error body: `{"error": "...", "request_id": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    code: &'static str,
    pub error: String,
    pub request_id: String,
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code,
            error: message.into(),
            request_id: request_id.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code {
            "bad_request" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            "config_error" | "internal_error" => StatusCode::INTERNAL_SERVER_ERROR,
            other => {
                tracing::warn!(code = other, "unmapped API error code");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_db_error(request_id: String, error: &headline_db::DbError) -> ApiError {
    tracing::error!(error = %error, "database query failed");
    ApiError::new(request_id, "internal_error", "database query failed")
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    database: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

/// Routes that call paid upstream APIs sit behind the rate limiter.
fn limited_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route(
            "/api/ingest",
            get(ingest::run_ingest).post(ingest::run_ingest),
        )
        .route("/api/summarize", post(digest::summarize))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new()
        .route("/api/health", get(health))
        .route("/api/articles", get(articles::list_recent_articles));

    Router::new()
        .merge(public_routes)
        .merge(limited_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);

    match headline_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: HealthData {
                    status: "ok",
                    database: "ok",
                },
                meta,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check: database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    data: HealthData {
                        status: "degraded",
                        database: "unavailable",
                    },
                    meta,
                }),
            )
        }
    }
}

pub fn default_rate_limit_state() -> RateLimitState {
    RateLimitState::new(30, Duration::from_secs(60))
}
