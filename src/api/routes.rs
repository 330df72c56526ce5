use axum::{
    routing::{get, post},
    Router,
    extract::{rejection::JsonRejection, Json, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::{Result, AppError, FALLBACK_MESSAGE};
use crate::api::models::{HelloResponse, SummarizeRequest, SummaryQuery};
use crate::AppState;

pub const HELLO_MESSAGE: &str = "Hello from the summarizer proxy!";

pub fn create_router(app_state: AppState) -> Router {
    let summarize_path = app_state.config.summarize_path.clone();
    let static_dir = app_state.config.static_dir.clone();

    // Unknown paths get the SPA entry document so client-side routing works
    let frontend = ServeDir::new(&static_dir)
        .fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/summary", get(summary_handler))
        .route("/api/hello", get(hello_handler))
        .route(&summarize_path, post(summarize_handler))
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn hello_handler() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: HELLO_MESSAGE.to_string(),
    })
}

async fn summary_handler(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<Value>> {
    info!(url = ?query.url, "Proxying summary lookup");
    let start_time = std::time::Instant::now();

    let result = fetch_summary(&state, query.url.as_deref()).await;
    info!(elapsed = ?start_time.elapsed(), "Upstream summary lookup finished");

    result.map(Json).inspect_err(|err| warn!(error = %err, "Summary lookup failed"))
}

async fn fetch_summary(state: &AppState, url: Option<&str>) -> Result<Value> {
    let mut request = state.http.get(state.config.upstream_endpoint("/summary"));
    if let Some(url) = url {
        request = request.query(&[("url", url)]);
    }

    let res = request.send().await?.error_for_status()?;
    let body = res.json::<Value>().await?;
    Ok(body)
}

/// Relays a summarize call upstream. The upstream status and JSON body are
/// passed through untouched, so its `{ error }` reaches the form as-is.
/// A non-JSON error page keeps its status but carries the generic message.
async fn summarize_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(req) = payload.inspect_err(|e| warn!(error = %e, "Malformed summarize request"))?;
    if req.url.trim().is_empty() {
        return Err(AppError::InvalidVideoUrl);
    }

    info!(url = %req.url, "Relaying summarize request");
    let start_time = std::time::Instant::now();

    let endpoint = state.config.upstream_endpoint(&state.config.summarize_path);
    let relayed = relay_summarize(&state, &endpoint, &req).await;
    info!(elapsed = ?start_time.elapsed(), "Summarize relay finished");

    match relayed {
        Ok((status, body)) => {
            if !status.is_success() {
                warn!(%status, "Upstream rejected summarize request");
            }
            Ok((status, Json(body)).into_response())
        }
        Err(err) => {
            warn!(error = %err, %endpoint, "Summarize relay failed");
            Err(err)
        }
    }
}

async fn relay_summarize(
    state: &AppState,
    endpoint: &str,
    req: &SummarizeRequest,
) -> Result<(StatusCode, Value)> {
    let res = state.http.post(endpoint).json(req).send().await?;

    // reqwest and axum sit on different `http` versions
    let status = StatusCode::from_u16(res.status().as_u16())
        .map_err(|e| AppError::Upstream(format!("Invalid upstream status: {}", e)))?;
    let bytes = res.bytes().await?;

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(body) => Ok((status, body)),
        // Error pages from gateways in front of the summarizer are not JSON
        Err(e) if !status.is_success() => {
            warn!(%status, error = %e, "Upstream error response is not JSON");
            Ok((status, serde_json::json!({ "error": FALLBACK_MESSAGE })))
        }
        Err(e) => Err(AppError::Upstream(format!("Invalid response format from summarizer: {}", e))),
    }
}
