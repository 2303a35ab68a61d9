use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};

use super::analysis::{AnalysisError, AnalysisGenerator};
use super::service::{DashboardService, DashboardServiceError};
use super::snapshot::SnapshotSource;

const PROPERTY_ID_FIELD: &str = "propertyId";

/// Router builder exposing the dashboard, detail, and analysis endpoints.
pub fn dashboard_router<S, G>(service: Arc<DashboardService<S, G>>) -> Router
where
    S: SnapshotSource + 'static,
    G: AnalysisGenerator + 'static,
{
    Router::new()
        .route("/api/v1/dashboard", get(dashboard_handler::<S, G>))
        .route("/api/v1/properties/:slug", get(property_handler::<S, G>))
        .route("/api/v1/analyze", post(analyze_handler::<S, G>))
        .with_state(service)
}

pub(crate) async fn dashboard_handler<S, G>(
    State(service): State<Arc<DashboardService<S, G>>>,
    RawQuery(query): RawQuery,
) -> Response
where
    S: SnapshotSource + 'static,
    G: AnalysisGenerator + 'static,
{
    match service.dashboard_for_query(query.as_deref().unwrap_or_default()) {
        Ok(page) => (StatusCode::OK, axum::Json(page)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn property_handler<S, G>(
    State(service): State<Arc<DashboardService<S, G>>>,
    Path(slug): Path<String>,
) -> Response
where
    S: SnapshotSource + 'static,
    G: AnalysisGenerator + 'static,
{
    match service.property(&slug) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn analyze_handler<S, G>(
    State(service): State<Arc<DashboardService<S, G>>>,
    axum::Json(body): axum::Json<Value>,
) -> Response
where
    S: SnapshotSource + 'static,
    G: AnalysisGenerator + 'static,
{
    let property_id = body
        .get(PROPERTY_ID_FIELD)
        .and_then(Value::as_str)
        .unwrap_or_default();

    match service.request_analysis(property_id) {
        Ok(ack) => (StatusCode::OK, axum::Json(ack)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: DashboardServiceError) -> Response {
    let status = match &error {
        DashboardServiceError::PropertyNotFound(_) => StatusCode::NOT_FOUND,
        DashboardServiceError::Analysis(AnalysisError::InvalidPropertyId) => StatusCode::BAD_REQUEST,
        DashboardServiceError::Analysis(AnalysisError::Unavailable(_)) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        DashboardServiceError::Snapshot(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = %error, "dashboard request failed");
    }

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
