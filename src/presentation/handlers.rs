// HTTP request handlers
use crate::application::dashboard_service::DashboardService;
use crate::domain::group::ThematicGroup;
use crate::domain::state::{Action, DashboardState};
use crate::error::DashboardError;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unavailable(String),
    #[error(transparent)]
    Dashboard(#[from] DashboardError),
    #[error("failed to encode response")]
    Encoding(StatusCode),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unavailable(status) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "status": status })),
            )
                .into_response(),
            ApiError::Dashboard(DashboardError::SourceUnavailable { .. }) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({ "error": self.to_string() })),
            )
                .into_response(),
            ApiError::Dashboard(e) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response(),
            ApiError::Encoding(status) => status.into_response(),
        }
    }
}

impl AppState {
    fn dashboard(&self) -> Result<&DashboardService, ApiError> {
        match self {
            AppState::Ready { dashboard_service } => Ok(dashboard_service),
            AppState::LoadFailed { status } => Err(ApiError::Unavailable(status.clone())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    pub group: Option<String>,
    pub from: Option<i32>,
    pub to: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ActionRequest {
    pub state: DashboardState,
    pub action: Action,
}

#[derive(Debug, Serialize)]
struct GroupEntry {
    key: ThematicGroup,
    label: &'static str,
}

async fn respond<T: Serialize>(data: &T, headers: &HeaderMap) -> Result<Response, ApiError> {
    json_response(data, accepts_brotli(headers))
        .await
        .map_err(ApiError::Encoding)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the thematic groups with their display labels
pub async fn list_groups(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    state.dashboard()?;
    let groups: Vec<GroupEntry> = ThematicGroup::ALL
        .into_iter()
        .map(|g| GroupEntry {
            key: g,
            label: g.label(),
        })
        .collect();
    respond(&groups, &headers).await
}

/// List the configured cycle presets
pub async fn list_presets(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let service = state.dashboard()?;
    respond(&service.presets(), &headers).await
}

/// Render the dashboard for a group and range given as query parameters
pub async fn get_dashboard(
    Query(query): Query<DashboardQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let service = state.dashboard()?;
    let group = query
        .group
        .as_deref()
        .map(str::parse::<ThematicGroup>)
        .transpose()?;
    let dashboard_state = service.state_from(group, query.from, query.to)?;
    let response = service.render(dashboard_state)?;
    respond(&response, &headers).await
}

/// Apply one control-surface action to the client's current state and
/// render the resulting state
pub async fn apply_action(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<ActionRequest>,
) -> Result<Response, ApiError> {
    let service = state.dashboard()?;
    let response = service.apply(request.state, request.action)?;
    respond(&response, &headers).await
}
