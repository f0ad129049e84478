// Presentation layer - HTTP routes and handlers
pub mod app_state;
pub mod handlers;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    apply_action, get_dashboard, health_check, list_groups, list_presets,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/groups", get(list_groups))
        .route("/presets", get(list_presets))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/actions", post(apply_action))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
