// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;

/// Shown in place of the dashboard when any dataset failed to load.
pub const LOAD_FAILED_STATUS: &str = "Hiba: nem sikerült betölteni valamelyik CSV fájlt.";

#[derive(Clone)]
pub enum AppState {
    Ready { dashboard_service: DashboardService },
    LoadFailed { status: String },
}

impl AppState {
    pub fn load_failed() -> Self {
        AppState::LoadFailed {
            status: LOAD_FAILED_STATUS.to_string(),
        }
    }
}
