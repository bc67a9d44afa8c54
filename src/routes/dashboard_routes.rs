use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::DashboardSummary;
use crate::state::AppState;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/summary", get(summary))
}

async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(DashboardController::new(state).summary().await)
}
