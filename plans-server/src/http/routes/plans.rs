//! Plan listing endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::db::PlanRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Plan;

/// GET|POST /plans - every stored plan as a JSON array
async fn list_plans(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Plan>>, ApiError> {
    let plans = PlanRepo::new(&state.pool).list().await?;
    tracing::debug!(count = plans.len(), "Listed plans");
    Ok(Json(plans))
}

/// Plan routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/plans", get(list_plans).post(list_plans))
}
