use axum::{Json, Router, extract::State, routing::get};

use crate::{dto::stats::StatsResponse, error::AppResult, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_stats))
}

#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Dashboard statistics", body = StatsResponse)
    ),
    tag = "Stats"
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<StatsResponse>> {
    Ok(Json(state.store.stats()?))
}
