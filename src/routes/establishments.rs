use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::establishments::{CreateEstablishmentRequest, UpdateEstablishmentRequest},
    error::{AppError, AppResult},
    models::Establishment,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_establishments).post(create_establishment))
        .route(
            "/{id}",
            get(get_establishment)
                .put(update_establishment)
                .delete(delete_establishment),
        )
}

#[utoipa::path(
    get,
    path = "/api/establishments",
    responses(
        (status = 200, description = "List establishments", body = Vec<Establishment>)
    ),
    tag = "Establishments"
)]
pub async fn list_establishments(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Establishment>>> {
    Ok(Json(state.store.list_establishments()?))
}

#[utoipa::path(
    get,
    path = "/api/establishments/{id}",
    params(
        ("id" = i32, Path, description = "Establishment ID")
    ),
    responses(
        (status = 200, description = "Get establishment", body = Establishment),
        (status = 404, description = "Establishment not found"),
    ),
    tag = "Establishments"
)]
pub async fn get_establishment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Establishment>> {
    let establishment = state
        .store
        .get_establishment(id)?
        .ok_or(AppError::NotFound)?;
    Ok(Json(establishment))
}

#[utoipa::path(
    post,
    path = "/api/establishments",
    request_body = CreateEstablishmentRequest,
    responses(
        (status = 201, description = "Create establishment", body = Establishment)
    ),
    tag = "Establishments"
)]
pub async fn create_establishment(
    State(state): State<AppState>,
    Json(payload): Json<CreateEstablishmentRequest>,
) -> AppResult<(StatusCode, Json<Establishment>)> {
    let establishment = state.store.create_establishment(payload)?;
    Ok((StatusCode::CREATED, Json(establishment)))
}

#[utoipa::path(
    put,
    path = "/api/establishments/{id}",
    params(
        ("id" = i32, Path, description = "Establishment ID")
    ),
    request_body = UpdateEstablishmentRequest,
    responses(
        (status = 200, description = "Updated establishment", body = Establishment),
        (status = 404, description = "Establishment not found"),
    ),
    tag = "Establishments"
)]
pub async fn update_establishment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEstablishmentRequest>,
) -> AppResult<Json<Establishment>> {
    Ok(Json(state.store.update_establishment(id, payload)?))
}

#[utoipa::path(
    delete,
    path = "/api/establishments/{id}",
    params(
        ("id" = i32, Path, description = "Establishment ID")
    ),
    responses(
        (status = 204, description = "Deleted establishment")
    ),
    tag = "Establishments"
)]
pub async fn delete_establishment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.store.delete_establishment(id)?;
    Ok(StatusCode::NO_CONTENT)
}
