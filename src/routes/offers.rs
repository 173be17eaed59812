use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::offers::{CreateOfferRequest, UpdateOfferRequest},
    error::{AppError, AppResult},
    models::Offer,
    routes::params::EstablishmentFilter,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_offers).post(create_offer))
        .route(
            "/{id}",
            get(get_offer).put(update_offer).delete(delete_offer),
        )
}

#[utoipa::path(
    get,
    path = "/api/offers",
    params(
        ("establishmentId" = Option<i32>, Query, description = "Only offers of this establishment")
    ),
    responses(
        (status = 200, description = "List offers", body = Vec<Offer>)
    ),
    tag = "Offers"
)]
pub async fn list_offers(
    State(state): State<AppState>,
    Query(filter): Query<EstablishmentFilter>,
) -> AppResult<Json<Vec<Offer>>> {
    Ok(Json(state.store.list_offers(filter.establishment_id)?))
}

#[utoipa::path(
    get,
    path = "/api/offers/{id}",
    params(
        ("id" = i32, Path, description = "Offer ID")
    ),
    responses(
        (status = 200, description = "Get offer", body = Offer),
        (status = 404, description = "Offer not found"),
    ),
    tag = "Offers"
)]
pub async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Offer>> {
    let offer = state.store.get_offer(id)?.ok_or(AppError::NotFound)?;
    Ok(Json(offer))
}

#[utoipa::path(
    post,
    path = "/api/offers",
    request_body = CreateOfferRequest,
    responses(
        (status = 201, description = "Create offer", body = Offer)
    ),
    tag = "Offers"
)]
pub async fn create_offer(
    State(state): State<AppState>,
    Json(payload): Json<CreateOfferRequest>,
) -> AppResult<(StatusCode, Json<Offer>)> {
    let offer = state.store.create_offer(payload)?;
    Ok((StatusCode::CREATED, Json(offer)))
}

#[utoipa::path(
    put,
    path = "/api/offers/{id}",
    params(
        ("id" = i32, Path, description = "Offer ID")
    ),
    request_body = UpdateOfferRequest,
    responses(
        (status = 200, description = "Updated offer", body = Offer),
        (status = 404, description = "Offer not found"),
    ),
    tag = "Offers"
)]
pub async fn update_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOfferRequest>,
) -> AppResult<Json<Offer>> {
    Ok(Json(state.store.update_offer(id, payload)?))
}

#[utoipa::path(
    delete,
    path = "/api/offers/{id}",
    params(
        ("id" = i32, Path, description = "Offer ID")
    ),
    responses(
        (status = 204, description = "Deleted offer")
    ),
    tag = "Offers"
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.store.delete_offer(id)?;
    Ok(StatusCode::NO_CONTENT)
}
