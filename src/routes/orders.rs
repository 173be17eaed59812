use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::orders::CreateOrderRequest,
    error::{AppError, AppResult},
    middleware::session::SessionId,
    models::Order,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/{id}", get(get_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "List orders", body = Vec<Order>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(state.store.list_orders()?))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Get order", body = Order),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Order>> {
    let order = state.store.get_order(id)?.ok_or(AppError::NotFound)?;
    Ok(Json(order))
}

/// Checkout. The order insert and the clearing of the session's cart happen
/// as a single store operation.
#[utoipa::path(
    post,
    path = "/api/orders",
    params(
        ("x-session-id" = Option<String>, Header, description = "Cart session, defaults to `anonymous`")
    ),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Create order and clear the session's cart", body = Order)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = state.store.checkout(&session_id, payload)?;
    Ok((StatusCode::CREATED, Json(order)))
}
