use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};

use crate::{
    dto::cart::{AddToCartRequest, UpdateCartItemRequest},
    error::AppResult,
    middleware::session::SessionId,
    models::CartItem,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_list).post(add_to_cart))
        .route("/{id}", put(update_cart_item).delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    params(
        ("x-session-id" = Option<String>, Header, description = "Cart session, defaults to `anonymous`")
    ),
    responses(
        (status = 200, description = "List cart items for the session", body = Vec<CartItem>)
    ),
    tag = "Cart"
)]
pub async fn cart_list(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
) -> AppResult<Json<Vec<CartItem>>> {
    Ok(Json(state.store.list_cart(&session_id)?))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    params(
        ("x-session-id" = Option<String>, Header, description = "Cart session, defaults to `anonymous`")
    ),
    request_body = AddToCartRequest,
    responses(
        (status = 201, description = "Item added to the cart", body = CartItem)
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    SessionId(session_id): SessionId,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<(StatusCode, Json<CartItem>)> {
    let item = state.store.add_to_cart(&session_id, payload)?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/cart/{id}",
    params(
        ("id" = i32, Path, description = "Cart item ID")
    ),
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Updated cart item", body = CartItem),
        (status = 404, description = "Cart item not found"),
    ),
    tag = "Cart"
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCartItemRequest>,
) -> AppResult<Json<CartItem>> {
    Ok(Json(state.store.update_cart_item(id, payload.quantity)?))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{id}",
    params(
        ("id" = i32, Path, description = "Cart item ID")
    ),
    responses(
        (status = 204, description = "Removed cart item")
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.store.remove_from_cart(id)?;
    Ok(StatusCode::NO_CONTENT)
}
