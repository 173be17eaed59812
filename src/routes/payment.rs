use axum::{Json, Router, extract::State, routing::post};

use crate::{
    dto::payment::{PaymentReceipt, PaymentRequest},
    error::AppResult,
    payment::process_payment,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(pay))
}

#[utoipa::path(
    post,
    path = "/api/payment",
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment settled", body = PaymentReceipt),
        (status = 404, description = "Order not found"),
    ),
    tag = "Payment"
)]
pub async fn pay(
    State(state): State<AppState>,
    Json(payload): Json<PaymentRequest>,
) -> AppResult<Json<PaymentReceipt>> {
    let receipt = process_payment(&state.store, payload).await?;
    Ok(Json(receipt))
}
