use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::{OrderStatus, PaymentMethod};

// The session id never rides in the body; the route layer takes it from the
// x-session-id header.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub establishment_id: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_amount: Decimal,
    /// Defaults to `pending` when omitted.
    pub status: Option<OrderStatus>,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub session_id: Option<String>,
    pub establishment_id: Option<i32>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub total_amount: Option<Decimal>,
    pub status: Option<OrderStatus>,
    pub payment_method: Option<PaymentMethod>,
}
