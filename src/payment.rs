//! Mocked payment step: no provider is contacted. Every request settles
//! after a fixed simulated delay and flips the order to paid.

use std::time::Duration;

use uuid::Uuid;

use crate::{
    dto::{
        orders::UpdateOrderRequest,
        payment::{PaymentReceipt, PaymentRequest},
    },
    error::AppResult,
    models::OrderStatus,
    store::Store,
};

/// Simulated settlement latency. Fixed; callers cannot tune it.
pub const SETTLEMENT_DELAY: Duration = Duration::from_millis(1000);

/// Waits out the settlement delay, marks the order paid, and returns a
/// receipt echoing the caller's method and amount. The delay suspends only
/// the calling task; the store stays available to everyone else. A missing
/// order id surfaces as `NotFound`; there is no other failure path.
pub async fn process_payment(store: &Store, request: PaymentRequest) -> AppResult<PaymentReceipt> {
    tokio::time::sleep(SETTLEMENT_DELAY).await;

    store.update_order(
        request.order_id,
        UpdateOrderRequest {
            status: Some(OrderStatus::Paid),
            ..UpdateOrderRequest::default()
        },
    )?;

    let transaction_id = format!("txn_{}", Uuid::new_v4().simple());
    tracing::info!(
        order_id = request.order_id,
        transaction_id = %transaction_id,
        "payment settled"
    );

    Ok(PaymentReceipt {
        success: true,
        transaction_id,
        method: request.method,
        amount: request.amount,
    })
}
