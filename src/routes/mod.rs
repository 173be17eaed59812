use axum::Router;

use crate::state::AppState;

pub mod cart;
pub mod categories;
pub mod doc;
pub mod establishments;
pub mod health;
pub mod offers;
pub mod orders;
pub mod params;
pub mod payment;
pub mod products;
pub mod stats;

// Build the API router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/establishments", establishments::router())
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/offers", offers::router())
        .nest("/cart", cart::router())
        .nest("/orders", orders::router())
        .nest("/payment", payment::router())
        .nest("/stats", stats::router())
}
