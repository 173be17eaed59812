use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_establishments: i64,
    pub total_products: i64,
    /// Offers with the active flag set; end dates are not consulted here.
    pub active_offers: i64,
    /// Dashboard placeholder, not derived from stored orders.
    pub monthly_revenue: i64,
}
