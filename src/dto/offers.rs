use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferRequest {
    pub title: String,
    pub description: Option<String>,
    /// Decimal string in 0-100, e.g. "15.00".
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub discount_percentage: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub discount_amount: Option<Decimal>,
    pub establishment_id: i32,
    pub product_id: Option<i32>,
    pub category_id: Option<i32>,
    pub start_date: DateTime<Utc>,
    // Not checked against start_date; inverted ranges are stored as given.
    pub end_date: DateTime<Utc>,
    /// Defaults to `true` when omitted.
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfferRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option_decimal")]
    #[schema(value_type = Option<String>)]
    pub discount_percentage: Option<Option<Decimal>>,
    #[serde(default, deserialize_with = "super::double_option_decimal")]
    #[schema(value_type = Option<String>)]
    pub discount_amount: Option<Option<Decimal>>,
    pub establishment_id: Option<i32>,
    #[serde(default, deserialize_with = "super::double_option")]
    #[schema(value_type = Option<i32>)]
    pub product_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "super::double_option")]
    #[schema(value_type = Option<i32>)]
    pub category_id: Option<Option<i32>>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
}
