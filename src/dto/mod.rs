use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

pub mod cart;
pub mod categories;
pub mod establishments;
pub mod offers;
pub mod orders;
pub mod payment;
pub mod products;
pub mod stats;

/// Deserializer for patch fields backed by nullable columns: an absent field
/// deserializes to `None` (leave the stored value alone), an explicit `null`
/// to `Some(None)` (clear it). Requires `#[serde(default)]` on the field.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Same presence handling for nullable decimal-string fields.
pub(crate) fn double_option_decimal<'de, D>(
    deserializer: D,
) -> Result<Option<Option<Decimal>>, D::Error>
where
    D: Deserializer<'de>,
{
    rust_decimal::serde::str_option::deserialize(deserializer).map(Some)
}
