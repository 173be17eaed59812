use serde::Deserialize;

/// Query filter shared by the product and offer listings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstablishmentFilter {
    pub establishment_id: Option<i32>,
}
