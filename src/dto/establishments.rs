use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::{EstablishmentStatus, EstablishmentType};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEstablishmentRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EstablishmentType,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
    /// Defaults to `active` when omitted.
    pub status: Option<EstablishmentStatus>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEstablishmentRequest {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<EstablishmentType>,
    pub address: Option<String>,
    #[serde(default, deserialize_with = "super::double_option")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::double_option")]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Option<String>>,
    pub status: Option<EstablishmentStatus>,
}
