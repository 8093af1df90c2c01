use serde::{Deserialize, Serialize};

use crate::personalization::CanonicalPersonalization;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    pub item_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub product_price: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub personalization_details: Option<serde_json::Value>,
    #[serde(default)]
    pub extra_price: Option<f64>,
    #[serde(default)]
    pub item_total: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AddToCartQuery {
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWithPersonalizationRequest<'a> {
    pub product_id: i64,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalization: Option<&'a CanonicalPersonalization>,
}
