use serde::{Deserialize, Serialize};

/// An option sheet entry the backend attaches to a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationOptionDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_id: Option<i64>,
    #[serde(default)]
    pub product_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usi_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub massage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}
