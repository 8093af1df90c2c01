use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    Payhear,
    Cod,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvv: Option<String>,
}

impl CardDetails {
    fn is_complete(&self) -> bool {
        [
            &self.card_number,
            &self.card_holder_name,
            &self.expiry_month,
            &self.expiry_year,
            &self.cvv,
        ]
        .iter()
        .all(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_card_details"))]
pub struct CheckoutRequest {
    #[validate(length(min = 1, message = "Delivery address is required"))]
    pub delivery_address: String,
    #[validate(length(min = 1, message = "Contact number is required"))]
    pub contact_number: String,
    pub payment_method: PaymentMethod,
    #[serde(flatten)]
    pub card: CardDetails,
}

fn validate_card_details(request: &CheckoutRequest) -> Result<(), ValidationError> {
    if request.payment_method == PaymentMethod::CreditCard && !request.card.is_complete() {
        let mut err = ValidationError::new("card_details");
        err.message = Some("Card details are required for credit card payments".into());
        return Err(err);
    }
    Ok(())
}

/// Checkout answers with plain text, a JSON string or a `{message}` object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CheckoutReply {
    Text(String),
    Message { message: String },
    Other(serde_json::Value),
}

impl CheckoutReply {
    pub fn into_message(self) -> String {
        match self {
            CheckoutReply::Text(text) => text,
            CheckoutReply::Message { message } => message,
            CheckoutReply::Other(_) => "Order placed successfully".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i64,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_email: Option<String>,
    pub total_price: f64,
    pub status: String,
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub order_items: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedOrders {
    #[serde(default)]
    pub content: Vec<OrderResponse>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub empty: bool,
}

#[derive(Debug, Serialize)]
pub struct UpdateOrderStatusRequest<'a> {
    pub status: &'a str,
}
