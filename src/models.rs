use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{money, personalization::CanonicalPersonalization};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProductSize {
    Small,
    #[default]
    Medium,
    Large,
    #[serde(rename = "Extra Large")]
    ExtraLarge,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiProduct {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    pub image: String,
    pub category: String,
    pub size: ProductSize,
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    pub rating: f64,
    pub reviews: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub image: Option<String>,
    pub category: Option<String>,
    pub size: Option<ProductSize>,
    pub stock: Option<i64>,
    pub featured: Option<bool>,
}

impl UiProduct {
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if patch.original_price.is_some() {
            self.original_price = patch.original_price;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if patch.featured.is_some() {
            self.featured = patch.featured;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub product_count: i64,
}

/// Identifies a cart line: the product plus the selections made for it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartLineKey {
    pub product_id: String,
    pub fingerprint: Option<String>,
}

impl CartLineKey {
    pub fn new(product_id: impl Into<String>, personalization: Option<&CanonicalPersonalization>) -> Self {
        Self {
            product_id: product_id.into(),
            fingerprint: personalization.map(CanonicalPersonalization::fingerprint),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub product: UiProduct,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend_id: Option<i64>,
    #[serde(default, rename = "personalizationDetails", skip_serializing_if = "Option::is_none")]
    pub personalization: Option<CanonicalPersonalization>,
    #[serde(default)]
    pub extra_price: f64,
    #[serde(default)]
    pub total_price: f64,
}

impl CartItem {
    pub fn new(
        product: UiProduct,
        quantity: u32,
        personalization: Option<CanonicalPersonalization>,
        extra_price: f64,
    ) -> Self {
        let mut item = Self {
            product,
            quantity,
            backend_id: None,
            personalization,
            extra_price,
            total_price: 0.0,
        };
        item.recompute_total();
        item
    }

    pub fn key(&self) -> CartLineKey {
        CartLineKey::new(self.product.id.clone(), self.personalization.as_ref())
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.recompute_total();
    }

    pub fn recompute_total(&mut self) {
        self.total_price = money::line_total(self.product.price, self.extra_price, self.quantity);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosCartItem {
    #[serde(flatten)]
    pub product: UiProduct,
    pub quantity: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            // the backend confirms before it ships
            "processing" | "confirmed" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<serde_json::Value>,
    pub total: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Admin,
    Cashier,
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "customer" | "user" => Ok(UserRole::Customer),
            "admin" => Ok(UserRole::Admin),
            "cashier" => Ok(UserRole::Cashier),
            other => Err(format!("unknown role: {other}")),
        }
    }
}
