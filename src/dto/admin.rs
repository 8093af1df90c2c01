use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminDashboardStats {
    pub total_orders: u64,
    pub pending_orders: u64,
    pub confirmed_orders: u64,
    pub shipped_orders: u64,
    pub delivered_orders: u64,
    pub cancelled_orders: u64,
    pub total_revenue: f64,
    pub today_revenue: f64,
    pub weekly_revenue: f64,
    pub monthly_revenue: f64,
    pub total_customers: u64,
    pub total_products: u64,
    pub low_stock_products: u64,
    pub out_of_stock_products: u64,
    pub active_products: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: i64,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub order_date: String,
    pub status: String,
    pub total_price: f64,
    #[serde(default)]
    pub item_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_id: i64,
    pub product_name: String,
    #[serde(default)]
    pub category_name: String,
    pub quantity_sold: u64,
    pub total_revenue: f64,
    #[serde(default)]
    pub average_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReportEntry {
    pub date: String,
    pub order_count: u64,
    pub total_sales: f64,
    #[serde(default)]
    pub average_order_value: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SalesReportQuery<'a> {
    pub start_date: &'a str,
    pub end_date: &'a str,
}
