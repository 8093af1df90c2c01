use serde::{Deserialize, Serialize};

use crate::{
    catalog::{placeholder_categories, placeholder_products},
    dto::{
        admin::{AdminDashboardStats, OrderSummary, ProductSales},
        orders::OrderResponse,
    },
    models::{CartItem, Order, PosCartItem, UiCategory, UiProduct, UserRole},
};

/// Version stamped on persisted snapshots.
pub const STATE_VERSION: u32 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardState {
    pub stats: Option<AdminDashboardStats>,
    pub recent_orders: Vec<OrderSummary>,
    pub top_products: Vec<ProductSales>,
    pub all_orders: Vec<OrderResponse>,
    pub orders_total_pages: u32,
    pub orders_current_page: u32,
    pub orders_page_size: u32,
}

/// Everything the storefront keeps between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    pub current_user: Option<UserRole>,
    pub user_info: Option<UserInfo>,
    pub products: Vec<UiProduct>,
    pub categories: Vec<UiCategory>,
    pub cart: Vec<CartItem>,
    pub orders: Vec<Order>,
    pub pos_cart: Vec<PosCartItem>,
    pub dashboard: DashboardState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_user: None,
            user_info: None,
            products: placeholder_products(),
            categories: placeholder_categories(),
            cart: Vec::new(),
            orders: Vec::new(),
            pos_cart: Vec::new(),
            dashboard: DashboardState::default(),
        }
    }
}

#[derive(Serialize)]
pub(crate) struct PersistedStateRef<'a> {
    pub state: &'a AppState,
    pub version: u32,
}

#[derive(Deserialize)]
pub(crate) struct PersistedState {
    pub state: AppState,
    #[serde(default)]
    pub version: u32,
}
