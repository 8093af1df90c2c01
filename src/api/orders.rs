use reqwest::Method;

use super::ApiClient;
use crate::{
    dto::orders::{
        CheckoutReply, CheckoutRequest, OrderResponse, PaginatedOrders, UpdateOrderStatusRequest,
    },
    error::ApiResult,
};

impl ApiClient {
    /// Places the order and returns the backend's confirmation text.
    pub async fn checkout(&self, checkout: &CheckoutRequest) -> ApiResult<String> {
        let reply: CheckoutReply = self
            .send_json(Method::POST, "/orders/checkout", checkout)
            .await?;
        Ok(reply.into_message())
    }

    pub async fn get_my_orders(&self) -> ApiResult<Vec<OrderResponse>> {
        self.get("/orders/my-orders").await
    }

    pub async fn get_order(&self, order_id: i64) -> ApiResult<OrderResponse> {
        self.get(&format!("/orders/{order_id}")).await
    }

    pub async fn get_all_orders(&self, page: u32, size: u32) -> ApiResult<PaginatedOrders> {
        self.get_with_query("/orders/admin/all", &[("page", page), ("size", size)])
            .await
    }

    pub async fn update_order_status(&self, order_id: i64, status: &str) -> ApiResult<()> {
        let request = self
            .request(Method::PUT, &format!("/orders/admin/{order_id}/status"))?
            .json(&UpdateOrderStatusRequest { status });
        self.send_discarding(request).await
    }
}
