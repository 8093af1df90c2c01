use reqwest::Method;

use super::ApiClient;
use crate::{
    dto::cart::{AddToCartQuery, AddWithPersonalizationRequest, CartItemDto},
    error::ApiResult,
    personalization::CanonicalPersonalization,
};

impl ApiClient {
    pub async fn get_cart_items(&self) -> ApiResult<Vec<CartItemDto>> {
        self.get("/cart").await
    }

    pub async fn get_cart_total(&self) -> ApiResult<f64> {
        self.get("/cart/total").await
    }

    /// Plain add; when details are given they travel as the raw request body.
    pub async fn add_to_cart(
        &self,
        product_id: i64,
        quantity: u32,
        personalization: Option<&CanonicalPersonalization>,
    ) -> ApiResult<()> {
        let mut request = self
            .request(Method::POST, "/cart/add")?
            .query(&AddToCartQuery { product_id, quantity });
        if let Some(details) = personalization {
            request = request.json(details);
        }
        self.send_discarding(request).await
    }

    pub async fn add_to_cart_with_personalization(
        &self,
        product_id: i64,
        quantity: u32,
        personalization: Option<&CanonicalPersonalization>,
    ) -> ApiResult<()> {
        let body = AddWithPersonalizationRequest {
            product_id,
            quantity,
            personalization,
        };
        let request = self
            .request(Method::POST, "/cart/add-with-personalization")?
            .json(&body);
        self.send_discarding(request).await
    }

    pub async fn update_cart_item(&self, item_id: i64, quantity: u32) -> ApiResult<()> {
        let request = self
            .request(Method::PUT, &format!("/cart/update/{item_id}"))?
            .query(&[("quantity", quantity)]);
        self.send_discarding(request).await
    }

    pub async fn remove_from_cart(&self, item_id: i64) -> ApiResult<()> {
        let request = self.request(Method::DELETE, &format!("/cart/remove/{item_id}"))?;
        self.send_discarding(request).await
    }

    pub async fn clear_cart(&self) -> ApiResult<()> {
        let request = self.request(Method::DELETE, "/cart/clear")?;
        self.send_discarding(request).await
    }

    pub async fn create_new_cart(&self) -> ApiResult<()> {
        let request = self.request(Method::POST, "/cart/new")?;
        self.send_discarding(request).await
    }
}
