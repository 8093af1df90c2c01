use reqwest::Method;
use serde::Serialize;

use super::ApiClient;
use crate::{dto::personalization::PersonalizationOptionDto, error::ApiResult};

impl ApiClient {
    pub async fn get_personalization_options(
        &self,
        product_id: i64,
    ) -> ApiResult<Vec<PersonalizationOptionDto>> {
        self.get(&format!("/personalization/products/{product_id}/options"))
            .await
    }

    pub async fn create_personalization_option(
        &self,
        product_id: i64,
        option: &PersonalizationOptionDto,
    ) -> ApiResult<PersonalizationOptionDto> {
        self.send_json(
            Method::POST,
            &format!("/personalization/products/{product_id}/options"),
            option,
        )
        .await
    }

    pub async fn update_personalization_option(
        &self,
        option_id: i64,
        option: &PersonalizationOptionDto,
    ) -> ApiResult<PersonalizationOptionDto> {
        self.send_json(
            Method::PUT,
            &format!("/personalization/options/{option_id}"),
            option,
        )
        .await
    }

    pub async fn delete_personalization_option(&self, option_id: i64) -> ApiResult<()> {
        let request = self.request(Method::DELETE, &format!("/personalization/options/{option_id}"))?;
        self.send_discarding(request).await
    }

    /// The request shape is owned by the backend; whatever it answers is passed through.
    pub async fn add_personalized_to_cart<B>(&self, request: &B) -> ApiResult<serde_json::Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_json(Method::POST, "/personalization/add-to-cart", request)
            .await
    }
}
