use reqwest::Method;

use super::ApiClient;
use crate::{
    dto::auth::{AuthResponse, LoginRequest, RegisterRequest},
    error::ApiResult,
    storage::TOKEN_KEY,
};

impl ApiClient {
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthResponse> {
        let response: AuthResponse = self
            .send_json(Method::POST, "/auth/login", credentials)
            .await?;
        self.storage.set(TOKEN_KEY, &response.token)?;
        Ok(response)
    }

    pub async fn register(&self, user: &RegisterRequest) -> ApiResult<AuthResponse> {
        let response: AuthResponse = self
            .send_json(Method::POST, "/auth/register", user)
            .await?;
        self.storage.set(TOKEN_KEY, &response.token)?;
        Ok(response)
    }

    pub fn logout(&self) -> ApiResult<()> {
        self.storage.remove(TOKEN_KEY)?;
        Ok(())
    }
}
