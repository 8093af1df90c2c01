use validator::Validate;

use crate::{
    dto::auth::{AuthResponse, LoginRequest, RegisterRequest},
    error::AppResult,
    models::UserRole,
    state::UserInfo,
    store::Storefront,
};

impl Storefront {
    pub async fn login(&mut self, username: &str, password: &str) -> AppResult<UserInfo> {
        let credentials = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        credentials.validate()?;

        let response = self.api.login(&credentials).await.inspect_err(|err| {
            tracing::warn!(username, error = %err, "login failed");
        })?;
        Ok(self.sign_in(response))
    }

    pub async fn register(&mut self, username: &str, email: &str, password: &str) -> AppResult<UserInfo> {
        let user = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        user.validate()?;

        let response = self.api.register(&user).await.inspect_err(|err| {
            tracing::warn!(username, error = %err, "registration failed");
        })?;
        Ok(self.sign_in(response))
    }

    /// Drops the token and the signed-in user. The cart does not survive a logout.
    pub fn logout(&mut self) {
        if let Err(err) = self.api.logout() {
            tracing::warn!(error = %err, "failed to remove stored token");
        }
        self.state.current_user = None;
        self.state.user_info = None;
        self.state.cart.clear();
        self.persist();
    }

    fn sign_in(&mut self, response: AuthResponse) -> UserInfo {
        let role = response.role.parse::<UserRole>().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "unrecognized role, signing in as customer");
            UserRole::Customer
        });
        let info = UserInfo {
            username: response.username,
            email: response.email,
            role: response.role.to_lowercase(),
        };
        tracing::info!(username = %info.username, ?role, "signed in");

        self.state.current_user = Some(role);
        self.state.user_info = Some(info.clone());
        self.persist();
        info
    }
}
