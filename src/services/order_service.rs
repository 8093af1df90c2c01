use validator::Validate;

use crate::{
    auth::ensure_signed_in,
    catalog::convert_order_to_ui,
    dto::orders::CheckoutRequest,
    error::AppResult,
    models::OrderStatus,
    store::{FetchOutcome, Storefront},
};

impl Storefront {
    /// Places an order for the backend cart and returns the confirmation text.
    /// The local cart is left as is; callers decide when to reset it.
    pub async fn checkout(&mut self, checkout: CheckoutRequest) -> AppResult<String> {
        ensure_signed_in(
            self.state.current_user,
            "You must be logged in to place an order",
        )?;
        checkout.validate()?;

        let message = self.api.checkout(&checkout).await.inspect_err(|err| {
            tracing::warn!(error = %err, "checkout failed");
        })?;
        tracing::info!(
            payment_method = ?checkout.payment_method,
            lines = self.state.cart.len(),
            "order placed"
        );
        Ok(message)
    }

    pub async fn fetch_my_orders(&mut self) -> FetchOutcome {
        if !self.is_authenticated() {
            return FetchOutcome::Skipped;
        }
        match self.api.get_my_orders().await {
            Ok(orders) => {
                self.state.orders = orders.iter().map(convert_order_to_ui).collect();
                self.persist();
                FetchOutcome::Live
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch orders");
                FetchOutcome::Stale {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Changes the status of a loaded order without telling the backend.
    pub fn update_order_status(&mut self, order_id: &str, status: OrderStatus) -> bool {
        let Some(order) = self.state.orders.iter_mut().find(|o| o.id == order_id) else {
            return false;
        };
        order.status = status;
        self.persist();
        true
    }
}
