use crate::{
    catalog::convert_cart_line_to_ui,
    error::{AppError, AppResult},
    models::{CartItem, CartLineKey, UiProduct},
    money,
    personalization::{CanonicalPersonalization, Personalization, calculate_extra_cost},
    store::{FetchOutcome, Storefront, backend_id},
};

impl Storefront {
    /// Adds `quantity` of a product. A line with the same product and the same
    /// selections absorbs the quantity; anything else becomes a new line.
    pub async fn add_to_cart(
        &mut self,
        product: &UiProduct,
        quantity: u32,
        personalization: Option<Personalization>,
    ) -> AppResult<CartLineKey> {
        if quantity == 0 {
            return Err(AppError::BadRequest(
                "quantity must be greater than 0".to_string(),
            ));
        }

        let personalization = personalization.and_then(Personalization::normalize);
        let extra_price = personalization
            .as_ref()
            .map(calculate_extra_cost)
            .unwrap_or(0.0);

        let key = CartLineKey::new(product.id.clone(), personalization.as_ref());
        let merged_quantity = self
            .cart_line(&key)
            .map_or(0, |item| item.quantity)
            .saturating_add(quantity);
        money::validate_line(product.price, extra_price, merged_quantity)
            .map_err(AppError::BadRequest)?;
        tracing::debug!(
            product_id = %product.id,
            quantity,
            extra_price,
            authenticated = self.is_authenticated(),
            "add to cart"
        );

        if self.is_authenticated() {
            let result = self
                .push_add(product, quantity, personalization.as_ref())
                .await;
            self.settle("add_to_cart", result)?;
        }

        self.merge_line(key.clone(), product, quantity, personalization, extra_price);
        self.persist();
        Ok(key)
    }

    async fn push_add(
        &self,
        product: &UiProduct,
        quantity: u32,
        personalization: Option<&CanonicalPersonalization>,
    ) -> AppResult<()> {
        let product_id = backend_id(&product.id)?;
        match personalization {
            Some(details) => {
                self.api
                    .add_to_cart_with_personalization(product_id, quantity, Some(details))
                    .await?
            }
            None => self.api.add_to_cart(product_id, quantity, None).await?,
        }
        Ok(())
    }

    fn merge_line(
        &mut self,
        key: CartLineKey,
        product: &UiProduct,
        quantity: u32,
        personalization: Option<CanonicalPersonalization>,
        extra_price: f64,
    ) {
        match self.state.cart.iter_mut().find(|item| item.key() == key) {
            Some(item) => {
                let merged = item.quantity.saturating_add(quantity);
                item.set_quantity(merged);
            }
            None => self.state.cart.push(CartItem::new(
                product.clone(),
                quantity,
                personalization,
                extra_price,
            )),
        }
    }

    pub async fn remove_from_cart(&mut self, key: &CartLineKey) -> AppResult<()> {
        let backend_line = self.cart_line(key).and_then(|item| item.backend_id);
        tracing::debug!(product_id = %key.product_id, ?backend_line, "remove from cart");

        if self.is_authenticated() {
            if let Some(item_id) = backend_line {
                let result = self.api.remove_from_cart(item_id).await.map_err(Into::into);
                self.settle("remove_from_cart", result)?;
            }
        }

        self.state.cart.retain(|item| item.key() != *key);
        self.persist();
        Ok(())
    }

    /// Sets a line's quantity; zero removes the line.
    pub async fn update_cart_quantity(&mut self, key: &CartLineKey, quantity: u32) -> AppResult<()> {
        if quantity == 0 {
            return self.remove_from_cart(key).await;
        }

        let Some(line) = self.cart_line(key) else {
            tracing::debug!(product_id = %key.product_id, "no cart line to update");
            return Ok(());
        };
        money::validate_line(line.product.price, line.extra_price, quantity)
            .map_err(AppError::BadRequest)?;
        let backend_line = line.backend_id;
        tracing::debug!(product_id = %key.product_id, quantity, ?backend_line, "update cart quantity");

        if self.is_authenticated() {
            if let Some(item_id) = backend_line {
                let result = self
                    .api
                    .update_cart_item(item_id, quantity)
                    .await
                    .map_err(Into::into);
                self.settle("update_cart_quantity", result)?;
            }
        }

        if let Some(item) = self.state.cart.iter_mut().find(|item| item.key() == *key) {
            item.set_quantity(quantity);
        }
        self.persist();
        Ok(())
    }

    pub async fn clear_cart(&mut self) -> AppResult<()> {
        tracing::debug!(lines = self.state.cart.len(), "clear cart");
        if self.is_authenticated() {
            let result = self.api.clear_cart().await.map_err(Into::into);
            self.settle("clear_cart", result)?;
        }
        self.reset_cart_completely();
        Ok(())
    }

    /// Empties the local cart without telling the backend.
    pub fn reset_cart_completely(&mut self) {
        self.state.cart.clear();
        self.persist();
    }

    /// Starts over with an empty cart. Backend failures are logged only.
    pub async fn create_new_cart(&mut self) {
        if let Err(err) = self.clear_cart().await {
            tracing::warn!(error = %err, "failed to clear cart before starting a new one");
        }
        self.reset_cart_completely();

        if self.is_authenticated() {
            if let Err(err) = self.api.create_new_cart().await {
                tracing::warn!(error = %err, "failed to create new backend cart");
            }
        }
    }

    pub fn get_cart_total(&self) -> f64 {
        money::sum(
            self.state
                .cart
                .iter()
                .map(|item| money::line_total(item.product.price, item.extra_price, item.quantity)),
        )
    }

    /// Replaces the local cart with the backend's copy.
    pub async fn sync_cart_with_backend(&mut self) -> FetchOutcome {
        if !self.is_authenticated() {
            tracing::debug!("cart sync skipped, not signed in");
            return FetchOutcome::Skipped;
        }
        match self.api.get_cart_items().await {
            Ok(lines) => {
                self.state.cart = lines.iter().map(convert_cart_line_to_ui).collect();
                self.persist();
                tracing::debug!(lines = self.state.cart.len(), "cart synced");
                FetchOutcome::Live
            }
            Err(err) => {
                tracing::warn!(error = %err, "cart sync failed");
                FetchOutcome::Stale {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn cart_line(&self, key: &CartLineKey) -> Option<&CartItem> {
        self.state.cart.iter().find(|item| item.key() == *key)
    }
}
