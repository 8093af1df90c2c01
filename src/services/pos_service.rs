use crate::{
    models::{PosCartItem, UiProduct},
    money,
    store::Storefront,
};

impl Storefront {
    /// Adds to the cashier's cart. One line per product.
    pub fn add_to_pos_cart(&mut self, product: &UiProduct, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.state.pos_cart.iter_mut().find(|item| item.product.id == product.id) {
            Some(item) => item.quantity = item.quantity.saturating_add(quantity),
            None => self.state.pos_cart.push(PosCartItem {
                product: product.clone(),
                quantity,
            }),
        }
        self.persist();
    }

    pub fn remove_from_pos_cart(&mut self, product_id: &str) {
        self.state.pos_cart.retain(|item| item.product.id != product_id);
        self.persist();
    }

    pub fn update_pos_cart_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            return self.remove_from_pos_cart(product_id);
        }
        if let Some(item) = self
            .state
            .pos_cart
            .iter_mut()
            .find(|item| item.product.id == product_id)
        {
            item.quantity = quantity;
        }
        self.persist();
    }

    pub fn clear_pos_cart(&mut self) {
        self.state.pos_cart.clear();
        self.persist();
    }

    pub fn get_pos_cart_total(&self) -> f64 {
        money::sum(
            self.state
                .pos_cart
                .iter()
                .map(|item| money::line_total(item.product.price, 0.0, item.quantity)),
        )
    }
}
