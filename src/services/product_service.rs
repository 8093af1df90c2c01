use validator::Validate;

use crate::{
    auth::ensure_admin,
    catalog::{
        convert_categories_to_ui, convert_category_to_ui, convert_product_to_ui,
        convert_products_to_ui, placeholder_categories, placeholder_products,
    },
    dto::products::{
        CreateCategoryRequest, CreateProductRequest, ProductFilter, ProductSearch,
        UpdateCategoryRequest, UpdateProductRequest,
    },
    error::AppResult,
    models::{ProductPatch, UiCategory, UiProduct},
    store::{FetchOutcome, Storefront},
};

impl Storefront {
    /// Loads the catalog. An empty or missing filter lists everything. When the
    /// backend is unreachable the placeholder catalog is shown instead.
    pub async fn fetch_products(&mut self, filter: Option<&ProductFilter>) -> FetchOutcome {
        let result = match filter.filter(|f| !f.is_empty()) {
            Some(filter) => self.api.filter_products(filter).await,
            None => self.api.get_products().await,
        };

        let outcome = match result {
            Ok(page) => {
                self.state.products = convert_products_to_ui(&page.into_products());
                tracing::debug!(count = self.state.products.len(), "products loaded");
                FetchOutcome::Live
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch products, using placeholders");
                self.state.products = placeholder_products();
                FetchOutcome::Placeholder {
                    reason: err.to_string(),
                }
            }
        };
        self.persist();
        outcome
    }

    pub async fn fetch_categories(&mut self) -> FetchOutcome {
        let outcome = match self.api.get_categories().await {
            Ok(categories) => {
                self.state.categories = convert_categories_to_ui(&categories);
                FetchOutcome::Live
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch categories, using placeholders");
                self.state.categories = placeholder_categories();
                FetchOutcome::Placeholder {
                    reason: err.to_string(),
                }
            }
        };
        self.persist();
        outcome
    }

    pub async fn fetch_product(&self, product_id: i64) -> Option<UiProduct> {
        match self.api.get_product(product_id).await {
            Ok(product) => Some(convert_product_to_ui(&product)),
            Err(err) => {
                tracing::warn!(product_id, error = %err, "failed to fetch product");
                None
            }
        }
    }

    /// Searches the backend, or the loaded catalog when the backend fails.
    pub async fn search_products(&self, query: &str) -> Vec<UiProduct> {
        let params = ProductSearch {
            name: query.to_string(),
            page: None,
            size: None,
        };
        match self.api.search_products(&params).await {
            Ok(page) => convert_products_to_ui(&page.into_products()),
            Err(err) => {
                tracing::warn!(query, error = %err, "product search failed, searching locally");
                let needle = query.to_lowercase();
                self.state
                    .products
                    .iter()
                    .filter(|p| {
                        p.name.to_lowercase().contains(&needle)
                            || p.description.to_lowercase().contains(&needle)
                    })
                    .cloned()
                    .collect()
            }
        }
    }

    pub async fn create_product_api(&mut self, product: CreateProductRequest) -> AppResult<UiProduct> {
        ensure_admin(self.state.current_user)?;
        product.validate()?;
        let created = self.api.create_product(&product).await?;
        tracing::info!(product_id = created.product_id, "product created");
        self.fetch_products(None).await;
        Ok(convert_product_to_ui(&created))
    }

    pub async fn update_product_api(
        &mut self,
        product_id: i64,
        product: UpdateProductRequest,
    ) -> AppResult<()> {
        ensure_admin(self.state.current_user)?;
        product.validate()?;
        self.api.update_product(product_id, &product).await?;
        tracing::info!(product_id, "product updated");
        self.fetch_products(None).await;
        Ok(())
    }

    pub async fn delete_product_api(&mut self, product_id: i64) -> AppResult<()> {
        ensure_admin(self.state.current_user)?;
        self.api.delete_product(product_id).await?;
        tracing::info!(product_id, "product deleted");
        self.fetch_products(None).await;
        Ok(())
    }

    pub async fn update_product_stock_api(&mut self, product_id: i64, stock: i64) -> AppResult<()> {
        ensure_admin(self.state.current_user)?;
        self.api.update_product_stock(product_id, stock).await?;
        tracing::info!(product_id, stock, "product stock updated");
        self.fetch_products(None).await;
        Ok(())
    }

    pub async fn fetch_low_stock_products(&self, threshold: u32) -> AppResult<Vec<UiProduct>> {
        ensure_admin(self.state.current_user)?;
        let page = self.api.get_low_stock_products(threshold).await?;
        Ok(convert_products_to_ui(&page.into_products()))
    }

    pub async fn create_category_api(
        &mut self,
        category: CreateCategoryRequest,
    ) -> AppResult<UiCategory> {
        ensure_admin(self.state.current_user)?;
        category.validate()?;
        let created = self.api.create_category(&category).await?;
        self.fetch_categories().await;
        Ok(convert_category_to_ui(&created))
    }

    pub async fn update_category_api(
        &mut self,
        category_id: i64,
        category: UpdateCategoryRequest,
    ) -> AppResult<()> {
        ensure_admin(self.state.current_user)?;
        self.api.update_category(category_id, &category).await?;
        self.fetch_categories().await;
        Ok(())
    }

    pub async fn delete_category_api(&mut self, category_id: i64) -> AppResult<()> {
        ensure_admin(self.state.current_user)?;
        self.api.delete_category(category_id).await?;
        self.fetch_categories().await;
        Ok(())
    }

    pub fn set_products(&mut self, products: Vec<UiProduct>) {
        self.state.products = products;
        self.persist();
    }

    pub fn set_categories(&mut self, categories: Vec<UiCategory>) {
        self.state.categories = categories;
        self.persist();
    }

    pub fn add_product(&mut self, product: UiProduct) {
        self.state.products.push(product);
        self.persist();
    }

    /// Returns false when no product has that id.
    pub fn update_product(&mut self, id: &str, patch: ProductPatch) -> bool {
        let Some(product) = self.state.products.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        product.apply(patch);
        self.persist();
        true
    }

    pub fn delete_product(&mut self, id: &str) -> bool {
        let before = self.state.products.len();
        self.state.products.retain(|p| p.id != id);
        let removed = self.state.products.len() != before;
        if removed {
            self.persist();
        }
        removed
    }
}
