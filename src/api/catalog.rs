use reqwest::Method;

use super::ApiClient;
use crate::{
    dto::products::{
        Category, CreateCategoryRequest, CreateProductRequest, PriceRange, Product, ProductFilter,
        ProductPage, ProductSearch, UpdateCategoryRequest, UpdateProductRequest,
    },
    error::ApiResult,
};

impl ApiClient {
    pub async fn get_categories(&self) -> ApiResult<Vec<Category>> {
        self.get("/categories").await
    }

    pub async fn get_category(&self, category_id: i64) -> ApiResult<Category> {
        self.get(&format!("/categories/{category_id}")).await
    }

    pub async fn get_categories_with_products(&self) -> ApiResult<Vec<Category>> {
        self.get("/categories/with-products").await
    }

    pub async fn get_products(&self) -> ApiResult<ProductPage> {
        self.get("/products").await
    }

    pub async fn get_product(&self, product_id: i64) -> ApiResult<Product> {
        self.get(&format!("/products/{product_id}")).await
    }

    pub async fn get_products_by_category(&self, category_id: i64) -> ApiResult<ProductPage> {
        self.get(&format!("/products/category/{category_id}")).await
    }

    pub async fn search_products(&self, params: &ProductSearch) -> ApiResult<ProductPage> {
        self.get_with_query("/products/search", params).await
    }

    pub async fn get_in_stock_products(&self) -> ApiResult<ProductPage> {
        self.get("/products/in-stock").await
    }

    pub async fn get_products_by_price_range(&self, params: &PriceRange) -> ApiResult<ProductPage> {
        self.get_with_query("/products/price-range", params).await
    }

    pub async fn filter_products(&self, params: &ProductFilter) -> ApiResult<ProductPage> {
        self.get_with_query("/products/filter", params).await
    }

    pub async fn create_category(&self, category: &CreateCategoryRequest) -> ApiResult<Category> {
        self.send_json(Method::POST, "/categories/admin", category).await
    }

    pub async fn update_category(
        &self,
        category_id: i64,
        category: &UpdateCategoryRequest,
    ) -> ApiResult<Category> {
        self.send_json(Method::PUT, &format!("/categories/admin/{category_id}"), category)
            .await
    }

    pub async fn delete_category(&self, category_id: i64) -> ApiResult<()> {
        let request = self.request(Method::DELETE, &format!("/categories/admin/{category_id}"))?;
        self.send_discarding(request).await
    }

    pub async fn create_product(&self, product: &CreateProductRequest) -> ApiResult<Product> {
        self.send_json(Method::POST, "/products/admin", product).await
    }

    pub async fn update_product(
        &self,
        product_id: i64,
        product: &UpdateProductRequest,
    ) -> ApiResult<Product> {
        tracing::debug!(product_id, "updating product");
        self.send_json(Method::PUT, &format!("/products/admin/{product_id}"), product)
            .await
    }

    pub async fn delete_product(&self, product_id: i64) -> ApiResult<()> {
        let request = self.request(Method::DELETE, &format!("/products/admin/{product_id}"))?;
        self.send_discarding(request).await
    }

    pub async fn update_product_stock(&self, product_id: i64, stock: i64) -> ApiResult<Product> {
        let request = self
            .request(Method::PUT, &format!("/products/admin/{product_id}/stock"))?
            .query(&[("stock", stock)]);
        self.execute(request).await
    }

    pub async fn get_low_stock_products(&self, threshold: u32) -> ApiResult<ProductPage> {
        self.get_with_query("/products/admin/low-stock", &[("threshold", threshold)])
            .await
    }
}
