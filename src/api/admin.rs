use super::ApiClient;
use crate::{
    dto::admin::{AdminDashboardStats, OrderSummary, ProductSales, SalesReportEntry, SalesReportQuery},
    error::ApiResult,
};

impl ApiClient {
    pub async fn get_dashboard_stats(&self) -> ApiResult<AdminDashboardStats> {
        self.get("/admin/dashboard/stats").await
    }

    /// Dates are `YYYY-MM-DD`.
    pub async fn get_sales_report(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> ApiResult<Vec<SalesReportEntry>> {
        let query = SalesReportQuery {
            start_date,
            end_date,
        };
        self.get_with_query("/admin/dashboard/sales-report", &query)
            .await
    }

    pub async fn get_top_selling_products(&self, limit: u32) -> ApiResult<Vec<ProductSales>> {
        self.get_with_query("/admin/dashboard/top-products", &[("limit", limit)])
            .await
    }

    pub async fn get_recent_orders(&self, limit: u32) -> ApiResult<Vec<OrderSummary>> {
        self.get_with_query("/admin/dashboard/recent-orders", &[("limit", limit)])
            .await
    }
}
