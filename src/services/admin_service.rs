use chrono::NaiveDate;

use crate::{
    auth::ensure_admin,
    dto::admin::SalesReportEntry,
    error::AppResult,
    store::{FetchOutcome, Storefront},
};

const DEFAULT_ORDERS_PAGE_SIZE: u32 = 10;

fn stale(resource: &str, err: impl std::fmt::Display) -> FetchOutcome {
    tracing::warn!(resource, error = %err, "dashboard fetch failed, keeping previous data");
    FetchOutcome::Stale {
        reason: err.to_string(),
    }
}

impl Storefront {
    pub async fn fetch_dashboard_stats(&mut self) -> FetchOutcome {
        match self.api.get_dashboard_stats().await {
            Ok(stats) => {
                self.state.dashboard.stats = Some(stats);
                self.persist();
                FetchOutcome::Live
            }
            Err(err) => stale("dashboard stats", err),
        }
    }

    pub async fn fetch_recent_orders(&mut self, limit: u32) -> FetchOutcome {
        match self.api.get_recent_orders(limit).await {
            Ok(orders) => {
                self.state.dashboard.recent_orders = orders;
                self.persist();
                FetchOutcome::Live
            }
            Err(err) => stale("recent orders", err),
        }
    }

    pub async fn fetch_top_products(&mut self, limit: u32) -> FetchOutcome {
        match self.api.get_top_selling_products(limit).await {
            Ok(products) => {
                self.state.dashboard.top_products = products;
                self.persist();
                FetchOutcome::Live
            }
            Err(err) => stale("top products", err),
        }
    }

    /// Loads one page of every customer's orders. Pages are zero-based.
    pub async fn fetch_all_orders(&mut self, page: u32, size: u32) -> FetchOutcome {
        match self.api.get_all_orders(page, size).await {
            Ok(paged) => {
                let dashboard = &mut self.state.dashboard;
                dashboard.all_orders = paged.content;
                dashboard.orders_total_pages = paged.total_pages;
                dashboard.orders_current_page = page;
                dashboard.orders_page_size = size;
                self.persist();
                FetchOutcome::Live
            }
            Err(err) => stale("all orders", err),
        }
    }

    /// Sends the new status as the backend spells it, e.g. `Shipped`.
    pub async fn update_order_status_api(&mut self, order_id: i64, status: &str) -> AppResult<()> {
        ensure_admin(self.state.current_user)?;
        self.api.update_order_status(order_id, status).await?;
        tracing::info!(order_id, status, "order status updated");

        let dashboard = &self.state.dashboard;
        let size = match dashboard.orders_page_size {
            0 => DEFAULT_ORDERS_PAGE_SIZE,
            size => size,
        };
        let page = dashboard.orders_current_page;
        self.fetch_all_orders(page, size).await;
        Ok(())
    }

    pub async fn fetch_sales_report(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<SalesReportEntry>> {
        let start = start.format("%Y-%m-%d").to_string();
        let end = end.format("%Y-%m-%d").to_string();
        Ok(self.api.get_sales_report(&start, &end).await?)
    }
}
