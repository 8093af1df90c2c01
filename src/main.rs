use std::env;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use teddylove_storefront::{
    Storefront, StorefrontConfig, personalization::get_personalization_summary,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,teddylove_storefront=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StorefrontConfig::from_env()?;
    tracing::info!(
        api = %config.api_base_url,
        storage = %config.storage_dir.display(),
        cart_sync = ?config.cart_sync,
        "starting storefront"
    );
    let mut store = Storefront::from_config(&config)?;

    if let (Ok(username), Ok(password)) = (
        env::var("STOREFRONT_USERNAME"),
        env::var("STOREFRONT_PASSWORD"),
    ) {
        match store.login(&username, &password).await {
            Ok(user) => {
                tracing::info!(username = %user.username, role = %user.role, "logged in");
                let outcome = store.sync_cart_with_backend().await;
                tracing::debug!(?outcome, "cart sync");
            }
            Err(err) => tracing::warn!(error = %err, "login failed, continuing as guest"),
        }
    }

    let categories = store.fetch_categories().await;
    let products = store.fetch_products(None).await;
    if !products.is_live() || !categories.is_live() {
        tracing::warn!(?products, ?categories, "backend unavailable, showing placeholder catalog");
    }

    println!("Categories:");
    for category in store.categories() {
        println!("  {} - {}", category.name, category.description);
    }

    println!("Products:");
    for product in store.products() {
        let featured = if product.featured.unwrap_or(false) { " *" } else { "" };
        println!(
            "  [{}] {} ${:.2} ({} in stock){featured}",
            product.id, product.name, product.price, product.stock
        );
    }

    println!("Cart:");
    if store.cart().is_empty() {
        println!("  (empty)");
    }
    for item in store.cart() {
        println!(
            "  {} x{} ${:.2}",
            item.product.name, item.quantity, item.total_price
        );
        if let Some(details) = &item.personalization {
            println!("    {}", get_personalization_summary(details));
        }
    }
    println!("Total: ${:.2}", store.get_cart_total());

    Ok(())
}
