//! Maps backend records into the shapes the storefront renders.
//!
//! The backend has no notion of size, rating or review count, so these get
//! presentation defaults here.

use chrono::{DateTime, NaiveDateTime, Utc};
use rand::Rng;

use crate::{
    dto::{cart::CartItemDto, orders::OrderResponse, products::{Category, Product}},
    models::{CartItem, Order, OrderStatus, ProductSize, UiCategory, UiProduct},
    money,
    personalization::{Personalization, has_personalization},
};

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const DEFAULT_RATING: f64 = 4.5;

pub fn convert_product_to_ui(product: &Product) -> UiProduct {
    let image = if product.image_url.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        product.image_url.clone()
    };
    UiProduct {
        id: product.product_id.to_string(),
        name: product.name.clone(),
        description: product.description.clone(),
        price: product.price,
        original_price: None,
        image,
        category: product.category_name.clone(),
        size: ProductSize::Medium,
        stock: product.stock_quantity,
        featured: Some(false),
        rating: DEFAULT_RATING,
        reviews: rand::rng().random_range(0..100),
    }
}

pub fn convert_products_to_ui(products: &[Product]) -> Vec<UiProduct> {
    products.iter().map(convert_product_to_ui).collect()
}

pub fn convert_category_to_ui(category: &Category) -> UiCategory {
    UiCategory {
        id: category.category_id.to_string(),
        name: category.name.clone(),
        description: category.description.clone(),
        product_count: category.product_count,
    }
}

pub fn convert_categories_to_ui(categories: &[Category]) -> Vec<UiCategory> {
    categories.iter().map(convert_category_to_ui).collect()
}

/// Backend cart lines only carry the product basics.
pub fn convert_cart_line_to_ui(line: &CartItemDto) -> CartItem {
    let product = UiProduct {
        id: line.product_id.to_string(),
        name: line.product_name.clone(),
        description: String::new(),
        price: line.product_price,
        original_price: None,
        image: line
            .image_url
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        category: "Unknown".to_string(),
        size: ProductSize::Medium,
        stock: 999,
        featured: None,
        rating: 0.0,
        reviews: 0,
    };
    let personalization = line
        .personalization_details
        .clone()
        .and_then(Personalization::from_value)
        .map(Personalization::into_canonical)
        .filter(has_personalization);
    let extra_price = line.extra_price.unwrap_or(0.0);

    let mut item = CartItem::new(product, line.quantity, personalization, extra_price);
    item.backend_id = Some(line.item_id);
    if let Some(total) = line.item_total {
        item.total_price = total;
    }
    item
}

pub fn convert_order_to_ui(order: &OrderResponse) -> Order {
    let status = order.status.parse::<OrderStatus>().unwrap_or_else(|err| {
        tracing::warn!(order_id = order.order_id, error = %err, "treating order as pending");
        OrderStatus::Pending
    });
    Order {
        id: order.order_id.to_string(),
        items: order.order_items.clone(),
        total: money::to_f64(money::to_decimal(order.total_price)),
        status,
        created_at: order
            .order_date
            .as_deref()
            .and_then(parse_order_date)
            .unwrap_or_else(Utc::now),
        customer_name: order.customer_name.clone(),
        customer_email: order.customer_email.clone(),
    }
}

/// Order dates arrive either with an offset or as a bare local timestamp.
fn parse_order_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

#[allow(clippy::too_many_arguments)]
fn placeholder_product(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    category: &str,
    size: ProductSize,
    stock: i64,
    rating: f64,
    reviews: u32,
) -> UiProduct {
    UiProduct {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        original_price: None,
        image: PLACEHOLDER_IMAGE.to_string(),
        category: category.to_string(),
        size,
        stock,
        featured: None,
        rating,
        reviews,
    }
}

/// The demo catalog shown when the backend cannot be reached.
pub fn placeholder_products() -> Vec<UiProduct> {
    let mut products = vec![
        placeholder_product(
            "1",
            "Classic Brown Teddy",
            "A timeless brown teddy bear perfect for cuddling",
            29.99,
            "Classic",
            ProductSize::Medium,
            15,
            4.8,
            124,
        ),
        placeholder_product(
            "2",
            "Pink Princess Bear",
            "Adorable pink teddy with a sparkly crown",
            34.99,
            "Princess",
            ProductSize::Large,
            8,
            4.9,
            89,
        ),
        placeholder_product(
            "3",
            "Tiny Pocket Bear",
            "Perfect small companion for on-the-go adventures",
            12.99,
            "Mini",
            ProductSize::Small,
            25,
            4.6,
            156,
        ),
        placeholder_product(
            "4",
            "Giant Cuddle Bear",
            "Extra large teddy for the ultimate cuddle experience",
            89.99,
            "Giant",
            ProductSize::ExtraLarge,
            3,
            5.0,
            45,
        ),
        placeholder_product(
            "5",
            "Cream Vanilla Bear",
            "Soft cream-colored teddy with vanilla scent",
            27.99,
            "Scented",
            ProductSize::Medium,
            12,
            4.7,
            78,
        ),
        placeholder_product(
            "6",
            "Adventure Explorer Bear",
            "Comes with hat and backpack for adventures",
            42.99,
            "Adventure",
            ProductSize::Large,
            6,
            4.8,
            67,
        ),
    ];
    for featured in ["1", "2", "4"] {
        if let Some(product) = products.iter_mut().find(|p| p.id == featured) {
            product.featured = Some(true);
        }
    }
    if let Some(princess) = products.iter_mut().find(|p| p.id == "2") {
        princess.original_price = Some(39.99);
    }
    products
}

pub fn placeholder_categories() -> Vec<UiCategory> {
    [
        ("1", "Classic", "Traditional teddy bears with timeless appeal", 12),
        ("2", "Princess", "Elegant and sparkly bears for little princesses", 8),
        ("3", "Mini", "Small and portable bears for on-the-go", 15),
        ("4", "Giant", "Extra large bears for maximum cuddles", 5),
        ("5", "Scented", "Bears with delightful fragrances", 10),
        ("6", "Adventure", "Bears ready for outdoor adventures", 7),
    ]
    .into_iter()
    .map(|(id, name, description, product_count)| UiCategory {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        product_count,
    })
    .collect()
}
