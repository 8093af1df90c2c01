use serde_json::json;
use teddylove_storefront::{
    catalog::{
        PLACEHOLDER_IMAGE, convert_cart_line_to_ui, convert_category_to_ui, convert_order_to_ui,
        convert_product_to_ui, placeholder_categories, placeholder_products,
    },
    dto::{
        cart::CartItemDto,
        orders::OrderResponse,
        products::{Category, Product, ProductPage},
    },
    models::{CartLineKey, OrderStatus, ProductSize},
};

fn backend_product() -> Product {
    serde_json::from_value(json!({
        "productId": 7,
        "categoryId": 2,
        "categoryName": "Classic",
        "name": "Honey Bear",
        "description": null,
        "price": 24.5,
        "imageUrl": null,
        "stockQuantity": 4,
        "inStock": true
    }))
    .unwrap()
}

#[test]
fn product_gets_presentation_defaults() {
    let ui = convert_product_to_ui(&backend_product());

    assert_eq!(ui.id, "7");
    assert_eq!(ui.name, "Honey Bear");
    assert_eq!(ui.description, "");
    assert_eq!(ui.image, PLACEHOLDER_IMAGE);
    assert_eq!(ui.category, "Classic");
    assert_eq!(ui.size, ProductSize::Medium);
    assert_eq!(ui.stock, 4);
    assert_eq!(ui.featured, Some(false));
    assert_eq!(ui.rating, 4.5);
    assert!(ui.reviews < 100);
}

#[test]
fn product_listing_accepts_both_shapes() {
    let bare: ProductPage = serde_json::from_value(json!([
        { "productId": 1, "name": "A", "price": 1.0 }
    ]))
    .unwrap();
    let paged: ProductPage = serde_json::from_value(json!({
        "content": [{ "productId": 1, "name": "A", "price": 1.0 }],
        "totalPages": 1
    }))
    .unwrap();
    assert_eq!(bare.into_products(), paged.into_products());
}

#[test]
fn category_keeps_counts() {
    let category = Category {
        category_id: 3,
        name: "Mini".into(),
        description: "Small bears".into(),
        product_count: 15,
    };
    let ui = convert_category_to_ui(&category);
    assert_eq!(ui.id, "3");
    assert_eq!(ui.product_count, 15);
}

#[test]
fn cart_line_keeps_backend_id_and_personalization() {
    let line: CartItemDto = serde_json::from_value(json!({
        "itemId": 91,
        "productId": 7,
        "productName": "Honey Bear",
        "productPrice": 24.5,
        "imageUrl": "",
        "quantity": 2,
        "personalizationDetails": { "occasion": "Birthday", "wrappingPaper": "Premium" },
        "extraPrice": 6.0,
        "itemTotal": 61.0
    }))
    .unwrap();

    let item = convert_cart_line_to_ui(&line);
    assert_eq!(item.backend_id, Some(91));
    assert_eq!(item.product.id, "7");
    assert_eq!(item.product.image, PLACEHOLDER_IMAGE);
    assert_eq!(item.product.category, "Unknown");
    assert_eq!(item.product.stock, 999);
    assert_eq!(item.quantity, 2);
    assert_eq!(item.extra_price, 6.0);
    assert_eq!(item.total_price, 61.0);

    let details = item.personalization.unwrap();
    assert_eq!(details.occasion.as_deref(), Some("Birthday"));
    assert_eq!(details.wrapping_paper.as_deref(), Some("Premium"));
}

#[test]
fn cart_line_without_total_is_computed() {
    let line: CartItemDto = serde_json::from_value(json!({
        "itemId": 1,
        "productId": 2,
        "productName": "Bear",
        "productPrice": 10.0,
        "quantity": 3
    }))
    .unwrap();
    let item = convert_cart_line_to_ui(&line);
    assert_eq!(item.total_price, 30.0);
    assert!(item.personalization.is_none());
}

#[test]
fn cart_line_with_only_an_id_is_plain() {
    let line: CartItemDto = serde_json::from_value(json!({
        "itemId": 5,
        "productId": 7,
        "productName": "Honey Bear",
        "productPrice": 24.5,
        "quantity": 1,
        "personalizationDetails": { "customization_id": "CUST-1" }
    }))
    .unwrap();

    let item = convert_cart_line_to_ui(&line);
    assert!(item.personalization.is_none());
    assert_eq!(item.key(), CartLineKey::new("7", None));
}

#[test]
fn order_status_and_date_are_mapped() {
    let order: OrderResponse = serde_json::from_value(json!({
        "orderId": 12,
        "customerName": "Alice",
        "totalPrice": 59.98,
        "status": "CONFIRMED",
        "orderDate": "2024-02-14T10:30:00",
        "orderItems": [{ "productId": 1, "quantity": 2 }]
    }))
    .unwrap();

    let ui = convert_order_to_ui(&order);
    assert_eq!(ui.id, "12");
    assert_eq!(ui.status, OrderStatus::Processing);
    assert_eq!(ui.total, 59.98);
    assert_eq!(ui.items.len(), 1);
    assert_eq!(ui.created_at.to_rfc3339(), "2024-02-14T10:30:00+00:00");
    assert_eq!(ui.customer_name.as_deref(), Some("Alice"));
}

#[test]
fn unknown_order_status_is_pending() {
    let order: OrderResponse = serde_json::from_value(json!({
        "orderId": 1,
        "totalPrice": 1.0,
        "status": "ON_HOLD"
    }))
    .unwrap();
    assert_eq!(convert_order_to_ui(&order).status, OrderStatus::Pending);
}

#[test]
fn placeholder_catalog() {
    let products = placeholder_products();
    assert_eq!(products.len(), 6);

    let featured: Vec<&str> = products
        .iter()
        .filter(|p| p.featured == Some(true))
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(featured, ["1", "2", "4"]);

    let princess = products.iter().find(|p| p.id == "2").unwrap();
    assert_eq!(princess.original_price, Some(39.99));
    assert!(products.iter().all(|p| p.image == PLACEHOLDER_IMAGE));

    let categories = placeholder_categories();
    assert_eq!(categories.len(), 6);
    assert!(categories.iter().any(|c| c.name == "Mini"));
}
