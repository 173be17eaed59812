use chrono::{TimeZone, Utc};
use mercado_api::{
    dto::offers::{CreateOfferRequest, UpdateOfferRequest},
    models::{
        CartItem, Establishment, EstablishmentStatus, EstablishmentType, Order, OrderStatus,
        PaymentMethod, Product,
    },
};
use rust_decimal_macros::dec;
use serde_json::json;

#[test]
fn establishment_serializes_to_camel_case_with_type() -> anyhow::Result<()> {
    let establishment = Establishment {
        id: 7,
        name: "Supermercado Central".into(),
        kind: EstablishmentType::Supermarket,
        address: "Rua das Flores, 123 - Centro".into(),
        phone: Some("(11) 3456-7890".into()),
        email: None,
        image_url: None,
        status: EstablishmentStatus::Active,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    };

    let wire = serde_json::to_value(&establishment)?;
    assert_eq!(wire["type"], "supermarket");
    assert_eq!(wire["status"], "active");
    assert_eq!(wire["imageUrl"], json!(null));
    assert_eq!(wire["createdAt"], "2024-05-01T12:00:00Z");
    assert!(wire.get("kind").is_none());
    assert!(wire.get("image_url").is_none());
    Ok(())
}

#[test]
fn money_rides_as_decimal_strings() -> anyhow::Result<()> {
    let product = Product {
        id: 10,
        name: "Banana Prata".into(),
        description: None,
        price: dec!(5.99),
        unit: "kg".into(),
        category_id: Some(1),
        establishment_id: 7,
        image_url: None,
        in_stock: true,
        created_at: Utc::now(),
    };

    let wire = serde_json::to_value(&product)?;
    assert_eq!(wire["price"], "5.99");
    assert_eq!(wire["categoryId"], 1);
    assert_eq!(wire["inStock"], true);
    Ok(())
}

#[test]
fn order_enums_are_lowercase() -> anyhow::Result<()> {
    let order = Order {
        id: 12,
        session_id: "buyer".into(),
        establishment_id: 7,
        total_amount: dec!(45.90),
        status: OrderStatus::Pending,
        payment_method: PaymentMethod::Pix,
        created_at: Utc::now(),
    };

    let wire = serde_json::to_value(&order)?;
    assert_eq!(wire["status"], "pending");
    assert_eq!(wire["paymentMethod"], "pix");
    assert_eq!(wire["totalAmount"], "45.90");
    Ok(())
}

#[test]
fn cart_item_quantity_keeps_its_scale() -> anyhow::Result<()> {
    let item = CartItem {
        id: 3,
        session_id: "anonymous".into(),
        product_id: 10,
        quantity: dec!(0.500),
        created_at: Utc::now(),
    };

    let wire = serde_json::to_value(&item)?;
    assert_eq!(wire["sessionId"], "anonymous");
    assert_eq!(wire["quantity"], "0.500");
    Ok(())
}

#[test]
fn offer_discounts_accept_strings_and_default_to_none() -> anyhow::Result<()> {
    let payload: CreateOfferRequest = serde_json::from_value(json!({
        "title": "Semana da Fruta",
        "establishmentId": 7,
        "startDate": "2026-05-01T00:00:00Z",
        "endDate": "2026-05-08T00:00:00Z",
        "discountPercentage": "15.00"
    }))?;

    assert_eq!(payload.discount_percentage, Some(dec!(15.00)));
    assert_eq!(payload.discount_amount, None);
    assert_eq!(payload.is_active, None);
    Ok(())
}

#[test]
fn offer_patch_distinguishes_clearing_from_setting() -> anyhow::Result<()> {
    let patch: UpdateOfferRequest = serde_json::from_value(json!({
        "discountPercentage": null,
        "discountAmount": "5.00"
    }))?;

    assert_eq!(patch.discount_percentage, Some(None));
    assert_eq!(patch.discount_amount, Some(Some(dec!(5.00))));
    assert_eq!(patch.title, None);
    Ok(())
}
