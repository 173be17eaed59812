use mercado_api::{
    dto::{
        cart::AddToCartRequest, orders::CreateOrderRequest, payment::PaymentRequest,
        products::CreateProductRequest,
    },
    error::AppError,
    models::{OrderStatus, PaymentMethod},
    payment::{SETTLEMENT_DELAY, process_payment},
    store::Store,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// Integration flow: shopper fills a cart -> checkout clears it atomically ->
// payment settles and flips the order to paid.
#[tokio::test(start_paused = true)]
async fn checkout_and_pay_flow() -> anyhow::Result<()> {
    let store = Store::new();
    store.seed_demo_data()?;

    let banana = store.create_product(product("Banana Prata", 7, dec!(5.99)))?;
    let picanha = store.create_product(product("Picanha", 8, dec!(89.90)))?;

    // Two carts; only the buyer's is cleared by checkout.
    store.add_to_cart("buyer", add(banana.id, dec!(2)))?;
    store.add_to_cart("buyer", add(picanha.id, dec!(0.5)))?;
    store.add_to_cart("other", add(banana.id, dec!(1)))?;

    let order = store.checkout(
        "buyer",
        CreateOrderRequest {
            establishment_id: 7,
            total_amount: dec!(56.93),
            status: None,
            payment_method: PaymentMethod::Pix,
        },
    )?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.session_id, "buyer");
    assert!(store.list_cart("buyer")?.is_empty());
    assert_eq!(store.list_cart("other")?.len(), 1);

    // Pay
    let receipt = process_payment(&store, pay(order.id, 56.93)).await?;

    assert!(receipt.success);
    assert!(receipt.transaction_id.starts_with("txn_"));
    assert_eq!(receipt.method, "pix");
    assert_eq!(receipt.amount, 56.93);

    let paid = store.get_order(order.id)?.expect("order kept");
    assert_eq!(paid.status, OrderStatus::Paid);
    assert_eq!(paid.total_amount, dec!(56.93));
    Ok(())
}

#[test]
fn checkout_with_an_empty_cart_still_creates_the_order() -> anyhow::Result<()> {
    let store = Store::new();

    let order = store.checkout("buyer", order_payload())?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(store.list_orders()?.len(), 1);
    assert!(store.list_cart("buyer")?.is_empty());
    Ok(())
}

#[test]
fn order_status_override_is_honored() -> anyhow::Result<()> {
    let store = Store::new();

    let mut payload = order_payload();
    payload.status = Some(OrderStatus::Cancelled);
    let order = store.create_order("buyer", payload)?;

    assert_eq!(order.status, OrderStatus::Cancelled);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn payment_takes_the_settlement_delay() -> anyhow::Result<()> {
    let store = Store::new();
    let order = store.create_order("buyer", order_payload())?;

    let started = tokio::time::Instant::now();
    process_payment(&store, pay(order.id, 10.0)).await?;

    assert_eq!(started.elapsed(), SETTLEMENT_DELAY);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn paying_a_missing_order_is_not_found() -> anyhow::Result<()> {
    let store = Store::new();

    let result = process_payment(&store, pay(99, 10.0)).await;
    assert!(matches!(result, Err(AppError::NotFound)));
    assert!(store.list_orders()?.is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn transaction_ids_are_unique_per_payment() -> anyhow::Result<()> {
    let store = Store::new();
    let order = store.create_order("buyer", order_payload())?;

    let first = process_payment(&store, pay(order.id, 10.0)).await?;
    let second = process_payment(&store, pay(order.id, 10.0)).await?;

    assert_ne!(first.transaction_id, second.transaction_id);
    Ok(())
}

fn product(name: &str, establishment_id: i32, price: Decimal) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        description: None,
        price,
        unit: "kg".into(),
        category_id: Some(1),
        establishment_id,
        image_url: None,
        in_stock: None,
    }
}

fn add(product_id: i32, quantity: Decimal) -> AddToCartRequest {
    AddToCartRequest {
        product_id,
        quantity,
    }
}

fn order_payload() -> CreateOrderRequest {
    CreateOrderRequest {
        establishment_id: 1,
        total_amount: dec!(10.00),
        status: None,
        payment_method: PaymentMethod::Card,
    }
}

fn pay(order_id: i32, amount: f64) -> PaymentRequest {
    PaymentRequest {
        method: "pix".into(),
        amount,
        order_id,
    }
}
