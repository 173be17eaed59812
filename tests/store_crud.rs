use chrono::{TimeZone, Utc};
use mercado_api::{
    dto::{
        categories::CreateCategoryRequest,
        establishments::{CreateEstablishmentRequest, UpdateEstablishmentRequest},
        offers::CreateOfferRequest,
        products::{CreateProductRequest, UpdateProductRequest},
    },
    error::AppError,
    models::{EstablishmentStatus, EstablishmentType},
    store::Store,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn ids_are_shared_and_sequential() -> anyhow::Result<()> {
    let store = Store::new();

    let establishment = store.create_establishment(establishment_payload("Mercado Um"))?;
    let category = store.create_category(CreateCategoryRequest {
        name: "Frutas".into(),
        icon: "fas fa-apple-alt".into(),
        color: "text-success".into(),
    })?;
    let product = store.create_product(product_payload("Banana", establishment.id, dec!(5.99)))?;

    assert_eq!(establishment.id, 1);
    assert_eq!(category.id, 2);
    assert_eq!(product.id, 3);
    Ok(())
}

#[test]
fn get_returns_the_created_entity() -> anyhow::Result<()> {
    let store = Store::new();

    let mut payload = establishment_payload("Mercado");
    payload.phone = Some("(11) 3456-7890".into());
    let establishment = store.create_establishment(payload)?;
    assert_eq!(
        store.get_establishment(establishment.id)?,
        Some(establishment.clone())
    );

    let product = store.create_product(product_payload("Banana", establishment.id, dec!(5.99)))?;
    assert_eq!(store.get_product(product.id)?, Some(product));

    assert_eq!(store.get_establishment(99)?, None);
    Ok(())
}

#[test]
fn deleted_ids_are_never_reused() -> anyhow::Result<()> {
    let store = Store::new();

    let first = store.create_establishment(establishment_payload("Mercado Um"))?;
    store.delete_establishment(first.id)?;
    let second = store.create_establishment(establishment_payload("Mercado Dois"))?;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    Ok(())
}

#[test]
fn create_applies_defaults() -> anyhow::Result<()> {
    let store = Store::new();

    let establishment = store.create_establishment(establishment_payload("Mercado"))?;
    assert_eq!(establishment.status, EstablishmentStatus::Active);

    let product = store.create_product(product_payload("Banana", establishment.id, dec!(5.99)))?;
    assert!(product.in_stock);
    Ok(())
}

#[test]
fn update_missing_row_is_not_found() {
    let store = Store::new();

    let result = store.update_establishment(99, UpdateEstablishmentRequest::default());
    assert!(matches!(result, Err(AppError::NotFound)));
}

#[test]
fn delete_missing_row_is_a_no_op() -> anyhow::Result<()> {
    let store = Store::new();

    store.delete_establishment(99)?;
    store.delete_category(99)?;
    store.delete_product(99)?;
    store.delete_offer(99)?;
    Ok(())
}

#[test]
fn empty_patch_returns_row_unchanged() -> anyhow::Result<()> {
    let store = Store::new();

    let created = store.create_establishment(establishment_payload("Mercado"))?;
    let updated = store.update_establishment(created.id, UpdateEstablishmentRequest::default())?;

    assert_eq!(updated, created);
    Ok(())
}

#[test]
fn patch_distinguishes_null_from_absent() -> anyhow::Result<()> {
    let store = Store::new();

    let mut payload = establishment_payload("Mercado");
    payload.phone = Some("(11) 3456-7890".into());
    payload.email = Some("contato@mercado.com".into());
    let created = store.create_establishment(payload)?;

    // `phone: null` clears the field; the absent `email` keeps its value.
    let patch: UpdateEstablishmentRequest =
        serde_json::from_value(serde_json::json!({ "name": "Mercado Novo", "phone": null }))?;
    let updated = store.update_establishment(created.id, patch)?;

    assert_eq!(updated.name, "Mercado Novo");
    assert_eq!(updated.phone, None);
    assert_eq!(updated.email, Some("contato@mercado.com".to_string()));
    Ok(())
}

#[test]
fn product_price_patch_takes_a_decimal_string() -> anyhow::Result<()> {
    let store = Store::new();

    let establishment = store.create_establishment(establishment_payload("Mercado"))?;
    let product = store.create_product(product_payload("Banana", establishment.id, dec!(5.99)))?;

    let patch: UpdateProductRequest =
        serde_json::from_value(serde_json::json!({ "price": "12.50" }))?;
    let updated = store.update_product(product.id, patch)?;

    assert_eq!(updated.price, dec!(12.50));
    assert_eq!(updated.name, "Banana");
    Ok(())
}

#[test]
fn product_listing_filters_by_establishment() -> anyhow::Result<()> {
    let store = Store::new();

    let first = store.create_establishment(establishment_payload("Mercado Um"))?;
    let second = store.create_establishment(establishment_payload("Mercado Dois"))?;
    store.create_product(product_payload("Banana", first.id, dec!(5.99)))?;
    store.create_product(product_payload("Maçã", first.id, dec!(7.50)))?;
    store.create_product(product_payload("Picanha", second.id, dec!(89.90)))?;

    assert_eq!(store.list_products(None)?.len(), 3);

    let filtered = store.list_products(Some(first.id))?;
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|p| p.establishment_id == first.id));

    assert!(store.list_products(Some(99))?.is_empty());
    Ok(())
}

#[test]
fn listing_keeps_insertion_order() -> anyhow::Result<()> {
    let store = Store::new();

    store.create_establishment(establishment_payload("Primeiro"))?;
    store.create_establishment(establishment_payload("Segundo"))?;
    store.create_establishment(establishment_payload("Terceiro"))?;

    let names: Vec<_> = store
        .list_establishments()?
        .into_iter()
        .map(|e| e.name)
        .collect();
    assert_eq!(names, ["Primeiro", "Segundo", "Terceiro"]);
    Ok(())
}

#[test]
fn deleting_establishment_keeps_its_products() -> anyhow::Result<()> {
    let store = Store::new();

    let establishment = store.create_establishment(establishment_payload("Mercado"))?;
    let product = store.create_product(product_payload("Banana", establishment.id, dec!(5.99)))?;

    store.delete_establishment(establishment.id)?;

    let orphan = store.get_product(product.id)?.expect("product kept");
    assert_eq!(orphan.establishment_id, establishment.id);
    Ok(())
}

#[test]
fn stats_count_live_rows_and_flagged_offers() -> anyhow::Result<()> {
    let store = Store::new();
    store.seed_demo_data()?;

    store.create_product(product_payload("Banana", 7, dec!(5.99)))?;
    store.create_product(product_payload("Picanha", 8, dec!(89.90)))?;

    // Three offers: one switched off, one already ended but still flagged
    // active. Only the flag counts.
    store.create_offer(offer_payload("Semana da Fruta", 7, true))?;
    store.create_offer(offer_payload("Queima de Estoque", 7, false))?;
    let mut expired = offer_payload("Oferta Antiga", 8, true);
    expired.start_date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    expired.end_date = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
    store.create_offer(expired)?;

    let stats = store.stats()?;
    assert_eq!(stats.total_establishments, 3);
    assert_eq!(stats.total_products, 2);
    assert_eq!(stats.active_offers, 2);
    assert_eq!(stats.monthly_revenue, 45_230);
    Ok(())
}

#[test]
fn stats_track_deletions() -> anyhow::Result<()> {
    let store = Store::new();

    let establishment = store.create_establishment(establishment_payload("Mercado"))?;
    let product = store.create_product(product_payload("Banana", establishment.id, dec!(5.99)))?;

    let stats = store.stats()?;
    assert_eq!(stats.total_establishments, 1);
    assert_eq!(stats.total_products, 1);

    store.delete_product(product.id)?;
    store.delete_establishment(establishment.id)?;

    let stats = store.stats()?;
    assert_eq!(stats.total_establishments, 0);
    assert_eq!(stats.total_products, 0);
    Ok(())
}

#[test]
fn seed_lays_out_categories_then_establishments() -> anyhow::Result<()> {
    let store = Store::new();
    store.seed_demo_data()?;

    let categories = store.list_categories()?;
    assert_eq!(categories.len(), 6);
    assert_eq!(categories.first().map(|c| c.id), Some(1));
    assert_eq!(categories.last().map(|c| c.id), Some(6));

    let establishments = store.list_establishments()?;
    assert_eq!(
        establishments.iter().map(|e| e.id).collect::<Vec<_>>(),
        [7, 8, 9]
    );
    // Mercearia Express (id 9) is the one pending establishment.
    assert_eq!(
        establishments.iter().map(|e| e.status).collect::<Vec<_>>(),
        [
            EstablishmentStatus::Active,
            EstablishmentStatus::Active,
            EstablishmentStatus::Pending
        ]
    );

    // The shared counter continues after the seeded rows.
    let next = store.create_establishment(establishment_payload("Novo Mercado"))?;
    assert_eq!(next.id, 10);
    Ok(())
}

fn establishment_payload(name: &str) -> CreateEstablishmentRequest {
    CreateEstablishmentRequest {
        name: name.to_string(),
        kind: EstablishmentType::Supermarket,
        address: "Rua A, 1".into(),
        phone: None,
        email: None,
        image_url: None,
        status: None,
    }
}

fn product_payload(name: &str, establishment_id: i32, price: Decimal) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        description: None,
        price,
        unit: "kg".into(),
        category_id: None,
        establishment_id,
        image_url: None,
        in_stock: None,
    }
}

fn offer_payload(title: &str, establishment_id: i32, is_active: bool) -> CreateOfferRequest {
    CreateOfferRequest {
        title: title.to_string(),
        description: None,
        discount_percentage: Some(dec!(10.00)),
        discount_amount: None,
        establishment_id,
        product_id: None,
        category_id: None,
        start_date: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        end_date: Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap(),
        is_active: Some(is_active),
    }
}
