//! The Catalog & Commerce Store: sole authority over entity state.
//!
//! One store instance owns every table plus a single id counter shared
//! across all entity kinds, so ids are strictly increasing over the whole
//! process and never repeat between kinds. Tables are `BTreeMap`s keyed by
//! id; because ids are never reused, ascending-key iteration is insertion
//! order, which callers rely on across repeated list calls.
//!
//! Each operation takes the lock once and runs to completion, making every
//! store operation atomic with respect to every other. Nothing outside this
//! module mutates the tables.

use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use anyhow::anyhow;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::{
    dto::{
        cart::AddToCartRequest,
        categories::{CreateCategoryRequest, UpdateCategoryRequest},
        establishments::{CreateEstablishmentRequest, UpdateEstablishmentRequest},
        offers::{CreateOfferRequest, UpdateOfferRequest},
        orders::{CreateOrderRequest, UpdateOrderRequest},
        products::{CreateProductRequest, UpdateProductRequest},
        stats::StatsResponse,
    },
    error::{AppError, AppResult},
    models::{
        CartItem, Category, Establishment, EstablishmentStatus, EstablishmentType, Offer, Order,
        OrderStatus, Product,
    },
};

// Fixed dashboard figure; stored orders are not aggregated into it.
const MONTHLY_REVENUE_STUB: i64 = 45_230;

#[derive(Debug, Default)]
struct Tables {
    next_id: i32,
    establishments: BTreeMap<i32, Establishment>,
    categories: BTreeMap<i32, Category>,
    products: BTreeMap<i32, Product>,
    offers: BTreeMap<i32, Offer>,
    cart_items: BTreeMap<i32, CartItem>,
    orders: BTreeMap<i32, Order>,
}

impl Tables {
    /// Next value of the counter shared by every entity kind.
    fn alloc_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn insert_order(&mut self, session_id: &str, payload: CreateOrderRequest) -> Order {
        let order = Order {
            id: self.alloc_id(),
            session_id: session_id.to_string(),
            establishment_id: payload.establishment_id,
            total_amount: payload.total_amount,
            status: payload.status.unwrap_or(OrderStatus::Pending),
            payment_method: payload.payment_method,
            created_at: Utc::now(),
        };
        self.orders.insert(order.id, order.clone());
        order
    }
}

/// In-memory store. State lives for the process lifetime and is gone on
/// restart; construct one instance per server (or per test, for isolation)
/// and share it behind an `Arc`.
pub struct Store {
    tables: RwLock<Tables>,
}

impl Store {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                next_id: 1,
                ..Tables::default()
            }),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| AppError::Internal(anyhow!("store lock poisoned")))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| AppError::Internal(anyhow!("store lock poisoned")))
    }

    // Establishments

    pub fn list_establishments(&self) -> AppResult<Vec<Establishment>> {
        Ok(self.read()?.establishments.values().cloned().collect())
    }

    pub fn get_establishment(&self, id: i32) -> AppResult<Option<Establishment>> {
        Ok(self.read()?.establishments.get(&id).cloned())
    }

    pub fn create_establishment(
        &self,
        payload: CreateEstablishmentRequest,
    ) -> AppResult<Establishment> {
        let mut tables = self.write()?;
        let establishment = Establishment {
            id: tables.alloc_id(),
            name: payload.name,
            kind: payload.kind,
            address: payload.address,
            phone: payload.phone,
            email: payload.email,
            image_url: payload.image_url,
            status: payload.status.unwrap_or(EstablishmentStatus::Active),
            created_at: Utc::now(),
        };
        tables
            .establishments
            .insert(establishment.id, establishment.clone());
        Ok(establishment)
    }

    pub fn update_establishment(
        &self,
        id: i32,
        patch: UpdateEstablishmentRequest,
    ) -> AppResult<Establishment> {
        let mut tables = self.write()?;
        let establishment = tables.establishments.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(name) = patch.name {
            establishment.name = name;
        }
        if let Some(kind) = patch.kind {
            establishment.kind = kind;
        }
        if let Some(address) = patch.address {
            establishment.address = address;
        }
        if let Some(phone) = patch.phone {
            establishment.phone = phone;
        }
        if let Some(email) = patch.email {
            establishment.email = email;
        }
        if let Some(image_url) = patch.image_url {
            establishment.image_url = image_url;
        }
        if let Some(status) = patch.status {
            establishment.status = status;
        }
        Ok(establishment.clone())
    }

    /// Deleting an absent id is a silent no-op; only updates insist the row
    /// exists. No cascade: products and offers keep their establishment id.
    pub fn delete_establishment(&self, id: i32) -> AppResult<()> {
        self.write()?.establishments.remove(&id);
        Ok(())
    }

    // Categories

    pub fn list_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    pub fn get_category(&self, id: i32) -> AppResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    pub fn create_category(&self, payload: CreateCategoryRequest) -> AppResult<Category> {
        let mut tables = self.write()?;
        let category = Category {
            id: tables.alloc_id(),
            name: payload.name,
            icon: payload.icon,
            color: payload.color,
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    pub fn update_category(&self, id: i32, patch: UpdateCategoryRequest) -> AppResult<Category> {
        let mut tables = self.write()?;
        let category = tables.categories.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(name) = patch.name {
            category.name = name;
        }
        if let Some(icon) = patch.icon {
            category.icon = icon;
        }
        if let Some(color) = patch.color {
            category.color = color;
        }
        Ok(category.clone())
    }

    pub fn delete_category(&self, id: i32) -> AppResult<()> {
        self.write()?.categories.remove(&id);
        Ok(())
    }

    // Products

    pub fn list_products(&self, establishment_id: Option<i32>) -> AppResult<Vec<Product>> {
        let tables = self.read()?;
        Ok(tables
            .products
            .values()
            .filter(|product| establishment_id.is_none_or(|e| product.establishment_id == e))
            .cloned()
            .collect())
    }

    pub fn get_product(&self, id: i32) -> AppResult<Option<Product>> {
        Ok(self.read()?.products.get(&id).cloned())
    }

    pub fn create_product(&self, payload: CreateProductRequest) -> AppResult<Product> {
        let mut tables = self.write()?;
        let product = Product {
            id: tables.alloc_id(),
            name: payload.name,
            description: payload.description,
            price: payload.price,
            unit: payload.unit,
            category_id: payload.category_id,
            establishment_id: payload.establishment_id,
            image_url: payload.image_url,
            in_stock: payload.in_stock.unwrap_or(true),
            created_at: Utc::now(),
        };
        tables.products.insert(product.id, product.clone());
        Ok(product)
    }

    pub fn update_product(&self, id: i32, patch: UpdateProductRequest) -> AppResult<Product> {
        let mut tables = self.write()?;
        let product = tables.products.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(unit) = patch.unit {
            product.unit = unit;
        }
        if let Some(category_id) = patch.category_id {
            product.category_id = category_id;
        }
        if let Some(establishment_id) = patch.establishment_id {
            product.establishment_id = establishment_id;
        }
        if let Some(image_url) = patch.image_url {
            product.image_url = image_url;
        }
        if let Some(in_stock) = patch.in_stock {
            product.in_stock = in_stock;
        }
        Ok(product.clone())
    }

    pub fn delete_product(&self, id: i32) -> AppResult<()> {
        self.write()?.products.remove(&id);
        Ok(())
    }

    // Offers

    pub fn list_offers(&self, establishment_id: Option<i32>) -> AppResult<Vec<Offer>> {
        let tables = self.read()?;
        Ok(tables
            .offers
            .values()
            .filter(|offer| establishment_id.is_none_or(|e| offer.establishment_id == e))
            .cloned()
            .collect())
    }

    pub fn get_offer(&self, id: i32) -> AppResult<Option<Offer>> {
        Ok(self.read()?.offers.get(&id).cloned())
    }

    pub fn create_offer(&self, payload: CreateOfferRequest) -> AppResult<Offer> {
        let mut tables = self.write()?;
        let offer = Offer {
            id: tables.alloc_id(),
            title: payload.title,
            description: payload.description,
            discount_percentage: payload.discount_percentage,
            discount_amount: payload.discount_amount,
            establishment_id: payload.establishment_id,
            product_id: payload.product_id,
            category_id: payload.category_id,
            start_date: payload.start_date,
            end_date: payload.end_date,
            is_active: payload.is_active.unwrap_or(true),
            created_at: Utc::now(),
        };
        tables.offers.insert(offer.id, offer.clone());
        Ok(offer)
    }

    pub fn update_offer(&self, id: i32, patch: UpdateOfferRequest) -> AppResult<Offer> {
        let mut tables = self.write()?;
        let offer = tables.offers.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(title) = patch.title {
            offer.title = title;
        }
        if let Some(description) = patch.description {
            offer.description = description;
        }
        if let Some(discount_percentage) = patch.discount_percentage {
            offer.discount_percentage = discount_percentage;
        }
        if let Some(discount_amount) = patch.discount_amount {
            offer.discount_amount = discount_amount;
        }
        if let Some(establishment_id) = patch.establishment_id {
            offer.establishment_id = establishment_id;
        }
        if let Some(product_id) = patch.product_id {
            offer.product_id = product_id;
        }
        if let Some(category_id) = patch.category_id {
            offer.category_id = category_id;
        }
        if let Some(start_date) = patch.start_date {
            offer.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            offer.end_date = end_date;
        }
        if let Some(is_active) = patch.is_active {
            offer.is_active = is_active;
        }
        Ok(offer.clone())
    }

    pub fn delete_offer(&self, id: i32) -> AppResult<()> {
        self.write()?.offers.remove(&id);
        Ok(())
    }

    // Cart

    pub fn list_cart(&self, session_id: &str) -> AppResult<Vec<CartItem>> {
        let tables = self.read()?;
        Ok(tables
            .cart_items
            .values()
            .filter(|item| item.session_id == session_id)
            .cloned()
            .collect())
    }

    /// Always appends a fresh row; adding the same product twice in one
    /// session yields two rows rather than a merged quantity.
    pub fn add_to_cart(&self, session_id: &str, payload: AddToCartRequest) -> AppResult<CartItem> {
        let mut tables = self.write()?;
        let item = CartItem {
            id: tables.alloc_id(),
            session_id: session_id.to_string(),
            product_id: payload.product_id,
            quantity: payload.quantity,
            created_at: Utc::now(),
        };
        tables.cart_items.insert(item.id, item.clone());
        Ok(item)
    }

    pub fn update_cart_item(&self, id: i32, quantity: Decimal) -> AppResult<CartItem> {
        let mut tables = self.write()?;
        let item = tables.cart_items.get_mut(&id).ok_or(AppError::NotFound)?;
        item.quantity = quantity;
        Ok(item.clone())
    }

    pub fn remove_from_cart(&self, id: i32) -> AppResult<()> {
        self.write()?.cart_items.remove(&id);
        Ok(())
    }

    /// Drops every cart row for the session; other sessions are untouched.
    pub fn clear_cart(&self, session_id: &str) -> AppResult<()> {
        self.write()?
            .cart_items
            .retain(|_, item| item.session_id != session_id);
        Ok(())
    }

    // Orders

    pub fn list_orders(&self) -> AppResult<Vec<Order>> {
        Ok(self.read()?.orders.values().cloned().collect())
    }

    pub fn get_order(&self, id: i32) -> AppResult<Option<Order>> {
        Ok(self.read()?.orders.get(&id).cloned())
    }

    pub fn create_order(&self, session_id: &str, payload: CreateOrderRequest) -> AppResult<Order> {
        let mut tables = self.write()?;
        Ok(tables.insert_order(session_id, payload))
    }

    pub fn update_order(&self, id: i32, patch: UpdateOrderRequest) -> AppResult<Order> {
        let mut tables = self.write()?;
        let order = tables.orders.get_mut(&id).ok_or(AppError::NotFound)?;
        if let Some(session_id) = patch.session_id {
            order.session_id = session_id;
        }
        if let Some(establishment_id) = patch.establishment_id {
            order.establishment_id = establishment_id;
        }
        if let Some(total_amount) = patch.total_amount {
            order.total_amount = total_amount;
        }
        if let Some(status) = patch.status {
            order.status = status;
        }
        if let Some(payment_method) = patch.payment_method {
            order.payment_method = payment_method;
        }
        Ok(order.clone())
    }

    /// Creates the order and clears the session's cart in a single critical
    /// section. `create_order` followed by `clear_cart` gives the same
    /// result when uncontended, but a crash or an interleaved writer between
    /// the two calls could leave a cart alive alongside its order; this
    /// cannot.
    pub fn checkout(&self, session_id: &str, payload: CreateOrderRequest) -> AppResult<Order> {
        let mut tables = self.write()?;
        let order = tables.insert_order(session_id, payload);
        tables
            .cart_items
            .retain(|_, item| item.session_id != session_id);
        Ok(order)
    }

    // Stats

    pub fn stats(&self) -> AppResult<StatsResponse> {
        let tables = self.read()?;
        Ok(StatsResponse {
            total_establishments: tables.establishments.len() as i64,
            total_products: tables.products.len() as i64,
            // Flag-only count; an expired offer still flagged active is
            // included, unlike the storefront's per-offer display logic.
            active_offers: tables.offers.values().filter(|offer| offer.is_active).count() as i64,
            monthly_revenue: MONTHLY_REVENUE_STUB,
        })
    }

    // Seed

    /// Loads the demo catalog a fresh server process serves: six categories
    /// (ids 1-6) followed by three establishments (ids 7-9), leaving the
    /// counter at 10. `Store::new` stays empty so tests get isolated
    /// instances; the server binary calls this once at startup.
    pub fn seed_demo_data(&self) -> AppResult<()> {
        let categories = [
            ("Frutas", "fas fa-apple-alt", "text-success"),
            ("Verduras", "fas fa-carrot", "text-warning"),
            ("Carnes", "fas fa-drumstick-bite", "text-danger"),
            ("Padaria", "fas fa-bread-slice", "text-yellow-600"),
            ("Laticínios", "fas fa-cheese", "text-yellow-500"),
            ("Bebidas", "fas fa-bottle-water", "text-blue-500"),
        ];
        for (name, icon, color) in categories {
            self.create_category(CreateCategoryRequest {
                name: name.to_string(),
                icon: icon.to_string(),
                color: color.to_string(),
            })?;
        }

        self.create_establishment(CreateEstablishmentRequest {
            name: "Supermercado Central".to_string(),
            kind: EstablishmentType::Supermarket,
            address: "Rua das Flores, 123 - Centro".to_string(),
            phone: Some("(11) 3456-7890".to_string()),
            email: Some("contato@supermercadocentral.com".to_string()),
            image_url: Some(
                "https://images.unsplash.com/photo-1542838132-92c53300491e?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=80&h=80"
                    .to_string(),
            ),
            status: Some(EstablishmentStatus::Active),
        })?;
        self.create_establishment(CreateEstablishmentRequest {
            name: "Açougue do Bairro".to_string(),
            kind: EstablishmentType::Butcher,
            address: "Av. Principal, 456 - Jardim".to_string(),
            phone: Some("(11) 9876-5432".to_string()),
            email: Some("contato@acouguebairro.com".to_string()),
            image_url: Some(
                "https://images.unsplash.com/photo-1607623814075-e51df1bdc82f?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=80&h=80"
                    .to_string(),
            ),
            status: Some(EstablishmentStatus::Active),
        })?;
        self.create_establishment(CreateEstablishmentRequest {
            name: "Mercearia Express".to_string(),
            kind: EstablishmentType::Grocery,
            address: "Rua Nova, 789 - Vila".to_string(),
            phone: Some("(11) 1234-5678".to_string()),
            email: Some("contato@mercariaexpress.com".to_string()),
            image_url: Some(
                "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=80&h=80"
                    .to_string(),
            ),
            status: Some(EstablishmentStatus::Pending),
        })?;

        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
