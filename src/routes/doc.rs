use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, UpdateCartItemRequest},
        categories::{CreateCategoryRequest, UpdateCategoryRequest},
        establishments::{CreateEstablishmentRequest, UpdateEstablishmentRequest},
        offers::{CreateOfferRequest, UpdateOfferRequest},
        orders::CreateOrderRequest,
        payment::{PaymentReceipt, PaymentRequest},
        products::{CreateProductRequest, UpdateProductRequest},
        stats::StatsResponse,
    },
    models::{
        CartItem, Category, Establishment, EstablishmentStatus, EstablishmentType, Offer, Order,
        OrderStatus, PaymentMethod, Product,
    },
    routes::{
        cart, categories, establishments, health, offers, orders, payment as payment_routes,
        products, stats,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        establishments::list_establishments,
        establishments::get_establishment,
        establishments::create_establishment,
        establishments::update_establishment,
        establishments::delete_establishment,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        offers::list_offers,
        offers::get_offer,
        offers::create_offer,
        offers::update_offer,
        offers::delete_offer,
        cart::cart_list,
        cart::add_to_cart,
        cart::update_cart_item,
        cart::remove_from_cart,
        orders::list_orders,
        orders::get_order,
        orders::create_order,
        payment_routes::pay,
        stats::get_stats
    ),
    components(
        schemas(
            Establishment,
            EstablishmentType,
            EstablishmentStatus,
            Category,
            Product,
            Offer,
            CartItem,
            Order,
            OrderStatus,
            PaymentMethod,
            CreateEstablishmentRequest,
            UpdateEstablishmentRequest,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            CreateProductRequest,
            UpdateProductRequest,
            CreateOfferRequest,
            UpdateOfferRequest,
            AddToCartRequest,
            UpdateCartItemRequest,
            CreateOrderRequest,
            PaymentRequest,
            PaymentReceipt,
            StatsResponse,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Establishments", description = "Establishment endpoints"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Offers", description = "Offer endpoints"),
        (name = "Cart", description = "Session cart endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Payment", description = "Mock payment endpoint"),
        (name = "Stats", description = "Dashboard statistics"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
