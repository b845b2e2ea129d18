use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, UpdateQuantityRequest},
        items::NewItem,
    },
    models::Item,
    response::{CartTotalResponse, CheckoutResponse, ErrorResponse, MessageResponse},
    routes::{cart, checkout, health, items, params},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        items::insert_items,
        items::list_items,
        cart::add_to_cart,
        cart::update_quantity,
        cart::cart_total,
        checkout::checkout
    ),
    components(
        schemas(
            Item,
            NewItem,
            AddToCartRequest,
            UpdateQuantityRequest,
            params::SortOrder,
            health::HealthData,
            MessageResponse,
            ErrorResponse,
            CartTotalResponse,
            CheckoutResponse
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Items", description = "Catalog endpoints"),
        (name = "Cart", description = "Cart quantity endpoints"),
        (name = "Checkout", description = "Payment endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
