use serde::Deserialize;
use utoipa::ToSchema;

/// `quantity` is a delta and may be negative.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AddToCartRequest {
    pub id: i64,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateQuantityRequest {
    pub id: i64,
    pub quantity: i32,
}
