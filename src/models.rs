use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::items;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
    pub quantity: i32,
}

impl From<items::Model> for Item {
    fn from(model: items::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            price: model.price,
            description: model.description,
            category: model.category,
            image: model.image,
            quantity: model.quantity,
        }
    }
}
