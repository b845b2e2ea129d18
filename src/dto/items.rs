use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_CATEGORY_LEN: usize = 100;
pub const MAX_IMAGE_LEN: usize = 200;

/// One catalog record as accepted by `POST /insert_items`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NewItem {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image: Option<String>,
}

impl NewItem {
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::BadRequest(format!(
                "item {}: title must not be empty",
                self.id
            )));
        }
        if self.title.chars().count() > MAX_TITLE_LEN {
            return Err(AppError::BadRequest(format!(
                "item {}: title is longer than {MAX_TITLE_LEN} characters",
                self.id
            )));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::BadRequest(format!(
                "item {}: price must be a non-negative number",
                self.id
            )));
        }
        check_len(self.id, "category", self.category.as_deref(), MAX_CATEGORY_LEN)?;
        check_len(self.id, "image", self.image.as_deref(), MAX_IMAGE_LEN)?;
        Ok(())
    }
}

fn check_len(id: i64, field: &str, value: Option<&str>, max: usize) -> AppResult<()> {
    match value {
        Some(v) if v.chars().count() > max => Err(AppError::BadRequest(format!(
            "item {id}: {field} is longer than {max} characters"
        ))),
        _ => Ok(()),
    }
}
