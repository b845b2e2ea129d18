use std::collections::HashSet;

use crate::{
    dto::items::NewItem,
    error::{AppError, AppResult},
    models::Item,
    response::MessageResponse,
    routes::params::ListItemsQuery,
    state::AppState,
};

pub async fn insert_items(state: &AppState, items: Vec<NewItem>) -> AppResult<MessageResponse> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        item.validate()?;
        if !seen.insert(item.id) {
            return Err(AppError::BadRequest(format!(
                "item id {} appears more than once in the batch",
                item.id
            )));
        }
    }

    let count = items.len();
    state.store.insert_many(items).await?;
    tracing::info!(count, "items inserted");

    Ok(MessageResponse::new("Items inserted successfully"))
}

pub async fn list_items(state: &AppState, query: ListItemsQuery) -> AppResult<Vec<Item>> {
    let order = query.sort_order()?;
    state.store.list_all_sorted_by_price(order).await
}
