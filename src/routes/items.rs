use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::items::NewItem,
    error::AppResult,
    extract::{ValidJson, ValidQuery},
    models::Item,
    response::MessageResponse,
    routes::params::ListItemsQuery,
    services::item_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/insert_items", post(insert_items))
        .route("/list_items", get(list_items))
}

#[utoipa::path(
    post,
    path = "/insert_items",
    request_body = Vec<NewItem>,
    responses(
        (status = 201, description = "Items inserted", body = MessageResponse),
        (status = 400, description = "Malformed or invalid item", body = MessageResponse),
        (status = 409, description = "An item id already exists", body = MessageResponse),
    ),
    tag = "Items"
)]
pub async fn insert_items(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<Vec<NewItem>>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let response = item_service::insert_items(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/list_items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "All items ordered by price", body = Vec<Item>),
        (status = 400, description = "Invalid sort parameter", body = MessageResponse),
    ),
    tag = "Items"
)]
pub async fn list_items(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ListItemsQuery>,
) -> AppResult<Json<Vec<Item>>> {
    let items = item_service::list_items(&state, query).await?;
    Ok(Json(items))
}
