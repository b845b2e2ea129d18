use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr, TransactionTrait, sea_query::Expr,
};

use crate::{
    dto::items::NewItem,
    entity::items::{ActiveModel, Column, Entity as Items},
    error::{AppError, AppResult},
    models::Item,
    routes::params::SortOrder,
};

/// Rows per statement when checking or writing a batch; keeps every statement
/// well under SQLite's bound-parameter limit.
const BATCH_CHUNK: usize = 100;

/// Outcome of a conditional quantity increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementOutcome {
    Applied,
    NotFound,
    WouldGoNegative,
    WouldOverflow,
}

/// Durable catalog of items and their cart quantities.
#[derive(Clone)]
pub struct CatalogStore {
    orm: DatabaseConnection,
}

impl CatalogStore {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }

    pub async fn get(&self, id: i64) -> AppResult<Option<Item>> {
        let item = Items::find_by_id(id).one(&self.orm).await?.map(Item::from);
        Ok(item)
    }

    /// Inserts the whole batch in one transaction. Fails with `Conflict`
    /// without writing anything when any id is already taken.
    pub async fn insert_many(&self, items: Vec<NewItem>) -> AppResult<()> {
        if items.is_empty() {
            return Ok(());
        }

        let ids: Vec<i64> = items.iter().map(|item| item.id).collect();
        let txn = self.orm.begin().await?;

        for chunk in ids.chunks(BATCH_CHUNK) {
            let taken: Option<i64> = Items::find()
                .select_only()
                .column(Column::Id)
                .filter(Column::Id.is_in(chunk.iter().copied()))
                .order_by_asc(Column::Id)
                .into_tuple()
                .one(&txn)
                .await?;
            if let Some(id) = taken {
                return Err(duplicate_id(id));
            }
        }

        for chunk in items.chunks(BATCH_CHUNK) {
            let models = chunk.iter().cloned().map(|item| ActiveModel {
                id: Set(item.id),
                title: Set(item.title),
                price: Set(item.price),
                description: Set(item.description),
                category: Set(item.category),
                image: Set(item.image),
                quantity: Set(0),
            });
            Items::insert_many(models)
                .exec_without_returning(&txn)
                .await
                .map_err(map_unique_violation)?;
        }
        txn.commit().await?;
        Ok(())
    }

    /// Full scan ordered by price; equal prices are ordered by id.
    pub async fn list_all_sorted_by_price(&self, order: SortOrder) -> AppResult<Vec<Item>> {
        let finder = match order {
            SortOrder::Asc => Items::find().order_by_asc(Column::Price),
            SortOrder::Desc => Items::find().order_by_desc(Column::Price),
        };
        let items = finder
            .order_by_asc(Column::Id)
            .all(&self.orm)
            .await?
            .into_iter()
            .map(Item::from)
            .collect();
        Ok(items)
    }

    /// Overwrites the quantity. Returns `false` when the item does not exist.
    pub async fn set_quantity(&self, id: i64, value: i32) -> AppResult<bool> {
        let result = Items::update_many()
            .col_expr(Column::Quantity, Expr::value(value))
            .filter(Column::Id.eq(id))
            .exec(&self.orm)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Adds `delta` in a single conditional UPDATE so concurrent callers never
    /// lose increments. The row is left untouched if the result would leave
    /// the `0..=i32::MAX` range.
    pub async fn increment_quantity(&self, id: i64, delta: i32) -> AppResult<IncrementOutcome> {
        let delta_wide = i64::from(delta);
        let result = Items::update_many()
            .col_expr(Column::Quantity, Expr::col(Column::Quantity).add(delta))
            .filter(Column::Id.eq(id))
            .filter(Column::Quantity.gte(-delta_wide))
            .filter(Column::Quantity.lte(i64::from(i32::MAX) - delta_wide))
            .exec(&self.orm)
            .await?;
        if result.rows_affected > 0 {
            return Ok(IncrementOutcome::Applied);
        }

        let outcome = match Items::find_by_id(id).one(&self.orm).await? {
            None => IncrementOutcome::NotFound,
            Some(item) if i64::from(item.quantity) + delta_wide < 0 => {
                IncrementOutcome::WouldGoNegative
            }
            Some(_) => IncrementOutcome::WouldOverflow,
        };
        Ok(outcome)
    }

    /// Sum of `price * quantity` over every item.
    pub async fn cart_total(&self) -> AppResult<f64> {
        let rows: Vec<(f64, i32)> = Items::find()
            .select_only()
            .column(Column::Price)
            .column(Column::Quantity)
            .into_tuple()
            .all(&self.orm)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(price, quantity)| price * f64::from(quantity))
            .sum())
    }
}

fn duplicate_id(id: i64) -> AppError {
    AppError::Conflict(format!("Item with id {id} already exists"))
}

fn map_unique_violation(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!(detail = %detail, "concurrent insert collided on item id");
            AppError::Conflict("Item id already exists".to_string())
        }
        _ => err.into(),
    }
}
