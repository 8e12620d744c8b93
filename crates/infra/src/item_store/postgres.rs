//! Postgres-backed item store.
//!
//! ## Schema
//!
//! A single `items` table; ids come from a `BIGSERIAL` so the database owns
//! id assignment. [`PostgresItemStore::ensure_schema`] creates it if missing.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use depot_core::{ItemId, LocationId};
use depot_inventory::{Item, ItemRequest, ItemStore, StoreError};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id                       BIGSERIAL PRIMARY KEY,
    price                    DOUBLE PRECISION NOT NULL,
    name                     TEXT NOT NULL,
    location_id              BIGINT NOT NULL,
    requires_authorized_user BOOLEAN NOT NULL DEFAULT FALSE
)
"#;

const COLUMNS: &str = "id, price, name, location_id, requires_authorized_user";

pub struct PostgresItemStore {
    pool: PgPool,
}

impl PostgresItemStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a small pool and make sure the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(store_error)?;

        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(())
    }
}

fn store_error(err: sqlx::Error) -> StoreError {
    tracing::warn!(error = %err, "item store query failed");
    StoreError::backend(err.to_string())
}

fn row_to_item(row: &PgRow) -> Result<Item, sqlx::Error> {
    Ok(Item {
        id: ItemId::new(row.try_get("id")?),
        price: row.try_get("price")?,
        name: row.try_get("name")?,
        location_id: LocationId::new(row.try_get("location_id")?),
        requires_authorized_user: row.try_get("requires_authorized_user")?,
    })
}

#[async_trait]
impl ItemStore for PostgresItemStore {
    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM items ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(store_error)?;

        rows.iter()
            .map(row_to_item)
            .collect::<Result<Vec<_>, _>>()
            .map_err(store_error)
    }

    async fn get_item(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM items WHERE id = $1"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error)?;

        row.as_ref().map(row_to_item).transpose().map_err(store_error)
    }

    async fn create_item(&self, request: &ItemRequest) -> Result<Item, StoreError> {
        let row = sqlx::query(&format!(
            "INSERT INTO items (price, name, location_id, requires_authorized_user) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(request.price)
        .bind(&request.name)
        .bind(request.location_id.get())
        .bind(request.requires_authorized_user)
        .fetch_one(&self.pool)
        .await
        .map_err(store_error)?;

        row_to_item(&row).map_err(store_error)
    }

    async fn update_item(&self, item: &Item) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE items SET price = $1, name = $2, location_id = $3, requires_authorized_user = $4 \
             WHERE id = $5",
        )
        .bind(item.price)
        .bind(&item.name)
        .bind(item.location_id.get())
        .bind(item.requires_authorized_user)
        .bind(item.id.get())
        .execute(&self.pool)
        .await
        .map_err(store_error)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::backend(format!("item {} no longer exists", item.id)));
        }
        Ok(())
    }

    async fn delete_item(&self, item: &Item) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(item.id.get())
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(())
    }
}
