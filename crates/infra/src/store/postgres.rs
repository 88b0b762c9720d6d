//! Postgres-backed product store.
//!
//! One `products` table, uuid primary key. Every operation is a single
//! statement against the pool; `find_page` pairs a windowed select with a
//! count. sqlx errors surface as `StoreError::Backend` with their display
//! text, except a delete that matched no row, which is
//! `StoreError::Missing`.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;
use uuid::Uuid;

use catalog_core::{page_count, ProductId};
use catalog_products::{
    Product, ProductDraft, ProductPage, ProductStore, SortDirection, SortField, StoreError,
};

/// Product store persisting to PostgreSQL via a shared connection pool.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a fresh pool. The url is not logged; it may carry credentials.
    #[instrument(skip_all, err)]
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url).await.map_err(backend)?;
        Ok(Self { pool })
    }

    /// Create the `products` table when it is not there yet.
    ///
    /// Startup bootstrap only; anything beyond this single table belongs to
    /// a real migration tool.
    #[instrument(skip_all, err)]
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id UUID PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        Ok(())
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

fn sort_column(sort: SortField) -> &'static str {
    match sort {
        SortField::Id => "id",
        SortField::Name => "name",
        SortField::Description => "description",
        SortField::Price => "price",
    }
}

fn direction_sql(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, StoreError> {
    let id: uuid::Uuid = row.try_get("id").map_err(backend)?;
    let name: String = row.try_get("name").map_err(backend)?;
    let description: String = row.try_get("description").map_err(backend)?;
    let price: f64 = row.try_get("price").map_err(backend)?;
    Ok(Product::new(
        ProductId::from_uuid(id),
        ProductDraft {
            name,
            description,
            price,
        },
    ))
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self, draft), err)]
    async fn insert(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let product = Product::new(ProductId::new(), draft);
        sqlx::query("INSERT INTO products (id, name, description, price) VALUES ($1, $2, $3, $4)")
            .bind(Uuid::from(product.id()))
            .bind(product.name())
            .bind(product.description())
            .bind(product.price())
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(product)
    }

    #[instrument(skip(self), err)]
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query("SELECT id, name, description, price FROM products WHERE id = $1")
            .bind(Uuid::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;
        row.map(|r| product_from_row(&r)).transpose()
    }

    #[instrument(skip(self), err)]
    async fn find_page(
        &self,
        page_index: u32,
        size: u32,
        sort: SortField,
        direction: SortDirection,
    ) -> Result<ProductPage, StoreError> {
        // The column and direction come from closed enums, never caller text.
        let select = format!(
            "SELECT id, name, description, price FROM products \
             ORDER BY {} {}, id ASC LIMIT $1 OFFSET $2",
            sort_column(sort),
            direction_sql(direction),
        );
        let rows = sqlx::query(&select)
            .bind(i64::from(size))
            .bind(i64::from(page_index) * i64::from(size))
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(product_from_row(row)?);
        }

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(backend)?;
        let total_elements = total as u64;

        Ok(ProductPage {
            records,
            total_elements,
            total_pages: page_count(total_elements, size),
        })
    }

    #[instrument(skip(self, product), fields(id = %product.id()), err)]
    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price
            "#,
        )
        .bind(Uuid::from(product.id()))
        .bind(product.name())
        .bind(product.description())
        .bind(product.price())
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        Ok(product)
    }

    #[instrument(skip(self, product), fields(id = %product.id()), err)]
    async fn delete(&self, product: Product) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(Uuid::from(product.id()))
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::Missing(product.id()));
        }
        Ok(())
    }
}
