//! SQLite implementation of the product repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use pos_core::entities::Product;
use pos_core::error::DomainError;
use pos_core::traits::{NewProduct, ProductChanges, ProductRepository, RepoResult};
use pos_core::value_objects::ProductId;

use crate::models::ProductModel;
use crate::repositories::error::{map_db_error, map_unique_violation, product_not_found};

/// SQLite-backed product repository
///
/// Reads only see active rows; retired products stay behind for the
/// sale lines that reference them.
#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new repository with the given connection pool
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    #[instrument(skip(self))]
    async fn create(&self, product: &NewProduct) -> RepoResult<ProductId> {
        let result = sqlx::query(
            r"
            INSERT INTO products (name, sku, quantity, price, created_at)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(&product.name)
        .bind(&product.sku)
        .bind(product.quantity)
        .bind(product.price.to_string())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateSku(product.sku.clone())))?;

        Ok(ProductId::new(result.last_insert_rowid()))
    }

    #[instrument(skip(self))]
    async fn find_active(&self, id: ProductId) -> RepoResult<Option<Product>> {
        let model = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, sku, quantity, price, is_deleted, created_at
            FROM products
            WHERE id = ? AND is_deleted = 0
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Product::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_active(&self) -> RepoResult<Vec<Product>> {
        let models = sqlx::query_as::<_, ProductModel>(
            r"
            SELECT id, name, sku, quantity, price, is_deleted, created_at
            FROM products
            WHERE is_deleted = 0
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Product::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn update(&self, id: ProductId, changes: &ProductChanges) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE products
            SET name = ?, sku = ?, quantity = ?, price = ?
            WHERE id = ? AND is_deleted = 0
            ",
        )
        .bind(&changes.name)
        .bind(&changes.sku)
        .bind(changes.quantity)
        .bind(changes.price.to_string())
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateSku(changes.sku.clone())))?;

        if result.rows_affected() == 0 {
            return Err(product_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: ProductId) -> RepoResult<()> {
        // Idempotent: retiring a missing or already retired product is a no-op.
        sqlx::query("UPDATE products SET is_deleted = 1 WHERE id = ?")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
