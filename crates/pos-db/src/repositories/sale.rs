//! SQLite implementation of the sale repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use pos_core::entities::{Sale, SaleLine, SaleSummary};
use pos_core::error::DomainError;
use pos_core::traits::{NewSale, RepoResult, SaleRepository};
use pos_core::value_objects::SaleId;

use crate::models::{SaleLineModel, SaleModel, SaleWithCreatorModel};
use crate::repositories::error::{map_db_error, product_not_found};

/// SQLite-backed sale repository
///
/// Recording a sale writes the sale row, its line items, and the stock
/// decrements in one transaction; a failure on any line rolls back all of it.
#[derive(Clone)]
pub struct SqliteSaleRepository {
    pool: SqlitePool,
}

impl SqliteSaleRepository {
    /// Create a new repository with the given connection pool
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleRepository for SqliteSaleRepository {
    #[instrument(skip(self, sale))]
    async fn record(&self, sale: &NewSale) -> RepoResult<SaleId> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            INSERT INTO sales (customer_name, customer_email, total, created_by, created_at)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(&sale.customer_name)
        .bind(&sale.customer_email)
        .bind(sale.total.to_string())
        .bind(sale.created_by.into_inner())
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let sale_id = SaleId::new(result.last_insert_rowid());

        for item in &sale.items {
            // The guard only fires when the product is active and has the
            // stock; zero rows means it vanished or ran dry under us.
            let decremented = sqlx::query(
                r"
                UPDATE products
                SET quantity = quantity - ?1
                WHERE id = ?2 AND is_deleted = 0 AND quantity >= ?1
                ",
            )
            .bind(item.quantity)
            .bind(item.product_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            if decremented.rows_affected() == 0 {
                let available = sqlx::query_scalar::<_, i64>(
                    "SELECT quantity FROM products WHERE id = ? AND is_deleted = 0",
                )
                .bind(item.product_id.into_inner())
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_db_error)?;

                // Dropping the transaction rolls back the sale row and any
                // lines already written.
                return match available {
                    Some(available) => Err(DomainError::InsufficientStock {
                        product_id: item.product_id,
                        requested: item.quantity,
                        available,
                    }),
                    None => Err(product_not_found(item.product_id)),
                };
            }

            sqlx::query(
                r"
                INSERT INTO sale_items (sale_id, product_id, quantity, price)
                VALUES (?, ?, ?, ?)
                ",
            )
            .bind(sale_id.into_inner())
            .bind(item.product_id.into_inner())
            .bind(item.quantity)
            .bind(item.price.to_string())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(sale_id)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: SaleId) -> RepoResult<Option<Sale>> {
        let model = sqlx::query_as::<_, SaleModel>(
            r"
            SELECT id, customer_name, customer_email, total, created_by, created_at
            FROM sales
            WHERE id = ?
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        model.map(Sale::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<SaleSummary>> {
        let models = sqlx::query_as::<_, SaleWithCreatorModel>(
            r"
            SELECT s.id, s.customer_name, s.customer_email, s.total,
                   s.created_by, s.created_at,
                   u.first_name AS creator_first_name,
                   u.last_name AS creator_last_name
            FROM sales s
            LEFT JOIN users u ON u.id = s.created_by
            ORDER BY s.created_at DESC, s.id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(SaleSummary::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn list_for_customer(&self, email: &str) -> RepoResult<Vec<Sale>> {
        let models = sqlx::query_as::<_, SaleModel>(
            r"
            SELECT id, customer_name, customer_email, total, created_by, created_at
            FROM sales
            WHERE customer_email = ?
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(Sale::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn line_items(&self, id: SaleId) -> RepoResult<Vec<SaleLine>> {
        let models = sqlx::query_as::<_, SaleLineModel>(
            r"
            SELECT si.product_id, p.name AS product_name, p.sku AS product_sku,
                   si.quantity, si.price
            FROM sale_items si
            JOIN products p ON p.id = si.product_id
            WHERE si.sale_id = ?
            ORDER BY si.id
            ",
        )
        .bind(id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        models.into_iter().map(SaleLine::try_from).collect()
    }
}
