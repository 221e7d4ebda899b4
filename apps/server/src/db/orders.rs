//! Order repository
//!
//! Order creation is a single transaction: the certificate price is read and
//! snapshotted into the order row, so later certificate price changes never
//! rewrite purchase history.

use sqlx::PgPool;

use crate::models::{Order, Page, PageRequest};
use crate::{Error, Result};

const ORDER_COLUMNS: &str = "id, user_id, certificate_id, cost, purchase_date";

#[derive(Clone)]
pub struct OrderRepository {
    db_pool: PgPool,
}

impl OrderRepository {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    pub async fn create(&self, user_id: i64, certificate_id: i64) -> Result<Order> {
        let mut tx = self.db_pool.begin().await.map_err(Error::Database)?;

        let user_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM app_user WHERE id = $1)")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(Error::Database)?;
        if !user_exists {
            return Err(Error::ResourceNotFound {
                resource: "User",
                id: user_id,
            });
        }

        let price: Option<rust_decimal::Decimal> =
            sqlx::query_scalar("SELECT price FROM gift_certificate WHERE id = $1")
                .bind(certificate_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(Error::Database)?;
        let Some(cost) = price else {
            return Err(Error::ResourceNotFound {
                resource: "Certificate",
                id: certificate_id,
            });
        };

        let order = sqlx::query_as::<_, Order>(&format!(
            "INSERT INTO user_order (user_id, certificate_id, cost, purchase_date) \
             VALUES ($1, $2, $3, now()) RETURNING {ORDER_COLUMNS}"
        ))
        .bind(user_id)
        .bind(certificate_id)
        .bind(cost)
        .fetch_one(&mut *tx)
        .await
        .map_err(Error::Database)?;

        tx.commit().await.map_err(Error::Database)?;

        Ok(order)
    }

    pub async fn list_for_user(&self, user_id: i64, page: &PageRequest) -> Result<Page<Order>> {
        let mut conn = self.db_pool.acquire().await.map_err(Error::Database)?;

        let orders = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM user_order WHERE user_id = $1 \
             ORDER BY purchase_date DESC, id DESC LIMIT $2 OFFSET $3"
        ))
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *conn)
        .await
        .map_err(Error::Database)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM user_order WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&mut *conn)
            .await
            .map_err(Error::Database)?;

        Ok(Page::from_parts(orders, total, page))
    }

    pub async fn get_for_user(&self, user_id: i64, order_id: i64) -> Result<Order> {
        sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM user_order WHERE id = $1 AND user_id = $2"
        ))
        .bind(order_id)
        .bind(user_id)
        .fetch_optional(&self.db_pool)
        .await
        .map_err(Error::Database)?
        .ok_or(Error::ResourceNotFound {
            resource: "Order",
            id: order_id,
        })
    }
}
