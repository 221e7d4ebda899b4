//! User repository - read-only access

use sqlx::PgPool;

use crate::models::{Page, PageRequest, User};
use crate::{Error, Result};

#[derive(Clone)]
pub struct UserRepository {
    db_pool: PgPool,
}

impl UserRepository {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    pub async fn list(&self, page: &PageRequest) -> Result<Page<User>> {
        let mut conn = self.db_pool.acquire().await.map_err(Error::Database)?;

        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, first_name, last_name FROM app_user \
             ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *conn)
        .await
        .map_err(Error::Database)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM app_user")
            .fetch_one(&mut *conn)
            .await
            .map_err(Error::Database)?;

        Ok(Page::from_parts(users, total, page))
    }

    pub async fn get(&self, id: i64) -> Result<User> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, first_name, last_name FROM app_user WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await
        .map_err(Error::Database)?
        .ok_or(Error::ResourceNotFound {
            resource: "User",
            id,
        })
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM app_user WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.db_pool)
            .await
            .map_err(Error::Database)
    }
}
