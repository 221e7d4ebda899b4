//! Tag repository
//!
//! Tag names are unique; creation maps the unique-violation onto
//! `DuplicateTag`. Deleting a tag cascades into the association table but
//! leaves certificates untouched.

use sqlx::PgPool;

use crate::models::{Page, PageRequest, Tag};
use crate::{Error, Result};

#[derive(Clone)]
pub struct TagRepository {
    db_pool: PgPool,
}

impl TagRepository {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    pub async fn list(&self, page: &PageRequest) -> Result<Page<Tag>> {
        let mut conn = self.db_pool.acquire().await.map_err(Error::Database)?;

        let tags = sqlx::query_as::<_, Tag>(
            "SELECT id, name FROM tag ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&mut *conn)
        .await
        .map_err(Error::Database)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tag")
            .fetch_one(&mut *conn)
            .await
            .map_err(Error::Database)?;

        Ok(Page::from_parts(tags, total, page))
    }

    pub async fn get(&self, id: i64) -> Result<Tag> {
        sqlx::query_as::<_, Tag>("SELECT id, name FROM tag WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(Error::Database)?
            .ok_or(Error::ResourceNotFound {
                resource: "Tag",
                id,
            })
    }

    pub async fn create(&self, name: &str) -> Result<Tag> {
        sqlx::query_as::<_, Tag>("INSERT INTO tag (name) VALUES ($1) RETURNING id, name")
            .bind(name)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| Error::from_tag_insert(e, name))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let deleted: Option<i64> = sqlx::query_scalar("DELETE FROM tag WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(Error::Database)?;

        deleted.map(|_| ()).ok_or(Error::ResourceNotFound {
            resource: "Tag",
            id,
        })
    }

    /// The most widely used tag among orders of the user with the highest
    /// aggregate order cost. Ties break toward the lower user id and the
    /// lexicographically smaller tag name so the answer is deterministic.
    ///
    /// Returns `None` when no orders exist at all.
    pub async fn most_used_of_top_spender(&self) -> Result<Option<Tag>> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.name FROM tag t \
             JOIN certificate_tag ct ON ct.tag_id = t.id \
             JOIN user_order o ON o.certificate_id = ct.certificate_id \
             WHERE o.user_id = (\
                 SELECT o2.user_id FROM user_order o2 \
                 GROUP BY o2.user_id \
                 ORDER BY SUM(o2.cost) DESC, o2.user_id ASC \
                 LIMIT 1) \
             GROUP BY t.id, t.name \
             ORDER BY COUNT(*) DESC, t.name ASC \
             LIMIT 1",
        )
        .fetch_optional(&self.db_pool)
        .await
        .map_err(Error::Database)
    }
}
