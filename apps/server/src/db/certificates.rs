//! Certificate repository - CRUD and tag association management
//!
//! The search read path lives in `db::search`; this module owns the mutation
//! path and single-certificate reads. Tags referenced by a certificate are
//! created on the fly when missing, and the `certificate_tag` pair table is
//! kept free of duplicates by its composite primary key.

use std::collections::HashMap;

use rust_decimal::Decimal;
use sqlx::{PgConnection, PgPool};

use crate::models::Certificate;
use crate::{Error, Result};

/// A `gift_certificate` row without its tags.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CertificateRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub duration: i32,
    pub create_date: chrono::DateTime<chrono::Utc>,
    pub last_update_date: chrono::DateTime<chrono::Utc>,
}

impl CertificateRow {
    pub fn into_certificate(self, tags: Vec<String>) -> Certificate {
        Certificate {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            duration: self.duration,
            create_date: self.create_date,
            last_update_date: self.last_update_date,
            tags,
        }
    }
}

/// Fields for a new certificate.
#[derive(Debug, Clone)]
pub struct NewCertificate {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub duration: i32,
    pub tags: Vec<String>,
}

/// Partial update; absent fields keep their current value. `tags: Some(..)`
/// replaces the full attached set.
#[derive(Debug, Clone, Default)]
pub struct CertificatePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub duration: Option<i32>,
    pub tags: Option<Vec<String>>,
}

impl CertificatePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.duration.is_none()
            && self.tags.is_none()
    }
}

#[derive(Clone)]
pub struct CertificateRepository {
    db_pool: PgPool,
}

impl CertificateRepository {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    pub async fn get(&self, id: i64) -> Result<Certificate> {
        let mut conn = self.db_pool.acquire().await.map_err(Error::Database)?;

        let row = sqlx::query_as::<_, CertificateRow>(
            "SELECT id, name, description, price, duration, create_date, last_update_date \
             FROM gift_certificate WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(Error::Database)?
        .ok_or(Error::ResourceNotFound {
            resource: "Certificate",
            id,
        })?;

        let mut tags = load_tag_names(&mut conn, &[row.id]).await?;
        let names = tags.remove(&row.id).unwrap_or_default();
        Ok(row.into_certificate(names))
    }

    pub async fn create(&self, data: NewCertificate) -> Result<Certificate> {
        let mut tx = self.db_pool.begin().await.map_err(Error::Database)?;

        let row = sqlx::query_as::<_, CertificateRow>(
            "INSERT INTO gift_certificate (name, description, price, duration, create_date, last_update_date) \
             VALUES ($1, $2, $3, $4, now(), now()) \
             RETURNING id, name, description, price, duration, create_date, last_update_date",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.duration)
        .fetch_one(&mut *tx)
        .await
        .map_err(Error::Database)?;

        let tags = attach_tags(&mut tx, row.id, &data.tags).await?;

        tx.commit().await.map_err(Error::Database)?;

        Ok(row.into_certificate(tags))
    }

    pub async fn update(&self, id: i64, patch: CertificatePatch) -> Result<Certificate> {
        let mut tx = self.db_pool.begin().await.map_err(Error::Database)?;

        let row = sqlx::query_as::<_, CertificateRow>(
            "UPDATE gift_certificate SET \
             name = COALESCE($2, name), \
             description = COALESCE($3, description), \
             price = COALESCE($4, price), \
             duration = COALESCE($5, duration), \
             last_update_date = now() \
             WHERE id = $1 \
             RETURNING id, name, description, price, duration, create_date, last_update_date",
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.price)
        .bind(patch.duration)
        .fetch_optional(&mut *tx)
        .await
        .map_err(Error::Database)?
        .ok_or(Error::ResourceNotFound {
            resource: "Certificate",
            id,
        })?;

        let tags = match patch.tags {
            Some(names) => {
                sqlx::query("DELETE FROM certificate_tag WHERE certificate_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await
                    .map_err(Error::Database)?;
                attach_tags(&mut tx, id, &names).await?
            }
            None => {
                let mut tags = load_tag_names(&mut *tx, &[id]).await?;
                tags.remove(&id).unwrap_or_default()
            }
        };

        tx.commit().await.map_err(Error::Database)?;

        Ok(row.into_certificate(tags))
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let deleted: Option<i64> =
            sqlx::query_scalar("DELETE FROM gift_certificate WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&self.db_pool)
                .await
                .map_err(Error::Database)?;

        deleted.map(|_| ()).ok_or(Error::ResourceNotFound {
            resource: "Certificate",
            id,
        })
    }
}

/// Get-or-create the named tags and associate them with the certificate.
///
/// Returns the attached names sorted, matching the read-path output order.
async fn attach_tags(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    certificate_id: i64,
    names: &[String],
) -> Result<Vec<String>> {
    let mut attached: Vec<String> = Vec::with_capacity(names.len());

    for name in names {
        if name.is_empty() || attached.iter().any(|n| n == name) {
            continue;
        }

        // DO UPDATE makes the insert return the existing row's id on conflict.
        let tag_id: i64 = sqlx::query_scalar(
            "INSERT INTO tag (name) VALUES ($1) \
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
             RETURNING id",
        )
        .bind(name)
        .fetch_one(&mut **tx)
        .await
        .map_err(Error::Database)?;

        sqlx::query(
            "INSERT INTO certificate_tag (certificate_id, tag_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(certificate_id)
        .bind(tag_id)
        .execute(&mut **tx)
        .await
        .map_err(Error::Database)?;

        attached.push(name.clone());
    }

    attached.sort();
    Ok(attached)
}

/// Batch-load tag names for a set of certificates with one query.
pub async fn load_tag_names(
    conn: &mut PgConnection,
    certificate_ids: &[i64],
) -> Result<HashMap<i64, Vec<String>>> {
    if certificate_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows: Vec<(i64, String)> = sqlx::query_as(
        "SELECT ct.certificate_id, t.name FROM certificate_tag ct \
         JOIN tag t ON t.id = ct.tag_id \
         WHERE ct.certificate_id = ANY($1) \
         ORDER BY t.name",
    )
    .bind(certificate_ids)
    .fetch_all(&mut *conn)
    .await
    .map_err(Error::Database)?;

    let mut by_certificate: HashMap<i64, Vec<String>> = HashMap::new();
    for (certificate_id, name) in rows {
        by_certificate.entry(certificate_id).or_default().push(name);
    }

    Ok(by_certificate)
}
