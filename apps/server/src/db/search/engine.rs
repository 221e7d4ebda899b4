//! Search execution against PostgreSQL.
//!
//! The engine is the only search component that touches storage. It runs the
//! data query and the count query built from the same `CertificateQuery` on
//! one pooled connection, then batch-loads tag names for the returned page.
//!
//! The two queries run sequentially without a wrapping transaction, so the
//! count and the page content may reflect slightly different moments under
//! concurrent writes. That drift is accepted; see DESIGN.md.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

use super::criteria::SearchCriteria;
use super::query_builder::{BindValue, CertificateQuery};
use crate::db::certificates::{load_tag_names, CertificateRow};
use crate::models::{Certificate, Page};
use crate::Result;

/// Boundary toward the storage layer.
///
/// The only search component that touches storage; everything above it
/// composes criteria and wraps pages. Kept as a trait so the service layer
/// can be exercised against a stub backend.
#[async_trait]
pub trait SearchExecutor: Send + Sync {
    /// Run the composed query and return one page plus the pre-pagination
    /// total. Read-only; storage errors propagate unchanged, no retries.
    async fn search(&self, criteria: &SearchCriteria) -> Result<Page<Certificate>>;
}

pub struct SearchEngine {
    db_pool: PgPool,
}

impl SearchEngine {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl SearchExecutor for SearchEngine {
    /// Execute a search and wrap the result into a page.
    ///
    /// Page/size validation has already happened when the criteria were
    /// built, so this call reaches storage unconditionally. An empty result
    /// or a page past the end both yield a valid, empty page.
    async fn search(&self, criteria: &SearchCriteria) -> Result<Page<Certificate>> {
        let mut conn = self
            .db_pool
            .acquire()
            .await
            .map_err(crate::Error::Database)?;

        let query = CertificateQuery::new(criteria);

        let rows = self.fetch_page(&mut conn, &query).await?;
        let total = self.count_total(&mut conn, &query).await?;
        let certificates = self.attach_tags(&mut conn, rows).await?;

        Ok(Page::from_parts(certificates, total, &criteria.page))
    }
}

impl SearchEngine {
    async fn fetch_page(
        &self,
        conn: &mut PgConnection,
        query: &CertificateQuery<'_>,
    ) -> Result<Vec<CertificateRow>> {
        let (sql, bind_values) = query.build_sql();

        let mut q = sqlx::query_as::<_, CertificateRow>(&sql);
        for value in bind_values {
            q = match value {
                BindValue::Text(v) => q.bind(v),
                BindValue::TextArray(vs) => q.bind(vs),
                BindValue::Int(v) => q.bind(v),
            };
        }

        q.fetch_all(&mut *conn).await.map_err(crate::Error::Database)
    }

    async fn count_total(
        &self,
        conn: &mut PgConnection,
        query: &CertificateQuery<'_>,
    ) -> Result<i64> {
        let (sql, bind_values) = query.build_count_sql();

        let mut q = sqlx::query_scalar::<_, i64>(&sql);
        for value in bind_values {
            q = match value {
                BindValue::Text(v) => q.bind(v),
                BindValue::TextArray(vs) => q.bind(vs),
                BindValue::Int(v) => q.bind(v),
            };
        }

        q.fetch_one(&mut *conn).await.map_err(crate::Error::Database)
    }

    async fn attach_tags(
        &self,
        conn: &mut PgConnection,
        rows: Vec<CertificateRow>,
    ) -> Result<Vec<Certificate>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut tags_by_certificate = load_tag_names(conn, &ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let tags = tags_by_certificate.remove(&row.id).unwrap_or_default();
                row.into_certificate(tags)
            })
            .collect())
    }
}
