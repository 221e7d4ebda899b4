//! Certificate service - search and CRUD orchestration
//!
//! Validates request DTOs, builds search criteria from raw query items, and
//! delegates to the search engine and repository. The service never formats
//! HTTP; handlers own status codes and link decoration.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::config::SearchConfig;
use crate::db::certificates::{CertificatePatch, CertificateRepository, NewCertificate};
use crate::db::search::{SearchCriteria, SearchExecutor};
use crate::models::{Certificate, Page};
use crate::{Error, Result};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCertificateRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1..=255 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 2000, message = "description must be 1..=2000 characters"))]
    pub description: String,

    pub price: Decimal,

    #[validate(range(min = 1, message = "duration must be a positive number of days"))]
    pub duration: i32,

    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCertificateRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1..=255 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 2000, message = "description must be 1..=2000 characters"))]
    pub description: Option<String>,

    pub price: Option<Decimal>,

    #[validate(range(min = 1, message = "duration must be a positive number of days"))]
    pub duration: Option<i32>,

    pub tags: Option<Vec<String>>,
}

pub struct CertificateService {
    repository: CertificateRepository,
    search_engine: Arc<dyn SearchExecutor>,
    search_config: SearchConfig,
}

impl CertificateService {
    pub fn new(
        repository: CertificateRepository,
        search_engine: Arc<dyn SearchExecutor>,
        search_config: SearchConfig,
    ) -> Self {
        Self {
            repository,
            search_engine,
            search_config,
        }
    }

    /// Search certificates from decoded query items.
    ///
    /// Criteria validation (page/size) fails fast here, before any storage
    /// access; the engine itself performs no validation.
    pub async fn search(&self, items: &[(String, String)]) -> Result<Page<Certificate>> {
        let criteria = SearchCriteria::from_items(
            items,
            self.search_config.default_page_size,
            self.search_config.max_page_size,
        )?;
        self.search_engine.search(&criteria).await
    }

    pub async fn get(&self, id: i64) -> Result<Certificate> {
        self.repository.get(id).await
    }

    pub async fn create(&self, request: CreateCertificateRequest) -> Result<Certificate> {
        super::check_valid(&request)?;
        if request.price < Decimal::ZERO {
            return Err(Error::Validation("price must not be negative".to_string()));
        }

        self.repository
            .create(NewCertificate {
                name: request.name,
                description: request.description,
                price: request.price,
                duration: request.duration,
                tags: request.tags,
            })
            .await
    }

    pub async fn update(&self, id: i64, request: UpdateCertificateRequest) -> Result<Certificate> {
        super::check_valid(&request)?;
        if matches!(request.price, Some(p) if p < Decimal::ZERO) {
            return Err(Error::Validation("price must not be negative".to_string()));
        }

        let patch = CertificatePatch {
            name: request.name,
            description: request.description,
            price: request.price,
            duration: request.duration,
            tags: request.tags,
        };
        if patch.is_empty() {
            return Err(Error::Validation(
                "update request must contain at least one field".to_string(),
            ));
        }

        self.repository.update(id, patch).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await
    }
}
