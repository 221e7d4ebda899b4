//! Tag service

use serde::Deserialize;
use validator::Validate;

use crate::config::SearchConfig;
use crate::db::TagRepository;
use crate::models::{Page, Tag};
use crate::Result;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateTagRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1..=255 characters"))]
    pub name: String,
}

pub struct TagService {
    repository: TagRepository,
    search_config: SearchConfig,
}

impl TagService {
    pub fn new(repository: TagRepository, search_config: SearchConfig) -> Self {
        Self {
            repository,
            search_config,
        }
    }

    pub async fn list(&self, items: &[(String, String)]) -> Result<Page<Tag>> {
        let page = super::page_request_from_items(
            items,
            self.search_config.default_page_size,
            self.search_config.max_page_size,
        )?;
        self.repository.list(&page).await
    }

    pub async fn get(&self, id: i64) -> Result<Tag> {
        self.repository.get(id).await
    }

    pub async fn create(&self, request: CreateTagRequest) -> Result<Tag> {
        super::check_valid(&request)?;
        self.repository.create(&request.name).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.repository.delete(id).await
    }

    pub async fn most_used_of_top_spender(&self) -> Result<Option<Tag>> {
        self.repository.most_used_of_top_spender().await
    }
}
