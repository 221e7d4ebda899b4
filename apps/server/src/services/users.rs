//! User service - read-only

use crate::config::SearchConfig;
use crate::db::UserRepository;
use crate::models::{Page, User};
use crate::Result;

pub struct UserService {
    repository: UserRepository,
    search_config: SearchConfig,
}

impl UserService {
    pub fn new(repository: UserRepository, search_config: SearchConfig) -> Self {
        Self {
            repository,
            search_config,
        }
    }

    pub async fn list(&self, items: &[(String, String)]) -> Result<Page<User>> {
        let page = super::page_request_from_items(
            items,
            self.search_config.default_page_size,
            self.search_config.max_page_size,
        )?;
        self.repository.list(&page).await
    }

    pub async fn get(&self, id: i64) -> Result<User> {
        self.repository.get(id).await
    }
}
