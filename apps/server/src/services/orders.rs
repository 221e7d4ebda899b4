//! Order service

use serde::Deserialize;

use crate::config::SearchConfig;
use crate::db::{OrderRepository, UserRepository};
use crate::models::{Order, Page};
use crate::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateOrderRequest {
    pub certificate_id: i64,
}

pub struct OrderService {
    orders: OrderRepository,
    users: UserRepository,
    search_config: SearchConfig,
}

impl OrderService {
    pub fn new(orders: OrderRepository, users: UserRepository, search_config: SearchConfig) -> Self {
        Self {
            orders,
            users,
            search_config,
        }
    }

    pub async fn create(&self, user_id: i64, request: CreateOrderRequest) -> Result<Order> {
        self.orders.create(user_id, request.certificate_id).await
    }

    pub async fn list_for_user(
        &self,
        user_id: i64,
        items: &[(String, String)],
    ) -> Result<Page<Order>> {
        if !self.users.exists(user_id).await? {
            return Err(Error::ResourceNotFound {
                resource: "User",
                id: user_id,
            });
        }

        let page = super::page_request_from_items(
            items,
            self.search_config.default_page_size,
            self.search_config.max_page_size,
        )?;
        self.orders.list_for_user(user_id, &page).await
    }

    pub async fn get_for_user(&self, user_id: i64, order_id: i64) -> Result<Order> {
        self.orders.get_for_user(user_id, order_id).await
    }
}
