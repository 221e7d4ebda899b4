//! Search criteria for certificate retrieval
//!
//! A `SearchCriteria` is built once per request from the raw query items and
//! is immutable afterwards. Every filter is optional; the page request always
//! has a value (defaults: page 1, configured default size). Page and size are
//! validated here, before any storage access.

use std::collections::BTreeSet;

use crate::models::PageRequest;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(Error::Validation(format!(
                "Invalid sort direction: {other} (expected asc or desc)"
            ))),
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchCriteria {
    /// Case-insensitive substring match against the certificate name.
    pub name: Option<String>,
    /// Case-insensitive substring match against the certificate description.
    pub description: Option<String>,
    /// Required tag names; a certificate matches only if ALL are attached.
    /// Kept as a set so duplicates collapse before cardinality is computed.
    pub tags: BTreeSet<String>,
    pub order_by_name: Option<SortDirection>,
    pub order_by_create_date: Option<SortDirection>,
    pub page: PageRequest,
}

impl SearchCriteria {
    /// Build criteria from decoded query items.
    ///
    /// Recognized keys: `name`, `description`, `tag` (repeatable),
    /// `orderByName`, `orderByCreateDate`, `page`, `pageSize`. Unknown keys are
    /// ignored. Empty filter values are treated as absent.
    pub fn from_items(
        items: &[(String, String)],
        default_page_size: i64,
        max_page_size: i64,
    ) -> Result<Self> {
        let mut name = None;
        let mut description = None;
        let mut tags = BTreeSet::new();
        let mut order_by_name = None;
        let mut order_by_create_date = None;
        let mut page = PageRequest::DEFAULT_PAGE;
        let mut size = default_page_size;

        for (key, value) in items {
            match key.as_str() {
                "name" => {
                    if !value.is_empty() {
                        name = Some(value.clone());
                    }
                }
                "description" => {
                    if !value.is_empty() {
                        description = Some(value.clone());
                    }
                }
                "tag" => {
                    if !value.is_empty() {
                        tags.insert(value.clone());
                    }
                }
                "orderByName" => {
                    order_by_name = Some(SortDirection::parse(value)?);
                }
                "orderByCreateDate" => {
                    order_by_create_date = Some(SortDirection::parse(value)?);
                }
                "page" => {
                    page = value.parse().map_err(|_| {
                        Error::Validation(format!("Invalid page value: {value}"))
                    })?;
                }
                "pageSize" => {
                    size = value.parse().map_err(|_| {
                        Error::Validation(format!("Invalid pageSize value: {value}"))
                    })?;
                }
                // Lenient handling: unknown parameters are ignored.
                _ => {}
            }
        }

        if size > max_page_size {
            return Err(Error::Validation(format!(
                "pageSize {size} exceeds the maximum of {max_page_size}"
            )));
        }

        Ok(Self {
            name,
            description,
            tags,
            order_by_name,
            order_by_create_date,
            page: PageRequest::new(page, size)?,
        })
    }
}
