//! Service layer - orchestration between handlers and repositories

pub mod certificates;
pub mod orders;
pub mod tags;
pub mod users;

pub use certificates::CertificateService;
pub use orders::OrderService;
pub use tags::TagService;
pub use users::UserService;

use crate::models::PageRequest;
use crate::{Error, Result};

/// Parse `page`/`pageSize` from decoded query items for plain list endpoints.
///
/// Same validation policy as the search criteria: page and size are rejected
/// below 1, never clamped, and checked against the configured maximum.
pub(crate) fn page_request_from_items(
    items: &[(String, String)],
    default_page_size: i64,
    max_page_size: i64,
) -> Result<PageRequest> {
    let mut page = PageRequest::DEFAULT_PAGE;
    let mut size = default_page_size;

    for (key, value) in items {
        match key.as_str() {
            "page" => {
                page = value
                    .parse()
                    .map_err(|_| Error::Validation(format!("Invalid page value: {value}")))?;
            }
            "pageSize" => {
                size = value
                    .parse()
                    .map_err(|_| Error::Validation(format!("Invalid pageSize value: {value}")))?;
            }
            _ => {}
        }
    }

    if size > max_page_size {
        return Err(Error::Validation(format!(
            "pageSize {size} exceeds the maximum of {max_page_size}"
        )));
    }

    PageRequest::new(page, size)
}

/// Map `validator` errors into the crate error type.
pub(crate) fn check_valid(input: &impl validator::Validate) -> Result<()> {
    input.validate().map_err(|e| Error::Validation(e.to_string()))
}
