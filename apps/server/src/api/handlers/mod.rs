//! Request handlers

pub mod certificates;
pub mod metrics;
pub mod orders;
pub mod tags;
pub mod users;

use serde_json::Value as JsonValue;

use crate::models::Page;
use crate::{Error, Result};

/// Serialize a resource for the wire, mapping serializer failures onto the
/// crate error type.
pub(crate) fn to_wire<T: serde::Serialize>(resource: &T) -> Result<JsonValue> {
    serde_json::to_value(resource).map_err(|e| Error::Internal(e.to_string()))
}

/// Re-wrap a page, serializing each entry with the given converter while
/// keeping the pagination metadata intact.
pub(crate) fn page_to_wire<T>(
    page: Page<T>,
    mut convert: impl FnMut(&T) -> Result<JsonValue>,
) -> Result<Page<JsonValue>> {
    let mut content = Vec::with_capacity(page.content.len());
    for entry in &page.content {
        content.push(convert(entry)?);
    }

    Ok(Page {
        content,
        page: page.page,
        page_size: page.page_size,
        total_pages: page.total_pages,
        total_elements: page.total_elements,
    })
}
