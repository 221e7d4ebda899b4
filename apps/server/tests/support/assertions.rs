use anyhow::Context as _;
use axum::http::StatusCode;
use serde_json::Value;

/// Assert status code matches expected
pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(
        actual, expected,
        "{context}: expected status {expected}, got {actual}"
    );
}

/// Get page content as array
pub fn get_page_content(page: &Value) -> anyhow::Result<&Vec<Value>> {
    page.get("content")
        .and_then(|v| v.as_array())
        .context("page content is array")
}

/// Assert the pagination metadata of a page envelope
pub fn assert_page_meta(
    page: &Value,
    expected_page: i64,
    expected_size: i64,
    expected_total_pages: i64,
    expected_total_elements: i64,
) -> anyhow::Result<()> {
    assert_eq!(
        page.get("page").and_then(|v| v.as_i64()),
        Some(expected_page),
        "page number"
    );
    assert_eq!(
        page.get("pageSize").and_then(|v| v.as_i64()),
        Some(expected_size),
        "page size"
    );
    assert_eq!(
        page.get("totalPages").and_then(|v| v.as_i64()),
        Some(expected_total_pages),
        "total pages"
    );
    assert_eq!(
        page.get("totalElements").and_then(|v| v.as_i64()),
        Some(expected_total_elements),
        "total elements"
    );
    Ok(())
}

/// Extract the `name` field of every entry in a page
pub fn extract_names(page: &Value) -> anyhow::Result<Vec<String>> {
    let content = get_page_content(page)?;
    Ok(content
        .iter()
        .filter_map(|entry| {
            entry
                .get("name")
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
        })
        .collect())
}

/// Extract the `id` field of every entry in a page
pub fn extract_ids(page: &Value) -> anyhow::Result<Vec<i64>> {
    let content = get_page_content(page)?;
    Ok(content
        .iter()
        .filter_map(|entry| entry.get("id").and_then(|v| v.as_i64()))
        .collect())
}

/// Assert a resource carries a link with the given relation
pub fn assert_has_link(resource: &Value, rel: &str) -> anyhow::Result<()> {
    let links = resource
        .get("links")
        .and_then(|v| v.as_array())
        .context("resource has links array")?;
    assert!(
        links
            .iter()
            .any(|link| link.get("rel").and_then(|v| v.as_str()) == Some(rel)),
        "expected link with rel = {rel}, found: {links:?}"
    );
    Ok(())
}
