//! Query string helpers

use crate::Result;

/// Decode a raw query string into (key, value) items, preserving repeats.
///
/// `url::form_urlencoded` implements `application/x-www-form-urlencoded`
/// semantics (including '+' = space), which is what browsers send.
pub fn parse_query_items(raw_query: Option<&str>) -> Result<Vec<(String, String)>> {
    let Some(raw) = raw_query else {
        return Ok(Vec::new());
    };

    Ok(url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect())
}
