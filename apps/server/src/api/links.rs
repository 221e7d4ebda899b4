//! Resource link decoration
//!
//! One function attaches an explicit list of (relation, URI) pairs to a
//! serialized resource under a `links` array. No per-entity link hierarchy;
//! handlers spell out the relations they want.

use serde_json::{json, Value as JsonValue};

/// Attach `{rel, href}` link objects to a JSON resource.
///
/// Non-object values are returned unchanged; an existing `links` field is
/// replaced.
pub fn attach_links(mut resource: JsonValue, relations: &[(&str, String)]) -> JsonValue {
    if let Some(object) = resource.as_object_mut() {
        let links: Vec<JsonValue> = relations
            .iter()
            .map(|(rel, href)| json!({ "rel": rel, "href": href }))
            .collect();
        object.insert("links".to_string(), JsonValue::Array(links));
    }
    resource
}
