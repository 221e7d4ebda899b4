use axum::body::Bytes;
use serde_json::{json, Value};

/// Builder for certificate request bodies.
pub struct CertificateBuilder {
    name: String,
    description: String,
    price: String,
    duration: i32,
    tags: Vec<String>,
}

impl CertificateBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            description: format!("{name} description"),
            price: "10.00".to_string(),
            duration: 30,
            tags: Vec::new(),
        }
    }

    pub fn description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn price(mut self, price: &str) -> Self {
        self.price = price.to_string();
        self
    }

    pub fn duration(mut self, duration: i32) -> Self {
        self.duration = duration;
        self
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tags.push(tag.to_string());
        self
    }

    pub fn build(self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "price": self.price,
            "duration": self.duration,
            "tags": self.tags,
        })
    }
}

pub fn to_json_body(value: &Value) -> anyhow::Result<Bytes> {
    Ok(Bytes::from(serde_json::to_vec(value)?))
}
