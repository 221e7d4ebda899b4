//! Giftery - gift certificate catalog backend
//!
//! An HTTP/JSON catalog service backed by PostgreSQL:
//! - Certificate search with composable filters, tag intersection,
//!   multi-key sorting, and offset pagination
//! - Certificate and tag CRUD
//! - User orders with price snapshots and aggregate statistics

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
