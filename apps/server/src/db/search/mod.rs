//! Certificate search: criteria, SQL generation, and execution

pub mod criteria;
pub mod engine;
pub mod query_builder;

pub use criteria::{SearchCriteria, SortDirection};
pub use engine::{SearchEngine, SearchExecutor};
