//! Database layer - repositories and the search engine

pub mod certificates;
pub mod orders;
pub mod search;
pub mod tags;
pub mod users;

pub use certificates::CertificateRepository;
pub use orders::OrderRepository;
pub use search::{SearchCriteria, SearchEngine, SearchExecutor, SortDirection};
pub use tags::TagRepository;
pub use users::UserRepository;
