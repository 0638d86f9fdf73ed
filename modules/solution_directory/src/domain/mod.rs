//! Domain layer - business logic and services

pub mod categories;
pub mod id;
pub mod localization;
pub mod repository;
pub mod search;
pub mod service;
pub mod validation;

pub use categories::CategoryTable;
pub use id::{IdGenerator, RandomIdGenerator};
pub use localization::Localize;
pub use repository::{CompanyRepository, InsertOutcome, SearchHit, SolutionRepository};
pub use search::{SearchMatcher, SearchMode};
pub use service::Service;
