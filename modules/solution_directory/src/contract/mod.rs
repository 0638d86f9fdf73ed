//! Contract layer - public API for inter-module communication
//!
//! This layer contains transport-agnostic models and the client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::SolutionDirectoryApi;
pub use error::DirectoryError;
pub use model::{
    ButtonPosition, CategoryFilter, Company, CompanyDetails, CompanyPatch, CompanyView, Language,
    Localized, MainCategoryPlacement, MainCategoryView, NewCompany, NewSolutionItem, Page,
    PageRequest, SolutionDetails, SolutionItem, SolutionItemPatch, SolutionItemView,
    SubCategoryView, SuperCategoryView,
};
