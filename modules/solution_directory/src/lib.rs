//! Solution Directory Module
//!
//! Bilingual (Korean/English) catalogue of companies and the solutions they
//! offer, classified by a super → main → sub category hierarchy. Served over
//! REST and consumable in-process or over HTTP through [`SolutionDirectoryApi`].

// Public exports
pub mod contract;
pub use contract::{
    client::SolutionDirectoryApi, error::DirectoryError, CategoryFilter, Company, CompanyDetails,
    CompanyPatch, CompanyView, Language, Localized, NewCompany, NewSolutionItem, Page,
    PageRequest, SolutionDetails, SolutionItem, SolutionItemPatch, SolutionItemView,
};

pub mod module;
pub use module::SolutionDirectoryModule;

pub use api::http::HttpClient;
pub use api::native::NativeClient;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
