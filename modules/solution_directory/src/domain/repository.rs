//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{
    CategoryFilter, Company, CompanyPatch, Language, SolutionItem, SolutionItemPatch,
};
use crate::domain::search::SearchMatcher;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Result of an insert keyed by a caller-chosen identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome<T> {
    /// Row stored
    Inserted(T),
    /// The identifier is already taken, nothing was written
    DuplicateId,
}

/// A solution joined with the company owning it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub item: SolutionItem,
    pub company: Company,
}

/// Repository for companies
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Insert a company, reporting a taken id as `DuplicateId`
    async fn insert(&self, company: &Company) -> Result<InsertOutcome<Company>>;

    /// Find a company by id
    async fn find_by_id(&self, company_id: &str) -> Result<Option<Company>>;

    /// Find all companies whose id is in `company_ids`
    async fn find_by_ids(&self, company_ids: &[String]) -> Result<Vec<Company>>;

    /// List companies with pagination
    async fn list(&self, limit: u64, offset: u64) -> Result<Vec<Company>>;

    /// Count all companies
    async fn count(&self) -> Result<u64>;

    /// Apply `patch` to the stored company as one atomic read-modify-write.
    /// `None` if the company does not exist.
    async fn update(
        &self,
        company_id: &str,
        patch: &CompanyPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Company>>;

    /// Hard delete, `true` iff a row was removed
    async fn delete(&self, company_id: &str) -> Result<bool>;
}

/// Repository for solution items
#[async_trait]
pub trait SolutionRepository: Send + Sync {
    /// Insert a solution, reporting a taken id as `DuplicateId`
    async fn insert(&self, item: &SolutionItem) -> Result<InsertOutcome<SolutionItem>>;

    /// Find a solution by id
    async fn find_by_id(&self, solution_id: &str) -> Result<Option<SolutionItem>>;

    /// Solutions of a company, optionally restricted to a category
    async fn find_by_company(
        &self,
        company_id: &str,
        filter: Option<CategoryFilter>,
    ) -> Result<Vec<SolutionItem>>;

    /// Distinct ids of companies owning a solution in the category
    async fn distinct_company_ids(&self, filter: CategoryFilter) -> Result<Vec<String>>;

    /// Apply `patch` to the stored solution atomically, `None` if it does not exist
    async fn update(
        &self,
        solution_id: &str,
        patch: &SolutionItemPatch,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<SolutionItem>>;

    /// Hard delete, `true` iff a row was removed
    async fn delete(&self, solution_id: &str) -> Result<bool>;

    /// Solutions joined with their company where any searchable field of the
    /// `lang` blocks matches
    async fn search(&self, matcher: &SearchMatcher, lang: Language) -> Result<Vec<SearchHit>>;
}
