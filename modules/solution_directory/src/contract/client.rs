//! Client trait for the solution directory
//!
//! Implemented in-process by `api::native::NativeClient` and over HTTP by
//! `api::http::HttpClient`, so callers do not care which side of the wire
//! the directory lives on.

use super::error::DirectoryError;
use super::model::{
    CategoryFilter, Company, CompanyPatch, CompanyView, Language, MainCategoryPlacement,
    NewCompany, NewSolutionItem, Page, PageRequest, SolutionItem, SolutionItemPatch,
    SolutionItemView, SuperCategoryView,
};
use async_trait::async_trait;

/// Solution directory API
#[async_trait]
pub trait SolutionDirectoryApi: Send + Sync {
    // ===== Public (localized) =====

    /// Companies owning at least one solution in the category, without duplicates
    async fn companies_by_category(
        &self,
        filter: CategoryFilter,
        lang: Language,
    ) -> Result<Vec<CompanyView>, DirectoryError>;

    /// Solutions of a company within a category
    async fn solutions_by_company(
        &self,
        company_id: &str,
        filter: CategoryFilter,
        lang: Language,
    ) -> Result<Vec<SolutionItemView>, DirectoryError>;

    /// Case-insensitive search over solutions and their companies
    async fn search(
        &self,
        query: &str,
        lang: Language,
    ) -> Result<Vec<SolutionItemView>, DirectoryError>;

    /// Category hierarchy in one language
    async fn category_tree(&self, lang: Language) -> Result<Vec<SuperCategoryView>, DirectoryError>;

    /// Main category with its owning super category
    async fn main_category(
        &self,
        main_category_id: i32,
        lang: Language,
    ) -> Result<Option<MainCategoryPlacement>, DirectoryError>;

    // ===== Admin (full entities) =====

    /// Offset-paginated company listing
    async fn all_companies(&self, page: PageRequest) -> Result<Page<Company>, DirectoryError>;

    async fn company(&self, company_id: &str) -> Result<Option<Company>, DirectoryError>;

    /// All solutions of a company regardless of category
    async fn solutions_by_company_id(
        &self,
        company_id: &str,
    ) -> Result<Vec<SolutionItem>, DirectoryError>;

    async fn solution(&self, solution_id: &str) -> Result<Option<SolutionItem>, DirectoryError>;

    async fn create_company(&self, company: NewCompany) -> Result<Company, DirectoryError>;

    async fn update_company(
        &self,
        company_id: &str,
        patch: CompanyPatch,
    ) -> Result<Option<Company>, DirectoryError>;

    /// `true` iff a company was deleted
    async fn delete_company(&self, company_id: &str) -> Result<bool, DirectoryError>;

    async fn create_solution(&self, solution: NewSolutionItem)
        -> Result<SolutionItem, DirectoryError>;

    async fn update_solution(
        &self,
        solution_id: &str,
        patch: SolutionItemPatch,
    ) -> Result<Option<SolutionItem>, DirectoryError>;

    /// `true` iff a solution was deleted
    async fn delete_solution(&self, solution_id: &str) -> Result<bool, DirectoryError>;
}
