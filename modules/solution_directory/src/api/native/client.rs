//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    CategoryFilter, Company, CompanyPatch, CompanyView, DirectoryError, Language,
    MainCategoryPlacement, NewCompany, NewSolutionItem, Page, PageRequest, SolutionDirectoryApi,
    SolutionItem, SolutionItemPatch, SolutionItemView, SuperCategoryView,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// Used by modules living in the same process as the directory.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SolutionDirectoryApi for NativeClient {
    async fn companies_by_category(
        &self,
        filter: CategoryFilter,
        lang: Language,
    ) -> Result<Vec<CompanyView>, DirectoryError> {
        self.service.companies_by_category(filter, lang).await
    }

    async fn solutions_by_company(
        &self,
        company_id: &str,
        filter: CategoryFilter,
        lang: Language,
    ) -> Result<Vec<SolutionItemView>, DirectoryError> {
        self.service
            .solutions_by_company(company_id, filter, lang)
            .await
    }

    async fn search(
        &self,
        query: &str,
        lang: Language,
    ) -> Result<Vec<SolutionItemView>, DirectoryError> {
        self.service.search(query, lang).await
    }

    async fn category_tree(&self, lang: Language) -> Result<Vec<SuperCategoryView>, DirectoryError> {
        Ok(self.service.category_tree(lang))
    }

    async fn main_category(
        &self,
        main_category_id: i32,
        lang: Language,
    ) -> Result<Option<MainCategoryPlacement>, DirectoryError> {
        Ok(self.service.main_category(main_category_id, lang))
    }

    async fn all_companies(&self, page: PageRequest) -> Result<Page<Company>, DirectoryError> {
        self.service.all_companies(page).await
    }

    async fn company(&self, company_id: &str) -> Result<Option<Company>, DirectoryError> {
        self.service.company(company_id).await
    }

    async fn solutions_by_company_id(
        &self,
        company_id: &str,
    ) -> Result<Vec<SolutionItem>, DirectoryError> {
        self.service.solutions_by_company_id(company_id).await
    }

    async fn solution(&self, solution_id: &str) -> Result<Option<SolutionItem>, DirectoryError> {
        self.service.solution(solution_id).await
    }

    async fn create_company(&self, company: NewCompany) -> Result<Company, DirectoryError> {
        self.service.create_company(company).await
    }

    async fn update_company(
        &self,
        company_id: &str,
        patch: CompanyPatch,
    ) -> Result<Option<Company>, DirectoryError> {
        self.service.update_company(company_id, patch).await
    }

    async fn delete_company(&self, company_id: &str) -> Result<bool, DirectoryError> {
        self.service.delete_company(company_id).await
    }

    async fn create_solution(
        &self,
        solution: NewSolutionItem,
    ) -> Result<SolutionItem, DirectoryError> {
        self.service.create_solution(solution).await
    }

    async fn update_solution(
        &self,
        solution_id: &str,
        patch: SolutionItemPatch,
    ) -> Result<Option<SolutionItem>, DirectoryError> {
        self.service.update_solution(solution_id, patch).await
    }

    async fn delete_solution(&self, solution_id: &str) -> Result<bool, DirectoryError> {
        self.service.delete_solution(solution_id).await
    }
}
