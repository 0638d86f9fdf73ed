//! Domain service - business logic orchestration

use super::categories::CategoryTable;
use super::id::{IdGenerator, RandomIdGenerator};
use super::localization::Localize;
use super::repository::{CompanyRepository, InsertOutcome, SolutionRepository};
use super::search::SearchMatcher;
use super::validation;
use crate::config::Config;
use crate::contract::{
    CategoryFilter, Company, CompanyPatch, CompanyView, DirectoryError, Language,
    MainCategoryPlacement, NewCompany, NewSolutionItem, Page, PageRequest, SolutionItem,
    SolutionItemPatch, SolutionItemView, SuperCategoryView,
};
use chrono::Utc;
use std::future::Future;
use std::sync::Arc;

/// Domain service for the solution directory
pub struct Service {
    companies: Arc<dyn CompanyRepository>,
    solutions: Arc<dyn SolutionRepository>,
    categories: Arc<CategoryTable>,
    ids: Arc<dyn IdGenerator>,
    config: Config,
}

/// Log a storage failure and hide it behind `Internal`
fn internal(error: anyhow::Error) -> DirectoryError {
    tracing::error!(error = ?error, "solution directory storage failure");
    DirectoryError::Internal
}

impl Service {
    /// Create a new service instance
    pub fn new(
        companies: Arc<dyn CompanyRepository>,
        solutions: Arc<dyn SolutionRepository>,
        categories: Arc<CategoryTable>,
        config: Config,
    ) -> Self {
        Self {
            companies,
            solutions,
            categories,
            ids: Arc::new(RandomIdGenerator),
            config,
        }
    }

    /// Replace the id source
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    // ===== Public (localized) operations =====

    /// Companies owning at least one solution in the category
    pub async fn companies_by_category(
        &self,
        filter: CategoryFilter,
        lang: Language,
    ) -> Result<Vec<CompanyView>, DirectoryError> {
        let company_ids = self
            .solutions
            .distinct_company_ids(filter)
            .await
            .map_err(internal)?;

        if company_ids.is_empty() {
            return Ok(Vec::new());
        }

        let companies = self
            .companies
            .find_by_ids(&company_ids)
            .await
            .map_err(internal)?;

        Ok(companies.iter().map(|c| c.localize(lang)).collect())
    }

    /// Solutions of a company within a category
    pub async fn solutions_by_company(
        &self,
        company_id: &str,
        filter: CategoryFilter,
        lang: Language,
    ) -> Result<Vec<SolutionItemView>, DirectoryError> {
        let items = self
            .solutions
            .find_by_company(company_id, Some(filter))
            .await
            .map_err(internal)?;

        Ok(items.iter().map(|s| s.localize(lang)).collect())
    }

    /// Case-insensitive search; blank queries never reach storage
    pub async fn search(
        &self,
        query: &str,
        lang: Language,
    ) -> Result<Vec<SolutionItemView>, DirectoryError> {
        let Some(matcher) = SearchMatcher::compile(query, self.config.search_mode)? else {
            return Ok(Vec::new());
        };

        tracing::debug!(pattern = matcher.as_str(), %lang, "searching solutions");

        let hits = self.solutions.search(&matcher, lang).await.map_err(internal)?;

        Ok(hits
            .into_iter()
            .map(|hit| {
                let mut view = hit.item.localize(lang);
                view.company_name = Some(hit.company.localize(lang).name);
                view
            })
            .collect())
    }

    pub fn category_tree(&self, lang: Language) -> Vec<SuperCategoryView> {
        self.categories.tree(lang)
    }

    pub fn main_category(&self, main_category_id: i32, lang: Language) -> Option<MainCategoryPlacement> {
        self.categories.placement(main_category_id, lang)
    }

    // ===== Company operations =====

    /// Offset-paginated company listing
    pub async fn all_companies(&self, request: PageRequest) -> Result<Page<Company>, DirectoryError> {
        let page = request.page.unwrap_or(1).max(1);
        let per_page = request
            .per_page
            .unwrap_or(self.config.default_per_page)
            .clamp(1, self.config.max_per_page.max(1));
        let offset = (page - 1).saturating_mul(per_page);

        let items = self
            .companies
            .list(per_page, offset)
            .await
            .map_err(internal)?;
        let total = self.companies.count().await.map_err(internal)?;

        Ok(Page {
            items,
            total,
            page,
            per_page,
        })
    }

    pub async fn company(&self, company_id: &str) -> Result<Option<Company>, DirectoryError> {
        self.companies.find_by_id(company_id).await.map_err(internal)
    }

    /// Create a company, generating its id when none is given
    pub async fn create_company(&self, new: NewCompany) -> Result<Company, DirectoryError> {
        let now = Utc::now();
        let company = Company {
            company_id: new.company_id.trim().to_string(),
            details: new.details,
            created_at: now,
            updated_at: now,
        };

        let created = if company.company_id.is_empty() {
            self.insert_with_generated_id("company", |id| {
                let repo = self.companies.clone();
                let mut candidate = company.clone();
                candidate.company_id = id;
                async move { repo.insert(&candidate).await }
            })
            .await?
        } else {
            validation::validate_explicit_id("company", &company.company_id)?;
            match self.companies.insert(&company).await.map_err(internal)? {
                InsertOutcome::Inserted(created) => created,
                InsertOutcome::DuplicateId => {
                    return Err(DirectoryError::conflict(format!(
                        "company id already exists: {}",
                        company.company_id
                    )))
                }
            }
        };

        tracing::info!(company_id = %created.company_id, "company created");
        Ok(created)
    }

    /// Replace the language blocks present in `patch`, keep the rest
    pub async fn update_company(
        &self,
        company_id: &str,
        patch: CompanyPatch,
    ) -> Result<Option<Company>, DirectoryError> {
        let updated = self
            .companies
            .update(company_id, &patch, Utc::now())
            .await
            .map_err(internal)?;
        if updated.is_some() {
            tracing::info!(company_id, "company updated");
        }
        Ok(updated)
    }

    /// Hard delete. Solutions of the company are left in place.
    pub async fn delete_company(&self, company_id: &str) -> Result<bool, DirectoryError> {
        let deleted = self.companies.delete(company_id).await.map_err(internal)?;
        if deleted {
            tracing::info!(company_id, "company deleted");
        }
        Ok(deleted)
    }

    // ===== Solution operations =====

    /// All solutions of a company regardless of category
    pub async fn solutions_by_company_id(
        &self,
        company_id: &str,
    ) -> Result<Vec<SolutionItem>, DirectoryError> {
        self.solutions
            .find_by_company(company_id, None)
            .await
            .map_err(internal)
    }

    pub async fn solution(&self, solution_id: &str) -> Result<Option<SolutionItem>, DirectoryError> {
        self.solutions.find_by_id(solution_id).await.map_err(internal)
    }

    /// Create a solution, generating its id when none is given
    pub async fn create_solution(&self, new: NewSolutionItem) -> Result<SolutionItem, DirectoryError> {
        let now = Utc::now();
        let item = SolutionItem {
            solution_id: new.solution_id.trim().to_string(),
            company_id: new.company_id.trim().to_string(),
            main_category_id: new.main_category_id,
            sub_category_id: new.sub_category_id,
            details: new.details,
            created_at: now,
            updated_at: now,
        };

        self.validate_solution(&item).await?;

        let created = if item.solution_id.is_empty() {
            self.insert_with_generated_id("solution", |id| {
                let repo = self.solutions.clone();
                let mut candidate = item.clone();
                candidate.solution_id = id;
                async move { repo.insert(&candidate).await }
            })
            .await?
        } else {
            validation::validate_explicit_id("solution", &item.solution_id)?;
            match self.solutions.insert(&item).await.map_err(internal)? {
                InsertOutcome::Inserted(created) => created,
                InsertOutcome::DuplicateId => {
                    return Err(DirectoryError::conflict(format!(
                        "solution id already exists: {}",
                        item.solution_id
                    )))
                }
            }
        };

        tracing::info!(
            solution_id = %created.solution_id,
            company_id = %created.company_id,
            "solution created"
        );
        Ok(created)
    }

    /// Overwrite the fields present in `patch`, keep the rest
    pub async fn update_solution(
        &self,
        solution_id: &str,
        patch: SolutionItemPatch,
    ) -> Result<Option<SolutionItem>, DirectoryError> {
        let Some(current) = self.solution(solution_id).await? else {
            return Ok(None);
        };

        // Checked against the current row; storage re-reads it under lock
        let mut candidate = current.clone();
        patch.apply_to(&mut candidate);

        if candidate.company_id != current.company_id {
            self.validate_solution(&candidate).await?;
        } else if self.config.validate_categories {
            validation::validate_category(
                &self.categories,
                candidate.main_category_id,
                candidate.sub_category_id,
            )?;
        }

        let updated = self
            .solutions
            .update(solution_id, &patch, Utc::now())
            .await
            .map_err(internal)?;
        if updated.is_some() {
            tracing::info!(solution_id, "solution updated");
        }
        Ok(updated)
    }

    pub async fn delete_solution(&self, solution_id: &str) -> Result<bool, DirectoryError> {
        let deleted = self.solutions.delete(solution_id).await.map_err(internal)?;
        if deleted {
            tracing::info!(solution_id, "solution deleted");
        }
        Ok(deleted)
    }

    // ===== Helper Methods =====

    /// Company reference and categories of a solution about to be written
    async fn validate_solution(&self, item: &SolutionItem) -> Result<(), DirectoryError> {
        validation::validate_company_reference(&item.company_id)?;

        if self.config.validate_categories {
            validation::validate_category(&self.categories, item.main_category_id, item.sub_category_id)?;
        }

        if self.company(&item.company_id).await?.is_none() {
            return Err(DirectoryError::validation(format!(
                "company does not exist: {}",
                item.company_id
            )));
        }
        Ok(())
    }

    /// Insert under fresh random ids until storage accepts one
    ///
    /// Uniqueness is decided by the storage constraint, not by a prior lookup.
    async fn insert_with_generated_id<T, F, Fut>(
        &self,
        kind: &str,
        mut insert: F,
    ) -> Result<T, DirectoryError>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = anyhow::Result<InsertOutcome<T>>>,
    {
        for attempt in 1..=self.config.max_id_attempts {
            let id = self.ids.generate();
            match insert(id.clone()).await.map_err(internal)? {
                InsertOutcome::Inserted(created) => return Ok(created),
                InsertOutcome::DuplicateId => {
                    tracing::warn!(kind, id = %id, attempt, "generated id already taken, regenerating");
                }
            }
        }

        tracing::error!(
            kind,
            attempts = self.config.max_id_attempts,
            "could not find a free generated id"
        );
        Err(DirectoryError::Internal)
    }
}
