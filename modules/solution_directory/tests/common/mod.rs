//! Common test utilities: in-memory repositories and directory fixtures

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use solution_directory::config::Config;
use solution_directory::contract::*;
use solution_directory::domain::repository::{
    CompanyRepository, InsertOutcome, SearchHit, SolutionRepository,
};
use solution_directory::domain::{CategoryTable, IdGenerator, SearchMatcher, Service};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

// ===== Mock repositories =====

#[derive(Clone, Default)]
pub struct MockCompanyRepo {
    data: Arc<RwLock<HashMap<String, Company>>>,
}

impl MockCompanyRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_stored(&self) -> usize {
        self.data.read().len()
    }

    /// Print verbose information about repository state
    pub fn print_state(&self, context: &str) {
        let data = self.data.read();
        println!("\n========== CompanyRepository State: {} ==========", context);
        println!("Total companies: {}", data.len());
        for (id, company) in data.iter() {
            let names: Vec<_> = company
                .details
                .iter()
                .map(|(lang, d)| format!("{}={}", lang, d.name))
                .collect();
            println!("  {} -> {}", id, names.join(", "));
        }
        println!("====================================================\n");
    }
}

#[async_trait]
impl CompanyRepository for MockCompanyRepo {
    async fn insert(&self, company: &Company) -> anyhow::Result<InsertOutcome<Company>> {
        let mut data = self.data.write();
        if data.contains_key(&company.company_id) {
            return Ok(InsertOutcome::DuplicateId);
        }
        data.insert(company.company_id.clone(), company.clone());
        Ok(InsertOutcome::Inserted(company.clone()))
    }

    async fn find_by_id(&self, company_id: &str) -> anyhow::Result<Option<Company>> {
        Ok(self.data.read().get(company_id).cloned())
    }

    async fn find_by_ids(&self, company_ids: &[String]) -> anyhow::Result<Vec<Company>> {
        let data = self.data.read();
        let mut found: Vec<Company> = company_ids
            .iter()
            .filter_map(|id| data.get(id).cloned())
            .collect();
        found.sort_by(|a, b| a.company_id.cmp(&b.company_id));
        found.dedup_by(|a, b| a.company_id == b.company_id);
        Ok(found)
    }

    async fn list(&self, limit: u64, offset: u64) -> anyhow::Result<Vec<Company>> {
        let mut all: Vec<Company> = self.data.read().values().cloned().collect();
        all.sort_by(|a, b| a.company_id.cmp(&b.company_id));
        Ok(all
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> anyhow::Result<u64> {
        Ok(self.data.read().len() as u64)
    }

    async fn update(
        &self,
        company_id: &str,
        patch: &CompanyPatch,
        updated_at: DateTime<Utc>,
    ) -> anyhow::Result<Option<Company>> {
        let mut data = self.data.write();
        Ok(data.get_mut(company_id).map(|stored| {
            patch.apply_to(stored);
            stored.updated_at = updated_at;
            stored.clone()
        }))
    }

    async fn delete(&self, company_id: &str) -> anyhow::Result<bool> {
        Ok(self.data.write().remove(company_id).is_some())
    }
}

/// Solutions keyed by id; shares the company map for the search join
#[derive(Clone)]
pub struct MockSolutionRepo {
    data: Arc<RwLock<HashMap<String, SolutionItem>>>,
    companies: Arc<RwLock<HashMap<String, Company>>>,
    search_calls: Arc<AtomicUsize>,
}

impl MockSolutionRepo {
    pub fn new(companies: &MockCompanyRepo) -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
            companies: companies.data.clone(),
            search_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times storage was asked to search
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn count_stored(&self) -> usize {
        self.data.read().len()
    }

    fn sorted(&self, keep: impl Fn(&SolutionItem) -> bool) -> Vec<SolutionItem> {
        let mut items: Vec<SolutionItem> =
            self.data.read().values().filter(|i| keep(i)).cloned().collect();
        items.sort_by(|a, b| a.solution_id.cmp(&b.solution_id));
        items
    }
}

fn in_category(item: &SolutionItem, filter: CategoryFilter) -> bool {
    item.main_category_id == filter.main_category_id
        && filter
            .sub_category_id
            .map_or(true, |sub| item.sub_category_id == sub)
}

#[async_trait]
impl SolutionRepository for MockSolutionRepo {
    async fn insert(&self, item: &SolutionItem) -> anyhow::Result<InsertOutcome<SolutionItem>> {
        let mut data = self.data.write();
        if data.contains_key(&item.solution_id) {
            return Ok(InsertOutcome::DuplicateId);
        }
        data.insert(item.solution_id.clone(), item.clone());
        Ok(InsertOutcome::Inserted(item.clone()))
    }

    async fn find_by_id(&self, solution_id: &str) -> anyhow::Result<Option<SolutionItem>> {
        Ok(self.data.read().get(solution_id).cloned())
    }

    async fn find_by_company(
        &self,
        company_id: &str,
        filter: Option<CategoryFilter>,
    ) -> anyhow::Result<Vec<SolutionItem>> {
        Ok(self.sorted(|item| {
            item.company_id == company_id && filter.map_or(true, |f| in_category(item, f))
        }))
    }

    async fn distinct_company_ids(&self, filter: CategoryFilter) -> anyhow::Result<Vec<String>> {
        let mut ids: Vec<String> = self
            .sorted(|item| in_category(item, filter))
            .into_iter()
            .map(|item| item.company_id)
            .collect();
        ids.sort();
        ids.dedup();
        Ok(ids)
    }

    async fn update(
        &self,
        solution_id: &str,
        patch: &SolutionItemPatch,
        updated_at: DateTime<Utc>,
    ) -> anyhow::Result<Option<SolutionItem>> {
        let mut data = self.data.write();
        Ok(data.get_mut(solution_id).map(|stored| {
            patch.apply_to(stored);
            stored.updated_at = updated_at;
            stored.clone()
        }))
    }

    async fn delete(&self, solution_id: &str) -> anyhow::Result<bool> {
        Ok(self.data.write().remove(solution_id).is_some())
    }

    async fn search(&self, matcher: &SearchMatcher, lang: Language) -> anyhow::Result<Vec<SearchHit>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        let companies = self.companies.read();

        Ok(self
            .sorted(|_| true)
            .into_iter()
            .filter_map(|item| {
                let company = companies.get(&item.company_id)?.clone();
                matcher
                    .matches(&item.details, &company.details, lang)
                    .then_some(SearchHit { item, company })
            })
            .collect())
    }
}

/// Repository whose every call fails, for storage error paths
pub struct FailingCompanyRepo;

#[async_trait]
impl CompanyRepository for FailingCompanyRepo {
    async fn insert(&self, _company: &Company) -> anyhow::Result<InsertOutcome<Company>> {
        anyhow::bail!("connection refused")
    }
    async fn find_by_id(&self, _company_id: &str) -> anyhow::Result<Option<Company>> {
        anyhow::bail!("connection refused")
    }
    async fn find_by_ids(&self, _company_ids: &[String]) -> anyhow::Result<Vec<Company>> {
        anyhow::bail!("connection refused")
    }
    async fn list(&self, _limit: u64, _offset: u64) -> anyhow::Result<Vec<Company>> {
        anyhow::bail!("connection refused")
    }
    async fn count(&self) -> anyhow::Result<u64> {
        anyhow::bail!("connection refused")
    }
    async fn update(
        &self,
        _company_id: &str,
        _patch: &CompanyPatch,
        _updated_at: DateTime<Utc>,
    ) -> anyhow::Result<Option<Company>> {
        anyhow::bail!("connection refused")
    }
    async fn delete(&self, _company_id: &str) -> anyhow::Result<bool> {
        anyhow::bail!("connection refused")
    }
}

// ===== Id generation =====

/// Hands out queued ids, then repeats the last one forever
pub struct ScriptedIds {
    queue: Mutex<VecDeque<String>>,
    last: Mutex<String>,
}

impl ScriptedIds {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            queue: Mutex::new(ids.iter().map(|s| s.to_string()).collect()),
            last: Mutex::new(ids.last().map(|s| s.to_string()).unwrap_or_default()),
        }
    }
}

impl IdGenerator for ScriptedIds {
    fn generate(&self) -> String {
        match self.queue.lock().pop_front() {
            Some(id) => {
                *self.last.lock() = id.clone();
                id
            }
            None => self.last.lock().clone(),
        }
    }
}

// ===== Fixtures =====

pub struct TestDirectory {
    pub service: Arc<Service>,
    pub companies: MockCompanyRepo,
    pub solutions: MockSolutionRepo,
}

pub fn create_test_directory() -> TestDirectory {
    create_test_directory_with(Config::default(), None)
}

pub fn create_test_directory_with(
    config: Config,
    ids: Option<Arc<dyn IdGenerator>>,
) -> TestDirectory {
    let companies = MockCompanyRepo::new();
    let solutions = MockSolutionRepo::new(&companies);
    let categories = Arc::new(CategoryTable::builtin().unwrap());

    let mut service = Service::new(
        Arc::new(companies.clone()),
        Arc::new(solutions.clone()),
        categories,
        config,
    );
    if let Some(ids) = ids {
        service = service.with_id_generator(ids);
    }

    TestDirectory {
        service: Arc::new(service),
        companies,
        solutions,
    }
}

pub fn company_details(name: &str) -> CompanyDetails {
    CompanyDetails {
        name: name.to_string(),
        ..Default::default()
    }
}

pub fn solution_details(title: &str) -> SolutionDetails {
    SolutionDetails {
        title: title.to_string(),
        ..Default::default()
    }
}

pub fn bilingual<T>(ko: T, en: T) -> Localized<T> {
    BTreeMap::from([(Language::Ko, ko), (Language::En, en)])
}

/// `{companyId:"", ko:{name:"Acme"}, en:{name:"Acme Inc"}}`
pub fn acme() -> NewCompany {
    NewCompany {
        company_id: String::new(),
        details: bilingual(company_details("Acme"), company_details("Acme Inc")),
    }
}

pub fn new_company(company_id: &str, ko_name: &str, en_name: &str) -> NewCompany {
    NewCompany {
        company_id: company_id.to_string(),
        details: bilingual(company_details(ko_name), company_details(en_name)),
    }
}

pub fn new_solution(
    company_id: &str,
    main_category_id: i32,
    sub_category_id: i32,
    ko_title: &str,
    en_title: &str,
) -> NewSolutionItem {
    NewSolutionItem {
        solution_id: String::new(),
        company_id: company_id.to_string(),
        main_category_id,
        sub_category_id,
        details: bilingual(solution_details(ko_title), solution_details(en_title)),
    }
}
