//! Contract models for the solution directory
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Display language of a details block
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    /// Language used when a block or a code is missing
    pub const FALLBACK: Language = Language::Ko;

    pub const ALL: [Language; 2] = [Language::Ko, Language::En];

    /// Wire code of the language ("ko", "en")
    pub fn code(self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }

    /// Parse a wire code, `None` for unknown codes
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Resolve an optional request code, unknown or absent codes fall back to Korean
    pub fn resolve(code: Option<&str>) -> Self {
        code.and_then(Self::from_code).unwrap_or(Self::FALLBACK)
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Per-language details of an entity
pub type Localized<T> = BTreeMap<Language, T>;

/// Company details in a single language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyDetails {
    pub name: String,
    pub ceo: String,
    pub address: String,
    pub tel: String,
    pub fax: String,
    pub website: String,
}

/// Solution details in a single language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionDetails {
    pub title: String,
    pub summary: String,
    pub r#abstract: String,
    pub feature: String,
    pub composition: String,
}

/// Persisted company
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    /// Short identifier (primary key)
    pub company_id: String,
    /// Details per language
    pub details: Localized<CompanyDetails>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Persisted solution item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionItem {
    /// Short identifier (primary key)
    pub solution_id: String,
    /// Owning company
    pub company_id: String,
    /// Main category id (index into the category table)
    pub main_category_id: i32,
    /// Sub category id within the main category
    pub sub_category_id: i32,
    /// Details per language
    pub details: Localized<SolutionDetails>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Company creation input. An empty `company_id` asks for a generated one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCompany {
    pub company_id: String,
    pub details: Localized<CompanyDetails>,
}

/// Solution creation input. An empty `solution_id` asks for a generated one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSolutionItem {
    pub solution_id: String,
    pub company_id: String,
    pub main_category_id: i32,
    pub sub_category_id: i32,
    pub details: Localized<SolutionDetails>,
}

/// Partial company update. Language blocks present here replace the stored ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    pub details: Localized<CompanyDetails>,
}

/// Partial solution update. Only present fields overwrite the stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionItemPatch {
    pub company_id: Option<String>,
    pub main_category_id: Option<i32>,
    pub sub_category_id: Option<i32>,
    pub details: Localized<SolutionDetails>,
}

impl CompanyPatch {
    /// Replace the language blocks present in the patch
    pub fn apply_to(&self, company: &mut Company) {
        company
            .details
            .extend(self.details.iter().map(|(lang, d)| (*lang, d.clone())));
    }
}

impl SolutionItemPatch {
    /// Overwrite the present fields and language blocks
    pub fn apply_to(&self, item: &mut SolutionItem) {
        if let Some(company_id) = &self.company_id {
            item.company_id = company_id.trim().to_string();
        }
        if let Some(main_category_id) = self.main_category_id {
            item.main_category_id = main_category_id;
        }
        if let Some(sub_category_id) = self.sub_category_id {
            item.sub_category_id = sub_category_id;
        }
        item.details
            .extend(self.details.iter().map(|(lang, d)| (*lang, d.clone())));
    }
}

/// Single-language projection of a company
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyView {
    pub company_id: String,
    pub name: String,
    pub ceo: String,
    pub address: String,
    pub tel: String,
    pub fax: String,
    pub website: String,
}

/// Single-language projection of a solution item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionItemView {
    pub solution_id: String,
    pub company_id: String,
    pub main_category_id: i32,
    pub sub_category_id: i32,
    pub title: String,
    pub summary: String,
    pub r#abstract: String,
    pub feature: String,
    pub composition: String,
    /// Company name in the same language, filled by search
    pub company_name: Option<String>,
}

/// Category filter: the whole main category unless a sub category is given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter {
    pub main_category_id: i32,
    pub sub_category_id: Option<i32>,
}

impl CategoryFilter {
    pub fn main(main_category_id: i32) -> Self {
        Self {
            main_category_id,
            sub_category_id: None,
        }
    }

    pub fn sub(main_category_id: i32, sub_category_id: i32) -> Self {
        Self {
            main_category_id,
            sub_category_id: Some(sub_category_id),
        }
    }
}

/// One page of an offset-paginated listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Requested page, `None` fields take the configured defaults
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRequest {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// UI button placement of a sub category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPosition {
    pub x: i32,
    pub y: i32,
}

/// Localized sub category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCategoryView {
    pub id: i32,
    pub name: String,
    pub position: Option<ButtonPosition>,
}

/// Localized main category with its ordered sub categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainCategoryView {
    pub id: i32,
    pub name: String,
    pub sub_categories: Vec<SubCategoryView>,
}

/// Localized super category with its main categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperCategoryView {
    pub id: i32,
    pub name: String,
    pub main_categories: Vec<MainCategoryView>,
}

/// A main category together with the super category owning it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainCategoryPlacement {
    pub super_category_id: i32,
    pub super_category_name: String,
    pub main_category: MainCategoryView,
}
