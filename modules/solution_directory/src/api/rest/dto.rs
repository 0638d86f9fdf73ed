//! REST DTOs with serde derives for HTTP API
//!
//! Entities travel with one nested details object per language code, e.g.
//! `{"companyId": "...", "ko": {...}, "en": {...}}`.

use crate::contract::Language;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Language blocks of a request body, keyed by language code
///
/// Top-level keys that are not a language code are dropped on read, so
/// clients may send extra fields. A block under a known code must still
/// have the details shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LanguageBlocks<D>(pub BTreeMap<String, D>);

impl<D> Default for LanguageBlocks<D> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<'de, D: DeserializeOwned> Deserialize<'de> for LanguageBlocks<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;

        let mut blocks = BTreeMap::new();
        for (code, value) in raw {
            if Language::from_code(&code).is_none() {
                tracing::debug!(field = %code, "ignoring unknown request field");
                continue;
            }
            let block = D::deserialize(value)
                .map_err(|e| serde::de::Error::custom(format!("invalid '{code}' block: {e}")))?;
            blocks.insert(code, block);
        }
        Ok(Self(blocks))
    }
}

// ===== Details DTOs =====

/// Company details in one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CompanyDetailsDto {
    #[schema(example = "Acme Inc")]
    pub name: String,
    pub ceo: String,
    pub address: String,
    pub tel: String,
    pub fax: String,
    pub website: String,
}

/// Solution details in one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SolutionDetailsDto {
    #[schema(example = "Giga Sensing")]
    pub title: String,
    pub summary: String,
    #[serde(rename = "abstract")]
    pub r#abstract: String,
    pub feature: String,
    pub composition: String,
}

// ===== Company DTOs =====

/// Company entity (all languages)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    #[schema(example = "Ab3dE9xZ")]
    pub company_id: String,

    /// Details keyed by language code
    #[serde(flatten)]
    pub details: BTreeMap<String, CompanyDetailsDto>,

    pub created_at: chrono::DateTime<chrono::Utc>,

    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Company creation request
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequest {
    /// Empty to let the server generate an id
    #[serde(default)]
    pub company_id: String,

    /// Details keyed by language code
    #[serde(flatten)]
    #[schema(value_type = BTreeMap<String, CompanyDetailsDto>)]
    pub details: LanguageBlocks<CompanyDetailsDto>,
}

/// Partial company update; language blocks present replace the stored ones
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequest {
    /// Ignored, the path id wins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,

    /// Details keyed by language code
    #[serde(flatten)]
    #[schema(value_type = BTreeMap<String, CompanyDetailsDto>)]
    pub details: LanguageBlocks<CompanyDetailsDto>,
}

/// Company in one language
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyViewDto {
    pub company_id: String,
    pub name: String,
    pub ceo: String,
    pub address: String,
    pub tel: String,
    pub fax: String,
    pub website: String,
}

/// Page of companies
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPageDto {
    pub items: Vec<CompanyDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

// ===== Solution DTOs =====

/// Solution entity (all languages)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolutionItemDto {
    #[schema(example = "S0lut10n")]
    pub solution_id: String,

    pub company_id: String,

    pub main_category_id: i32,

    pub sub_category_id: i32,

    /// Details keyed by language code
    #[serde(flatten)]
    pub details: BTreeMap<String, SolutionDetailsDto>,

    pub created_at: chrono::DateTime<chrono::Utc>,

    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Solution creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSolutionRequest {
    /// Empty to let the server generate an id
    #[serde(default)]
    pub solution_id: String,

    pub company_id: String,

    pub main_category_id: i32,

    pub sub_category_id: i32,

    /// Details keyed by language code
    #[serde(flatten)]
    #[schema(value_type = BTreeMap<String, SolutionDetailsDto>)]
    pub details: LanguageBlocks<SolutionDetailsDto>,
}

/// Partial solution update
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSolutionRequest {
    /// Ignored, the path id wins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_category_id: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category_id: Option<i32>,

    /// Details keyed by language code
    #[serde(flatten)]
    #[schema(value_type = BTreeMap<String, SolutionDetailsDto>)]
    pub details: LanguageBlocks<SolutionDetailsDto>,
}

/// Solution in one language
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolutionItemViewDto {
    pub solution_id: String,
    pub company_id: String,
    pub main_category_id: i32,
    pub sub_category_id: i32,
    pub title: String,
    pub summary: String,
    #[serde(rename = "abstract")]
    pub r#abstract: String,
    pub feature: String,
    pub composition: String,

    /// Owning company name, present on search results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

// ===== Category DTOs =====

/// UI button placement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ButtonPositionDto {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubCategoryDto {
    pub id: i32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ButtonPositionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MainCategoryDto {
    pub id: i32,
    pub name: String,
    pub sub_categories: Vec<SubCategoryDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuperCategoryDto {
    pub id: i32,
    pub name: String,
    pub main_categories: Vec<MainCategoryDto>,
}

/// Main category with the super category owning it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MainCategoryPlacementDto {
    pub super_category_id: i32,
    pub super_category_name: String,
    pub main_category: MainCategoryDto,
}

// ===== Misc =====

/// Delete outcome
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}

// Note: Conversion implementations live in mapper.rs
