//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{Company, CompanyDetails, Language, Localized, SolutionDetails, SolutionItem};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;

// ===== Company Conversions =====

impl TryFrom<entity::company::Model> for Company {
    type Error = anyhow::Error;

    fn try_from(entity: entity::company::Model) -> Result<Self, Self::Error> {
        let details = decode_details::<CompanyDetailsJson>(entity.details)?
            .into_iter()
            .map(|(lang, d)| (lang, d.into()))
            .collect();

        Ok(Self {
            company_id: entity.company_id,
            details,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl TryFrom<&Company> for entity::company::ActiveModel {
    type Error = anyhow::Error;

    fn try_from(model: &Company) -> Result<Self, Self::Error> {
        use sea_orm::ActiveValue::*;

        let details = encode_details(model.details.iter().map(|(lang, d)| (*lang, CompanyDetailsJson::from(d))))?;

        Ok(Self {
            company_id: Set(model.company_id.clone()),
            details: Set(details),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        })
    }
}

// ===== Solution Conversions =====

impl TryFrom<entity::Model> for SolutionItem {
    type Error = anyhow::Error;

    fn try_from(entity: entity::Model) -> Result<Self, Self::Error> {
        let details = decode_details::<SolutionDetailsJson>(entity.details)?
            .into_iter()
            .map(|(lang, d)| (lang, d.into()))
            .collect();

        Ok(Self {
            solution_id: entity.solution_id,
            company_id: entity.company_id,
            main_category_id: entity.main_category_id,
            sub_category_id: entity.sub_category_id,
            details,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl TryFrom<&SolutionItem> for entity::ActiveModel {
    type Error = anyhow::Error;

    fn try_from(model: &SolutionItem) -> Result<Self, Self::Error> {
        use sea_orm::ActiveValue::*;

        let details = encode_details(model.details.iter().map(|(lang, d)| (*lang, SolutionDetailsJson::from(d))))?;

        Ok(Self {
            solution_id: Set(model.solution_id.clone()),
            company_id: Set(model.company_id.clone()),
            main_category_id: Set(model.main_category_id),
            sub_category_id: Set(model.sub_category_id),
            details: Set(details),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        })
    }
}

// ===== JSON Serialization Helpers =====

/// Language blocks keyed by language code. Unknown codes are skipped.
fn decode_details<T: DeserializeOwned>(value: serde_json::Value) -> anyhow::Result<Localized<T>> {
    let raw: BTreeMap<String, T> = serde_json::from_value(value)?;
    Ok(raw
        .into_iter()
        .filter_map(|(code, block)| Language::from_code(&code).map(|lang| (lang, block)))
        .collect())
}

fn encode_details<T: Serialize>(
    blocks: impl Iterator<Item = (Language, T)>,
) -> anyhow::Result<serde_json::Value> {
    let raw: BTreeMap<&'static str, T> = blocks.map(|(lang, block)| (lang.code(), block)).collect();
    Ok(serde_json::to_value(raw)?)
}

/// JSON representation of company details for database storage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct CompanyDetailsJson {
    name: String,
    ceo: String,
    address: String,
    tel: String,
    fax: String,
    website: String,
}

/// JSON representation of solution details for database storage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct SolutionDetailsJson {
    title: String,
    summary: String,
    r#abstract: String,
    feature: String,
    composition: String,
}

impl From<CompanyDetailsJson> for CompanyDetails {
    fn from(json: CompanyDetailsJson) -> Self {
        Self {
            name: json.name,
            ceo: json.ceo,
            address: json.address,
            tel: json.tel,
            fax: json.fax,
            website: json.website,
        }
    }
}

impl From<&CompanyDetails> for CompanyDetailsJson {
    fn from(details: &CompanyDetails) -> Self {
        Self {
            name: details.name.clone(),
            ceo: details.ceo.clone(),
            address: details.address.clone(),
            tel: details.tel.clone(),
            fax: details.fax.clone(),
            website: details.website.clone(),
        }
    }
}

impl From<SolutionDetailsJson> for SolutionDetails {
    fn from(json: SolutionDetailsJson) -> Self {
        Self {
            title: json.title,
            summary: json.summary,
            r#abstract: json.r#abstract,
            feature: json.feature,
            composition: json.composition,
        }
    }
}

impl From<&SolutionDetails> for SolutionDetailsJson {
    fn from(details: &SolutionDetails) -> Self {
        Self {
            title: details.title.clone(),
            summary: details.summary.clone(),
            r#abstract: details.r#abstract.clone(),
            feature: details.feature.clone(),
            composition: details.composition.clone(),
        }
    }
}
