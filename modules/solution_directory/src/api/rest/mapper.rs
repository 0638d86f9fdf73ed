//! Mapping between REST DTOs and contract models

use super::dto::*;
use crate::contract::{
    ButtonPosition, Company, CompanyDetails, CompanyPatch, CompanyView, DirectoryError, Language,
    Localized, MainCategoryPlacement, MainCategoryView, NewCompany, NewSolutionItem, Page,
    SolutionDetails, SolutionItem, SolutionItemPatch, SolutionItemView, SubCategoryView,
    SuperCategoryView,
};
use std::collections::BTreeMap;

/// Convert wire details into per-language blocks, rejecting unknown language codes
fn details_from_dto<D, T>(blocks: BTreeMap<String, D>) -> Result<Localized<T>, DirectoryError>
where
    T: From<D>,
{
    blocks
        .into_iter()
        .map(|(code, block)| {
            Language::from_code(&code)
                .map(|lang| (lang, T::from(block)))
                .ok_or_else(|| DirectoryError::validation(format!("unknown language block: {code}")))
        })
        .collect()
}

fn details_to_dto<T, D>(details: Localized<T>) -> BTreeMap<String, D>
where
    D: From<T>,
{
    details
        .into_iter()
        .map(|(lang, block)| (lang.code().to_string(), D::from(block)))
        .collect()
}

// ===== Details =====

impl From<CompanyDetailsDto> for CompanyDetails {
    fn from(dto: CompanyDetailsDto) -> Self {
        Self {
            name: dto.name,
            ceo: dto.ceo,
            address: dto.address,
            tel: dto.tel,
            fax: dto.fax,
            website: dto.website,
        }
    }
}

impl From<CompanyDetails> for CompanyDetailsDto {
    fn from(details: CompanyDetails) -> Self {
        Self {
            name: details.name,
            ceo: details.ceo,
            address: details.address,
            tel: details.tel,
            fax: details.fax,
            website: details.website,
        }
    }
}

impl From<SolutionDetailsDto> for SolutionDetails {
    fn from(dto: SolutionDetailsDto) -> Self {
        Self {
            title: dto.title,
            summary: dto.summary,
            r#abstract: dto.r#abstract,
            feature: dto.feature,
            composition: dto.composition,
        }
    }
}

impl From<SolutionDetails> for SolutionDetailsDto {
    fn from(details: SolutionDetails) -> Self {
        Self {
            title: details.title,
            summary: details.summary,
            r#abstract: details.r#abstract,
            feature: details.feature,
            composition: details.composition,
        }
    }
}

// ===== Company =====

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        Self {
            company_id: company.company_id,
            details: details_to_dto(company.details),
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

impl TryFrom<CompanyDto> for Company {
    type Error = DirectoryError;

    fn try_from(dto: CompanyDto) -> Result<Self, Self::Error> {
        Ok(Self {
            company_id: dto.company_id,
            details: details_from_dto(dto.details)?,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        })
    }
}

impl TryFrom<CreateCompanyRequest> for NewCompany {
    type Error = DirectoryError;

    fn try_from(req: CreateCompanyRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            company_id: req.company_id,
            details: details_from_dto(req.details.0)?,
        })
    }
}

impl From<NewCompany> for CreateCompanyRequest {
    fn from(new: NewCompany) -> Self {
        Self {
            company_id: new.company_id,
            details: LanguageBlocks(details_to_dto(new.details)),
        }
    }
}

impl TryFrom<UpdateCompanyRequest> for CompanyPatch {
    type Error = DirectoryError;

    fn try_from(req: UpdateCompanyRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            details: details_from_dto(req.details.0)?,
        })
    }
}

impl From<CompanyPatch> for UpdateCompanyRequest {
    fn from(patch: CompanyPatch) -> Self {
        Self {
            company_id: None,
            details: LanguageBlocks(details_to_dto(patch.details)),
        }
    }
}

impl From<CompanyView> for CompanyViewDto {
    fn from(view: CompanyView) -> Self {
        Self {
            company_id: view.company_id,
            name: view.name,
            ceo: view.ceo,
            address: view.address,
            tel: view.tel,
            fax: view.fax,
            website: view.website,
        }
    }
}

impl From<CompanyViewDto> for CompanyView {
    fn from(dto: CompanyViewDto) -> Self {
        Self {
            company_id: dto.company_id,
            name: dto.name,
            ceo: dto.ceo,
            address: dto.address,
            tel: dto.tel,
            fax: dto.fax,
            website: dto.website,
        }
    }
}

impl From<Page<Company>> for CompanyPageDto {
    fn from(page: Page<Company>) -> Self {
        Self {
            items: page.items.into_iter().map(CompanyDto::from).collect(),
            total: page.total,
            page: page.page,
            per_page: page.per_page,
        }
    }
}

impl TryFrom<CompanyPageDto> for Page<Company> {
    type Error = DirectoryError;

    fn try_from(dto: CompanyPageDto) -> Result<Self, Self::Error> {
        Ok(Self {
            items: dto
                .items
                .into_iter()
                .map(Company::try_from)
                .collect::<Result<_, _>>()?,
            total: dto.total,
            page: dto.page,
            per_page: dto.per_page,
        })
    }
}

// ===== Solution =====

impl From<SolutionItem> for SolutionItemDto {
    fn from(item: SolutionItem) -> Self {
        Self {
            solution_id: item.solution_id,
            company_id: item.company_id,
            main_category_id: item.main_category_id,
            sub_category_id: item.sub_category_id,
            details: details_to_dto(item.details),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl TryFrom<SolutionItemDto> for SolutionItem {
    type Error = DirectoryError;

    fn try_from(dto: SolutionItemDto) -> Result<Self, Self::Error> {
        Ok(Self {
            solution_id: dto.solution_id,
            company_id: dto.company_id,
            main_category_id: dto.main_category_id,
            sub_category_id: dto.sub_category_id,
            details: details_from_dto(dto.details)?,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        })
    }
}

impl TryFrom<CreateSolutionRequest> for NewSolutionItem {
    type Error = DirectoryError;

    fn try_from(req: CreateSolutionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            solution_id: req.solution_id,
            company_id: req.company_id,
            main_category_id: req.main_category_id,
            sub_category_id: req.sub_category_id,
            details: details_from_dto(req.details.0)?,
        })
    }
}

impl From<NewSolutionItem> for CreateSolutionRequest {
    fn from(new: NewSolutionItem) -> Self {
        Self {
            solution_id: new.solution_id,
            company_id: new.company_id,
            main_category_id: new.main_category_id,
            sub_category_id: new.sub_category_id,
            details: LanguageBlocks(details_to_dto(new.details)),
        }
    }
}

impl TryFrom<UpdateSolutionRequest> for SolutionItemPatch {
    type Error = DirectoryError;

    fn try_from(req: UpdateSolutionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            company_id: req.company_id,
            main_category_id: req.main_category_id,
            sub_category_id: req.sub_category_id,
            details: details_from_dto(req.details.0)?,
        })
    }
}

impl From<SolutionItemPatch> for UpdateSolutionRequest {
    fn from(patch: SolutionItemPatch) -> Self {
        Self {
            solution_id: None,
            company_id: patch.company_id,
            main_category_id: patch.main_category_id,
            sub_category_id: patch.sub_category_id,
            details: LanguageBlocks(details_to_dto(patch.details)),
        }
    }
}

impl From<SolutionItemView> for SolutionItemViewDto {
    fn from(view: SolutionItemView) -> Self {
        Self {
            solution_id: view.solution_id,
            company_id: view.company_id,
            main_category_id: view.main_category_id,
            sub_category_id: view.sub_category_id,
            title: view.title,
            summary: view.summary,
            r#abstract: view.r#abstract,
            feature: view.feature,
            composition: view.composition,
            company_name: view.company_name,
        }
    }
}

impl From<SolutionItemViewDto> for SolutionItemView {
    fn from(dto: SolutionItemViewDto) -> Self {
        Self {
            solution_id: dto.solution_id,
            company_id: dto.company_id,
            main_category_id: dto.main_category_id,
            sub_category_id: dto.sub_category_id,
            title: dto.title,
            summary: dto.summary,
            r#abstract: dto.r#abstract,
            feature: dto.feature,
            composition: dto.composition,
            company_name: dto.company_name,
        }
    }
}

// ===== Categories =====

impl From<SubCategoryView> for SubCategoryDto {
    fn from(view: SubCategoryView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            position: view.position.map(|p| ButtonPositionDto { x: p.x, y: p.y }),
        }
    }
}

impl From<SubCategoryDto> for SubCategoryView {
    fn from(dto: SubCategoryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            position: dto.position.map(|p| ButtonPosition { x: p.x, y: p.y }),
        }
    }
}

impl From<MainCategoryView> for MainCategoryDto {
    fn from(view: MainCategoryView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            sub_categories: view.sub_categories.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<MainCategoryDto> for MainCategoryView {
    fn from(dto: MainCategoryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            sub_categories: dto.sub_categories.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<SuperCategoryView> for SuperCategoryDto {
    fn from(view: SuperCategoryView) -> Self {
        Self {
            id: view.id,
            name: view.name,
            main_categories: view.main_categories.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<SuperCategoryDto> for SuperCategoryView {
    fn from(dto: SuperCategoryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            main_categories: dto.main_categories.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<MainCategoryPlacement> for MainCategoryPlacementDto {
    fn from(placement: MainCategoryPlacement) -> Self {
        Self {
            super_category_id: placement.super_category_id,
            super_category_name: placement.super_category_name,
            main_category: placement.main_category.into(),
        }
    }
}

impl From<MainCategoryPlacementDto> for MainCategoryPlacement {
    fn from(dto: MainCategoryPlacementDto) -> Self {
        Self {
            super_category_id: dto.super_category_id,
            super_category_name: dto.super_category_name,
            main_category: dto.main_category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_keeps_language_blocks() {
        let json = serde_json::json!({
            "companyId": "",
            "ko": {"name": "에이씨엠이"},
            "en": {"name": "Acme Inc", "website": "acme.example"}
        });
        let req: CreateCompanyRequest = serde_json::from_value(json).unwrap();
        let new = NewCompany::try_from(req).unwrap();

        assert_eq!(new.company_id, "");
        assert_eq!(new.details[&Language::Ko].name, "에이씨엠이");
        assert_eq!(new.details[&Language::En].website, "acme.example");
        assert_eq!(new.details[&Language::En].ceo, "");
    }

    #[test]
    fn fields_outside_language_blocks_are_ignored() {
        let json = serde_json::json!({
            "extra": true,
            "fr": {"name": "Acme SA"},
            "en": {"name": "Acme Inc"}
        });
        let req: UpdateCompanyRequest = serde_json::from_value(json).unwrap();

        let patch = CompanyPatch::try_from(req).unwrap();
        assert_eq!(patch.details.len(), 1);
        assert_eq!(patch.details[&Language::En].name, "Acme Inc");
    }

    #[test]
    fn malformed_language_block_is_rejected() {
        let json = serde_json::json!({"companyId": "", "en": "Acme Inc"});
        assert!(serde_json::from_value::<CreateCompanyRequest>(json).is_err());
    }

    #[test]
    fn unknown_language_code_is_a_validation_error() {
        let blocks: BTreeMap<String, CompanyDetailsDto> =
            [("fr".to_string(), CompanyDetailsDto::default())].into();

        let err = details_from_dto::<_, CompanyDetails>(blocks).unwrap_err();
        assert!(matches!(err, DirectoryError::Validation { .. }));
    }

    #[test]
    fn solution_dto_serializes_flat_language_blocks() {
        let now = chrono::Utc::now();
        let item = SolutionItem {
            solution_id: "S1".to_string(),
            company_id: "C1".to_string(),
            main_category_id: 3,
            sub_category_id: 1,
            details: [(
                Language::En,
                SolutionDetails {
                    title: "Giga Sensing".to_string(),
                    r#abstract: "short".to_string(),
                    ..Default::default()
                },
            )]
            .into_iter()
            .collect(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(SolutionItemDto::from(item)).unwrap();
        assert_eq!(json["solutionId"], "S1");
        assert_eq!(json["mainCategoryId"], 3);
        assert_eq!(json["en"]["title"], "Giga Sensing");
        assert_eq!(json["en"]["abstract"], "short");
        assert!(json.get("ko").is_none());
    }

    #[test]
    fn patch_request_omits_absent_fields() {
        let patch = SolutionItemPatch {
            main_category_id: Some(4),
            ..Default::default()
        };
        let json = serde_json::to_value(UpdateSolutionRequest::from(patch)).unwrap();

        assert_eq!(json, serde_json::json!({"mainCategoryId": 4}));
    }
}
