//! Single-language projection of bilingual entities
//!
//! The requested block is used when present, otherwise the Korean one, otherwise
//! empty fields. Pure functions, no I/O.

use crate::contract::{
    Company, CompanyDetails, CompanyView, Language, Localized, SolutionDetails, SolutionItem,
    SolutionItemView,
};

/// Block for `lang`, falling back to the Korean block
pub fn pick<T>(details: &Localized<T>, lang: Language) -> Option<&T> {
    details
        .get(&lang)
        .or_else(|| details.get(&Language::FALLBACK))
}

/// Projection of an entity into a flat, single-language view
pub trait Localize {
    type View;

    fn localize(&self, lang: Language) -> Self::View;
}

impl Localize for Company {
    type View = CompanyView;

    fn localize(&self, lang: Language) -> CompanyView {
        let empty = CompanyDetails::default();
        let d = pick(&self.details, lang).unwrap_or(&empty);
        CompanyView {
            company_id: self.company_id.clone(),
            name: d.name.clone(),
            ceo: d.ceo.clone(),
            address: d.address.clone(),
            tel: d.tel.clone(),
            fax: d.fax.clone(),
            website: d.website.clone(),
        }
    }
}

impl Localize for SolutionItem {
    type View = SolutionItemView;

    fn localize(&self, lang: Language) -> SolutionItemView {
        let empty = SolutionDetails::default();
        let d = pick(&self.details, lang).unwrap_or(&empty);
        SolutionItemView {
            solution_id: self.solution_id.clone(),
            company_id: self.company_id.clone(),
            main_category_id: self.main_category_id,
            sub_category_id: self.sub_category_id,
            title: d.title.clone(),
            summary: d.summary.clone(),
            r#abstract: d.r#abstract.clone(),
            feature: d.feature.clone(),
            composition: d.composition.clone(),
            company_name: None,
        }
    }
}

/// Localized name from a per-language name table
pub fn localized_name(names: &Localized<String>, lang: Language) -> String {
    pick(names, lang).cloned().unwrap_or_default()
}
