//! Search query compilation and field matching

use crate::contract::{CompanyDetails, DirectoryError, Language, Localized, SolutionDetails};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Compiled pattern size ceiling
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// How the user query is turned into a pattern
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// The query is a regular expression
    #[default]
    Pattern,
    /// The query is matched as plain text
    Literal,
}

/// Case-insensitive matcher over the searchable fields
#[derive(Debug, Clone)]
pub struct SearchMatcher {
    regex: Regex,
}

impl SearchMatcher {
    /// Compile a user query. Blank queries yield `None`.
    pub fn compile(query: &str, mode: SearchMode) -> Result<Option<Self>, DirectoryError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(None);
        }

        let pattern = match mode {
            SearchMode::Pattern => query.to_string(),
            SearchMode::Literal => regex::escape(query),
        };

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|e| DirectoryError::validation(format!("invalid search pattern: {}", e)))?;

        Ok(Some(Self { regex }))
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// title, summary, abstract, feature or composition of the `lang` block
    pub fn matches_solution(&self, details: &Localized<SolutionDetails>, lang: Language) -> bool {
        details.get(&lang).is_some_and(|d| {
            [
                &d.title,
                &d.summary,
                &d.r#abstract,
                &d.feature,
                &d.composition,
            ]
            .into_iter()
            .any(|field| self.is_match(field))
        })
    }

    /// name, ceo or address of the `lang` block
    pub fn matches_company(&self, details: &Localized<CompanyDetails>, lang: Language) -> bool {
        details.get(&lang).is_some_and(|d| {
            [&d.name, &d.ceo, &d.address]
                .into_iter()
                .any(|field| self.is_match(field))
        })
    }

    /// A joined row matches when any solution or company field does
    pub fn matches(
        &self,
        solution: &Localized<SolutionDetails>,
        company: &Localized<CompanyDetails>,
        lang: Language,
    ) -> bool {
        self.matches_solution(solution, lang) || self.matches_company(company, lang)
    }
}
