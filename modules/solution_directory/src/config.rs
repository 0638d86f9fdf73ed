//! Configuration for the solution directory module

use crate::domain::categories::CategoryTable;
use crate::domain::search::SearchMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Solution directory configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Page size used when a listing request gives none
    #[serde(default = "default_per_page")]
    pub default_per_page: u64,

    /// Upper bound for requested page sizes
    #[serde(default = "default_max_per_page")]
    pub max_per_page: u64,

    /// Generated-id attempts before a create gives up
    #[serde(default = "default_max_id_attempts")]
    pub max_id_attempts: u32,

    /// Reject solutions whose categories are not in the category table
    #[serde(default = "default_true")]
    pub validate_categories: bool,

    /// Whether search queries are regular expressions or plain text
    #[serde(default)]
    pub search_mode: SearchMode,

    /// Category table YAML; the built-in table is used when unset
    #[serde(default)]
    pub categories_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_per_page: default_per_page(),
            max_per_page: default_max_per_page(),
            max_id_attempts: default_max_id_attempts(),
            validate_categories: true,
            search_mode: SearchMode::default(),
            categories_path: None,
        }
    }
}

impl Config {
    /// Category table selected by this configuration
    pub fn load_categories(&self) -> anyhow::Result<CategoryTable> {
        match &self.categories_path {
            Some(path) => CategoryTable::from_path(path),
            None => CategoryTable::builtin(),
        }
    }
}

fn default_per_page() -> u64 {
    10
}

fn default_max_per_page() -> u64 {
    100
}

fn default_max_id_attempts() -> u32 {
    16
}

fn default_true() -> bool {
    true
}
