//! Static solution category hierarchy
//!
//! super category → main categories → ordered sub categories. The table is
//! loaded once from YAML and shared read-only; storage treats category ids as
//! opaque integers.

use crate::contract::{
    ButtonPosition, Language, Localized, MainCategoryPlacement, MainCategoryView,
    SubCategoryView, SuperCategoryView,
};
use crate::domain::localization::localized_name;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

const BUILTIN_TABLE: &str = include_str!("../../data/categories.yaml");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCategory {
    pub id: i32,
    pub names: Localized<String>,
    pub position: Option<ButtonPosition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainCategory {
    pub id: i32,
    pub names: Localized<String>,
    pub sub_categories: Vec<SubCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperCategory {
    pub id: i32,
    pub names: Localized<String>,
    pub main_category_ids: Vec<i32>,
}

/// Read-only category lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    super_categories: Vec<SuperCategory>,
    main_categories: BTreeMap<i32, MainCategory>,
}

// ===== YAML representation =====

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableYaml {
    super_categories: Vec<SuperYaml>,
    main_categories: Vec<MainYaml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SuperYaml {
    id: i32,
    names: BTreeMap<String, String>,
    main_category_ids: Vec<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MainYaml {
    id: i32,
    names: BTreeMap<String, String>,
    #[serde(default)]
    sub_categories: Vec<SubYaml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SubYaml {
    id: i32,
    names: BTreeMap<String, String>,
    #[serde(default)]
    position: Option<PositionYaml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PositionYaml {
    x: i32,
    y: i32,
}

fn parse_names(names: BTreeMap<String, String>) -> Result<Localized<String>> {
    names
        .into_iter()
        .map(|(code, name)| match Language::from_code(&code) {
            Some(lang) => Ok((lang, name)),
            None => bail!("unknown language code '{}' in category names", code),
        })
        .collect()
}

impl CategoryTable {
    /// Table shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_yaml_str(BUILTIN_TABLE).context("built-in category table")
    }

    /// Load a table from a YAML file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading category table {}", path.display()))?;
        Self::from_yaml_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse and check a YAML table
    pub fn from_yaml_str(raw: &str) -> Result<Self> {
        let yaml: TableYaml = serde_yaml::from_str(raw)?;

        let mut main_categories = BTreeMap::new();
        for main in yaml.main_categories {
            let mut seen = BTreeSet::new();
            let mut sub_categories = Vec::with_capacity(main.sub_categories.len());
            for sub in main.sub_categories {
                if !seen.insert(sub.id) {
                    bail!("main category {} lists sub category {} twice", main.id, sub.id);
                }
                sub_categories.push(SubCategory {
                    id: sub.id,
                    names: parse_names(sub.names)?,
                    position: sub.position.map(|p| ButtonPosition { x: p.x, y: p.y }),
                });
            }
            let category = MainCategory {
                id: main.id,
                names: parse_names(main.names)?,
                sub_categories,
            };
            if main_categories.insert(main.id, category).is_some() {
                bail!("main category {} defined twice", main.id);
            }
        }

        let mut owned = BTreeSet::new();
        let mut super_ids = BTreeSet::new();
        let mut super_categories = Vec::with_capacity(yaml.super_categories.len());
        for sup in yaml.super_categories {
            if !super_ids.insert(sup.id) {
                bail!("super category {} defined twice", sup.id);
            }
            for main_id in &sup.main_category_ids {
                if !main_categories.contains_key(main_id) {
                    bail!("super category {} refers to unknown main category {}", sup.id, main_id);
                }
                if !owned.insert(*main_id) {
                    bail!("main category {} belongs to more than one super category", main_id);
                }
            }
            super_categories.push(SuperCategory {
                id: sup.id,
                names: parse_names(sup.names)?,
                main_category_ids: sup.main_category_ids,
            });
        }

        if let Some(orphan) = main_categories.keys().find(|id| !owned.contains(*id)) {
            bail!("main category {} has no super category", orphan);
        }

        Ok(Self {
            super_categories,
            main_categories,
        })
    }

    pub fn super_categories(&self) -> &[SuperCategory] {
        &self.super_categories
    }

    pub fn super_category(&self, id: i32) -> Option<&SuperCategory> {
        self.super_categories.iter().find(|s| s.id == id)
    }

    pub fn solution_category(&self, main_category_id: i32) -> Option<&MainCategory> {
        self.main_categories.get(&main_category_id)
    }

    /// Reverse lookup of the super category owning a main category
    pub fn super_category_of_main(&self, main_category_id: i32) -> Option<&SuperCategory> {
        self.super_categories
            .iter()
            .find(|s| s.main_category_ids.contains(&main_category_id))
    }

    /// Whether the pair (or the main category alone) exists
    pub fn contains(&self, main_category_id: i32, sub_category_id: Option<i32>) -> bool {
        match (self.solution_category(main_category_id), sub_category_id) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(main), Some(sub)) => main.sub_categories.iter().any(|s| s.id == sub),
        }
    }

    // ===== Localized views =====

    pub fn main_view(&self, main: &MainCategory, lang: Language) -> MainCategoryView {
        MainCategoryView {
            id: main.id,
            name: localized_name(&main.names, lang),
            sub_categories: main
                .sub_categories
                .iter()
                .map(|sub| SubCategoryView {
                    id: sub.id,
                    name: localized_name(&sub.names, lang),
                    position: sub.position,
                })
                .collect(),
        }
    }

    /// Whole hierarchy in one language, in table order
    pub fn tree(&self, lang: Language) -> Vec<SuperCategoryView> {
        self.super_categories
            .iter()
            .map(|sup| SuperCategoryView {
                id: sup.id,
                name: localized_name(&sup.names, lang),
                main_categories: sup
                    .main_category_ids
                    .iter()
                    .filter_map(|id| self.solution_category(*id))
                    .map(|main| self.main_view(main, lang))
                    .collect(),
            })
            .collect()
    }

    pub fn placement(&self, main_category_id: i32, lang: Language) -> Option<MainCategoryPlacement> {
        let main = self.solution_category(main_category_id)?;
        let sup = self.super_category_of_main(main_category_id)?;
        Some(MainCategoryPlacement {
            super_category_id: sup.id,
            super_category_name: localized_name(&sup.names, lang),
            main_category: self.main_view(main, lang),
        })
    }
}
