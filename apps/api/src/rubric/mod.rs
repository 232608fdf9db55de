//! Rubric — the fixed set of scoring categories.
//!
//! Built once at startup (built-in catalog or a JSON file) and shared read-only
//! through `AppState` as `Arc<Rubric>`. Scoring and prompt building take it as
//! an explicit argument.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

pub mod catalog;

/// A named rubric bucket with its keywords and point weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<String>,
    pub weight: u32,
    /// Canned improvement line offered when the category is missing.
    #[serde(default)]
    pub suggestion: Option<String>,
}

impl Category {
    /// "feminist_literature" → "Feminist Literature"
    pub fn display_name(&self) -> String {
        self.name
            .split('_')
            .filter(|w| !w.is_empty())
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True if any keyword is a case-insensitive substring of `item_lower`.
    /// The caller lowercases the item once for all categories.
    pub fn matches(&self, item_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| item_lower.contains(&k.to_lowercase()))
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}

/// Immutable, validated category set.
#[derive(Debug, Clone)]
pub struct Rubric {
    categories: Vec<Category>,
}

impl Rubric {
    /// Validates and wraps a category list.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        validate_categories(&categories)?;
        Ok(Self { categories })
    }

    /// The built-in twelve-category rubric.
    pub fn builtin() -> Self {
        Self {
            categories: catalog::default_categories(),
        }
    }

    /// Loads a JSON array of categories from disk.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rubric file {}", path.display()))?;
        let categories: Vec<Category> = serde_json::from_str(&raw)
            .with_context(|| format!("Rubric file {} is not a valid category list", path.display()))?;
        Self::new(categories)
    }

    /// Uses `RUBRIC_PATH` when configured, otherwise the built-in catalog.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let rubric = match path {
            Some(p) => Self::from_json_file(p)?,
            None => Self::builtin(),
        };
        info!(
            "Rubric loaded: {} categories, max score {}",
            rubric.categories.len(),
            rubric.max_score()
        );
        Ok(rubric)
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn max_score(&self) -> u32 {
        self.categories.iter().map(|c| c.weight).sum()
    }

    /// Categories ordered by weight, highest first. Stable: equal weights keep
    /// declaration order.
    pub fn by_priority(&self) -> Vec<&Category> {
        let mut ordered: Vec<&Category> = self.categories.iter().collect();
        ordered.sort_by(|a, b| b.weight.cmp(&a.weight));
        ordered
    }
}

fn validate_categories(categories: &[Category]) -> Result<()> {
    if categories.is_empty() {
        bail!("Rubric must contain at least one category");
    }

    let mut seen = HashSet::new();
    for category in categories {
        if category.name.trim().is_empty() {
            bail!("Rubric category names cannot be empty");
        }
        if !seen.insert(category.name.as_str()) {
            bail!("Duplicate rubric category '{}'", category.name);
        }
        if category.weight == 0 {
            bail!("Category '{}' must have a positive weight", category.name);
        }
        if category.keywords.iter().all(|k| k.trim().is_empty()) {
            bail!("Category '{}' has no keywords", category.name);
        }
    }
    Ok(())
}
