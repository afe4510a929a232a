//! Read-only content tables: token knowledge, category fallbacks and title
//! labels.
//!
//! The built-in tables ship as TOML embedded in the binary and are parsed once
//! at startup into a [`ContentTables`] value that generators borrow.  An
//! optional overlay file in the same format replaces entries key by key.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::tokens::LabelTable;

const BUILTIN_KNOWLEDGE: &str = include_str!("../content/knowledge.toml");
const BUILTIN_LABELS: &str = include_str!("../content/labels.toml");

/// Single key point used when a category has no defaults.
pub const GENERIC_KEY_POINT: &str = "観察→気づき→改善を1セットで記録する。";
/// Single action item used when a category has no defaults.
pub const GENERIC_ACTION_ITEM: &str = "TODO化して週次で進捗確認する。";

/// Summary sentence, key points and action items attached to one token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenFragment {
    pub summary: String,
    pub key_points: Vec<String>,
    pub action_items: Vec<String>,
}

/// Fallback lists for a coarse note category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryDefaults {
    pub key_points: Vec<String>,
    pub action_items: Vec<String>,
}

impl CategoryDefaults {
    pub fn generic() -> Self {
        Self {
            key_points: vec![GENERIC_KEY_POINT.to_string()],
            action_items: vec![GENERIC_ACTION_ITEM.to_string()],
        }
    }
}

/// On-disk shape shared by the built-in tables and overlay files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct TableFile {
    tokens: BTreeMap<String, TokenFragment>,
    categories: BTreeMap<String, CategoryDefaults>,
    labels: BTreeMap<String, String>,
}

impl TableFile {
    fn parse(raw: &str, origin: &str) -> Result<Self> {
        toml::from_str(raw).with_context(|| format!("failed to parse content table {origin}"))
    }
}

/// Exact, case-insensitive token → fragment lookup.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeTable {
    fragments: HashMap<String, TokenFragment>,
}

impl KnowledgeTable {
    pub fn lookup(&self, token: &str) -> Option<&TokenFragment> {
        self.fragments.get(&token.to_lowercase())
    }

    /// Fragments for `tokens` in token order; tokens without an entry are
    /// skipped.
    pub fn fragments_for<'a, S: AsRef<str>>(&'a self, tokens: &[S]) -> Vec<&'a TokenFragment> {
        tokens
            .iter()
            .filter_map(|token| self.lookup(token.as_ref()))
            .collect()
    }

    pub fn insert(&mut self, token: &str, fragment: TokenFragment) {
        self.fragments.insert(token.to_lowercase(), fragment);
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Category name → fallback lists, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct CategoryTable {
    entries: Vec<(String, CategoryDefaults)>,
}

impl CategoryTable {
    pub fn get(&self, category: &str) -> Option<&CategoryDefaults> {
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(category))
            .map(|(_, defaults)| defaults)
    }

    /// Defaults for `category`, or the generic single-item fallback.
    pub fn resolve(&self, category: Option<&str>) -> CategoryDefaults {
        category
            .and_then(|name| self.get(name))
            .cloned()
            .unwrap_or_else(CategoryDefaults::generic)
    }

    pub fn insert(&mut self, category: &str, defaults: CategoryDefaults) {
        match self
            .entries
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(category))
        {
            Some(slot) => slot.1 = defaults,
            None => self.entries.push((category.to_string(), defaults)),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every process-wide lookup table, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ContentTables {
    pub knowledge: KnowledgeTable,
    pub categories: CategoryTable,
    pub labels: LabelTable,
}

impl ContentTables {
    /// Parse the tables compiled into the binary.
    pub fn builtin() -> Result<Self> {
        let mut tables = Self::default();
        tables.apply(TableFile::parse(BUILTIN_KNOWLEDGE, "knowledge.toml")?);
        tables.apply(TableFile::parse(BUILTIN_LABELS, "labels.toml")?);
        Ok(tables)
    }

    /// Built-in tables with `path` layered on top.
    pub fn with_overlay(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read content overlay {}", path.display()))?;
        let mut tables = Self::builtin()?;
        tables.apply(TableFile::parse(&raw, &path.display().to_string())?);
        Ok(tables)
    }

    /// Built-in tables, plus the overlay when one is configured.
    pub fn load(overlay: Option<&str>) -> Result<Self> {
        match overlay {
            Some(path) => Self::with_overlay(path),
            None => Self::builtin(),
        }
    }

    fn apply(&mut self, file: TableFile) {
        for (token, fragment) in file.tokens {
            self.knowledge.insert(&token, fragment);
        }
        for (category, defaults) in file.categories {
            self.categories.insert(&category, defaults);
        }
        self.labels.extend(file.labels);
    }
}
