//! Categories and the category registry
//!
//! A category is a free-form label. The registry is the configured list of
//! labels offered to the user; the ledger itself accepts any category.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category names offered when no configuration overrides them
pub const DEFAULT_CATEGORIES: [&str; 5] = ["groceries", "bills", "salary", "entertainment", "other"];

/// A transaction category label
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::new("groceries")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Ordered list of allowed category names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Build a registry from configured names
    ///
    /// Names are trimmed; blanks and duplicates are dropped, first occurrence wins.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut categories: Vec<Category> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || categories.iter().any(|c| c.as_str() == name) {
                continue;
            }
            categories.push(Category::new(name));
        }
        Self { categories }
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Comma-separated list for prompts and error messages
    pub fn joined(&self) -> String {
        self.categories
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}
