// src/domain/catalog/kind.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// The four record families the catalog exposes. Each lives in its own table
/// and owns an independent slug namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Tool,
    License,
    Category,
    Alternative,
}

impl CatalogKind {
    pub const ALL: [Self; 4] = [Self::Tool, Self::License, Self::Category, Self::Alternative];

    pub const fn table(self) -> &'static str {
        match self {
            Self::Tool => "tools",
            Self::License => "licenses",
            Self::Category => "categories",
            Self::Alternative => "alternatives",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tool => "tool",
            Self::License => "license",
            Self::Category => "category",
            Self::Alternative => "alternative",
        }
    }

    /// Resolve the plural collection segment used in URLs (`tools`, `licenses`, ...).
    pub fn from_collection(segment: &str) -> DomainResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.table() == segment)
            .ok_or_else(|| DomainError::NotFound(format!("unknown catalog collection `{segment}`")))
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
