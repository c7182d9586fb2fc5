// src/domain/catalog/entity.rs
use crate::domain::catalog::kind::CatalogKind;
use crate::domain::catalog::value_objects::{RecordId, RecordName, Slug};
use chrono::{DateTime, Utc};

/// Columns shared by every catalog table. Listings and search results are
/// expressed in terms of this projection.
#[derive(Debug, Clone)]
pub struct Record {
    pub id: RecordId,
    pub kind: CatalogKind,
    pub name: RecordName,
    pub slug: Slug,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
