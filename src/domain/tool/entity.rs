// src/domain/tool/entity.rs
use crate::domain::catalog::{CatalogKind, Record, RecordId, RecordName, Slug};
use crate::domain::tool::value_objects::{EmailAddress, ToolStatus, WebUrl};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Tool {
    pub id: RecordId,
    pub name: RecordName,
    pub slug: Slug,
    pub website: WebUrl,
    pub repository: WebUrl,
    pub description: Option<String>,
    pub submitter_name: Option<String>,
    pub submitter_email: Option<EmailAddress>,
    pub status: ToolStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub category_ids: Vec<RecordId>,
    pub alternative_ids: Vec<RecordId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tool {
    pub fn schedule(&mut self, publish_at: DateTime<Utc>, now: DateTime<Utc>) {
        self.status = ToolStatus::Scheduled;
        self.published_at = Some(publish_at);
        self.updated_at = now;
    }

    pub fn to_record(&self) -> Record {
        Record {
            id: self.id,
            kind: CatalogKind::Tool,
            name: self.name.clone(),
            slug: self.slug.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewTool {
    pub name: RecordName,
    pub slug: Slug,
    pub website: WebUrl,
    pub repository: WebUrl,
    pub description: Option<String>,
    pub submitter_name: Option<String>,
    pub submitter_email: Option<EmailAddress>,
    pub status: ToolStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub category_ids: Vec<RecordId>,
    pub alternative_ids: Vec<RecordId>,
    pub created_at: DateTime<Utc>,
}

impl NewTool {
    pub fn with_slug(mut self, slug: Slug) -> Self {
        self.slug = slug;
        self
    }
}

/// Partial update of a single tool. `None` leaves a column untouched; the
/// link lists replace the existing associations when present.
/// `description: Some(None)` clears the column.
#[derive(Debug, Clone)]
pub struct ToolUpdate {
    pub id: RecordId,
    pub name: Option<RecordName>,
    pub slug: Option<Slug>,
    pub website: Option<WebUrl>,
    pub repository: Option<WebUrl>,
    pub description: Option<Option<String>>,
    pub status: Option<ToolStatus>,
    pub published_at: Option<DateTime<Utc>>,
    pub category_ids: Option<Vec<RecordId>>,
    pub alternative_ids: Option<Vec<RecordId>>,
    pub updated_at: DateTime<Utc>,
}

impl ToolUpdate {
    pub fn new(id: RecordId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            slug: None,
            website: None,
            repository: None,
            description: None,
            status: None,
            published_at: None,
            category_ids: None,
            alternative_ids: None,
            updated_at,
        }
    }

    pub fn with_schedule(mut self, status: ToolStatus, published_at: Option<DateTime<Utc>>) -> Self {
        self.status = Some(status);
        self.published_at = published_at;
        self
    }
}

/// Columns that can be applied to many tools at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolPatch {
    pub status: Option<ToolStatus>,
    pub published_at: Option<DateTime<Utc>>,
}

impl ToolPatch {
    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.published_at.is_none()
    }
}
