use crate::domain::catalog::{RecordId, Slug};
use crate::domain::errors::DomainResult;
use crate::domain::tool::entity::{NewTool, Tool, ToolPatch, ToolUpdate};
use crate::domain::tool::value_objects::WebUrl;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait ToolRepository: Send + Sync {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Tool>>;
    async fn find_by_website_or_repository(
        &self,
        website: &WebUrl,
        repository: &WebUrl,
    ) -> DomainResult<Option<Tool>>;
    /// Fails with `DomainError::DuplicateSlug` when the slug constraint rejects the row.
    async fn insert(&self, tool: NewTool) -> DomainResult<Tool>;
    async fn update(&self, update: ToolUpdate) -> DomainResult<Tool>;
    async fn update_many(
        &self,
        ids: &[RecordId],
        patch: &ToolPatch,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64>;
    /// Deletes the tools and returns the slugs of the rows that were removed.
    async fn delete_many(&self, ids: &[RecordId]) -> DomainResult<Vec<Slug>>;
}
