// tests/support/mocks/slow.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use openalt_catalog::domain::catalog::{
    CatalogKind, NameFilter, Record, RecordId, RecordListing, RecordPage, RecordReadRepository,
    Slug,
};
use openalt_catalog::domain::errors::{DomainError, DomainResult};
use openalt_catalog::domain::tool::{NewTool, Tool, ToolPatch, ToolRepository, ToolUpdate, WebUrl};
use std::time::Duration;

/// A store that never answers within any reasonable deadline.
pub struct SlowCatalog {
    delay: Duration,
}

impl SlowCatalog {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    async fn stall(&self) {
        tokio::time::sleep(self.delay).await;
    }
}

#[async_trait]
impl RecordReadRepository for SlowCatalog {
    async fn list_page(&self, _kind: CatalogKind, _listing: &RecordListing) -> DomainResult<RecordPage> {
        self.stall().await;
        Ok(RecordPage::default())
    }

    async fn find_by_slug(&self, _kind: CatalogKind, _slug: &Slug) -> DomainResult<Option<Record>> {
        self.stall().await;
        Ok(None)
    }

    async fn slug_exists(
        &self,
        _kind: CatalogKind,
        _slug: &Slug,
        _ignore_id: Option<RecordId>,
    ) -> DomainResult<bool> {
        self.stall().await;
        Ok(false)
    }

    async fn search_by_name(
        &self,
        _kind: CatalogKind,
        _term: &NameFilter,
        _limit: u32,
    ) -> DomainResult<Vec<Record>> {
        self.stall().await;
        Ok(Vec::new())
    }
}

#[async_trait]
impl ToolRepository for SlowCatalog {
    async fn find_by_id(&self, _id: RecordId) -> DomainResult<Option<Tool>> {
        self.stall().await;
        Ok(None)
    }

    async fn find_by_website_or_repository(
        &self,
        _website: &WebUrl,
        _repository: &WebUrl,
    ) -> DomainResult<Option<Tool>> {
        self.stall().await;
        Ok(None)
    }

    async fn insert(&self, _tool: NewTool) -> DomainResult<Tool> {
        self.stall().await;
        Err(DomainError::Persistence("slow store never inserts".into()))
    }

    async fn update(&self, _update: ToolUpdate) -> DomainResult<Tool> {
        self.stall().await;
        Err(DomainError::NotFound("tool not found".into()))
    }

    async fn update_many(
        &self,
        _ids: &[RecordId],
        _patch: &ToolPatch,
        _updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        self.stall().await;
        Ok(0)
    }

    async fn delete_many(&self, _ids: &[RecordId]) -> DomainResult<Vec<Slug>> {
        self.stall().await;
        Ok(Vec::new())
    }
}
