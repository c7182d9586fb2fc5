use crate::domain::catalog::entity::Record;
use crate::domain::catalog::kind::CatalogKind;
use crate::domain::catalog::listing::{NameFilter, RecordListing};
use crate::domain::catalog::value_objects::{RecordId, Slug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// One page of records together with the size of the whole filtered set.
#[derive(Debug, Clone, Default)]
pub struct RecordPage {
    pub records: Vec<Record>,
    pub total: u64,
}

#[async_trait]
pub trait RecordReadRepository: Send + Sync {
    /// Fetch the requested page and the total match count from one snapshot.
    async fn list_page(&self, kind: CatalogKind, listing: &RecordListing)
    -> DomainResult<RecordPage>;
    async fn find_by_slug(&self, kind: CatalogKind, slug: &Slug) -> DomainResult<Option<Record>>;
    /// `ignore_id` lets a record keep the slug it already owns.
    async fn slug_exists(
        &self,
        kind: CatalogKind,
        slug: &Slug,
        ignore_id: Option<RecordId>,
    ) -> DomainResult<bool>;
    async fn search_by_name(
        &self,
        kind: CatalogKind,
        term: &NameFilter,
        limit: u32,
    ) -> DomainResult<Vec<Record>>;
}
