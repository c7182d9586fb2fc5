use super::RecordQueryService;
use crate::application::{
    deadline::with_deadline,
    dto::{RecordDto, SearchResultsDto},
    error::ApplicationResult,
};
use crate::domain::catalog::{CatalogKind, NameFilter};

pub const SEARCH_RESULTS_PER_KIND: u32 = 5;

pub struct SearchItemsQuery {
    pub query: String,
}

impl RecordQueryService {
    /// Top name matches in every collection, fetched concurrently.
    pub async fn search_items(&self, query: SearchItemsQuery) -> ApplicationResult<SearchResultsDto> {
        let Some(term) = NameFilter::new(&query.query) else {
            return Ok(SearchResultsDto::default());
        };

        let (tools, alternatives, categories, licenses) = tokio::try_join!(
            self.search_kind(CatalogKind::Tool, &term),
            self.search_kind(CatalogKind::Alternative, &term),
            self.search_kind(CatalogKind::Category, &term),
            self.search_kind(CatalogKind::License, &term),
        )?;

        Ok(SearchResultsDto {
            tools,
            alternatives,
            categories,
            licenses,
        })
    }

    async fn search_kind(
        &self,
        kind: CatalogKind,
        term: &NameFilter,
    ) -> ApplicationResult<Vec<RecordDto>> {
        let records = with_deadline(
            self.deadline,
            self.read_repo
                .search_by_name(kind, term, SEARCH_RESULTS_PER_KIND),
        )
        .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
