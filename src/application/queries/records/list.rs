use super::{RecordQueryService, params::{ListRecordsQuery, build_listing}};
use crate::application::{
    deadline::with_deadline,
    dto::{PageResult, RecordDto},
    error::ApplicationResult,
};

impl RecordQueryService {
    /// Validate the raw parameters, then read one page and the total count
    /// from a single snapshot of the store.
    pub async fn list_records(
        &self,
        query: ListRecordsQuery,
    ) -> ApplicationResult<PageResult<RecordDto>> {
        let listing = build_listing(&query.params, self.limits)?;

        let page = with_deadline(
            self.deadline,
            self.read_repo.list_page(query.kind, &listing),
        )
        .await?;

        tracing::debug!(
            kind = %query.kind,
            sort = %listing.sort,
            page = listing.window.page(),
            total = page.total,
            "listed records"
        );

        let items = page.records.into_iter().map(Into::into).collect();
        Ok(PageResult::new(items, page.total, listing.window))
    }
}
