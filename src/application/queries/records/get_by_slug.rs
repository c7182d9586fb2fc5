use super::RecordQueryService;
use crate::application::{
    deadline::with_deadline,
    dto::RecordDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::catalog::{CatalogKind, Slug};

pub struct GetRecordBySlugQuery {
    pub kind: CatalogKind,
    pub slug: String,
}

impl RecordQueryService {
    pub async fn get_record_by_slug(
        &self,
        query: GetRecordBySlugQuery,
    ) -> ApplicationResult<RecordDto> {
        let not_found = || ApplicationError::not_found(format!("{} not found", query.kind));

        // A malformed slug can never have been stored.
        let slug = Slug::new(query.slug.as_str()).map_err(|_| not_found())?;

        with_deadline(self.deadline, self.read_repo.find_by_slug(query.kind, &slug))
            .await?
            .map(Into::into)
            .ok_or_else(not_found)
    }
}
