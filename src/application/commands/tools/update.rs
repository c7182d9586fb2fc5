use super::{ToolCommandService, input};
use crate::{
    application::{
        deadline::with_deadline,
        dto::ToolDto,
        error::{ApplicationError, ApplicationResult},
        validation::ValidationErrors,
    },
    domain::{
        catalog::{CatalogKind, RecordId, RecordName},
        errors::DomainError,
        tool::{ToolStatus, ToolUpdate, WebUrl},
    },
};

#[derive(Debug, Clone, Default)]
pub struct UpdateToolCommand {
    pub id: i64,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub website: Option<String>,
    pub repository: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub category_ids: Option<Vec<i64>>,
    pub alternative_ids: Option<Vec<i64>>,
}

impl ToolCommandService {
    /// Edit one tool. Renaming keeps the current slug; only an explicit new
    /// slug changes it, and that slug must not belong to another tool.
    /// A blank description clears the stored one.
    pub async fn update_tool(&self, command: UpdateToolCommand) -> ApplicationResult<ToolDto> {
        let id = RecordId::new(command.id)?;
        let mut errors = ValidationErrors::new();
        let mut update = ToolUpdate::new(id, self.clock.now());

        if let Some(name) = command.name {
            update.name = errors.capture("name", RecordName::new(name));
        }
        if let Some(raw) = input::optional_text(command.slug) {
            update.slug = errors.capture("slug", self.slug_allocator.base_slug(&raw));
        }
        if let Some(website) = command.website {
            update.website = errors.capture("website", WebUrl::new(website));
        }
        if let Some(repository) = command.repository {
            update.repository = errors.capture("repository", WebUrl::new(repository));
        }
        if let Some(status) = command.status {
            update.status = errors.capture("status", status.parse::<ToolStatus>());
        }
        if let Some(description) = command.description {
            update.description = Some(input::optional_text(Some(description)));
        }
        if let Some(ids) = command.category_ids {
            update.category_ids = input::record_ids(&mut errors, "category_ids", &ids);
        }
        if let Some(ids) = command.alternative_ids {
            update.alternative_ids = input::record_ids(&mut errors, "alternative_ids", &ids);
        }
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let existing = with_deadline(self.policy.deadline, self.tool_repo.find_by_id(id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("tool not found"))?;

        if update.status == Some(ToolStatus::Scheduled) && existing.published_at.is_none() {
            let mut errors = ValidationErrors::new();
            errors.push(
                "status",
                "a tool without a publication date cannot be scheduled; use the schedule endpoint",
            );
            return Err(errors.into());
        }

        update.slug = update.slug.take().filter(|slug| *slug != existing.slug);
        if let Some(slug) = &update.slug {
            let available = with_deadline(
                self.policy.deadline,
                self.slug_allocator
                    .is_available(CatalogKind::Tool, slug, Some(id)),
            )
            .await?;
            if !available {
                return Err(ApplicationError::conflict(format!(
                    "slug `{slug}` is already in use"
                )));
            }
        }

        let updated = with_deadline(self.policy.deadline, self.tool_repo.update(update))
            .await
            .map_err(|err| match err {
                ApplicationError::Domain(DomainError::DuplicateSlug(msg)) => {
                    ApplicationError::conflict(msg)
                }
                other => other,
            })?;

        tracing::info!(id = %id, slug = %updated.slug, "tool updated");
        Ok(updated.into())
    }
}
