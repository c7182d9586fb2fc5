use super::{ToolCommandService, input};
use crate::{
    application::{
        deadline::with_deadline,
        dto::ToolDto,
        error::{ApplicationError, ApplicationResult},
        validation::ValidationErrors,
    },
    domain::{
        catalog::RecordName,
        errors::DomainError,
        tool::{NewTool, ToolEvent, ToolStatus, WebUrl},
    },
};
use chrono::{DateTime, Utc};

/// Back-office creation. An explicit slug is honoured as given (after
/// normalisation); otherwise one is allocated from the name.
#[derive(Debug, Clone, Default)]
pub struct CreateToolCommand {
    pub name: String,
    pub slug: Option<String>,
    pub website: String,
    pub repository: String,
    pub description: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub category_ids: Vec<i64>,
    pub alternative_ids: Vec<i64>,
}

impl ToolCommandService {
    pub async fn create_tool(&self, command: CreateToolCommand) -> ApplicationResult<ToolDto> {
        let mut errors = ValidationErrors::new();
        let name = errors.capture("name", RecordName::new(command.name));
        let website = errors.capture("website", WebUrl::new(&command.website));
        let repository = errors.capture("repository", WebUrl::new(&command.repository));
        let category_ids = input::record_ids(&mut errors, "category_ids", &command.category_ids);
        let alternative_ids =
            input::record_ids(&mut errors, "alternative_ids", &command.alternative_ids);

        let explicit_slug = input::optional_text(command.slug);
        let slug = match (&explicit_slug, &name) {
            (Some(raw), _) => errors.capture("slug", self.slug_allocator.base_slug(raw)),
            (None, Some(name)) => errors.capture("name", self.slug_allocator.base_slug(name.as_str())),
            (None, None) => None,
        };

        let (
            Some(name),
            Some(website),
            Some(repository),
            Some(category_ids),
            Some(alternative_ids),
            Some(slug),
        ) = (name, website, repository, category_ids, alternative_ids, slug)
        else {
            return Err(errors.into());
        };
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let status = if command.published_at.is_some() {
            ToolStatus::Scheduled
        } else {
            ToolStatus::Draft
        };

        let draft = NewTool {
            name: name.clone(),
            slug,
            website,
            repository,
            description: input::optional_text(command.description),
            submitter_name: None,
            submitter_email: None,
            status,
            published_at: command.published_at,
            category_ids,
            alternative_ids,
            created_at: self.clock.now(),
        };

        let tool = if explicit_slug.is_some() {
            let requested = draft.slug.clone();
            with_deadline(self.policy.deadline, self.tool_repo.insert(draft))
                .await
                .map_err(|err| match err {
                    ApplicationError::Domain(DomainError::DuplicateSlug(_)) => {
                        ApplicationError::conflict(format!("slug `{requested}` is already in use"))
                    }
                    other => other,
                })?
        } else {
            self.insert_with_unique_slug(&name, draft).await?
        };

        tracing::info!(slug = %tool.slug, status = %tool.status, "tool created");

        if tool.published_at.is_some() {
            self.publish(ToolEvent::Scheduled {
                slug: tool.slug.clone(),
            })
            .await;
        }

        Ok(tool.into())
    }
}
