// src/application/commands/tools/submit.rs
use super::ToolCommandService;
use crate::{
    application::{
        deadline::with_deadline,
        dto::{SubmittedToolDto, ToolDto},
        error::ApplicationResult,
        validation::ValidationErrors,
    },
    domain::{
        catalog::RecordName,
        tool::{EmailAddress, NewTool, ToolEvent, ToolStatus, WebUrl},
    },
};

/// Public "suggest a tool" form.
#[derive(Debug, Clone)]
pub struct SubmitToolCommand {
    pub name: String,
    pub website: String,
    pub repository: String,
    pub description: Option<String>,
    pub submitter_name: String,
    pub submitter_email: String,
}

impl ToolCommandService {
    pub async fn submit_tool(&self, command: SubmitToolCommand) -> ApplicationResult<SubmittedToolDto> {
        let mut errors = ValidationErrors::new();
        let name = errors.capture("name", RecordName::new(command.name));
        let website = errors.capture("website", WebUrl::new(&command.website));
        let repository = errors.capture("repository", WebUrl::new(&command.repository));
        let email = errors.capture("submitter_email", EmailAddress::new(&command.submitter_email));
        let submitter_name = command.submitter_name.trim().to_string();
        if submitter_name.is_empty() {
            errors.push("submitter_name", "name cannot be empty");
        }
        let base_slug = name
            .as_ref()
            .and_then(|name| errors.capture("name", self.slug_allocator.base_slug(name.as_str())));

        let (Some(name), Some(website), Some(repository), Some(email), Some(base_slug)) =
            (name, website, repository, email, base_slug)
        else {
            return Err(errors.into());
        };
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let existing = with_deadline(
            self.policy.deadline,
            self.tool_repo
                .find_by_website_or_repository(&website, &repository),
        )
        .await?;
        if let Some(tool) = existing {
            tracing::info!(slug = %tool.slug, "submission matches an existing tool");
            return Ok(SubmittedToolDto {
                created: false,
                tool: tool.into(),
            });
        }

        let draft = NewTool {
            name: name.clone(),
            slug: base_slug,
            website,
            repository,
            description: command
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            submitter_name: Some(submitter_name),
            submitter_email: Some(email),
            status: ToolStatus::Draft,
            published_at: None,
            category_ids: Vec::new(),
            alternative_ids: Vec::new(),
            created_at: self.clock.now(),
        };

        let tool = self.insert_with_unique_slug(&name, draft).await?;
        tracing::info!(slug = %tool.slug, "tool submitted");

        self.publish(ToolEvent::Submitted {
            slug: tool.slug.clone(),
        })
        .await;

        Ok(SubmittedToolDto {
            created: true,
            tool: ToolDto::from(tool),
        })
    }
}
