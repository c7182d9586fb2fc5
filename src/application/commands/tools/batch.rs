// src/application/commands/tools/batch.rs
use super::{ToolCommandService, input};
use crate::{
    application::{
        deadline::with_deadline,
        error::{ApplicationError, ApplicationResult},
        validation::ValidationErrors,
    },
    domain::{
        catalog::RecordId,
        tool::{ToolEvent, ToolPatch, ToolStatus},
    },
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct UpdateToolsCommand {
    pub ids: Vec<i64>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct DeleteToolsCommand {
    pub ids: Vec<i64>,
}

fn required_ids(errors: &mut ValidationErrors, raw: &[i64]) -> Option<Vec<RecordId>> {
    if raw.is_empty() {
        errors.push("ids", "at least one id is required");
        return None;
    }
    input::record_ids(errors, "ids", raw)
}

impl ToolCommandService {
    /// Apply the same patch to every listed tool. Returns the number of rows
    /// changed; unknown ids are skipped.
    pub async fn update_tools(&self, command: UpdateToolsCommand) -> ApplicationResult<u64> {
        let mut errors = ValidationErrors::new();
        let ids = required_ids(&mut errors, &command.ids);
        let status = command
            .status
            .and_then(|raw| errors.capture("status", raw.parse::<ToolStatus>()));
        if status == Some(ToolStatus::Scheduled) && command.published_at.is_none() {
            errors.push("published_at", "required when status is scheduled");
        }
        let patch = ToolPatch {
            status,
            published_at: command.published_at,
        };
        if patch.is_empty() && errors.is_empty() {
            return Err(ApplicationError::validation(
                "nothing to update: provide a status or publication date",
            ));
        }

        let Some(ids) = ids.filter(|_| errors.is_empty()) else {
            return Err(errors.into());
        };

        let affected = with_deadline(
            self.policy.deadline,
            self.tool_repo.update_many(&ids, &patch, self.clock.now()),
        )
        .await?;

        tracing::info!(requested = ids.len(), affected, "tools updated in batch");
        Ok(affected)
    }

    /// Delete every listed tool and announce each removed slug.
    pub async fn delete_tools(&self, command: DeleteToolsCommand) -> ApplicationResult<u64> {
        let mut errors = ValidationErrors::new();
        let Some(ids) = required_ids(&mut errors, &command.ids) else {
            return Err(errors.into());
        };

        let slugs = with_deadline(self.policy.deadline, self.tool_repo.delete_many(&ids)).await?;
        tracing::info!(requested = ids.len(), deleted = slugs.len(), "tools deleted");

        let deleted = slugs.len() as u64;
        for slug in slugs {
            self.publish(ToolEvent::Deleted { slug }).await;
        }

        Ok(deleted)
    }
}
