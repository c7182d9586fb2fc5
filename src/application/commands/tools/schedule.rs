use super::ToolCommandService;
use crate::{
    application::{
        deadline::with_deadline,
        dto::ToolDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        catalog::RecordId,
        tool::{ToolEvent, ToolUpdate},
    },
};
use chrono::{DateTime, Utc};

pub struct ScheduleToolCommand {
    pub id: i64,
    pub published_at: DateTime<Utc>,
}

impl ToolCommandService {
    pub async fn schedule_tool(&self, command: ScheduleToolCommand) -> ApplicationResult<ToolDto> {
        let id = RecordId::new(command.id)?;
        let mut tool = with_deadline(self.policy.deadline, self.tool_repo.find_by_id(id))
            .await?
            .ok_or_else(|| ApplicationError::not_found("tool not found"))?;

        tool.schedule(command.published_at, self.clock.now());
        let update = ToolUpdate::new(id, tool.updated_at).with_schedule(tool.status, tool.published_at);
        let updated = with_deadline(self.policy.deadline, self.tool_repo.update(update)).await?;

        tracing::info!(slug = %updated.slug, published_at = %command.published_at, "tool scheduled");
        self.publish(ToolEvent::Scheduled {
            slug: updated.slug.clone(),
        })
        .await;

        Ok(updated.into())
    }
}
