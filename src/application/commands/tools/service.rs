// src/application/commands/tools/service.rs
use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{
        deadline::with_deadline,
        error::{ApplicationError, ApplicationResult},
        ports::{events::EventPublisher, time::Clock},
    },
    domain::{
        catalog::{CatalogKind, RecordName, SlugAllocator},
        errors::DomainError,
        tool::{NewTool, Tool, ToolEvent, ToolRepository},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WritePolicy {
    /// How many times an insert may lose the slug race before giving up.
    pub insert_attempts: u32,
    pub deadline: Duration,
}

impl Default for WritePolicy {
    fn default() -> Self {
        Self {
            insert_attempts: 3,
            deadline: Duration::from_secs(5),
        }
    }
}

pub struct ToolCommandService {
    pub(super) tool_repo: Arc<dyn ToolRepository>,
    pub(super) slug_allocator: Arc<SlugAllocator>,
    pub(super) events: Arc<dyn EventPublisher>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) policy: WritePolicy,
}

impl ToolCommandService {
    pub fn new(
        tool_repo: Arc<dyn ToolRepository>,
        slug_allocator: Arc<SlugAllocator>,
        events: Arc<dyn EventPublisher>,
        clock: Arc<dyn Clock>,
        policy: WritePolicy,
    ) -> Self {
        Self {
            tool_repo,
            slug_allocator,
            events,
            clock,
            policy,
        }
    }

    /// Allocate a slug for `name` and insert. When a concurrent writer claims
    /// the same slug first, allocation runs again; the earlier winner is then
    /// visible to the probe and the next suffix is chosen.
    pub(super) async fn insert_with_unique_slug(
        &self,
        name: &RecordName,
        draft: NewTool,
    ) -> ApplicationResult<Tool> {
        let attempts = self.policy.insert_attempts.max(1);

        for attempt in 1..=attempts {
            let slug = with_deadline(
                self.policy.deadline,
                self.slug_allocator
                    .allocate(CatalogKind::Tool, name.as_str(), None),
            )
            .await?;

            let candidate = draft.clone().with_slug(slug.clone());
            match with_deadline(self.policy.deadline, self.tool_repo.insert(candidate)).await {
                Err(ApplicationError::Domain(DomainError::DuplicateSlug(_))) => {
                    tracing::warn!(slug = %slug, attempt, "slug claimed concurrently, reallocating");
                }
                other => return other,
            }
        }

        Err(ApplicationError::conflict(format!(
            "could not reserve a slug for `{name}` after {attempts} attempts, please retry"
        )))
    }

    /// Fire-and-forget: the mutation that produced `event` is already
    /// committed, so a failed send is only logged.
    pub(super) async fn publish(&self, event: ToolEvent) {
        match self.events.send(&event).await {
            Ok(()) => {
                tracing::debug!(event = event.name(), slug = %event.slug(), "published tool event");
            }
            Err(err) => {
                tracing::warn!(
                    event = event.name(),
                    slug = %event.slug(),
                    error = %err,
                    "failed to publish tool event"
                );
            }
        }
    }
}
