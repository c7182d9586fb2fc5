// src/application/services/mod.rs
use std::sync::Arc;
use std::time::Duration;

use crate::{
    application::{
        ApplicationResult,
        commands::tools::{ToolCommandService, WritePolicy},
        deadline::with_deadline,
        ports::{ClockPort, EventPublisherPort, SlugGeneratorPort},
        queries::records::{ListingLimits, RecordQueryService},
    },
    domain::{
        catalog::{CatalogKind, RecordReadRepository, SlugAllocator},
        tool::ToolRepository,
    },
};

/// Tunables shared by the query and command services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSettings {
    pub limits: ListingLimits,
    pub max_slug_probes: u32,
    pub insert_attempts: u32,
    pub store_deadline: Duration,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        let policy = WritePolicy::default();
        Self {
            limits: ListingLimits::default(),
            max_slug_probes: SlugAllocator::DEFAULT_MAX_PROBES,
            insert_attempts: policy.insert_attempts,
            store_deadline: policy.deadline,
        }
    }
}

pub struct ApplicationServices {
    pub record_queries: Arc<RecordQueryService>,
    pub tool_commands: Arc<ToolCommandService>,
    slug_allocator: Arc<SlugAllocator>,
    store_deadline: Duration,
}

impl ApplicationServices {
    pub fn new(
        record_repo: Arc<dyn RecordReadRepository>,
        tool_repo: Arc<dyn ToolRepository>,
        events: Arc<EventPublisherPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        settings: CatalogSettings,
    ) -> Self {
        let slug_allocator = Arc::new(SlugAllocator::new(
            Arc::clone(&record_repo),
            Arc::clone(&slugger),
            settings.max_slug_probes,
        ));

        let record_queries = Arc::new(RecordQueryService::new(
            Arc::clone(&record_repo),
            settings.limits,
            settings.store_deadline,
        ));

        let tool_commands = Arc::new(ToolCommandService::new(
            Arc::clone(&tool_repo),
            Arc::clone(&slug_allocator),
            Arc::clone(&events),
            Arc::clone(&clock),
            WritePolicy {
                insert_attempts: settings.insert_attempts,
                deadline: settings.store_deadline,
            },
        ));

        Self {
            record_queries,
            tool_commands,
            slug_allocator,
            store_deadline: settings.store_deadline,
        }
    }

    /// Next free slug for `name` in `kind`. Only a hint: the insert that
    /// eventually uses it may still lose to a concurrent writer.
    pub async fn allocate_slug(&self, kind: CatalogKind, name: &str) -> ApplicationResult<String> {
        let slug = with_deadline(
            self.store_deadline,
            self.slug_allocator.allocate(kind, name, None),
        )
        .await?;
        Ok(slug.into_inner())
    }
}
