// src/infrastructure/events/log.rs
use crate::application::{ApplicationResult, ports::events::EventPublisher};
use crate::domain::tool::ToolEvent;
use async_trait::async_trait;

/// Used when no event endpoint is configured: events only reach the log.
#[derive(Default, Clone)]
pub struct LogEventPublisher;

#[async_trait]
impl EventPublisher for LogEventPublisher {
    async fn send(&self, event: &ToolEvent) -> ApplicationResult<()> {
        tracing::info!(event = event.name(), slug = %event.slug(), "event emitted");
        Ok(())
    }
}
