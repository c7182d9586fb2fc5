// src/application/ports/events.rs
use crate::application::ApplicationResult;
use crate::domain::tool::ToolEvent;
use async_trait::async_trait;

/// Outbound notification channel. Delivery is best effort: callers log a
/// failed send and keep the mutation that triggered it.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn send(&self, event: &ToolEvent) -> ApplicationResult<()>;
}
