// tests/support/mocks/events.rs
use async_trait::async_trait;
use openalt_catalog::application::{
    ApplicationResult, error::ApplicationError, ports::events::EventPublisher,
};
use openalt_catalog::domain::tool::ToolEvent;
use std::sync::Mutex;

/// Keeps every event it is handed, in order.
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<ToolEvent>>,
}

impl RecordingPublisher {
    pub fn events(&self) -> Vec<ToolEvent> {
        self.events.lock().unwrap().clone()
    }

    /// `(name, slug)` pairs, handy for equality assertions.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.events()
            .iter()
            .map(|e| (e.name().to_string(), e.slug().as_str().to_string()))
            .collect()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn send(&self, event: &ToolEvent) -> ApplicationResult<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Rejects every event, counting the attempts.
#[derive(Default)]
pub struct FailingPublisher {
    attempts: Mutex<u32>,
}

impl FailingPublisher {
    pub fn attempts(&self) -> u32 {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn send(&self, _event: &ToolEvent) -> ApplicationResult<()> {
        *self.attempts.lock().unwrap() += 1;
        Err(ApplicationError::infrastructure("event endpoint unreachable"))
    }
}
