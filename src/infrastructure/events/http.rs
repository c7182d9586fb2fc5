// src/infrastructure/events/http.rs
use crate::application::{ApplicationResult, error::ApplicationError, ports::events::EventPublisher};
use crate::domain::tool::ToolEvent;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct EventData<'a> {
    slug: &'a str,
}

#[derive(Debug, Serialize)]
struct EventPayload<'a> {
    name: &'static str,
    data: EventData<'a>,
}

impl<'a> From<&'a ToolEvent> for EventPayload<'a> {
    fn from(event: &'a ToolEvent) -> Self {
        Self {
            name: event.name(),
            data: EventData {
                slug: event.slug().as_str(),
            },
        }
    }
}

/// Posts every event as JSON to a single ingestion endpoint.
pub struct HttpEventPublisher {
    client: reqwest::Client,
    url: String,
    key: Option<String>,
}

impl HttpEventPublisher {
    pub fn new(
        url: impl Into<String>,
        key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            key,
        })
    }
}

#[async_trait]
impl EventPublisher for HttpEventPublisher {
    async fn send(&self, event: &ToolEvent) -> ApplicationResult<()> {
        let mut request = self.client.post(&self.url).json(&EventPayload::from(event));
        if let Some(key) = &self.key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("event delivery failed: {err}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApplicationError::infrastructure(format!(
                "event endpoint answered {status} for {}",
                event.name()
            )));
        }

        tracing::debug!(event = event.name(), slug = %event.slug(), "event delivered");
        Ok(())
    }
}
