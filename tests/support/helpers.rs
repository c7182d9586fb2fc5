// tests/support/helpers.rs
use super::mocks::{DummyClock, InMemoryCatalog, RecordingPublisher};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use openalt_catalog::application::{
    ports::{ClockPort, EventPublisherPort, SlugGeneratorPort},
    services::{ApplicationServices, CatalogSettings},
};
use openalt_catalog::domain::{catalog::RecordReadRepository, tool::ToolRepository};
use openalt_catalog::infrastructure::util::DefaultSlugGenerator;
use openalt_catalog::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// Services wired to one in-memory catalog and a recording event sink.
pub struct TestCatalog {
    pub catalog: Arc<InMemoryCatalog>,
    pub events: Arc<RecordingPublisher>,
    pub services: Arc<ApplicationServices>,
}

impl TestCatalog {
    pub fn new() -> Self {
        Self::with_settings(CatalogSettings::default())
    }

    pub fn with_settings(settings: CatalogSettings) -> Self {
        let catalog = Arc::new(InMemoryCatalog::new());
        let events = Arc::new(RecordingPublisher::default());
        let services = build_services(
            Arc::clone(&catalog) as Arc<dyn RecordReadRepository>,
            Arc::clone(&catalog) as Arc<dyn ToolRepository>,
            Arc::clone(&events) as Arc<EventPublisherPort>,
            settings,
        );
        Self {
            catalog,
            events,
            services,
        }
    }

    pub fn router(&self) -> axum::Router {
        router_for(Arc::clone(&self.services))
    }
}

pub fn build_services(
    record_repo: Arc<dyn RecordReadRepository>,
    tool_repo: Arc<dyn ToolRepository>,
    events: Arc<EventPublisherPort>,
    settings: CatalogSettings,
) -> Arc<ApplicationServices> {
    let clock: Arc<ClockPort> = Arc::new(DummyClock);
    let slugger: Arc<SlugGeneratorPort> = Arc::new(DefaultSlugGenerator);
    Arc::new(ApplicationServices::new(
        record_repo,
        tool_repo,
        events,
        clock,
        slugger,
        settings,
    ))
}

pub fn router_for(services: Arc<ApplicationServices>) -> axum::Router {
    build_router(
        HttpState { services },
        &["http://localhost:3000".to_string()],
    )
}

pub async fn make_test_router() -> axum::Router {
    TestCatalog::new().router()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected a JSON body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status
/// and reason phrase, and hand back the parsed body.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}

/// `field` names listed under `details` in a validation error body.
pub fn detail_fields(body: &Value) -> Vec<String> {
    body["details"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|d| d["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
