// src/infrastructure/events/mod.rs
mod http;
mod log;

pub use http::HttpEventPublisher;
pub use log::LogEventPublisher;
