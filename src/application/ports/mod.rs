// src/application/ports/mod.rs
pub mod events;
pub mod time;
pub mod util;

pub type ClockPort = dyn time::Clock;
pub type EventPublisherPort = dyn events::EventPublisher;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
