// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod catalog;
pub mod events;
pub mod slow;
pub mod time;
pub mod util;

pub use catalog::InMemoryCatalog;
pub use events::{FailingPublisher, RecordingPublisher};
pub use slow::SlowCatalog;
pub use time::{at, fixed_now};
pub use util::DummyClock;
