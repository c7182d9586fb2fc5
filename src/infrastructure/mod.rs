// src/infrastructure/mod.rs
pub mod database;
pub mod events;
pub mod repositories;
pub mod time;
pub mod util;
