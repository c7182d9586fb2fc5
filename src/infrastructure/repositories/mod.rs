// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_record;
mod postgres_tool;

pub use error::{corrupt_row, map_sqlx};
pub use postgres_record::PostgresRecordRepository;
pub use postgres_tool::PostgresToolRepository;
