// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),
    #[error("no free slug derived from `{base}` after {attempts} probes")]
    SlugExhausted { base: String, attempts: u32 },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}
