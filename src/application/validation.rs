// src/application/validation.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

/// Every problem found in one request. Inputs are checked in full before
/// anything is rejected so callers can fix all fields in one round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            reason: reason.into(),
        });
    }

    /// Keep the value on success; on a validation failure record it against
    /// `field` and return `None`. Other domain errors are recorded too, with
    /// their display text.
    pub fn capture<T>(&mut self, field: &str, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(DomainError::Validation(reason)) => {
                self.push(field, reason);
                None
            }
            Err(other) => {
                self.push(field, other.to_string());
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|err| err.field == field)
    }

    pub fn into_fields(self) -> Vec<FieldError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", err.field, err.reason)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_records_validation_failures() {
        let mut errors = ValidationErrors::new();
        let kept = errors.capture("page", Ok::<_, DomainError>(3));
        let dropped: Option<u32> =
            errors.capture("sort", Err(DomainError::Validation("bad sort".into())));

        assert_eq!(kept, Some(3));
        assert!(dropped.is_none());
        assert!(errors.contains("sort"));
        assert!(!errors.contains("page"));
        assert_eq!(errors.to_string(), "sort: bad sort");
    }

    #[test]
    fn display_joins_every_field() {
        let mut errors = ValidationErrors::new();
        errors.push("page", "must be a positive integer");
        errors.push("to", "must be a date");
        assert_eq!(
            errors.to_string(),
            "page: must be a positive integer; to: must be a date"
        );
    }
}
