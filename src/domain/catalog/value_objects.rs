use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_NAME_LEN: usize = 200;
const MAX_SLUG_LEN: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(i64);

impl RecordId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("record id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RecordId> for i64 {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordName(String);

impl RecordName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if trimmed.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::Validation(format!(
                "name must be at most {MAX_NAME_LEN} characters"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Wrap a name read back from the store without re-validating it.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL-safe identifier: lowercase ASCII alphanumerics separated by single dashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if value.len() > MAX_SLUG_LEN {
            return Err(DomainError::Validation(format!(
                "slug must be at most {MAX_SLUG_LEN} characters"
            )));
        }
        let well_formed = value
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
        if !well_formed {
            return Err(DomainError::Validation(format!(
                "slug `{value}` must contain only lowercase letters, digits and single dashes"
            )));
        }
        Ok(Self(value))
    }

    /// Build a slug from generator output, shortening it to the length cap.
    /// The cut prefers the last dash inside the limit so words stay whole.
    pub fn from_generated(value: &str) -> DomainResult<Self> {
        Self::new(shorten(value, MAX_SLUG_LEN))
    }

    /// Wrap a slug read back from the store without re-validating it.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    /// `base-n`, the n-th probe candidate after the bare slug. A base close
    /// to the cap is cut so the suffix always fits.
    pub fn with_suffix(&self, n: u32) -> DomainResult<Self> {
        let suffix = format!("-{n}");
        let room = MAX_SLUG_LEN.saturating_sub(suffix.len());
        let base = if self.0.len() > room {
            self.0[..room].trim_end_matches('-')
        } else {
            self.0.as_str()
        };
        Self::new(format!("{base}{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn shorten(value: &str, max: usize) -> &str {
    if value.len() <= max || !value.is_ascii() {
        return value;
    }
    let head = &value[..max];
    let cut = if value.as_bytes()[max] == b'-' {
        head
    } else {
        match head.rfind('-') {
            Some(dash) if dash > 0 => &head[..dash],
            _ => head,
        }
    };
    cut.trim_end_matches('-')
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
