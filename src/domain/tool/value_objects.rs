use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Publication state of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolStatus {
    #[default]
    Draft,
    Scheduled,
    Published,
}

impl ToolStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Published => "published",
        }
    }
}

impl FromStr for ToolStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "scheduled" => Ok(Self::Scheduled),
            "published" => Ok(Self::Published),
            other => Err(DomainError::Validation(format!(
                "unknown tool status `{other}`"
            ))),
        }
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute http(s) URL, stored without a trailing slash so that
/// `https://x.dev/` and `https://x.dev` dedupe to the same tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebUrl(String);

impl WebUrl {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let raw = value.as_ref().trim();
        let parsed = Url::parse(raw)
            .map_err(|err| DomainError::Validation(format!("`{raw}` is not a valid URL: {err}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(DomainError::Validation(format!(
                "`{raw}` must use http or https"
            )));
        }
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(DomainError::Validation(format!("`{raw}` has no host")));
        }

        Ok(Self(parsed.as_str().trim_end_matches('/').to_string()))
    }

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

impl fmt::Display for WebUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let value = value.as_ref().trim();
        let invalid = || DomainError::Validation(format!("`{value}` is not a valid email address"));

        let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
        let domain_ok = domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
            && !domain.contains('@');
        if local.is_empty() || !domain_ok || value.chars().any(char::is_whitespace) {
            return Err(invalid());
        }

        Ok(Self(value.to_ascii_lowercase()))
    }

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_url_normalises_trailing_slash() {
        let url = WebUrl::new("https://openalternative.co/").unwrap();
        assert_eq!(url.as_str(), "https://openalternative.co");
    }

    #[test]
    fn web_url_requires_http_scheme() {
        assert!(WebUrl::new("ftp://example.com").is_err());
        assert!(WebUrl::new("example.com").is_err());
        assert!(WebUrl::new("http://github.com/org/repo").is_ok());
    }

    #[test]
    fn email_requires_domain_with_dot() {
        assert!(EmailAddress::new("dev@example.com").is_ok());
        assert!(EmailAddress::new("dev@localhost").is_err());
        assert!(EmailAddress::new("@example.com").is_err());
        assert!(EmailAddress::new("dev example@example.com").is_err());
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("Scheduled".parse::<ToolStatus>().unwrap(), ToolStatus::Scheduled);
        assert!("archived".parse::<ToolStatus>().is_err());
    }
}
