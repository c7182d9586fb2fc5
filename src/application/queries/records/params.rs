// src/application/queries/records/params.rs
//! Turns the untyped query-string bag of a listing request into a
//! `RecordListing`, reporting every bad field at once.

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    validation::ValidationErrors,
};
use crate::domain::{
    catalog::{CatalogKind, DateRange, NameFilter, PageWindow, RecordListing, SortSpec},
    errors::{DomainError, DomainResult},
};
use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingLimits {
    pub default_per_page: u32,
    pub max_per_page: u32,
}

impl Default for ListingLimits {
    fn default() -> Self {
        Self {
            default_per_page: 25,
            max_per_page: 100,
        }
    }
}

pub struct ListRecordsQuery {
    pub kind: CatalogKind,
    pub params: Vec<(String, String)>,
}

impl ListRecordsQuery {
    pub fn from_query_string(kind: CatalogKind, raw: &str) -> ApplicationResult<Self> {
        let params = serde_urlencoded::from_str::<Vec<(String, String)>>(raw)
            .map_err(|err| ApplicationError::validation(format!("malformed query string: {err}")))?;
        Ok(Self { kind, params })
    }

    pub fn from_pairs<K, V>(kind: CatalogKind, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            kind,
            params: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// First non-blank value for `key`; repeated keys after it are ignored.
fn value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.trim())
        .find(|v| !v.is_empty())
}

fn parse_positive(raw: &str) -> DomainResult<u32> {
    let value = raw
        .parse::<u32>()
        .map_err(|_| DomainError::Validation(format!("`{raw}` is not a positive integer")))?;
    if value == 0 {
        return Err(DomainError::Validation("must be at least 1".into()));
    }
    Ok(value)
}

fn parse_day(raw: &str) -> DomainResult<NaiveDate> {
    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(day);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc).date_naive())
        .map_err(|_| DomainError::Validation(format!("`{raw}` is not a date (expected YYYY-MM-DD)")))
}

pub(crate) fn build_listing(
    params: &[(String, String)],
    limits: ListingLimits,
) -> ApplicationResult<RecordListing> {
    let mut errors = ValidationErrors::new();

    let page = value(params, "page").map_or(Ok(1), parse_positive);
    let page = errors.capture("page", page);

    let per_page = value(params, "per_page")
        .map_or(Ok(limits.default_per_page), parse_positive)
        .and_then(|n| {
            if n > limits.max_per_page {
                Err(DomainError::Validation(format!(
                    "must not exceed {}",
                    limits.max_per_page
                )))
            } else {
                Ok(n)
            }
        });
    let per_page = errors.capture("per_page", per_page);

    let sort = errors.capture("sort", SortSpec::parse(value(params, "sort").unwrap_or("")));
    let name = value(params, "name").and_then(NameFilter::new);

    let from = value(params, "from").map(parse_day).transpose();
    let from = errors.capture("from", from);
    let to = value(params, "to").map(parse_day).transpose();
    let to = errors.capture("to", to);

    let created = match (from, to) {
        (Some(from), Some(to)) => errors.capture("to", DateRange::from_days(from, to)),
        _ => None,
    };

    let window = match (page, per_page) {
        (Some(page), Some(per_page)) => errors.capture("page", PageWindow::new(page, per_page)),
        _ => None,
    };

    match (window, sort, created) {
        (Some(window), Some(sort), Some(created)) if errors.is_empty() => Ok(RecordListing {
            window,
            sort,
            name,
            created,
        }),
        _ => Err(errors.into()),
    }
}
