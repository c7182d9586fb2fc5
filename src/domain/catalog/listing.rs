// src/domain/catalog/listing.rs
//! Validated building blocks of a catalog listing: page window, ordering,
//! name filter and creation-date range.

use crate::domain::catalog::entity::Record;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::fmt;

/// Columns a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Slug,
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    pub const ALLOWED: [Self; 4] = [Self::Name, Self::Slug, Self::CreatedAt, Self::UpdatedAt];

    pub const fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Slug => "slug",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(Self::Name),
            "slug" => Some(Self::Slug),
            "created_at" | "createdAt" => Some(Self::CreatedAt),
            "updated_at" | "updatedAt" => Some(Self::UpdatedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    /// Parse `"<field>.<direction>"`. The direction may be omitted (`"name"`),
    /// in which case it is ascending.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self::default());
        }

        let (field, direction) = match raw.split_once('.') {
            Some((field, direction)) => (field, Some(direction)),
            None => (raw, None),
        };

        let field = SortField::parse(field).ok_or_else(|| {
            let allowed = SortField::ALLOWED
                .iter()
                .map(|f| f.column())
                .collect::<Vec<_>>()
                .join(", ");
            DomainError::Validation(format!(
                "cannot sort by `{field}`; expected one of: {allowed}"
            ))
        })?;

        let direction = match direction {
            None | Some("asc") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(other) => {
                return Err(DomainError::Validation(format!(
                    "sort direction `{other}` must be `asc` or `desc`"
                )));
            }
        };

        Ok(Self { field, direction })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{}.{direction}", self.field.column())
    }
}

/// One page of a listing: `page` is 1-based, `per_page` is already bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: u32,
    per_page: u32,
}

impl PageWindow {
    pub fn new(page: u32, per_page: u32) -> DomainResult<Self> {
        if page == 0 {
            return Err(DomainError::Validation("page must be at least 1".into()));
        }
        if per_page == 0 {
            return Err(DomainError::Validation("per_page must be at least 1".into()));
        }
        Ok(Self { page, per_page })
    }

    pub const fn page(self) -> u32 {
        self.page
    }

    pub const fn per_page(self) -> u32 {
        self.per_page
    }

    pub fn offset(self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    pub fn page_count(self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.per_page))
    }
}

/// Case-insensitive substring match on the record name. Blank input never
/// produces a filter, so `name=` behaves exactly like an absent parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter(String);

impl NameFilter {
    pub fn new(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `ILIKE` pattern with the LIKE metacharacters escaped.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for ch in self.0.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }

    pub fn matches(&self, name: &str) -> bool {
        name.to_lowercase().contains(&self.0.to_lowercase())
    }
}

/// Inclusive creation-date bounds, widened to whole UTC days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    from: Option<DateTime<Utc>>,
    to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn from_days(from: Option<NaiveDate>, to: Option<NaiveDate>) -> DomainResult<Self> {
        if let (Some(start), Some(end)) = (from, to) {
            if start > end {
                return Err(DomainError::Validation(format!(
                    "end date {end} is before start date {start}"
                )));
            }
        }

        Ok(Self {
            from: from.map(start_of_day),
            to: to.map(end_of_day),
        })
    }

    pub const fn from(&self) -> Option<DateTime<Utc>> {
        self.from
    }

    pub const fn to(&self) -> Option<DateTime<Utc>> {
        self.to
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| at >= from) && self.to.is_none_or(|to| at <= to)
    }
}

fn start_of_day(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
}

fn end_of_day(day: NaiveDate) -> DateTime<Utc> {
    // Postgres keeps microseconds, so this is the last representable instant.
    let last = NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999).unwrap_or(NaiveTime::MIN);
    day.and_time(last).and_utc()
}

/// Fully validated listing request handed to the read repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordListing {
    pub window: PageWindow,
    pub sort: SortSpec,
    pub name: Option<NameFilter>,
    pub created: DateRange,
}

impl RecordListing {
    /// Filter predicate shared by every store: both the page fetch and the
    /// count must agree on it.
    pub fn matches(&self, record: &Record) -> bool {
        self.name
            .as_ref()
            .is_none_or(|filter| filter.matches(record.name.as_str()))
            && self.created.contains(record.created_at)
    }
}
