use crate::domain::catalog::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordDto {
    pub id: i64,
    pub kind: String,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Record> for RecordDto {
    fn from(record: Record) -> Self {
        Self {
            id: record.id.into(),
            kind: record.kind.as_str().to_string(),
            name: record.name.into_inner(),
            slug: record.slug.into_inner(),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
