use crate::domain::tool::Tool;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ToolDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub website: String,
    pub repository: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub category_ids: Vec<i64>,
    pub alternative_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tool> for ToolDto {
    fn from(tool: Tool) -> Self {
        Self {
            id: tool.id.into(),
            name: tool.name.into_inner(),
            slug: tool.slug.into_inner(),
            website: tool.website.into_inner(),
            repository: tool.repository.into_inner(),
            description: tool.description,
            status: tool.status.as_str().to_string(),
            published_at: tool.published_at,
            category_ids: tool.category_ids.into_iter().map(Into::into).collect(),
            alternative_ids: tool.alternative_ids.into_iter().map(Into::into).collect(),
            created_at: tool.created_at,
            updated_at: tool.updated_at,
        }
    }
}

/// Result of a public submission. `created` is false when the website or
/// repository was already listed and the existing tool is returned instead.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmittedToolDto {
    pub created: bool,
    pub tool: ToolDto,
}
