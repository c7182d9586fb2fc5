// src/infrastructure/repositories/postgres_tool.rs
use super::{corrupt_row, map_sqlx};
use crate::domain::catalog::{RecordId, RecordName, Slug};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tool::{
    EmailAddress, NewTool, Tool, ToolPatch, ToolRepository, ToolUpdate, WebUrl,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};

const TOOL_SELECT: &str = "SELECT t.id, t.name, t.slug, t.website, t.repository, t.description, \
     t.submitter_name, t.submitter_email, t.status, t.published_at, \
     ARRAY(SELECT c.category_id FROM tool_categories c WHERE c.tool_id = t.id ORDER BY c.category_id) AS category_ids, \
     ARRAY(SELECT a.alternative_id FROM tool_alternatives a WHERE a.tool_id = t.id ORDER BY a.alternative_id) AS alternative_ids, \
     t.created_at, t.updated_at \
     FROM tools t";

#[derive(Clone)]
pub struct PostgresToolRepository {
    pool: PgPool,
}

impl PostgresToolRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ToolRow {
    id: i64,
    name: String,
    slug: String,
    website: String,
    repository: String,
    description: Option<String>,
    submitter_name: Option<String>,
    submitter_email: Option<String>,
    status: String,
    published_at: Option<DateTime<Utc>>,
    category_ids: Vec<i64>,
    alternative_ids: Vec<i64>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn record_ids(raw: Vec<i64>) -> DomainResult<Vec<RecordId>> {
    raw.into_iter().map(RecordId::new).collect()
}

fn raw_ids(ids: &[RecordId]) -> Vec<i64> {
    ids.iter().copied().map(i64::from).collect()
}

impl TryFrom<ToolRow> for Tool {
    type Error = DomainError;

    fn try_from(row: ToolRow) -> Result<Self, Self::Error> {
        let corrupt = |err| corrupt_row("tools", err);
        Ok(Tool {
            id: RecordId::new(row.id).map_err(corrupt)?,
            name: RecordName::from_stored(row.name),
            slug: Slug::from_stored(row.slug),
            website: WebUrl::from_stored(row.website),
            repository: WebUrl::from_stored(row.repository),
            description: row.description,
            submitter_name: row.submitter_name,
            submitter_email: row.submitter_email.map(EmailAddress::from_stored),
            status: row.status.parse().map_err(corrupt)?,
            published_at: row.published_at,
            category_ids: record_ids(row.category_ids).map_err(corrupt)?,
            alternative_ids: record_ids(row.alternative_ids).map_err(corrupt)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl PostgresToolRepository {
    async fn fetch_one_in(conn: &mut PgConnection, id: i64) -> DomainResult<Tool> {
        let row = sqlx::query_as::<_, ToolRow>(&format!("{TOOL_SELECT} WHERE t.id = $1"))
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("tool not found".into()))?;
        Tool::try_from(row)
    }

    async fn replace_links(
        conn: &mut PgConnection,
        table: &str,
        column: &str,
        tool_id: i64,
        ids: &[RecordId],
    ) -> DomainResult<()> {
        sqlx::query(&format!("DELETE FROM {table} WHERE tool_id = $1"))
            .bind(tool_id)
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
        if ids.is_empty() {
            return Ok(());
        }
        sqlx::query(&format!(
            "INSERT INTO {table} (tool_id, {column}) SELECT $1, UNNEST($2::BIGINT[])"
        ))
        .bind(tool_id)
        .bind(raw_ids(ids))
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }
}

fn update_query(update: ToolUpdate) -> QueryBuilder<'static, Postgres> {
    let ToolUpdate {
        id,
        name,
        slug,
        website,
        repository,
        description,
        status,
        published_at,
        updated_at,
        ..
    } = update;

    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE tools SET updated_at = ");
    builder.push_bind(updated_at);

    if let Some(name) = name {
        builder.push(", name = ");
        builder.push_bind(name.into_inner());
    }
    if let Some(slug) = slug {
        builder.push(", slug = ");
        builder.push_bind(slug.into_inner());
    }
    if let Some(website) = website {
        builder.push(", website = ");
        builder.push_bind(website.into_inner());
    }
    if let Some(repository) = repository {
        builder.push(", repository = ");
        builder.push_bind(repository.into_inner());
    }
    if let Some(description) = description {
        builder.push(", description = ");
        builder.push_bind(description);
    }
    if let Some(status) = status {
        builder.push(", status = ");
        builder.push_bind(status.as_str());
    }
    if let Some(published_at) = published_at {
        builder.push(", published_at = ");
        builder.push_bind(published_at);
    }

    builder.push(" WHERE id = ");
    builder.push_bind(i64::from(id));
    builder.push(" RETURNING id");
    builder
}

fn patch_query(
    ids: &[RecordId],
    patch: &ToolPatch,
    updated_at: DateTime<Utc>,
) -> QueryBuilder<'static, Postgres> {
    let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE tools SET updated_at = ");
    builder.push_bind(updated_at);
    if let Some(status) = patch.status {
        builder.push(", status = ");
        builder.push_bind(status.as_str());
    }
    if let Some(published_at) = patch.published_at {
        builder.push(", published_at = ");
        builder.push_bind(published_at);
    }
    builder.push(" WHERE id = ANY(");
    builder.push_bind(raw_ids(ids));
    builder.push(")");
    builder
}

#[async_trait]
impl ToolRepository for PostgresToolRepository {
    async fn find_by_id(&self, id: RecordId) -> DomainResult<Option<Tool>> {
        let row = sqlx::query_as::<_, ToolRow>(&format!("{TOOL_SELECT} WHERE t.id = $1"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Tool::try_from).transpose()
    }

    async fn find_by_website_or_repository(
        &self,
        website: &WebUrl,
        repository: &WebUrl,
    ) -> DomainResult<Option<Tool>> {
        let row = sqlx::query_as::<_, ToolRow>(&format!(
            "{TOOL_SELECT} WHERE t.website = $1 OR t.repository = $2 ORDER BY t.id LIMIT 1"
        ))
        .bind(website.as_str())
        .bind(repository.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tool::try_from).transpose()
    }

    async fn insert(&self, tool: NewTool) -> DomainResult<Tool> {
        let NewTool {
            name,
            slug,
            website,
            repository,
            description,
            submitter_name,
            submitter_email,
            status,
            published_at,
            category_ids,
            alternative_ids,
            created_at,
        } = tool;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO tools (name, slug, website, repository, description, submitter_name, \
             submitter_email, status, published_at, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
             RETURNING id",
        )
        .bind(name.as_str())
        .bind(slug.as_str())
        .bind(website.as_str())
        .bind(repository.as_str())
        .bind(description)
        .bind(submitter_name)
        .bind(submitter_email.map(EmailAddress::into_inner))
        .bind(status.as_str())
        .bind(published_at)
        .bind(created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        Self::replace_links(&mut tx, "tool_categories", "category_id", id, &category_ids).await?;
        Self::replace_links(&mut tx, "tool_alternatives", "alternative_id", id, &alternative_ids)
            .await?;
        let tool = Self::fetch_one_in(&mut tx, id).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(tool)
    }

    async fn update(&self, mut update: ToolUpdate) -> DomainResult<Tool> {
        let id = i64::from(update.id);
        let category_ids = update.category_ids.take();
        let alternative_ids = update.alternative_ids.take();

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let mut builder = update_query(update);
        builder
            .build()
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("tool not found".into()))?;

        if let Some(ids) = category_ids {
            Self::replace_links(&mut tx, "tool_categories", "category_id", id, &ids).await?;
        }
        if let Some(ids) = alternative_ids {
            Self::replace_links(&mut tx, "tool_alternatives", "alternative_id", id, &ids).await?;
        }
        let tool = Self::fetch_one_in(&mut tx, id).await?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(tool)
    }

    async fn update_many(
        &self,
        ids: &[RecordId],
        patch: &ToolPatch,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        let mut builder = patch_query(ids, patch, updated_at);
        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }

    async fn delete_many(&self, ids: &[RecordId]) -> DomainResult<Vec<Slug>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let slugs: Vec<String> =
            sqlx::query_scalar("DELETE FROM tools WHERE id = ANY($1) RETURNING slug")
                .bind(raw_ids(ids))
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx)?;

        Ok(slugs.into_iter().map(Slug::from_stored).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tool::ToolStatus;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn update_only_touches_provided_columns() {
        let mut update = ToolUpdate::new(RecordId::new(7).unwrap(), now());
        update.name = Some(RecordName::new("Gitea").unwrap());
        update.status = Some(ToolStatus::Published);

        let builder = update_query(update);
        assert_eq!(
            builder.sql(),
            "UPDATE tools SET updated_at = $1, name = $2, status = $3 WHERE id = $4 RETURNING id"
        );
    }

    #[test]
    fn batch_patch_targets_id_array() {
        let ids = [RecordId::new(1).unwrap(), RecordId::new(2).unwrap()];
        let patch = ToolPatch {
            status: None,
            published_at: Some(now()),
        };
        let builder = patch_query(&ids, &patch, now());
        assert_eq!(
            builder.sql(),
            "UPDATE tools SET updated_at = $1, published_at = $2 WHERE id = ANY($3)"
        );
    }

    #[test]
    fn cleared_description_is_still_written() {
        let mut update = ToolUpdate::new(RecordId::new(7).unwrap(), now());
        update.description = Some(None);

        let builder = update_query(update);
        assert_eq!(
            builder.sql(),
            "UPDATE tools SET updated_at = $1, description = $2 WHERE id = $3 RETURNING id"
        );
    }

    #[test]
    fn row_with_unknown_status_is_a_persistence_error() {
        let row = ToolRow {
            id: 1,
            name: "Gitea".into(),
            slug: "gitea".into(),
            website: "https://gitea.com".into(),
            repository: "https://github.com/go-gitea/gitea".into(),
            description: None,
            submitter_name: None,
            submitter_email: None,
            status: "archived".into(),
            published_at: None,
            category_ids: vec![3, 1],
            alternative_ids: vec![],
            created_at: now(),
            updated_at: now(),
        };
        assert!(matches!(Tool::try_from(row), Err(DomainError::Persistence(_))));
    }

    #[test]
    fn legacy_row_values_decode_as_stored() {
        let row = ToolRow {
            id: 2,
            name: "G".repeat(240),
            slug: "Old_Slug".into(),
            website: "gitea.com/".into(),
            repository: "https://github.com/go-gitea/gitea".into(),
            description: None,
            submitter_name: Some("Ada".into()),
            submitter_email: Some("ada at example".into()),
            status: "published".into(),
            published_at: Some(now()),
            category_ids: vec![],
            alternative_ids: vec![],
            created_at: now(),
            updated_at: now(),
        };
        let tool = Tool::try_from(row).unwrap();
        assert_eq!(tool.slug.as_str(), "Old_Slug");
        assert_eq!(tool.website.as_str(), "gitea.com/");
        assert_eq!(tool.submitter_email.unwrap().as_str(), "ada at example");
    }
}
