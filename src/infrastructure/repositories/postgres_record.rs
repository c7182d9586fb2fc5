// src/infrastructure/repositories/postgres_record.rs
use super::{corrupt_row, map_sqlx};
use crate::domain::catalog::{
    CatalogKind, NameFilter, Record, RecordId, RecordListing, RecordName, RecordPage,
    RecordReadRepository, Slug,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const RECORD_COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Read side shared by every catalog table. Table and column names only ever
/// come from `CatalogKind` and `SortField`, never from request input.
#[derive(Clone)]
pub struct PostgresRecordRepository {
    pool: PgPool,
}

impl PostgresRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RecordRow {
    id: i64,
    name: String,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl RecordRow {
    fn into_record(self, kind: CatalogKind) -> DomainResult<Record> {
        Ok(Record {
            id: RecordId::new(self.id).map_err(|err| corrupt_row(kind.table(), err))?,
            kind,
            name: RecordName::from_stored(self.name),
            slug: Slug::from_stored(self.slug),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn push_clause(builder: &mut QueryBuilder<'_, Postgres>, has_where: &mut bool) {
    builder.push(if *has_where { " AND " } else { " WHERE " });
    *has_where = true;
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, listing: &RecordListing) {
    let mut has_where = false;

    if let Some(name) = &listing.name {
        push_clause(builder, &mut has_where);
        builder.push("name ILIKE ");
        builder.push_bind(name.like_pattern());
    }
    if let Some(from) = listing.created.from() {
        push_clause(builder, &mut has_where);
        builder.push("created_at >= ");
        builder.push_bind(from);
    }
    if let Some(to) = listing.created.to() {
        push_clause(builder, &mut has_where);
        builder.push("created_at <= ");
        builder.push_bind(to);
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn page_query(kind: CatalogKind, listing: &RecordListing) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {RECORD_COLUMNS} FROM {}",
        kind.table()
    ));
    push_filters(&mut builder, listing);

    let direction = listing.sort.direction.keyword();
    builder.push(format!(
        " ORDER BY {} {direction}, id {direction}",
        listing.sort.field.column()
    ));
    builder.push(" LIMIT ");
    builder.push_bind(i64::from(listing.window.per_page()));
    builder.push(" OFFSET ");
    builder.push_bind(to_i64(listing.window.offset()));
    builder
}

fn count_query(kind: CatalogKind, listing: &RecordListing) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT COUNT(*) FROM {}", kind.table()));
    push_filters(&mut builder, listing);
    builder
}

#[async_trait]
impl RecordReadRepository for PostgresRecordRepository {
    async fn list_page(
        &self,
        kind: CatalogKind,
        listing: &RecordListing,
    ) -> DomainResult<RecordPage> {
        // Page and total must come from the same snapshot.
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let mut page = page_query(kind, listing);
        let mut count = count_query(kind, listing);

        let rows = page
            .build_query_as::<RecordRow>()
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        let records = rows
            .into_iter()
            .map(|row| row.into_record(kind))
            .collect::<Result<Vec<_>, _>>()?;
        let total = u64::try_from(total)
            .map_err(|_| DomainError::Persistence(format!("negative row count {total}")))?;

        Ok(RecordPage { records, total })
    }

    async fn find_by_slug(&self, kind: CatalogKind, slug: &Slug) -> DomainResult<Option<Record>> {
        let sql = format!(
            "SELECT {RECORD_COLUMNS} FROM {} WHERE slug = $1",
            kind.table()
        );
        let row = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(|row| row.into_record(kind)).transpose()
    }

    async fn slug_exists(
        &self,
        kind: CatalogKind,
        slug: &Slug,
        ignore_id: Option<RecordId>,
    ) -> DomainResult<bool> {
        let sql = format!(
            "SELECT EXISTS (SELECT 1 FROM {} WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
            kind.table()
        );
        sqlx::query_scalar::<_, bool>(&sql)
            .bind(slug.as_str())
            .bind(ignore_id.map(i64::from))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn search_by_name(
        &self,
        kind: CatalogKind,
        term: &NameFilter,
        limit: u32,
    ) -> DomainResult<Vec<Record>> {
        let sql = format!(
            "SELECT {RECORD_COLUMNS} FROM {} WHERE name ILIKE $1 ORDER BY name ASC, id ASC LIMIT $2",
            kind.table()
        );
        let rows = sqlx::query_as::<_, RecordRow>(&sql)
            .bind(term.like_pattern())
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(|row| row.into_record(kind)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{DateRange, PageWindow, SortSpec};
    use chrono::NaiveDate;

    fn listing(name: Option<&str>, from: Option<NaiveDate>, to: Option<NaiveDate>) -> RecordListing {
        RecordListing {
            window: PageWindow::new(3, 20).unwrap(),
            sort: SortSpec::parse("created_at.desc").unwrap(),
            name: name.and_then(NameFilter::new),
            created: DateRange::from_days(from, to).unwrap(),
        }
    }

    #[test]
    fn unfiltered_page_query_orders_with_id_tiebreak() {
        let builder = page_query(CatalogKind::License, &listing(None, None, None));
        assert_eq!(
            builder.sql(),
            "SELECT id, name, slug, created_at, updated_at FROM licenses \
             ORDER BY created_at DESC, id DESC LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn filters_are_shared_by_page_and_count() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1);
        let listing = listing(Some("git"), day, day);

        let page = page_query(CatalogKind::Tool, &listing);
        let count = count_query(CatalogKind::Tool, &listing);
        let filter = " WHERE name ILIKE $1 AND created_at >= $2 AND created_at <= $3";

        assert_eq!(
            page.sql(),
            format!(
                "SELECT id, name, slug, created_at, updated_at FROM tools{filter} \
                 ORDER BY created_at DESC, id DESC LIMIT $4 OFFSET $5"
            )
        );
        assert_eq!(count.sql(), format!("SELECT COUNT(*) FROM tools{filter}"));
    }

    fn row(id: i64, name: String, slug: &str) -> RecordRow {
        let at = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        RecordRow {
            id,
            name,
            slug: slug.into(),
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn stored_values_are_not_revalidated() {
        let long_name = "L".repeat(250);
        let record = row(4, long_name.clone(), "Legacy Slug")
            .into_record(CatalogKind::License)
            .unwrap();
        assert_eq!(record.name.as_str(), long_name);
        assert_eq!(record.slug.as_str(), "Legacy Slug");
    }

    #[test]
    fn undecodable_row_is_a_persistence_error() {
        let err = row(0, "MIT".into(), "mit")
            .into_record(CatalogKind::License)
            .unwrap_err();
        assert!(matches!(err, DomainError::Persistence(_)));
    }

    #[test]
    fn single_bound_uses_where_keyword() {
        let listing = listing(None, None, NaiveDate::from_ymd_opt(2024, 1, 31));
        let count = count_query(CatalogKind::Category, &listing);
        assert_eq!(
            count.sql(),
            "SELECT COUNT(*) FROM categories WHERE created_at <= $1"
        );
    }
}
