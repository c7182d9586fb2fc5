// src/presentation/http/controllers/records.rs
use crate::application::{
    dto::{PageResult, RecordDto, SearchResultsDto},
    error::ApplicationError,
    queries::records::{GetRecordBySlugQuery, ListRecordsQuery, SearchItemsQuery},
};
use crate::domain::catalog::CatalogKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query, RawQuery},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

fn resolve_kind(segment: &str) -> HttpResult<CatalogKind> {
    CatalogKind::from_collection(segment)
        .map_err(ApplicationError::from)
        .into_http()
}

/// Documented listing parameters. The handler reads the raw query string so
/// that every malformed value is reported, not just the first.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListRecordsParams {
    /// 1-based page number. Defaults to 1.
    pub page: Option<u32>,
    /// Page size, capped by the server maximum.
    pub per_page: Option<u32>,
    /// `<field>.<asc|desc>` with field one of name, slug, created_at, updated_at.
    pub sort: Option<String>,
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// First creation day included, `YYYY-MM-DD`.
    pub from: Option<String>,
    /// Last creation day included, `YYYY-MM-DD`.
    pub to: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/catalog/{kind}",
    params(
        ("kind" = String, Path, description = "tools, licenses, categories or alternatives"),
        ListRecordsParams
    ),
    responses(
        (status = 200, description = "One page of records.", body = PageResult<RecordDto>),
        (status = 400, description = "Invalid listing parameters.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown collection.", body = crate::presentation::http::error::ErrorResponse),
        (status = 503, description = "Store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn list_records(
    Extension(state): Extension<HttpState>,
    Path(kind): Path<String>,
    RawQuery(query): RawQuery,
) -> HttpResult<Json<PageResult<RecordDto>>> {
    let kind = resolve_kind(&kind)?;
    let query =
        ListRecordsQuery::from_query_string(kind, query.as_deref().unwrap_or_default()).into_http()?;

    state
        .services
        .record_queries
        .list_records(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/catalog/{kind}/{slug}",
    params(
        ("kind" = String, Path, description = "tools, licenses, categories or alternatives"),
        ("slug" = String, Path, description = "Record slug")
    ),
    responses(
        (status = 200, description = "The record.", body = RecordDto),
        (status = 404, description = "No such record.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Catalog"
)]
pub async fn get_record_by_slug(
    Extension(state): Extension<HttpState>,
    Path((kind, slug)): Path<(String, String)>,
) -> HttpResult<Json<RecordDto>> {
    let kind = resolve_kind(&kind)?;
    state
        .services
        .record_queries
        .get_record_by_slug(GetRecordBySlugQuery { kind, slug })
        .await
        .into_http()
        .map(Json)
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Top name matches per collection.", body = SearchResultsDto)
    ),
    tag = "Catalog"
)]
pub async fn search(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SearchParams>,
) -> HttpResult<Json<SearchResultsDto>> {
    state
        .services
        .record_queries
        .search_items(SearchItemsQuery { query: params.q })
        .await
        .into_http()
        .map(Json)
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SlugPreviewParams {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SlugPreviewResponse {
    pub slug: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/slugs/{kind}",
    params(
        ("kind" = String, Path, description = "tools, licenses, categories or alternatives"),
        SlugPreviewParams
    ),
    responses(
        (status = 200, description = "Next free slug for the name.", body = SlugPreviewResponse),
        (status = 400, description = "Name yields no slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Every candidate slug is taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn preview_slug(
    Extension(state): Extension<HttpState>,
    Path(kind): Path<String>,
    Query(params): Query<SlugPreviewParams>,
) -> HttpResult<Json<SlugPreviewResponse>> {
    let kind = resolve_kind(&kind)?;
    let slug = state
        .services
        .allocate_slug(kind, &params.name)
        .await
        .into_http()?;
    Ok(Json(SlugPreviewResponse { slug }))
}
