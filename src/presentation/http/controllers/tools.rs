// src/presentation/http/controllers/tools.rs
use crate::application::{
    commands::tools::{
        CreateToolCommand, DeleteToolsCommand, ScheduleToolCommand, SubmitToolCommand,
        UpdateToolCommand, UpdateToolsCommand,
    },
    dto::{SubmittedToolDto, ToolDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitToolRequest {
    pub name: String,
    pub website: String,
    pub repository: String,
    #[serde(default)]
    pub description: Option<String>,
    pub submitter_name: String,
    pub submitter_email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateToolRequest {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    pub website: String,
    pub repository: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
    #[serde(default)]
    pub alternative_ids: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateToolRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub website: Option<String>,
    pub repository: Option<String>,
    /// An empty string clears the description.
    pub description: Option<String>,
    /// `scheduled` is only accepted for tools that already have a publication date.
    pub status: Option<String>,
    pub category_ids: Option<Vec<i64>>,
    pub alternative_ids: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateToolsRequest {
    pub ids: Vec<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteToolsRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ScheduleToolRequest {
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AffectedResponse {
    pub affected: u64,
}

#[utoipa::path(
    post,
    path = "/api/v1/submissions",
    request_body = SubmitToolRequest,
    responses(
        (status = 201, description = "Tool submitted for review.", body = SubmittedToolDto),
        (status = 200, description = "The website or repository is already listed.", body = SubmittedToolDto),
        (status = 400, description = "Invalid submission.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "No free slug for the name.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Submissions"
)]
pub async fn submit_tool(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SubmitToolRequest>,
) -> HttpResult<(StatusCode, Json<SubmittedToolDto>)> {
    let command = SubmitToolCommand {
        name: payload.name,
        website: payload.website,
        repository: payload.repository,
        description: payload.description,
        submitter_name: payload.submitter_name,
        submitter_email: payload.submitter_email,
    };

    let result = state
        .services
        .tool_commands
        .submit_tool(command)
        .await
        .into_http()?;
    let status = if result.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(result)))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/tools",
    request_body = CreateToolRequest,
    responses(
        (status = 201, description = "Tool created.", body = ToolDto),
        (status = 400, description = "Invalid tool.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_tool(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateToolRequest>,
) -> HttpResult<(StatusCode, Json<ToolDto>)> {
    let command = CreateToolCommand {
        name: payload.name,
        slug: payload.slug,
        website: payload.website,
        repository: payload.repository,
        description: payload.description,
        published_at: payload.published_at,
        category_ids: payload.category_ids,
        alternative_ids: payload.alternative_ids,
    };

    state
        .services
        .tool_commands
        .create_tool(command)
        .await
        .into_http()
        .map(|tool| (StatusCode::CREATED, Json(tool)))
}

#[utoipa::path(
    put,
    path = "/api/v1/admin/tools/{id}",
    params(("id" = i64, Path, description = "Tool id")),
    request_body = UpdateToolRequest,
    responses(
        (status = 200, description = "Tool updated.", body = ToolDto),
        (status = 404, description = "No such tool.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn update_tool(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateToolRequest>,
) -> HttpResult<Json<ToolDto>> {
    let command = UpdateToolCommand {
        id,
        name: payload.name,
        slug: payload.slug,
        website: payload.website,
        repository: payload.repository,
        description: payload.description,
        status: payload.status,
        category_ids: payload.category_ids,
        alternative_ids: payload.alternative_ids,
    };

    state
        .services
        .tool_commands
        .update_tool(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/v1/admin/tools",
    request_body = UpdateToolsRequest,
    responses(
        (status = 200, description = "Number of tools changed.", body = AffectedResponse),
        (status = 400, description = "Nothing to update.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn update_tools(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<UpdateToolsRequest>,
) -> HttpResult<Json<AffectedResponse>> {
    let command = UpdateToolsCommand {
        ids: payload.ids,
        status: payload.status,
        published_at: payload.published_at,
    };

    let affected = state
        .services
        .tool_commands
        .update_tools(command)
        .await
        .into_http()?;
    Ok(Json(AffectedResponse { affected }))
}

#[utoipa::path(
    delete,
    path = "/api/v1/admin/tools",
    request_body = DeleteToolsRequest,
    responses(
        (status = 200, description = "Number of tools deleted.", body = AffectedResponse),
        (status = 400, description = "No ids given.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn delete_tools(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<DeleteToolsRequest>,
) -> HttpResult<Json<AffectedResponse>> {
    let affected = state
        .services
        .tool_commands
        .delete_tools(DeleteToolsCommand { ids: payload.ids })
        .await
        .into_http()?;
    Ok(Json(AffectedResponse { affected }))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/tools/{id}/schedule",
    params(("id" = i64, Path, description = "Tool id")),
    request_body = ScheduleToolRequest,
    responses(
        (status = 200, description = "Tool scheduled.", body = ToolDto),
        (status = 404, description = "No such tool.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn schedule_tool(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<ScheduleToolRequest>,
) -> HttpResult<Json<ToolDto>> {
    state
        .services
        .tool_commands
        .schedule_tool(ScheduleToolCommand {
            id,
            published_at: payload.published_at,
        })
        .await
        .into_http()
        .map(Json)
}
