// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::records::list_records,
        crate::presentation::http::controllers::records::get_record_by_slug,
        crate::presentation::http::controllers::records::search,
        crate::presentation::http::controllers::records::preview_slug,
        crate::presentation::http::controllers::tools::submit_tool,
        crate::presentation::http::controllers::tools::create_tool,
        crate::presentation::http::controllers::tools::update_tool,
        crate::presentation::http::controllers::tools::update_tools,
        crate::presentation::http::controllers::tools::delete_tools,
        crate::presentation::http::controllers::tools::schedule_tool,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::validation::FieldError,
            crate::application::dto::RecordDto,
            crate::application::dto::ToolDto,
            crate::application::dto::SubmittedToolDto,
            crate::application::dto::SearchResultsDto,
            crate::presentation::http::controllers::records::SlugPreviewResponse,
            crate::presentation::http::controllers::tools::SubmitToolRequest,
            crate::presentation::http::controllers::tools::CreateToolRequest,
            crate::presentation::http::controllers::tools::UpdateToolRequest,
            crate::presentation::http::controllers::tools::UpdateToolsRequest,
            crate::presentation::http::controllers::tools::DeleteToolsRequest,
            crate::presentation::http::controllers::tools::ScheduleToolRequest,
            crate::presentation::http::controllers::tools::AffectedResponse
        )
    ),
    tags(
        (name = "Catalog", description = "Public listings, detail pages and search"),
        (name = "Submissions", description = "Public tool suggestions"),
        (name = "Admin", description = "Back-office tool management"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "OpenAlternative Catalog API",
        description = "Directory of open-source alternatives to proprietary software",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}
