use super::RecordDto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Best name matches per collection, as shown in the site-wide search box.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SearchResultsDto {
    pub tools: Vec<RecordDto>,
    pub alternatives: Vec<RecordDto>,
    pub categories: Vec<RecordDto>,
    pub licenses: Vec<RecordDto>,
}
