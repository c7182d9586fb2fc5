mod get_by_slug;
mod list;
mod params;
mod search;
mod service;

pub use get_by_slug::GetRecordBySlugQuery;
pub use params::{ListRecordsQuery, ListingLimits};
pub use search::{SEARCH_RESULTS_PER_KIND, SearchItemsQuery};
pub use service::RecordQueryService;
