pub mod pagination;
pub mod records;
pub mod search;
pub mod tools;

pub use pagination::PageResult;
pub use records::RecordDto;
pub use search::SearchResultsDto;
pub use tools::{SubmittedToolDto, ToolDto};
