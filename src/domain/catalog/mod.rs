pub mod entity;
pub mod kind;
pub mod listing;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::Record;
pub use kind::CatalogKind;
pub use listing::{DateRange, NameFilter, PageWindow, RecordListing, SortDirection, SortField, SortSpec};
pub use repository::{RecordPage, RecordReadRepository};
pub use services::SlugAllocator;
pub use value_objects::{RecordId, RecordName, Slug};
