pub mod entity;
pub mod events;
pub mod repository;
pub mod value_objects;

pub use entity::{NewTool, Tool, ToolPatch, ToolUpdate};
pub use events::ToolEvent;
pub use repository::ToolRepository;
pub use value_objects::{EmailAddress, ToolStatus, WebUrl};
