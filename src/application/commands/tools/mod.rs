mod batch;
mod create;
mod input;
mod schedule;
mod service;
mod submit;
mod update;

pub use batch::{DeleteToolsCommand, UpdateToolsCommand};
pub use create::CreateToolCommand;
pub use schedule::ScheduleToolCommand;
pub use service::{ToolCommandService, WritePolicy};
pub use submit::SubmitToolCommand;
pub use update::UpdateToolCommand;
