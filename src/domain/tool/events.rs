use crate::domain::catalog::Slug;

/// Notifications handed to the downstream event pipeline after a tool
/// mutation has been committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolEvent {
    Submitted { slug: Slug },
    Scheduled { slug: Slug },
    Deleted { slug: Slug },
}

impl ToolEvent {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Submitted { .. } => "tool.submitted",
            Self::Scheduled { .. } => "tool.scheduled",
            Self::Deleted { .. } => "tool.deleted",
        }
    }

    pub const fn slug(&self) -> &Slug {
        match self {
            Self::Submitted { slug } | Self::Scheduled { slug } | Self::Deleted { slug } => slug,
        }
    }
}
