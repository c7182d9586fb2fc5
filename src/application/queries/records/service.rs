use std::sync::Arc;
use std::time::Duration;

use super::params::ListingLimits;
use crate::domain::catalog::RecordReadRepository;

pub struct RecordQueryService {
    pub(super) read_repo: Arc<dyn RecordReadRepository>,
    pub(super) limits: ListingLimits,
    pub(super) deadline: Duration,
}

impl RecordQueryService {
    pub fn new(
        read_repo: Arc<dyn RecordReadRepository>,
        limits: ListingLimits,
        deadline: Duration,
    ) -> Self {
        Self {
            read_repo,
            limits,
            deadline,
        }
    }

    pub const fn limits(&self) -> ListingLimits {
        self.limits
    }
}
