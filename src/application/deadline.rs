use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::DomainResult;
use std::future::Future;
use std::time::Duration;

/// Run a store round-trip under the request deadline. An expired deadline is
/// reported as a retryable `Unavailable` error.
pub async fn with_deadline<T, F>(deadline: Duration, fut: F) -> ApplicationResult<T>
where
    F: Future<Output = DomainResult<T>>,
{
    match tokio::time::timeout(deadline, fut).await {
        Ok(result) => result.map_err(ApplicationError::from),
        Err(_) => {
            tracing::warn!(deadline_ms = deadline.as_millis(), "store deadline exceeded");
            Err(ApplicationError::unavailable(format!(
                "store did not respond within {} ms",
                deadline.as_millis()
            )))
        }
    }
}
