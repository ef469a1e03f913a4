//! Per-operation deadline for storage calls.

use std::future::IntoFuture;
use std::time::Duration;

/// Upper bound on how long a single storage operation may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    limit: Duration,
}

/// The wrapped operation did not finish before its deadline.
#[derive(Debug, thiserror::Error)]
#[error("{operation} timed out after {limit:?}")]
pub struct DeadlineExceeded {
    pub operation: &'static str,
    pub limit: Duration,
}

impl Deadline {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn from_secs(secs: u64) -> Self {
        Self::new(Duration::from_secs(secs))
    }

    /// Drive `fut` to completion, or fail once the limit elapses.
    ///
    /// The inner output (usually a `Result<T, DbErr>`) is returned untouched
    /// so callers keep access to the storage error.
    pub async fn run<F>(
        &self,
        operation: &'static str,
        fut: F,
    ) -> Result<F::Output, DeadlineExceeded>
    where
        F: IntoFuture,
    {
        tokio::time::timeout(self.limit, fut)
            .await
            .map_err(|_| DeadlineExceeded {
                operation,
                limit: self.limit,
            })
    }
}
