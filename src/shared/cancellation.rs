use crate::shared::error::LicenseError;
use crate::shared::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cooperative cancellation shared by every stage of an aggregation run.
///
/// Clones share the same flag, so cancelling any clone cancels all of them.
/// An optional deadline makes the token report itself as cancelled once the
/// deadline has passed.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a token that expires `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            deadline: Instant::now().checked_add(timeout),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        if self.cancelled.load(Ordering::SeqCst) {
            return true;
        }
        self.deadline
            .map(|deadline| Instant::now() >= deadline)
            .unwrap_or(false)
    }

    /// Fails with `LicenseError::Cancelled` once the token is cancelled or expired
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            return Err(LicenseError::Cancelled.into());
        }
        Ok(())
    }
}
