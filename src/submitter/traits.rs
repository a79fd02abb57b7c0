//! Trait abstraction for registration submission to enable mocking in tests

use crate::error::SubmitError;
use crate::wizard::RegistrationPayload;
use async_trait::async_trait;

/// Accepts a finalized registration payload.
///
/// The wizard awaits one call at a time; implementations decide the
/// transport and any timeout policy.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationSubmitter: Send + Sync {
    /// Register the account. `Err(SubmitError::Rejected)` carries a
    /// user-facing message.
    async fn register(&self, payload: RegistrationPayload) -> Result<(), SubmitError>;
}
