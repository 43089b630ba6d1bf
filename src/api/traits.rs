//! Trait abstraction for the registration client to enable mocking in tests

use crate::state::FieldSet;
use anyhow::Result;
use async_trait::async_trait;

use super::client::SubmitOutcome;

/// Trait for registration endpoint operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Submit the field set to the registration endpoint
    ///
    /// Returns `Ok` for any response the endpoint produced, accepted or
    /// rejected; `Err` means no usable response arrived at all.
    async fn register(&self, fields: &FieldSet) -> Result<SubmitOutcome>;
}
