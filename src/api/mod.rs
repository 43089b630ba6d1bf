//! Registration endpoint communication module

pub mod client;
pub mod traits;

pub use client::{RegistrationClient, SubmitOutcome};
pub use traits::RegistrationApi;

#[cfg(test)]
pub use traits::MockRegistrationApi;
