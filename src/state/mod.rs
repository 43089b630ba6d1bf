//! Application state module

mod app_state;
mod fields;
pub mod validation;

pub use app_state::*;
pub use fields::*;
