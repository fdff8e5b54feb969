//! Remote game API: record types, HTTP client, and error type

pub mod client;
pub mod error;
pub mod types;

pub use client::Client;
pub use error::ApiError;
pub use types::*;
