//! Safe transaction service integration
//!
//! Thin HTTP client for the read-only endpoints of the Safe transaction
//! service. Responses are returned as raw JSON and never reshaped.

pub mod client;

pub use client::{DecodeRequest, SafeApiClient, SafeApiError};
