//! # Services Layer
//!
//! Outbound plumbing to the REST backend: the HTTP client adapter and
//! the per-resource clients built on it.

pub mod http;
pub mod resources;

pub use http::{
    ApiClient, ApiConfig, ApiResponse, ErrorBody, RequestError, DEFAULT_BASE_URL,
    GENERIC_FAILURE_MESSAGE,
};
pub use resources::{ApplicationsApi, CompaniesApi, JobsApi, UsersApi};
