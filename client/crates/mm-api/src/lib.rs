//! HTTP client for the remote matchmaking REST API.
//!
//! All business rules (authentication, mutual-match computation, password
//! handling) live behind this API; the client only shapes requests and types
//! responses.

pub(crate) mod client;
pub(crate) mod member_form;

#[cfg(test)]
mod tests;

pub use client::{ApiClient, ApiClientResult, ApiError, GENERIC_FAILURE_MESSAGE};
pub use member_form::{DEFAULT_MEMBER_IMAGE, MemberForm, MemberPayload};
