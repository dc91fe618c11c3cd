pub(crate) mod client;
pub(crate) mod error;

pub use client::ApiClient;
pub use error::{ApiError, GENERIC_FAILURE_MESSAGE, Result as ApiClientResult};
