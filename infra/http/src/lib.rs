//! # HTTP
//!
//! JSON-over-HTTP access to the gym backend.
//!
//! [`ApiClient`] owns the connection pool, timeouts and error mapping; [`Collection`]
//! layers the CRUD conventions shared by every backend collection on top of it.
//! Failed calls surface as [`ApiError`], whose [`ApiError::user_message`] gives the
//! operator-facing wording.

mod client;
mod error;
mod resource;

pub use crate::client::ApiClient;
pub use crate::error::{
    ApiError, ApiErrorExt, CANNOT_CONNECT, INVALID_CREDENTIALS, extract_backend_message,
};
pub use crate::resource::Collection;
pub use gymhub_domain::Resource;
