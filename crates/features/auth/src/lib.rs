//! Auth feature slice.
//!
//! Username/password login returning a flat [`gymhub_domain::UserProfile`], kept in an
//! in-memory [`Session`]. There is no token refresh and nothing is persisted.

mod error;
mod service;
mod session;

pub use crate::error::{AuthError, AuthErrorExt};
pub use crate::service::AuthService;
pub use crate::session::Session;
