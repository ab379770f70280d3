//! # Domain Models
//!
//! Plain records mirrored from the backend JSON, the status vocabularies used to
//! drive renewal and filtering decisions, and the client configuration tree.
//! No I/O and no business rules live here; features build on these types.

pub mod config;
pub mod constants;
pub mod id;
pub mod models;
pub mod resource;
pub mod status;

pub use id::RecordId;
pub use models::*;
pub use resource::Resource;
pub use status::*;
