//! People feature slice.
//!
//! Clients and the three staff kinds share one generic [`PersonService`]; the aliases
//! ([`ClientService`], [`InstructorService`], ...) pick the backend collection and the
//! folio prefix through the record type.

mod error;
mod filter;
mod service;

pub use crate::error::{PeopleError, PeopleErrorExt};
pub use crate::filter::PersonFilter;
pub use crate::service::{
    AdministratorService, ClientService, InstructorService, PersonService, ReceptionistService,
};
