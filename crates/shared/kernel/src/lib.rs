//! Kernel utilities shared across feature slices.
//! Keep this crate lightweight: it hosts the client-side rules every screen reuses.
//!
//! ## Folios
//! ```rust
//! use gymhub_kernel::folio::next_folio;
//! assert_eq!(next_folio("ADM", ["ADM001", "ADM002"]), "ADM003");
//! assert_eq!(next_folio("ADM", Vec::<&str>::new()), "ADM001");
//! ```
//!
//! ## Filters
//! ```rust
//! use gymhub_kernel::filter::{Filter, apply_filter};
//!
//! struct Even;
//! impl Filter<u32> for Even {
//!     fn matches(&self, item: &u32) -> bool { item % 2 == 0 }
//! }
//! assert_eq!(apply_filter(&[1, 2, 3, 4], &Even), vec![2, 4]);
//! ```

pub mod config;
pub mod confirm;
pub mod filter;
pub mod folio;
pub mod money;
pub mod search;
pub mod validation;

pub mod prelude {
    pub use crate::confirm::{AlwaysConfirm, Confirm, NeverConfirm};
    pub use crate::filter::{Filter, apply_filter, text_matches};
    pub use crate::folio::next_folio;
    pub use crate::money::{format_money, round_cents};
    pub use crate::validation::{Validate, ValidationError, ValidationErrors};
}

pub use gymhub_domain as domain;
