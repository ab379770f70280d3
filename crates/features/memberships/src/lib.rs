//! Memberships feature slice.
//!
//! * [`pricing`]: plan discounts and the months a plan covers.
//! * [`lifecycle`]: effective status, renewal periods and the advisory transition checks.
//! * [`MembershipCatalog`]: membership types and payment plans.
//! * [`ClientMembershipService`]: assignment, renewal and cancellation of client memberships.

mod assignment;
mod catalog;
mod error;
mod filter;
pub mod lifecycle;
pub mod pricing;

pub use crate::assignment::ClientMembershipService;
pub use crate::catalog::MembershipCatalog;
pub use crate::error::{MembershipError, MembershipErrorExt};
pub use crate::filter::MembershipFilter;
pub use crate::lifecycle::Period;
pub use crate::pricing::Quote;
