//! Payments feature slice.
//!
//! The payments ledger, the product inventory and the revenue figures shown on the
//! dashboard.

mod error;
mod filter;
mod payment;
mod product;
pub mod stock;
pub mod summary;

pub use crate::error::{PaymentError, PaymentErrorExt};
pub use crate::filter::{PaymentFilter, ProductFilter};
pub use crate::payment::{PaymentService, membership_payment};
pub use crate::product::ProductService;
