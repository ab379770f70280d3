//! Dashboard feature slice.
//!
//! [`DashboardService`] loads clients, memberships, payments, products and activities
//! concurrently; [`DashboardStats::compute`] derives the tiles from that snapshot.

mod error;
mod service;
mod stats;

pub use crate::error::{DashboardError, DashboardErrorExt};
pub use crate::service::DashboardService;
pub use crate::stats::{DashboardSnapshot, DashboardStats, percent};
