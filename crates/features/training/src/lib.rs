//! Training feature slice: the class schedule and workout routines.

pub mod activity;
mod error;
mod filter;
pub mod routine;

pub use crate::activity::ActivityService;
pub use crate::error::{TrainingError, TrainingErrorExt};
pub use crate::filter::{ActivityFilter, RoutineFilter};
pub use crate::routine::RoutineService;
