//! # Storage Module
//!
//! Data persistence for the goal service. The domain layer only sees the
//! [`GoalStorage`] trait; the CSV backend is the one implementation.

pub mod csv;
pub mod traits;

pub use self::csv::{CsvConnection, GoalRepository};
pub use traits::GoalStorage;
