//! # Domain Module
//!
//! Business logic for savings goals. Services here take command types from
//! [`commands`], work on [`models`] and persist through the storage traits;
//! they know nothing about HTTP.

pub mod commands;
pub mod goal_service;
pub mod models;

pub use goal_service::*;
