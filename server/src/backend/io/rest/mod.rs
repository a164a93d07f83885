//! # REST API Interface Layer
//!
//! HTTP endpoints for the goal service. Handlers deserialize DTOs, map them
//! to domain commands, call the services and map results (or errors) back to
//! responses.

pub mod goal_apis;
pub mod logging_apis;
pub mod mappers;
