//! Goal Manager REST service.
//!
//! Persists savings goals for the Yew frontend. See [`backend`] for the
//! layering and [`config`] for how the service is configured.

pub mod backend;
pub mod config;
