//! # IO Module
//!
//! Interface layer exposing the domain services to clients. The REST API is
//! the only transport.

pub mod rest;
