//! Conversions between shared DTOs and domain types.

pub mod goal_mapper;
