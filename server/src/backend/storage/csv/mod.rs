//! CSV file storage backend.

pub mod connection;
pub mod goal_repository;

pub use connection::CsvConnection;
pub use goal_repository::GoalRepository;
