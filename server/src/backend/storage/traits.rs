//! # Storage Traits
//!
//! Storage abstraction used by the domain layer, so the goal service does
//! not depend on where goals are kept.

use anyhow::Result;
use async_trait::async_trait;

use crate::backend::domain::models::goal::DomainGoal;

/// Trait defining the interface for goal storage operations
#[async_trait]
pub trait GoalStorage: Send + Sync {
    /// List all goals in the order they were first stored
    async fn list_goals(&self) -> Result<Vec<DomainGoal>>;

    /// Retrieve a specific goal by ID
    async fn get_goal(&self, goal_id: &str) -> Result<Option<DomainGoal>>;

    /// Store a goal, replacing any stored goal with the same ID
    async fn store_goal(&self, goal: &DomainGoal) -> Result<()>;
}
