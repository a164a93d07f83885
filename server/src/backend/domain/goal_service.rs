//! Goal service domain logic.
//!
//! Creating, reading and replacing savings goals. Updates are full-record
//! replacements keyed by goal ID, so repeating the same update is harmless.
//!
//! ## Business Rules
//!
//! - Goal IDs are handed out by the service ("goal::<uuid>")
//! - Names are limited to 256 characters and may be empty while being edited
//! - Target amounts must be finite and not negative
//! - An update addressed to one ID cannot carry a record with another ID

use chrono::Utc;
use log::{debug, info, warn};
use std::sync::Arc;

use crate::backend::domain::commands::goal::{
    CreateGoalCommand, CreateGoalResult, GetGoalCommand, ListGoalsResult, UpdateGoalCommand,
    UpdateGoalResult,
};
use crate::backend::domain::models::goal::{DomainGoal, GoalValidationError};
use crate::backend::storage::GoalStorage;

#[derive(Debug, thiserror::Error)]
pub enum GoalServiceError {
    #[error("Goal not found: {0}")]
    NotFound(String),
    #[error("Goal ID {record_id} does not match request path {goal_id}")]
    IdMismatch { goal_id: String, record_id: String },
    #[error(transparent)]
    Invalid(#[from] GoalValidationError),
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

/// Service for managing goals
#[derive(Clone)]
pub struct GoalService {
    storage: Arc<dyn GoalStorage>,
}

impl GoalService {
    pub fn new(storage: Arc<dyn GoalStorage>) -> Self {
        Self { storage }
    }

    /// List every stored goal
    pub async fn list_goals(&self) -> Result<ListGoalsResult, GoalServiceError> {
        let goals = self.storage.list_goals().await?;
        debug!("Listed {} goals", goals.len());
        Ok(ListGoalsResult { goals })
    }

    /// Get a single goal
    pub async fn get_goal(&self, command: GetGoalCommand) -> Result<DomainGoal, GoalServiceError> {
        self.storage
            .get_goal(&command.goal_id)
            .await?
            .ok_or(GoalServiceError::NotFound(command.goal_id))
    }

    /// Create a new goal
    pub async fn create_goal(&self, command: CreateGoalCommand) -> Result<CreateGoalResult, GoalServiceError> {
        info!("Creating goal: {:?}", command);

        let now_rfc3339 = Utc::now().to_rfc3339();
        let goal = DomainGoal {
            id: shared::Goal::generate_id(),
            name: command.name.trim().to_string(),
            target_date: command.target_date,
            target_amount: command.target_amount,
            icon: command.icon.filter(|icon| !icon.is_empty()),
            created_at: now_rfc3339.clone(),
            updated_at: now_rfc3339,
        };
        goal.validate()?;

        self.storage.store_goal(&goal).await?;

        info!("Successfully created goal: {}", goal.id);
        Ok(CreateGoalResult {
            goal,
            success_message: "Goal created successfully".to_string(),
        })
    }

    /// Replace a goal with the full record in `command`
    pub async fn update_goal(&self, command: UpdateGoalCommand) -> Result<UpdateGoalResult, GoalServiceError> {
        debug!("Updating goal {}: {:?}", command.goal_id, command);

        if command.goal_id != command.record_id {
            warn!(
                "Rejecting update for {}: record carries ID {}",
                command.goal_id, command.record_id
            );
            return Err(GoalServiceError::IdMismatch {
                goal_id: command.goal_id,
                record_id: command.record_id,
            });
        }

        let existing = self
            .storage
            .get_goal(&command.goal_id)
            .await?
            .ok_or_else(|| GoalServiceError::NotFound(command.goal_id.clone()))?;

        let mut updated = DomainGoal {
            id: existing.id.clone(),
            name: command.name,
            target_date: command.target_date,
            target_amount: command.target_amount,
            icon: command.icon.filter(|icon| !icon.is_empty()),
            created_at: existing.created_at.clone(),
            updated_at: existing.updated_at.clone(),
        };
        updated.validate()?;

        if updated.same_content(&existing) {
            debug!("Goal {} unchanged, skipping write", updated.id);
            return Ok(UpdateGoalResult {
                goal: existing,
                success_message: "Goal unchanged".to_string(),
            });
        }

        updated.updated_at = Utc::now().to_rfc3339();
        self.storage.store_goal(&updated).await?;

        info!("Successfully updated goal: {}", updated.id);
        Ok(UpdateGoalResult {
            goal: updated,
            success_message: "Goal updated successfully".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::{CsvConnection, GoalRepository};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_service() -> (GoalService, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = CsvConnection::new(temp_dir.path()).expect("Failed to init test storage");
        let service = GoalService::new(Arc::new(GoalRepository::new(connection)));
        (service, temp_dir)
    }

    fn create_command(name: &str) -> CreateGoalCommand {
        CreateGoalCommand {
            name: name.to_string(),
            target_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            target_amount: 120.0,
            icon: None,
        }
    }

    fn update_command(goal: &DomainGoal) -> UpdateGoalCommand {
        UpdateGoalCommand {
            goal_id: goal.id.clone(),
            record_id: goal.id.clone(),
            name: goal.name.clone(),
            target_date: goal.target_date,
            target_amount: goal.target_amount,
            icon: goal.icon.clone(),
        }
    }

    #[tokio::test]
    async fn test_create_goal() {
        let (service, _temp_dir) = create_test_service();

        let result = service.create_goal(create_command("  Skateboard ")).await.unwrap();

        assert!(result.goal.id.starts_with("goal::"));
        assert_eq!(result.goal.name, "Skateboard");
        assert_eq!(result.goal.created_at, result.goal.updated_at);

        let listed = service.list_goals().await.unwrap();
        assert_eq!(listed.goals, vec![result.goal]);
    }

    #[tokio::test]
    async fn test_create_goal_rejects_negative_amount() {
        let (service, _temp_dir) = create_test_service();
        let command = CreateGoalCommand {
            target_amount: -5.0,
            ..create_command("Skateboard")
        };

        let error = service.create_goal(command).await.unwrap_err();

        assert!(matches!(error, GoalServiceError::Invalid(GoalValidationError::NegativeTargetAmount)));
        assert!(service.list_goals().await.unwrap().goals.is_empty());
    }

    #[tokio::test]
    async fn test_update_goal_replaces_record() {
        let (service, _temp_dir) = create_test_service();
        let created = service.create_goal(create_command("Skateboard")).await.unwrap().goal;

        let mut command = update_command(&created);
        command.name = "Longboard".to_string();
        command.target_amount = 180.0;
        command.icon = Some("🛹".to_string());

        let result = service.update_goal(command).await.unwrap();
        assert_eq!(result.goal.name, "Longboard");
        assert_eq!(result.goal.created_at, created.created_at);

        let stored = service
            .get_goal(GetGoalCommand { goal_id: created.id.clone() })
            .await
            .unwrap();
        assert_eq!(stored.target_amount, 180.0);
        assert_eq!(stored.icon.as_deref(), Some("🛹"));
    }

    #[tokio::test]
    async fn test_update_goal_is_idempotent() {
        let (service, _temp_dir) = create_test_service();
        let created = service.create_goal(create_command("Skateboard")).await.unwrap().goal;

        let mut command = update_command(&created);
        command.name = "Longboard".to_string();

        let first = service.update_goal(command.clone()).await.unwrap();
        let second = service.update_goal(command).await.unwrap();

        assert_eq!(first.goal, second.goal);
        assert_eq!(service.list_goals().await.unwrap().goals.len(), 1);
    }

    #[tokio::test]
    async fn test_update_goal_rejects_id_mismatch() {
        let (service, _temp_dir) = create_test_service();
        let created = service.create_goal(create_command("Skateboard")).await.unwrap().goal;

        let mut command = update_command(&created);
        command.record_id = "goal::other".to_string();

        let error = service.update_goal(command).await.unwrap_err();
        assert!(matches!(error, GoalServiceError::IdMismatch { .. }));
    }

    #[tokio::test]
    async fn test_update_unknown_goal() {
        let (service, _temp_dir) = create_test_service();
        let ghost = DomainGoal {
            id: "goal::ghost".to_string(),
            name: "Ghost".to_string(),
            target_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            target_amount: 1.0,
            icon: None,
            created_at: String::new(),
            updated_at: String::new(),
        };

        let error = service.update_goal(update_command(&ghost)).await.unwrap_err();
        assert!(matches!(error, GoalServiceError::NotFound(id) if id == "goal::ghost"));
    }

    #[tokio::test]
    async fn test_update_goal_rejects_nan_amount() {
        let (service, _temp_dir) = create_test_service();
        let created = service.create_goal(create_command("Skateboard")).await.unwrap().goal;

        let mut command = update_command(&created);
        command.target_amount = f64::NAN;

        let error = service.update_goal(command).await.unwrap_err();
        assert!(matches!(error, GoalServiceError::Invalid(GoalValidationError::NonFiniteTargetAmount)));
    }
}
