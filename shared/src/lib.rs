use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod sync;

/// A savings goal.
///
/// Goal ID in format: "goal::<uuid>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    /// What the user is saving for
    pub name: String,
    /// Date the user wants to reach the target by (YYYY-MM-DD on the wire)
    pub target_date: NaiveDate,
    /// Amount to save, in dollars
    pub target_amount: f64,
    /// Native emoji used as the goal's icon, if one was picked
    pub icon: Option<String>,
}

impl Goal {
    /// Generate a fresh goal ID
    pub fn generate_id() -> String {
        format!("goal::{}", uuid::Uuid::new_v4())
    }

    /// Whether an ID has the "goal::" prefix the service hands out
    pub fn is_valid_id(id: &str) -> bool {
        id.strip_prefix("goal::").is_some_and(|rest| !rest.is_empty())
    }
}

/// Response listing every stored goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalListResponse {
    pub goals: Vec<Goal>,
}

/// Response carrying a single goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalResponse {
    pub goal: Goal,
    pub success_message: Option<String>,
}

/// Request to create a new goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateGoalRequest {
    pub name: String,
    pub target_date: NaiveDate,
    pub target_amount: f64,
    pub icon: Option<String>,
}

/// Request to replace a stored goal with a full record.
///
/// The record's `id` must match the ID in the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateGoalRequest {
    pub goal: Goal,
}

/// Log entry forwarded from the frontend to the server log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}
