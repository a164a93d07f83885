//! Command and result types for the domain services.
//!
//! The REST layer maps request DTOs into these types so the services never
//! see wire formats.

pub mod goal {
    use chrono::NaiveDate;

    use crate::backend::domain::models::goal::DomainGoal;

    /// Input for creating a new goal.
    #[derive(Debug, Clone)]
    pub struct CreateGoalCommand {
        pub name: String,
        pub target_date: NaiveDate,
        pub target_amount: f64,
        pub icon: Option<String>,
    }

    /// Input for replacing a goal with a full record.
    #[derive(Debug, Clone)]
    pub struct UpdateGoalCommand {
        /// ID the request was addressed to
        pub goal_id: String,
        /// ID carried inside the record; must equal `goal_id`
        pub record_id: String,
        pub name: String,
        pub target_date: NaiveDate,
        pub target_amount: f64,
        pub icon: Option<String>,
    }

    /// Input for fetching one goal.
    #[derive(Debug, Clone)]
    pub struct GetGoalCommand {
        pub goal_id: String,
    }

    /// Result of creating a goal.
    #[derive(Debug, Clone)]
    pub struct CreateGoalResult {
        pub goal: DomainGoal,
        pub success_message: String,
    }

    /// Result of updating a goal.
    #[derive(Debug, Clone)]
    pub struct UpdateGoalResult {
        pub goal: DomainGoal,
        pub success_message: String,
    }

    /// Result of listing goals.
    #[derive(Debug, Clone)]
    pub struct ListGoalsResult {
        pub goals: Vec<DomainGoal>,
    }
}
