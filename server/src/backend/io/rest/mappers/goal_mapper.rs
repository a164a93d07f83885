use shared::{CreateGoalRequest, Goal, GoalListResponse, GoalResponse, UpdateGoalRequest};

use crate::backend::domain::commands::goal::{CreateGoalCommand, UpdateGoalCommand};
use crate::backend::domain::models::goal::DomainGoal;

pub struct GoalMapper;

impl GoalMapper {
    /// Convert domain DomainGoal to shared Goal DTO
    pub fn to_dto(domain: DomainGoal) -> Goal {
        Goal {
            id: domain.id,
            name: domain.name,
            target_date: domain.target_date,
            target_amount: domain.target_amount,
            icon: domain.icon,
        }
    }

    pub fn to_create_command(request: CreateGoalRequest) -> CreateGoalCommand {
        CreateGoalCommand {
            name: request.name,
            target_date: request.target_date,
            target_amount: request.target_amount,
            icon: request.icon,
        }
    }

    /// Build an update command for the goal addressed by `goal_id`
    pub fn to_update_command(goal_id: String, request: UpdateGoalRequest) -> UpdateGoalCommand {
        let record = request.goal;
        UpdateGoalCommand {
            goal_id,
            record_id: record.id,
            name: record.name,
            target_date: record.target_date,
            target_amount: record.target_amount,
            icon: record.icon,
        }
    }

    pub fn to_goal_response(goal: DomainGoal, success_message: Option<String>) -> GoalResponse {
        GoalResponse {
            goal: Self::to_dto(goal),
            success_message,
        }
    }

    pub fn to_goal_list_response(goals: Vec<DomainGoal>) -> GoalListResponse {
        GoalListResponse {
            goals: goals.into_iter().map(Self::to_dto).collect(),
        }
    }
}
