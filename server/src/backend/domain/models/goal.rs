use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MAX_NAME_LENGTH: usize = 256;
pub const MAX_ICON_LENGTH: usize = 16;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainGoal {
    pub id: String,
    pub name: String,
    pub target_date: NaiveDate,
    pub target_amount: f64,
    pub icon: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl DomainGoal {
    /// Check the business rules for a stored goal
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if !shared::Goal::is_valid_id(&self.id) {
            return Err(GoalValidationError::InvalidId(self.id.clone()));
        }
        if self.name.chars().count() > MAX_NAME_LENGTH {
            return Err(GoalValidationError::NameTooLong);
        }
        if !self.target_amount.is_finite() {
            return Err(GoalValidationError::NonFiniteTargetAmount);
        }
        if self.target_amount < 0.0 {
            return Err(GoalValidationError::NegativeTargetAmount);
        }
        if let Some(icon) = &self.icon {
            if icon.chars().count() > MAX_ICON_LENGTH {
                return Err(GoalValidationError::IconTooLong);
            }
        }
        Ok(())
    }

    /// Whether two records hold the same user-editable values
    pub fn same_content(&self, other: &DomainGoal) -> bool {
        self.name == other.name
            && self.target_date == other.target_date
            && self.target_amount == other.target_amount
            && self.icon == other.icon
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GoalValidationError {
    #[error("Goal ID is malformed: {0}")]
    InvalidId(String),
    #[error("Goal name cannot exceed 256 characters")]
    NameTooLong,
    #[error("Target amount must be a number")]
    NonFiniteTargetAmount,
    #[error("Target amount cannot be negative")]
    NegativeTargetAmount,
    #[error("Icon cannot exceed 16 characters")]
    IconTooLong,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal() -> DomainGoal {
        DomainGoal {
            id: "goal::test".to_string(),
            name: "Lego set".to_string(),
            target_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            target_amount: 40.0,
            icon: Some("🧱".to_string()),
            created_at: "2026-01-01T00:00:00+00:00".to_string(),
            updated_at: "2026-01-01T00:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn test_valid_goal() {
        assert_eq!(goal().validate(), Ok(()));

        let empty_name = DomainGoal { name: String::new(), ..goal() };
        assert_eq!(empty_name.validate(), Ok(()));

        let zero = DomainGoal { target_amount: 0.0, ..goal() };
        assert_eq!(zero.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_goals() {
        let bad_id = DomainGoal { id: "bike".to_string(), ..goal() };
        assert_eq!(bad_id.validate(), Err(GoalValidationError::InvalidId("bike".to_string())));

        let long_name = DomainGoal { name: "x".repeat(257), ..goal() };
        assert_eq!(long_name.validate(), Err(GoalValidationError::NameTooLong));

        let nan = DomainGoal { target_amount: f64::NAN, ..goal() };
        assert_eq!(nan.validate(), Err(GoalValidationError::NonFiniteTargetAmount));

        let negative = DomainGoal { target_amount: -1.0, ..goal() };
        assert_eq!(negative.validate(), Err(GoalValidationError::NegativeTargetAmount));

        let long_icon = DomainGoal { icon: Some("🎉".repeat(17)), ..goal() };
        assert_eq!(long_icon.validate(), Err(GoalValidationError::IconTooLong));
    }

    #[test]
    fn test_same_content_ignores_timestamps() {
        let later = DomainGoal { updated_at: "2026-02-01T00:00:00+00:00".to_string(), ..goal() };
        assert!(goal().same_content(&later));

        let renamed = DomainGoal { name: "Lego castle".to_string(), ..goal() };
        assert!(!goal().same_content(&renamed));
    }
}
