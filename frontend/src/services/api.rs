use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{CreateGoalRequest, Goal, GoalListResponse, GoalResponse, UpdateGoalRequest};

use crate::config::AppConfig;

/// API client for communicating with the goal service
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the configured base URL
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    fn goals_url(&self) -> String {
        format!("{}/api/goals", self.base_url)
    }

    fn goal_url(&self, goal_id: &str) -> String {
        format!("{}/api/goals/{}", self.base_url, goal_id)
    }

    /// List every stored goal
    pub async fn list_goals(&self) -> Result<Vec<Goal>, String> {
        match Request::get(&self.goals_url()).send().await {
            Ok(response) => {
                let data: GoalListResponse = read_json(response, "goals").await?;
                Ok(data.goals)
            }
            Err(e) => Err(format!("Failed to fetch goals: {}", e)),
        }
    }

    /// Create a goal
    pub async fn create_goal(&self, request: CreateGoalRequest) -> Result<Goal, String> {
        match Request::post(&self.goals_url())
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                let data: GoalResponse = read_json(response, "created goal").await?;
                Ok(data.goal)
            }
            Err(e) => Err(format!("Failed to create goal: {}", e)),
        }
    }

    /// Replace the stored goal with `goal`, keyed by its ID
    pub async fn update_goal(&self, goal: &Goal) -> Result<Goal, String> {
        let request = UpdateGoalRequest { goal: goal.clone() };

        match Request::put(&self.goal_url(&goal.id))
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                let data: GoalResponse = read_json(response, "updated goal").await?;
                Ok(data.goal)
            }
            Err(e) => Err(format!("Failed to update goal: {}", e)),
        }
    }
}

/// Decode a JSON body, turning non-2xx responses into their error text
async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("Server error ({}): {}", status, error_text));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse {}: {}", what, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_goal_urls() {
        let client = ApiClient::new(&AppConfig::default());
        assert_eq!(client.goals_url(), "http://localhost:3000/api/goals");
        assert_eq!(client.goal_url("goal::abc"), "http://localhost:3000/api/goals/goal::abc");
    }
}
