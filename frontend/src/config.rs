//! Build-time settings for the frontend.

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_DEBOUNCE_MS: u32 = 400;

/// Frontend configuration, resolved from compile-time environment variables
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Origin of the goal service, without a trailing slash
    pub api_base_url: String,
    /// Quiet period before a typed name or amount is written remotely
    pub debounce_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl AppConfig {
    /// Read `GOAL_API_BASE_URL` and `GOAL_DEBOUNCE_MS` as set when the bundle was built
    pub fn from_env() -> Self {
        Self::from_values(option_env!("GOAL_API_BASE_URL"), option_env!("GOAL_DEBOUNCE_MS"))
    }

    fn from_values(api_base_url: Option<&str>, debounce_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            debounce_ms: debounce_ms
                .and_then(|ms| ms.trim().parse().ok())
                .unwrap_or(defaults.debounce_ms),
        }
    }
}
