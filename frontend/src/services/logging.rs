use gloo::console;
use gloo::net::http::Request;
use shared::LogEntry;
use wasm_bindgen_futures::spawn_local;

use crate::config::AppConfig;

/// Writes to the browser console and forwards the line to the server log
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let line = format!("[{}] {}", component.as_deref().unwrap_or("frontend"), message);
        match level {
            "debug" => console::debug!(line),
            "warn" => console::warn!(line),
            "error" => console::error!(line),
            _ => console::info!(line),
        }

        let entry = LogEntry {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };
        let url = format!("{}/api/logs", AppConfig::from_env().api_base_url);

        // Send log asynchronously without blocking
        spawn_local(async move {
            let request = match Request::post(&url).json(&entry) {
                Ok(request) => request,
                Err(e) => {
                    console::warn!(format!("Failed to serialize log entry: {}", e));
                    return;
                }
            };
            let _ = request.send().await;
        });
    }
}
