use axum::{extract::State, response::Json};
use log::{debug, error, info, warn};
use shared::{LogEntry, LogResponse};

use crate::backend::AppState;

/// Write a log line forwarded by the frontend into the server log
pub async fn log_message(
    State(_app_state): State<AppState>,
    Json(request): Json<LogEntry>,
) -> Json<LogResponse> {
    let component = request.component.as_deref().unwrap_or("frontend");
    let message = format!("[{}] {}", component, request.message);

    match request.level.to_lowercase().as_str() {
        "debug" => debug!("{}", message),
        "info" => info!("{}", message),
        "warn" => warn!("{}", message),
        "error" => error!("{}", message),
        _ => info!("{}", message), // Default to info for unknown levels
    }

    Json(LogResponse { success: true })
}
