//! Blocking Browser Dialogs
//!
//! Every user-facing failure and confirmation ends up here.

use crate::error::ApiError;

/// Show a blocking `window.alert`
pub fn alert(message: &str) {
    log::info!("[ALERT] {}", message);
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("[ALERT] could not open dialog: {:?}", e);
        }
    }
}

/// Alert an API failure, prefixed with what was being attempted
pub fn alert_failure(action: &str, err: &ApiError) {
    log::error!("[ALERT] {} failed: {:?}", action, err);
    alert(&failure_message(action, err));
}

/// Connectivity failures get the generic message on its own
pub fn failure_message(action: &str, err: &ApiError) -> String {
    match err {
        ApiError::Network(_) | ApiError::NotLoggedIn => err.to_string(),
        _ => format!("{} failed: {}", action, err),
    }
}

/// Full page reload, used after logout
pub fn reload_page() {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().reload() {
            log::warn!("[ALERT] reload failed: {:?}", e);
        }
    }
}
