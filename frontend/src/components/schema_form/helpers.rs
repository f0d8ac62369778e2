//! DOM utilities shared by the schema form's update logic.

/// Blocking notification for the insert action's outcome and guards.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
