//! Blocking browser dialogs used by the tab strip.

use web_sys::window;

/// Ask the user for a line of text. `None` when cancelled or left empty.
pub fn prompt(message: &str) -> Option<String> {
    window()?
        .prompt_with_message(message)
        .ok()
        .flatten()
        .filter(|answer| !answer.is_empty())
}

pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}
