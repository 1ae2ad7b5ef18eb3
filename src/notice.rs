use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::APP_NAME;

pub fn already_running_text() -> String {
    format!("{APP_NAME} is already running.")
}

/// Blocking informational dialog shown when a second instance starts.
pub fn show_already_running() {
    let text = already_running_text();
    tracing::info!("{text}");
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(APP_NAME)
        .set_description(text)
        .set_buttons(MessageButtons::Ok)
        .show();
}
