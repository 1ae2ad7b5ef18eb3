pub mod countdown;
pub mod gesture;
pub mod gui;
pub mod instance_lock;
pub mod logging;
pub mod notice;
pub mod refresh;
pub mod settings;
pub mod visibility;

use std::path::Path;

/// Name shown in dialogs and used for the lock file.
pub const APP_NAME: &str = "LifeTracker";

/// Read the config, initialise logging from it, then log whatever the read
/// had to ignore.
pub fn init_from_config(path: impl AsRef<Path>) -> settings::Settings {
    let (settings, warnings) = settings::Settings::load(path);
    logging::init(settings.debug_logging, settings.log_file.clone());
    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    settings
}
