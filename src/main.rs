#![cfg_attr(all(target_os = "windows", not(debug_assertions)), windows_subsystem = "windows")]

use lifetracker::gui::{native_options, LifeTrackerApp};
use lifetracker::instance_lock::{default_lock_path, InstanceLock, LockOutcome};
use lifetracker::settings::Settings;
use lifetracker::{init_from_config, notice, APP_NAME};

fn main() -> anyhow::Result<()> {
    let settings = init_from_config(Settings::config_path());

    let _lock = match InstanceLock::acquire(default_lock_path())? {
        LockOutcome::Acquired(lock) => lock,
        LockOutcome::AlreadyRunning => {
            notice::show_already_running();
            return Ok(());
        }
    };

    match settings.life_expectancy {
        Some(date) => tracing::info!(%date, "starting widget"),
        None => tracing::warn!("life_expectancy not set; showing the configuration prompt"),
    }
    eframe::run_native(
        APP_NAME,
        native_options(),
        Box::new(move |_cc| Box::new(LifeTrackerApp::new(&settings))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))?;
    tracing::info!("widget closed");
    Ok(())
}
