use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// File name of the configuration read at startup.
pub const CONFIG_FILE: &str = "config.json";

/// Format accepted for `life_expectancy`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// Target date of the countdown. `None` means the value is not set or
    /// could not be read.
    pub life_expectancy: Option<NaiveDate>,
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the config file.
    pub debug_logging: bool,
    /// Optional file that receives a copy of the log output.
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Path of `config.json` next to the running executable.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_FILE)
    }

    /// Read the configuration. Missing or malformed content never fails; the
    /// affected values simply stay unset. The returned warnings explain what
    /// was ignored, so they can be logged once logging is configured from the
    /// same file.
    pub fn load(path: impl AsRef<Path>) -> (Self, Vec<String>) {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                let warning = format!("config {} not readable: {e}", path.display());
                return (Self::default(), vec![warning]);
            }
        };
        match serde_json::from_str::<Value>(&content) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                let warning = format!("config {} is not valid JSON: {e}", path.display());
                (Self::default(), vec![warning])
            }
        }
    }

    /// Extract every known key on its own so one bad entry does not hide the
    /// others.
    pub fn from_value(value: &Value) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        let life_expectancy = match value.get("life_expectancy") {
            Some(Value::String(s)) => match parse_date(s) {
                Ok(date) => Some(date),
                Err(e) => {
                    warnings.push(format!("life_expectancy '{s}' is not YYYY-MM-DD: {e}"));
                    None
                }
            },
            Some(other) => {
                warnings.push(format!("life_expectancy must be a string, found {other}"));
                None
            }
            None => {
                warnings.push("life_expectancy missing from config".to_string());
                None
            }
        };
        let debug_logging = value
            .get("debug_logging")
            .and_then(Value::as_bool)
            .unwrap_or(false);
        let log_file = value
            .get("log_file")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let settings = Self {
            life_expectancy,
            debug_logging,
            log_file,
        };
        (settings, warnings)
    }

    /// Countdown target: midnight at the start of the configured date.
    pub fn target(&self) -> Option<NaiveDateTime> {
        self.life_expectancy
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

/// Parse `YYYY-MM-DD` exactly. The date parser tolerates blanks before
/// numbers, so surrounding whitespace is rejected up front.
fn parse_date(s: &str) -> Result<NaiveDate, String> {
    if s.trim() != s {
        return Err("surrounding whitespace".to_string());
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| e.to_string())
}
