//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily file
//! named `touchgrass_<date>.log` in the configured log directory (default:
//! `~/.local/share/touchgrass/logs/`). With logging disabled no subscriber is
//! installed and every event is dropped.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Returns the log file path when enabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level {:?}", config.level))?;

    let log_dir = expand_home(&config.log_dir);
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let path = log_dir.join(log_file_name(chrono::Local::now().date_naive()));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}

fn log_file_name(date: NaiveDate) -> String {
    format!("touchgrass_{}.log", date.format("%Y-%m-%d"))
}

// Expand ~ in log_dir
fn expand_home(dir: &str) -> PathBuf {
    if let Some(rest) = dir.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_is_named_by_day() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(log_file_name(date), "touchgrass_2026-03-07.log");
    }

    #[test]
    fn test_expand_home_only_touches_tilde_prefix() {
        assert_eq!(expand_home("/var/log/tg"), PathBuf::from("/var/log/tg"));
        assert_eq!(expand_home("logs"), PathBuf::from("logs"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let config = LoggingConfig::default();
        assert_eq!(init(&config).unwrap(), None);
    }

    #[test]
    fn test_bad_level_is_rejected_before_touching_disk() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        let config = LoggingConfig {
            enabled: true,
            log_dir: log_dir.display().to_string(),
            level: "touchgrass=loud".into(),
        };
        assert!(init(&config).is_err());
        assert!(!log_dir.exists());
    }
}
