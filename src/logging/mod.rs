//! Session activity logging to disk.
//!
//! When enabled, appends navigation transitions and screen events to daily
//! log files named `activity_<date>.log` in the configured log directory
//! (default: `~/.local/share/recibo/logs/`).

use crate::config::model::LoggingConfig;
use anyhow::Result;
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Route `tracing` diagnostics to a file so they never bleed into the
/// terminal UI. No-op when logging is disabled.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }
    let log_dir = expand_log_dir(&config.log_dir);
    fs::create_dir_all(&log_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("recibo.log"))?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Expand a leading `~` to the user's home directory.
fn expand_log_dir(log_dir: &str) -> PathBuf {
    if log_dir.starts_with('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(&log_dir[2..]);
        }
    }
    PathBuf::from(log_dir)
}

/// Appends activity lines to daily log files.
///
/// File handles are cached for the lifetime of the logger to avoid repeated
/// opens. Falls back to `/dev/null` if a log file cannot be created.
pub struct ActivityLogger {
    enabled: bool,
    log_dir: String,
    file_handles: HashMap<String, fs::File>,
}

impl ActivityLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: config.log_dir.clone(),
            file_handles: HashMap::new(),
        }
    }

    /// Record a completed screen transition.
    pub fn log_navigation(&mut self, from: &str, to: &str) {
        self.log_line(&format!("navigate {} -> {}", from, to));
    }

    /// Record a screen-level event (item added, code captured, etc.).
    pub fn log_event(&mut self, screen: &str, event: &str) {
        self.log_line(&format!("{}: {}", screen, event));
    }

    fn log_line(&mut self, text: &str) {
        if !self.enabled {
            return;
        }

        let now = chrono::Local::now();
        let line = format!("[{}] {}", now.format("%H:%M:%S"), text);
        let filename = format!("activity_{}.log", now.format("%Y-%m-%d"));

        let log_dir = expand_log_dir(&self.log_dir);
        let filepath = log_dir.join(&filename);

        let handle = self.file_handles.entry(filename).or_insert_with(|| {
            let _ = fs::create_dir_all(&log_dir);
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&filepath)
                .unwrap_or_else(|_| {
                    // Fallback: a file that goes nowhere
                    OpenOptions::new()
                        .write(true)
                        .open(if cfg!(unix) { "/dev/null" } else { "NUL" })
                        .unwrap()
                })
        });

        let _ = writeln!(handle, "{}", line);
    }
}
