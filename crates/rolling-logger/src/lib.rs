//! Rolling Logger
//!
//! A `log` backend that keeps the newest records in a circular buffer and
//! forwards every line to the browser console (stderr outside wasm32).

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger with a bounded in-memory history
pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    lines: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(app_name: impl Into<String>, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.into(),
            level,
            capacity: capacity.max(1),
            lines: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of the retained lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "[{}] {} {} {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            self.app_name,
            record.level(),
            record.target(),
            record.args()
        )
    }

    fn push(&self, line: String) {
        let mut lines = match self.lines.lock() {
            Ok(lines) => lines,
            Err(poisoned) => poisoned.into_inner(),
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install a global rolling logger.
///
/// Returns the installed instance so callers can read back [`RollingLogger::recent`].
pub fn init_logger(
    app_name: &str,
    level: LevelFilter,
    capacity: usize,
) -> Result<&'static RollingLogger, SetLoggerError> {
    let logger: &'static RollingLogger =
        Box::leak(Box::new(RollingLogger::new(app_name, level, capacity)));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}
