//! Rolling Logger
//!
//! `log` backend that keeps the most recent lines in a circular buffer and
//! echoes every line to the browser console (wasm) or stderr (native).
//!
//! ```ignore
//! rolling_logger::init_logger("RangeTrainer", 500)?;
//! log::info!("ready");
//! let tail = rolling_logger::recent_lines();
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggerError {
    AlreadyInitialized,
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::AlreadyInitialized => write!(f, "logger already initialized"),
        }
    }
}

impl std::error::Error for LoggerError {}

/// Fixed-capacity line buffer; the oldest line is dropped when full
#[derive(Debug)]
pub struct LineBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LineBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    buffer: Mutex<LineBuffer>,
}

impl RollingLogger {
    fn new(app_name: &str, capacity: usize, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            buffer: Mutex::new(LineBuffer::new(capacity)),
        }
    }

    fn write(&self, level: Level, target: &str, message: &str) {
        let line = format_line(&self.app_name, level, target, message);
        emit(level, &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
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
        self.write(record.level(), record.target(), &record.args().to_string());
    }

    fn flush(&self) {}
}

/// `[HH:MM:SS.mmm] LEVEL app target: message`
fn format_line(app_name: &str, level: Level, target: &str, message: &str) -> String {
    format!(
        "[{}] {:<5} {} {}: {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        level,
        app_name,
        target,
        message
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger as the global `log` backend.
///
/// Debug builds log at `Debug`, release builds at `Info`.
pub fn init_logger(app_name: &str, capacity: usize) -> Result<(), LoggerError> {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, capacity, level));
    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(level);
    Ok(())
}

/// Most recent lines, oldest first
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|b| b.lines()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_drops_oldest() {
        let mut buffer = LineBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let mut buffer = LineBuffer::new(0);
        buffer.push("a".into());
        buffer.push("b".into());
        assert_eq!(buffer.lines(), vec!["b"]);
    }

    #[test]
    fn test_format_line() {
        let line = format_line("RangeTrainer", Level::Warn, "range_core", "skipped");
        assert!(line.starts_with('['));
        assert!(line.ends_with("WARN  RangeTrainer range_core: skipped"));
    }

    #[test]
    fn test_global_logger_records_lines() {
        // the global logger can only be installed once per process
        init_logger("Test", 10).unwrap();
        assert_eq!(init_logger("Test", 10), Err(LoggerError::AlreadyInitialized));

        log::info!("hello from log");
        log::trace!("below the level filter");
        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.ends_with("hello from log")));
        assert!(!lines.iter().any(|l| l.ends_with("below the level filter")));
    }
}
