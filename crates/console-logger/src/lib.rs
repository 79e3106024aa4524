//! Console Logger
//!
//! `log` backend for the browser. Records go to the matching `console.*`
//! method and the most recent lines are kept in a circular buffer.

use std::collections::VecDeque;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of formatted lines retained in memory
pub const HISTORY_CAPACITY: usize = 200;

static LOGGER: ConsoleLogger = ConsoleLogger::new();

/// Console-backed logger with a bounded line history
pub struct ConsoleLogger {
    history: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub const fn new() -> Self {
        Self {
            history: Mutex::new(VecDeque::new()),
        }
    }

    fn push(&self, line: String) {
        if let Ok(mut history) = self.history.lock() {
            if history.len() == HISTORY_CAPACITY {
                history.pop_front();
            }
            history.push_back(line);
        }
    }

    /// Retained lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        self.history
            .lock()
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        write_console(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines retained by the global logger, oldest first
pub fn recent() -> Vec<String> {
    LOGGER.recent()
}

fn format_record(record: &Record) -> String {
    format!("[{} {}] {}", record.level(), record.target(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

// Host builds (tests) have no console object.
#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("menu")
                .args(format_args!("{}", message))
                .build(),
        );
    }

    #[test]
    fn test_formats_level_and_target() {
        log::set_max_level(LevelFilter::Trace);
        let logger = ConsoleLogger::new();

        emit(&logger, Level::Error, "Failed to fetch items");

        assert_eq!(logger.recent(), vec!["[ERROR menu] Failed to fetch items".to_string()]);
    }

    #[test]
    fn test_history_drops_oldest_when_full() {
        log::set_max_level(LevelFilter::Trace);
        let logger = ConsoleLogger::new();

        for i in 0..HISTORY_CAPACITY + 3 {
            emit(&logger, Level::Info, &format!("line {}", i));
        }

        let recent = logger.recent();
        assert_eq!(recent.len(), HISTORY_CAPACITY);
        assert_eq!(recent[0], "[INFO menu] line 3");
        assert_eq!(recent[HISTORY_CAPACITY - 1], format!("[INFO menu] line {}", HISTORY_CAPACITY + 2));
    }

    #[test]
    fn test_init_only_once() {
        assert!(init(LevelFilter::Debug).is_ok());
        assert!(init(LevelFilter::Debug).is_err());

        log::info!(target: "menu", "ready");
        assert!(recent().iter().any(|line| line == "[INFO menu] ready"));
    }
}
