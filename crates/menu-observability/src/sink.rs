//! Log sinks and the clock used for elapsed times.

use std::cell::RefCell;
use std::rc::Rc;

use crate::logging::LogLevel;

/// Destination for formatted log lines.
pub trait LogSink {
    /// Write one formatted entry.
    fn write(&self, level: LogLevel, line: &str);
}

/// Writes to the browser console on wasm32 and to stderr elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    #[cfg(target_arch = "wasm32")]
    fn write(&self, level: LogLevel, line: &str) {
        let line = wasm_bindgen::JsValue::from_str(line);
        match level {
            LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&line),
            LogLevel::Info => web_sys::console::info_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            LogLevel::Error => web_sys::console::error_1(&line),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(&self, _level: LogLevel, line: &str) {
        eprintln!("{}", line);
    }
}

/// Collects lines in memory. Used by tests to assert on log output.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl LogSink for MemorySink {
    fn write(&self, _level: LogLevel, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

/// Wall clock in milliseconds.
///
/// `std::time::Instant` is unavailable on wasm32-unknown-unknown, so the
/// browser clock is used there.
#[cfg(target_arch = "wasm32")]
pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}
