//! Routes `log` records to the browser console.
//!
//! The shared store logs through the `log` facade; in the browser those
//! records end up here and are written with `gloo_console`, errors and
//! warnings through `console.error` / `console.warn` so they stand out in
//! devtools.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}: {}", record.level(), record.target(), record.args());
        match record.level() {
            Level::Error => gloo_console::error!(line),
            Level::Warn => gloo_console::warn!(line),
            _ => gloo_console::log!(line),
        }
    }

    fn flush(&self) {}
}

/// Installs the console logger. Calling it twice keeps the first install.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
