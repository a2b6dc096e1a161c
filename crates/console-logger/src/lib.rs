//! Console Logger
//!
//! `log` backend for WASM frontends. Each record goes to the browser console
//! method matching its level, prefixed with local time and the crate that
//! emitted it.

use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;
use web_sys::console;

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger as the global `log` backend
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let time = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = JsValue::from_str(&format_line(&time, record.level(), record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// `12:00:00.000 WARN  [crate] message`
pub fn format_line(time: &str, level: Level, target: &str, args: &fmt::Arguments) -> String {
    let source = target.split("::").next().unwrap_or(target);
    format!("{} {:<5} [{}] {}", time, level, source, args)
}
