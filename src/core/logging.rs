//! Console logger - routes `log` records to the browser console

use wasm_bindgen::JsValue;
use web_sys::console;

pub struct ConsoleLog;

static LOGGER: ConsoleLog = ConsoleLog;

impl log::Log for ConsoleLog {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = format!("[{}] {}", record.target(), record.args());
        let msg = JsValue::from_str(&msg);
        match record.level() {
            log::Level::Error => console::error_1(&msg),
            log::Level::Warn => console::warn_1(&msg),
            log::Level::Info => console::info_1(&msg),
            log::Level::Debug => console::debug_1(&msg),
            log::Level::Trace => console::log_1(&msg),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: log::LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
