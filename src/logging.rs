//! Console Logging
//!
//! Routes the `log` macros to the browser console through `wasm-logger`.

use log::{Level, LevelFilter};

/// Console level for a configured filter; `None` keeps logging off
fn console_level(filter: LevelFilter) -> Option<Level> {
    filter.to_level()
}

/// Install the console logger
pub fn init(filter: LevelFilter) {
    match console_level(filter) {
        Some(level) => wasm_logger::init(wasm_logger::Config::new(level)),
        None => log::set_max_level(LevelFilter::Off),
    }
}
