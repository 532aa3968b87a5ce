//! Logging that works on both renderers.
//!
//! The browser build writes to `console`, native builds go through `tracing`
//! (the subscriber is installed in `main`). Use the `log_*!` macros rather
//! than calling [`write`] directly.

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

/// Send `msg` to the browser console method matching `level`.
#[cfg(target_arch = "wasm32")]
pub fn write(level: Level, msg: &str) {
    let value = wasm_bindgen::JsValue::from_str(msg);
    match level {
        Level::Debug => web_sys::console::debug_1(&value),
        Level::Info => web_sys::console::log_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Error => web_sys::console::error_1(&value),
    }
}

/// Emit `msg` as a `tracing` event at `level`.
#[cfg(not(target_arch = "wasm32"))]
pub fn write(level: Level, msg: &str) {
    match level {
        Level::Debug => tracing::debug!("{}", msg),
        Level::Info => tracing::info!("{}", msg),
        Level::Warn => tracing::warn!("{}", msg),
        Level::Error => tracing::error!("{}", msg),
    }
}

/// Log an info message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::write($crate::logging::Level::Info, &format!($($arg)*))
    };
}

/// Log an error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::write($crate::logging::Level::Error, &format!($($arg)*))
    };
}

/// Log a warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::write($crate::logging::Level::Warn, &format!($($arg)*))
    };
}

/// Log a debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::write($crate::logging::Level::Debug, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_format_and_dispatch_every_level() {
        let user = "alice";
        crate::log_debug!("debug {user}");
        crate::log_info!("info {}", 1);
        crate::log_warn!("warn");
        crate::log_error!("error {user}: {}", "boom");
    }
}
