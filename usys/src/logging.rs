//! Leveled logging onto the environment's console.
//!
//! There is a single output stream, so log lines share it with program
//! output. The default threshold is `Info`; anything the program logs below
//! that stays silent unless the threshold is lowered.
//!
//! Log levels, finest first:
//! - TRACE: Fine-grained debugging information
//! - DEBUG: Debugging information
//! - INFO: Informational messages
//! - WARN: Warning messages
//! - ERROR: Error messages

use core::sync::atomic::{AtomicU8, Ordering};
use uapi::LogLevel;

/// Global log level filter. Messages below this level are suppressed.
static LOG_LEVEL: AtomicU8 = AtomicU8::new(LogLevel::Info as u8);

/// Get the current log level threshold.
pub fn log_level() -> LogLevel {
    LogLevel::from_u8(LOG_LEVEL.load(Ordering::Relaxed))
}

/// Set the log level threshold.
pub fn set_log_level(level: LogLevel) {
    LOG_LEVEL.store(level as u8, Ordering::Relaxed);
}

#[inline]
pub fn should_log(level: LogLevel) -> bool {
    level as u8 >= LOG_LEVEL.load(Ordering::Relaxed)
}

/// Write `<tag><message>\n` to `$env` if `$level` passes the filter.
#[macro_export]
macro_rules! ulog {
    ($env:expr, $level:expr, $($arg:tt)*) => {{
        let level: $crate::LogLevel = $level;
        if $crate::logging::should_log(level) {
            use core::fmt::Write as _;
            let mut w = $crate::Writer(&mut *$env);
            let _ = w.write_str(level.tag());
            let _ = ::core::write!(w, $($arg)*);
            let _ = w.write_str("\n");
        }
    }};
}

#[macro_export]
macro_rules! utrace {
    ($env:expr, $($arg:tt)*) => {
        $crate::ulog!($env, $crate::LogLevel::Trace, $($arg)*)
    };
}

#[macro_export]
macro_rules! udebug {
    ($env:expr, $($arg:tt)*) => {
        $crate::ulog!($env, $crate::LogLevel::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! uinfo {
    ($env:expr, $($arg:tt)*) => {
        $crate::ulog!($env, $crate::LogLevel::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! uwarn {
    ($env:expr, $($arg:tt)*) => {
        $crate::ulog!($env, $crate::LogLevel::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! uerror {
    ($env:expr, $($arg:tt)*) => {
        $crate::ulog!($env, $crate::LogLevel::Error, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Capture;

    // One test owns the global threshold so parallel tests can't race on it.
    #[test]
    fn test_threshold_filters_lines() {
        assert_eq!(log_level(), LogLevel::Info);
        assert!(!should_log(LogLevel::Debug));
        assert!(should_log(LogLevel::Error));

        let mut env = Capture::<128>::new();
        let env = &mut env;
        udebug!(env, "hidden {}", 1);
        utrace!(env, "hidden too");
        assert!(env.output().is_empty());

        uinfo!(env, "boot {}", 7);
        assert_eq!(env.output(), b"[INFO]  boot 7\n");

        env.clear();
        set_log_level(LogLevel::Trace);
        utrace!(env, "t");
        uerror!(env, "e");
        assert_eq!(env.output(), b"[TRACE] t\n[ERROR] e\n");

        env.clear();
        set_log_level(LogLevel::Error);
        uwarn!(env, "quiet");
        assert!(env.output().is_empty());

        set_log_level(LogLevel::Info);
        assert_eq!(log_level(), LogLevel::Info);
    }
}
