#![cfg_attr(not(test), no_std)]

/// Request codes, passed in `a7` (legacy SBI extension IDs).
pub mod nr {
    pub const CONSOLE_PUTCHAR: usize = 1; // putchar(a0 = ch)
    pub const SHUTDOWN: usize = 8; // shutdown() -> !
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SysErr {
    /// `puts` needs at least three characters.
    ShortString { len: usize },
}

pub type SysResult<T> = core::result::Result<T, SysErr>;

#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    pub const fn from_u8(v: u8) -> Self {
        match v {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            _ => LogLevel::Error,
        }
    }

    /// Fixed-width line prefix.
    pub const fn tag(self) -> &'static str {
        match self {
            LogLevel::Trace => "[TRACE] ",
            LogLevel::Debug => "[DEBUG] ",
            LogLevel::Info => "[INFO]  ",
            LogLevel::Warn => "[WARN]  ",
            LogLevel::Error => "[ERROR] ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_codes() {
        assert_eq!(nr::CONSOLE_PUTCHAR, 1);
        assert_eq!(nr::SHUTDOWN, 8);
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn test_log_level_from_u8() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ] {
            assert_eq!(LogLevel::from_u8(level as u8), level);
        }
        assert_eq!(LogLevel::from_u8(200), LogLevel::Error);
    }

    #[test]
    fn test_tags_same_width() {
        let width = LogLevel::Trace.tag().len();
        assert_eq!(LogLevel::Info.tag().len(), width);
        assert_eq!(LogLevel::Warn.tag().len(), width);
        assert_eq!(LogLevel::Error.tag(), "[ERROR] ");
    }
}
