use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Eq, PartialEq, Hash, Clone, Copy)]
pub enum Level {
    Info,
    Trace,
    Warning,
    Debug,
    Error,
    Fatal,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Info,
        Level::Trace,
        Level::Warning,
        Level::Debug,
        Level::Error,
        Level::Fatal,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Trace => "trace",
            Level::Warning => "warning",
            Level::Debug => "debug",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Level::ALL
            .into_iter()
            .find(|level| name.eq_ignore_ascii_case(level.as_str()))
            .or_else(|| name.eq_ignore_ascii_case("warn").then_some(Level::Warning))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

/// Independent on/off gate for every [`Level`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LevelFlags {
    pub info: bool,
    pub trace: bool,
    pub warning: bool,
    pub debug: bool,
    pub error: bool,
    pub fatal: bool,
}

impl LevelFlags {
    pub const NONE: LevelFlags = LevelFlags {
        info: false,
        trace: false,
        warning: false,
        debug: false,
        error: false,
        fatal: false,
    };

    pub const ALL: LevelFlags = LevelFlags {
        info: true,
        trace: true,
        warning: true,
        debug: true,
        error: true,
        fatal: true,
    };

    pub const fn get(&self, level: Level) -> bool {
        match level {
            Level::Info => self.info,
            Level::Trace => self.trace,
            Level::Warning => self.warning,
            Level::Debug => self.debug,
            Level::Error => self.error,
            Level::Fatal => self.fatal,
        }
    }

    pub fn set(&mut self, level: Level, on: bool) {
        let flag = match level {
            Level::Info => &mut self.info,
            Level::Trace => &mut self.trace,
            Level::Warning => &mut self.warning,
            Level::Debug => &mut self.debug,
            Level::Error => &mut self.error,
            Level::Fatal => &mut self.fatal,
        };
        *flag = on;
    }

    #[must_use]
    pub fn with(mut self, level: Level, on: bool) -> Self {
        self.set(level, on);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("INFO".parse::<Level>(), Ok(Level::Info));
        assert_eq!(" Warning ".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("warn".parse::<Level>(), Ok(Level::Warning));
        assert_eq!("fatal".parse::<Level>(), Ok(Level::Fatal));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "verbose".parse::<Level>(),
            Err(ParseLevelError("verbose".to_string()))
        );
    }

    #[test]
    fn flags_toggle_one_level_at_a_time() {
        let flags = LevelFlags::NONE.with(Level::Debug, true);
        for level in Level::ALL {
            assert_eq!(flags.get(level), level == Level::Debug);
        }
        assert_eq!(LevelFlags::default(), LevelFlags::NONE);
    }
}
