use std::fmt;
use std::panic::Location;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::Level;

macro_rules! colored {
    ($code:literal, $label:literal) => {
        concat!("\x1b[", $code, "m", $label, "\x1b[0m")
    };
}

/// Text written in front of every line, one entry per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefixes {
    info: &'static str,
    trace: &'static str,
    warning: &'static str,
    debug: &'static str,
    error: &'static str,
    fatal: &'static str,
}

impl Prefixes {
    pub const PLAIN: Prefixes = Prefixes {
        info: "INFO:",
        trace: "TRACE:",
        warning: "WARNING:",
        debug: "DEBUG:",
        error: "ERROR:",
        fatal: "FATAL:",
    };

    pub const COLORED: Prefixes = Prefixes {
        info: colored!("1;32", "INFO:"),       // green
        trace: colored!("1;35", "TRACE:"),     // magenta
        warning: colored!("1;33", "WARNING:"), // yellow
        debug: colored!("1;34", "DEBUG:"),     // blue
        error: colored!("1;31", "ERROR:"),     // red
        fatal: colored!("1;37;41", "FATAL:"),  // white on red
    };

    pub const fn for_color(color: bool) -> Self {
        if color {
            Self::COLORED
        } else {
            Self::PLAIN
        }
    }

    pub const fn get(&self, level: Level) -> &'static str {
        match level {
            Level::Info => self.info,
            Level::Trace => self.trace,
            Level::Warning => self.warning,
            Level::Debug => self.debug,
            Level::Error => self.error,
            Level::Fatal => self.fatal,
        }
    }
}

/// One rendered log entry:
/// `<prefix>\t<timestamp>\t[<tag> ]<message>[\t<file> line:<line>]`.
pub(crate) struct LogLine<'a> {
    pub(crate) prefix: &'static str,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) tag: Option<&'a str>,
    pub(crate) message: &'a dyn fmt::Display,
    pub(crate) location: Option<&'static Location<'static>>,
}

impl fmt::Display for LogLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t",
            self.prefix,
            self.timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
        )?;
        if let Some(tag) = self.tag {
            write!(f, "{} ", tag)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(location) = self.location {
            write!(f, "\t{} line:{}", location.file(), location.line())?;
        }
        Ok(())
    }
}
