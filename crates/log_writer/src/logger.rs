use std::fmt;
use std::io::{self, Write};
use std::panic::Location;
use std::process;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;

use crate::msg_fmt::{LogLine, Prefixes};
use crate::targets::{ConsoleLogTarget, LogTarget, SharedTarget};
use crate::{Level, LevelFlags};

/// Point-in-time copy of a [`LogWriter`]'s flags.
///
/// The default value is the zero state: everything disabled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogWriterState {
    pub enabled: bool,
    pub location_enabled: bool,
    pub color_enabled: bool,
    pub levels: LevelFlags,
}

impl LogWriterState {
    pub const DISABLED: LogWriterState = LogWriterState {
        enabled: false,
        location_enabled: false,
        color_enabled: false,
        levels: LevelFlags::NONE,
    };

    /// Whether a message at `level` passes both the master switch and the
    /// level gate. `Fatal` is not gated by this.
    pub const fn emits(&self, level: Level) -> bool {
        self.enabled && self.levels.get(level)
    }
}

#[derive(Clone, Default)]
enum OutputTarget {
    #[default]
    Console,
    Custom(SharedTarget),
}

impl OutputTarget {
    fn from_option(target: Option<SharedTarget>) -> Self {
        target.map_or(OutputTarget::Console, OutputTarget::Custom)
    }

    fn write_line(&self, line: &str) {
        let result = match self {
            OutputTarget::Console => ConsoleLogTarget.log(line),
            OutputTarget::Custom(target) => target.log(line),
        };
        if let Err(err) = result {
            let _ = writeln!(io::stderr(), "log_writer: failed to write log line: {}", err);
        }
    }
}

struct Settings {
    state: LogWriterState,
    prefixes: Prefixes,
    target: OutputTarget,
}

impl Settings {
    const fn zero() -> Self {
        Settings {
            state: LogWriterState::DISABLED,
            prefixes: Prefixes::PLAIN,
            target: OutputTarget::Console,
        }
    }

    fn apply(&mut self, state: LogWriterState, target: Option<SharedTarget>) {
        self.state = state;
        self.prefixes = Prefixes::for_color(state.color_enabled);
        self.target = OutputTarget::from_option(target);
    }

    fn set_color(&mut self, on: bool) {
        self.state.color_enabled = on;
        self.prefixes = Prefixes::for_color(on);
    }
}

/// Leveled line writer.
///
/// The flags, the cached level prefixes and the output target live in one
/// record behind a single mutex. Configuration calls and emission calls both
/// take that lock, so an emission always sees a consistent combination of
/// color flag and prefix. The lock is released before the line is written.
pub struct LogWriter {
    settings: Mutex<Settings>,
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let settings = self.settings();
        f.debug_struct("LogWriter")
            .field("state", &settings.state)
            .field(
                "target",
                &match settings.target {
                    OutputTarget::Console => "console",
                    OutputTarget::Custom(_) => "custom",
                },
            )
            .finish()
    }
}

impl LogWriter {
    /// A writer in the zero state, writing to standard output once enabled.
    pub const fn new() -> Self {
        LogWriter {
            settings: Mutex::new(Settings::zero()),
        }
    }

    pub fn with_settings(state: LogWriterState, target: Option<SharedTarget>) -> Self {
        let writer = Self::new();
        writer.init_with_settings(state, target);
        writer
    }

    fn settings(&self) -> MutexGuard<'_, Settings> {
        self.settings.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Turns the master switch on. Nothing is written until at least one
    /// level is enabled too. `None` selects standard output.
    pub fn enable(&self, with_location: bool, with_color: bool, target: Option<SharedTarget>) {
        let mut settings = self.settings();
        settings.state.enabled = true;
        settings.state.location_enabled = with_location;
        settings.set_color(with_color);
        settings.target = OutputTarget::from_option(target);
    }

    /// Replaces every flag in one step, e.g. to restore a state captured by
    /// [`LogWriter::get_state`].
    pub fn init_with_settings(&self, state: LogWriterState, target: Option<SharedTarget>) {
        self.settings().apply(state, target);
    }

    /// Silences the writer but keeps level gates, flags and target.
    pub fn disable(&self) {
        self.settings().state.enabled = false;
    }

    /// Back to the zero state with standard output as target.
    pub fn disable_and_reset(&self) {
        self.settings().apply(LogWriterState::DISABLED, None);
    }

    /// Replaces the output target; `None` selects standard output.
    pub fn set_output_target(&self, target: Option<SharedTarget>) {
        self.settings().target = OutputTarget::from_option(target);
    }

    pub fn set_level_enabled(&self, level: Level, on: bool) {
        self.settings().state.levels.set(level, on);
    }

    pub fn set_color_enabled(&self, on: bool) {
        self.settings().set_color(on);
    }

    /// Snapshot of the current flags. Other threads may change the writer
    /// as soon as this returns.
    pub fn get_state(&self) -> LogWriterState {
        self.settings().state
    }

    /// True when lines go to standard output rather than a caller target.
    pub fn has_default_target(&self) -> bool {
        matches!(self.settings().target, OutputTarget::Console)
    }

    /// Writes `args` and a newline to standard output, whatever the state.
    pub fn console(&self, args: fmt::Arguments<'_>) {
        OutputTarget::Console.write_line(&args.to_string());
    }

    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Info, None, &args, Location::caller());
    }

    #[track_caller]
    pub fn trace(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Trace, None, &args, Location::caller());
    }

    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Warning, None, &args, Location::caller());
    }

    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.emit(Level::Debug, None, &args, Location::caller());
    }

    #[track_caller]
    pub fn error(&self, err: impl fmt::Display) {
        self.emit(Level::Error, None, &err, Location::caller());
    }

    /// Like [`LogWriter::error`] with `prefix` written ahead of the message.
    #[track_caller]
    pub fn error_with_prefix(&self, prefix: &str, err: impl fmt::Display) {
        self.emit(Level::Error, Some(prefix), &err, Location::caller());
    }

    /// Writes `err` regardless of any gate, then exits the process with
    /// status 1. No destructors or deferred flushes run.
    #[track_caller]
    pub fn fatal(&self, err: impl fmt::Display) -> ! {
        self.emit_fatal(&err, Location::caller());
        process::exit(1)
    }

    fn emit(
        &self,
        level: Level,
        tag: Option<&str>,
        message: &dyn fmt::Display,
        caller: &'static Location<'static>,
    ) {
        let (prefix, location, target) = {
            let settings = self.settings();
            if !settings.state.emits(level) {
                return;
            }
            (
                settings.prefixes.get(level),
                settings.state.location_enabled.then_some(caller),
                settings.target.clone(),
            )
        };
        let line = LogLine {
            prefix,
            timestamp: Utc::now(),
            tag,
            message,
            location,
        };
        target.write_line(&line.to_string());
    }

    fn emit_fatal(&self, message: &dyn fmt::Display, caller: &'static Location<'static>) {
        let (prefix, target) = {
            let settings = self.settings();
            (settings.prefixes.get(Level::Fatal), settings.target.clone())
        };
        let line = LogLine {
            prefix,
            timestamp: Utc::now(),
            tag: None,
            message,
            location: Some(caller),
        };
        target.write_line(&line.to_string());
    }
}
