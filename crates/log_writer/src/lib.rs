//! Leveled line logging with a toggleable, thread-safe configuration.
//!
//! [`LogWriter`] holds the configuration; the free functions and macros in
//! this crate delegate to one process-wide instance returned by [`global`].
//! Lines have the form
//! `<prefix>\t<RFC 3339 nanosecond UTC timestamp>\t<message>[\t<file> line:<n>]`.
//!
//! ```no_run
//! log_writer::enable(false, false, None);
//! log_writer::info_enable(true);
//! log_writer::info!("x={}", 5);
//! ```

mod config;
mod level;
mod logger;
mod logger_macro;
mod msg_fmt;
pub mod targets;

pub use config::{ConfigError, ENV_COLOR, ENV_ENABLED, ENV_LEVELS, ENV_LOCATION};
pub use level::{Level, LevelFlags, ParseLevelError};
pub use logger::{LogWriter, LogWriterState};
pub use msg_fmt::Prefixes;
pub use targets::{ConsoleLogTarget, FileLogTarget, LogTarget, SharedTarget, WriterLogTarget};

use std::fmt;

static LOGGER: LogWriter = LogWriter::new();

/// The process-wide writer behind the free functions and macros.
pub fn global() -> &'static LogWriter {
    &LOGGER
}

pub fn enable(with_location: bool, with_color: bool, target: Option<SharedTarget>) {
    LOGGER.enable(with_location, with_color, target);
}

pub fn init_with_settings(state: LogWriterState, target: Option<SharedTarget>) {
    LOGGER.init_with_settings(state, target);
}

/// Applies [`LogWriterState::from_env`] to the global writer, writing to
/// standard output. The writer is left untouched when parsing fails.
pub fn init_from_env() -> Result<(), ConfigError> {
    let state = LogWriterState::from_env()?;
    LOGGER.init_with_settings(state, None);
    Ok(())
}

pub fn disable() {
    LOGGER.disable();
}

pub fn disable_and_reset() {
    LOGGER.disable_and_reset();
}

pub fn set_output_target(target: Option<SharedTarget>) {
    LOGGER.set_output_target(target);
}

pub fn get_state() -> LogWriterState {
    LOGGER.get_state()
}

pub fn set_level_enabled(level: Level, on: bool) {
    LOGGER.set_level_enabled(level, on);
}

pub fn info_enable(on: bool) {
    LOGGER.set_level_enabled(Level::Info, on);
}

pub fn trace_enable(on: bool) {
    LOGGER.set_level_enabled(Level::Trace, on);
}

pub fn warning_enable(on: bool) {
    LOGGER.set_level_enabled(Level::Warning, on);
}

pub fn debug_enable(on: bool) {
    LOGGER.set_level_enabled(Level::Debug, on);
}

pub fn error_enable(on: bool) {
    LOGGER.set_level_enabled(Level::Error, on);
}

pub fn fatal_enable(on: bool) {
    LOGGER.set_level_enabled(Level::Fatal, on);
}

pub fn set_color_enabled(on: bool) {
    LOGGER.set_color_enabled(on);
}

pub fn console(args: fmt::Arguments<'_>) {
    LOGGER.console(args);
}

#[track_caller]
pub fn info(args: fmt::Arguments<'_>) {
    LOGGER.info(args);
}

#[track_caller]
pub fn trace(args: fmt::Arguments<'_>) {
    LOGGER.trace(args);
}

#[track_caller]
pub fn warning(args: fmt::Arguments<'_>) {
    LOGGER.warning(args);
}

#[track_caller]
pub fn debug(args: fmt::Arguments<'_>) {
    LOGGER.debug(args);
}

#[track_caller]
pub fn error(err: impl fmt::Display) {
    LOGGER.error(err);
}

#[track_caller]
pub fn error_with_prefix(prefix: &str, err: impl fmt::Display) {
    LOGGER.error_with_prefix(prefix, err);
}

#[track_caller]
pub fn fatal(err: impl fmt::Display) -> ! {
    LOGGER.fatal(err)
}
