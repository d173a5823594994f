use std::io::IsTerminal;

use thiserror::Error;

use crate::{Level, LevelFlags, LogWriterState, ParseLevelError};

pub const ENV_ENABLED: &str = "LW_ENABLED";
pub const ENV_LOCATION: &str = "LW_LOCATION";
pub const ENV_COLOR: &str = "LW_COLOR";
pub const ENV_LEVELS: &str = "LW_LEVELS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid boolean {value:?} for {key}")]
    InvalidBool { key: &'static str, value: String },
    #[error(transparent)]
    InvalidLevel(#[from] ParseLevelError),
}

impl LogWriterState {
    /// Reads `LW_ENABLED`, `LW_LOCATION`, `LW_COLOR` and `LW_LEVELS` from the
    /// process environment. Unset keys keep their zero value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut state = LogWriterState::DISABLED;

        if let Some(value) = lookup(ENV_ENABLED) {
            state.enabled = parse_bool(ENV_ENABLED, &value)?;
        }
        if let Some(value) = lookup(ENV_LOCATION) {
            state.location_enabled = parse_bool(ENV_LOCATION, &value)?;
        }
        if let Some(value) = lookup(ENV_COLOR) {
            state.color_enabled = if value.trim().eq_ignore_ascii_case("auto") {
                std::io::stdout().is_terminal()
            } else {
                parse_bool(ENV_COLOR, &value)?
            };
        }
        if let Some(value) = lookup(ENV_LEVELS) {
            state.levels = parse_levels(&value)?;
        }

        Ok(state)
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

fn parse_levels(value: &str) -> Result<LevelFlags, ConfigError> {
    let mut levels = LevelFlags::NONE;
    for name in value.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        if name.eq_ignore_ascii_case("all") {
            levels = LevelFlags::ALL;
        } else if name.eq_ignore_ascii_case("none") {
            levels = LevelFlags::NONE;
        } else {
            levels.set(name.parse::<Level>()?, true);
        }
    }
    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::IsTerminal;

    fn state_from(pairs: &[(&str, &str)]) -> Result<LogWriterState, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        LogWriterState::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_is_zero_state() {
        assert_eq!(state_from(&[]), Ok(LogWriterState::default()));
    }

    #[test]
    fn reads_flags_and_levels() {
        let state = state_from(&[
            (ENV_ENABLED, "true"),
            (ENV_LOCATION, "1"),
            (ENV_COLOR, "off"),
            (ENV_LEVELS, "info, Warning,,debug"),
        ])
        .unwrap();

        assert!(state.enabled);
        assert!(state.location_enabled);
        assert!(!state.color_enabled);
        assert_eq!(
            state.levels,
            LevelFlags::NONE
                .with(Level::Info, true)
                .with(Level::Warning, true)
                .with(Level::Debug, true)
        );
    }

    #[test]
    fn all_enables_every_level() {
        let state = state_from(&[(ENV_LEVELS, "all")]).unwrap();
        assert_eq!(state.levels, LevelFlags::ALL);
        assert!(!state.enabled);
    }

    #[test]
    fn auto_color_follows_stdout_terminal() {
        let state = state_from(&[(ENV_COLOR, "Auto")]).unwrap();
        assert_eq!(state.color_enabled, std::io::stdout().is_terminal());
    }

    #[test]
    fn rejects_bad_boolean() {
        assert_eq!(
            state_from(&[(ENV_ENABLED, "maybe")]),
            Err(ConfigError::InvalidBool {
                key: ENV_ENABLED,
                value: "maybe".to_string(),
            })
        );
    }

    #[test]
    fn rejects_unknown_level() {
        let err = state_from(&[(ENV_LEVELS, "info,loud")]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidLevel(ParseLevelError("loud".to_string())));
        assert_eq!(err.to_string(), "unknown log level: \"loud\"");
    }
}
