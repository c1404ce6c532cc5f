use thiserror::Error;

/// Runtime configuration for a [`WinbindProvider`](super::WinbindProvider),
/// fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// The engine gate. When disabled the provider declines every operation
    /// without touching the backend. Disabled is also the default, so a
    /// server that never mentions the directive keeps winbind out of the
    /// running entirely.
    pub engine: bool,
}

impl Config {
    /// Parses the argument of a `WinbindEngine` directive.
    ///
    /// The accepted vocabulary is `on`/`off`, `yes`/`no`, `true`/`false` and
    /// `1`/`0`, case-insensitive. Anything else is a configuration error and
    /// the server should refuse to start.
    pub fn from_directive(value: &str) -> Result<Config, ConfigError> {
        Ok(Config {
            engine: parse_boolean(value)?,
        })
    }

    /// A configuration with the engine gate open.
    pub fn enabled() -> Config {
        Config { engine: true }
    }
}

fn parse_boolean(value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" | "1" => Ok(true),
        "off" | "no" | "false" | "0" => Ok(false),
        _ => Err(ConfigError {
            value: value.to_string(),
        }),
    }
}

/// A `WinbindEngine` directive that does not parse. Fatal at startup: a
/// server must refuse to boot on it rather than fall back to a default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("WinbindEngine: expected boolean argument, got {value:?}")]
pub struct ConfigError {
    /// The offending directive argument.
    pub value: String,
}
