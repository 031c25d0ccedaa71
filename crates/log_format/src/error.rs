use core::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingValue,
    InvalidLevel,
    InvalidLineEnding,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ConfigError::MissingValue => "option requires a value",
            ConfigError::InvalidLevel => "unknown log level",
            ConfigError::InvalidLineEnding => "unknown line ending",
        };

        f.write_str(msg)
    }
}
