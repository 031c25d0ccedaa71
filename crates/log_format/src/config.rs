use core::str::FromStr;

use crate::{ConfigError, ConfigResult, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    CrLf,
    Lf,
}

impl LineEnding {
    pub const fn as_str(self) -> &'static str {
        match self {
            LineEnding::CrLf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

impl FromStr for LineEnding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.eq_ignore_ascii_case("crlf") {
            Ok(LineEnding::CrLf)
        } else if s.eq_ignore_ascii_case("lf") {
            Ok(LineEnding::Lf)
        } else {
            Err(ConfigError::InvalidLineEnding)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub threshold: Severity,
    pub line_ending: LineEnding,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            threshold: Severity::Info,
            line_ending: LineEnding::CrLf,
        }
    }
}

struct OptionalKeyValuePair<'a> {
    key: &'a str,
    value: Option<&'a str>,
}

impl<'a> OptionalKeyValuePair<'a> {
    fn from_line(line: &'a str) -> Self {
        match line.split_once('=') {
            Some((key, value)) => Self {
                key: key.trim(),
                value: Some(value),
            },
            None => Self {
                key: line.trim(),
                value: None,
            },
        }
    }

    fn get<T: FromStr<Err = ConfigError>>(&self) -> ConfigResult<T> {
        self.value.ok_or(ConfigError::MissingValue)?.parse()
    }
}

impl LogConfig {
    /// Parses `key=value` lines, `log_level` and `line_ending` are known,
    /// everything else is skipped.
    pub fn parse(data: &str) -> ConfigResult<Self> {
        let mut config = LogConfig::default();

        let pairs = data
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(OptionalKeyValuePair::from_line);

        for pair in pairs {
            match pair.key {
                "log_level" => config.threshold = pair.get()?,
                "line_ending" => config.line_ending = pair.get()?,
                _ => {}
            }
        }

        Ok(config)
    }
}
