use core::fmt;
use core::str::FromStr;

use crate::ConfigError;

pub const UNKNOWN_LEVEL: &str = "???";

/// Importance of a log line, ordered from least to most verbose.
///
/// The same type tags a line and acts as the threshold: a line is printed
/// when its severity is less than or equal to the threshold.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Off = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    Debug = 4,
}

const NAMES: [&str; 5] = ["OFF", "ERROR", "WARNING", "INFO", "DEBUG"];

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Off,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
    ];

    pub const fn from_raw(raw: u8) -> Option<Severity> {
        match raw {
            0 => Some(Severity::Off),
            1 => Some(Severity::Error),
            2 => Some(Severity::Warning),
            3 => Some(Severity::Info),
            4 => Some(Severity::Debug),
            _ => None,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    pub const fn label(raw: u8) -> &'static str {
        match Severity::from_raw(raw) {
            Some(severity) => severity.name(),
            None => UNKNOWN_LEVEL,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Severity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(raw) = s.parse::<u8>() {
            return Severity::from_raw(raw).ok_or(ConfigError::InvalidLevel);
        }

        if s.eq_ignore_ascii_case("warn") {
            return Ok(Severity::Warning);
        }

        Severity::ALL
            .into_iter()
            .find(|severity| severity.name().eq_ignore_ascii_case(s))
            .ok_or(ConfigError::InvalidLevel)
    }
}
