use core::fmt;

use crate::write_zero_padded;

const MS_PER_SECOND: u32 = 1_000;
const MS_PER_MINUTE: u32 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u32 = 60 * MS_PER_MINUTE;

/// Elapsed time since boot split into the fields of a log line.
///
/// Displays as `HHHH:MM:SS.mmmm`. The hour field is not clamped and grows
/// past four digits on long uptimes, and the millisecond field is padded to
/// four digits even though it never exceeds 999. Log parsers rely on both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
}

impl Timestamp {
    pub const fn from_millis(elapsed_ms: u32) -> Self {
        Self {
            hours: elapsed_ms / MS_PER_HOUR,
            minutes: (elapsed_ms / MS_PER_MINUTE) % 60,
            seconds: (elapsed_ms / MS_PER_SECOND) % 60,
            millis: elapsed_ms % MS_PER_SECOND,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_zero_padded(f, self.hours, 4)?;
        f.write_str(":")?;
        write_zero_padded(f, self.minutes, 2)?;
        f.write_str(":")?;
        write_zero_padded(f, self.seconds, 2)?;
        f.write_str(".")?;
        write_zero_padded(f, self.millis, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::ToString;

    #[test]
    fn boot_instant() {
        assert_eq!(Timestamp::from_millis(0).to_string(), "0000:00:00.0000");
    }

    #[test]
    fn one_hour_one_minute_one_second() {
        let ts = Timestamp::from_millis(3_661_234);
        assert_eq!(
            ts,
            Timestamp {
                hours: 1,
                minutes: 1,
                seconds: 1,
                millis: 234
            }
        );
        assert_eq!(ts.to_string(), "0001:01:01.0234");
    }

    #[test]
    fn field_rollover() {
        assert_eq!(Timestamp::from_millis(59_999).to_string(), "0000:00:59.0999");
        assert_eq!(Timestamp::from_millis(60_000).to_string(), "0000:01:00.0000");
        assert_eq!(Timestamp::from_millis(3_599_999).to_string(), "0000:59:59.0999");
    }

    #[test]
    fn largest_uptime() {
        assert_eq!(Timestamp::from_millis(u32::MAX).to_string(), "1193:02:47.0295");
    }

    #[test]
    fn hours_are_not_clamped() {
        let ts = Timestamp {
            hours: 12_345,
            minutes: 6,
            seconds: 7,
            millis: 8,
        };
        assert_eq!(ts.to_string(), "12345:06:07.0008");
    }
}
