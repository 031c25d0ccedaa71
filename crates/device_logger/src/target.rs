use core::fmt::{self, Write};

use arrayvec::ArrayString;

pub const BOOT_LOG_BUFFER_SIZE: usize = 2 * 1024;

/// Log text collected before any console is attached.
///
/// The first write that does not fit drops the unfinished line it belongs
/// to, and everything after it, so the text always ends on a line boundary.
#[derive(Default)]
pub struct BootLog {
    text: ArrayString<BOOT_LOG_BUFFER_SIZE>,
    overflowed: bool,
}

impl BootLog {
    pub const fn new() -> Self {
        Self {
            text: ArrayString::new_const(),
            overflowed: false,
        }
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub fn overflowed(&self) -> bool {
        self.overflowed
    }
}

impl Write for BootLog {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if !self.overflowed && self.text.try_push_str(s).is_err() {
            self.overflowed = true;

            let complete = self.text.rfind('\n').map_or(0, |idx| idx + 1);
            self.text.truncate(complete);
        }

        Ok(())
    }
}

pub enum Target {
    Boot(BootLog),
    Console(&'static mut (dyn Write + Send)),
    #[cfg(feature = "serial-log")]
    Serial,
}

impl Write for Target {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self {
            Target::Boot(boot) => boot.write_str(s),
            Target::Console(console) => console.write_str(s),
            #[cfg(feature = "serial-log")]
            Target::Serial => serial::COM1_WRITER.lock().write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_log_collects_text() {
        let mut boot = BootLog::new();
        write!(boot, "[{}] {}\r\n", "INFO", 42).unwrap();
        assert_eq!(boot.as_str(), "[INFO] 42\r\n");
        assert!(!boot.overflowed());
    }

    #[test]
    fn boot_log_stops_at_first_overflow() {
        let mut boot = BootLog::new();
        let filler = "x".repeat(BOOT_LOG_BUFFER_SIZE - 6);

        boot.write_str(&filler).unwrap();
        boot.write_str("\r\n").unwrap();
        boot.write_str("12345").unwrap();
        boot.write_str("\r\n").unwrap();

        assert!(boot.overflowed());
        assert_eq!(boot.as_str(), filler + "\r\n");
    }

    #[test]
    fn overflow_drops_unfinished_line() {
        let mut boot = BootLog::new();
        boot.write_str("[INFO] fill\r\n").unwrap();
        boot.write_str("[INFO] ").unwrap();
        boot.write_str(&"y".repeat(BOOT_LOG_BUFFER_SIZE)).unwrap();
        boot.write_str("\r\n").unwrap();

        assert!(boot.overflowed());
        assert_eq!(boot.as_str(), "[INFO] fill\r\n");
    }

    #[test]
    fn overflow_without_complete_line_empties_buffer() {
        let mut boot = BootLog::new();
        boot.write_str("[INFO] ").unwrap();
        boot.write_str(&"z".repeat(BOOT_LOG_BUFFER_SIZE)).unwrap();

        assert!(boot.as_str().is_empty());
    }
}
