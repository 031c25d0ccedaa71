//! Process wide logger behind the `log` facade.
//!
//! Records go through [`log_format::Logger`], so every `log::info!` and
//! friends comes out as a `[HHHH:MM:SS.mmmm] [LEVEL] [file:line] ` prefixed
//! line. Until a console is attached the lines are kept in a fixed size
//! boot buffer and replayed into the console once it shows up.
#![cfg_attr(not(test), no_std)]

mod target;

use core::fmt::Write;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use log_format::{LogConfig, Logger, Severity};
use spin::Mutex;

pub use target::{BootLog, Target, BOOT_LOG_BUFFER_SIZE};

pub type ClockFn = fn() -> u32;

pub struct DeviceLogger {
    inner: Mutex<Option<Logger<Target, ClockFn>>>,
}

impl DeviceLogger {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(None),
        }
    }

    pub fn install(&self, clock: ClockFn, config: LogConfig) {
        let logger = Logger::with_config(Target::Boot(BootLog::new()), clock, config);
        *self.inner.lock() = Some(logger);
    }

    /// Replays the boot buffer into `console` and keeps writing there.
    pub fn attach_console(&self, console: &'static mut (dyn Write + Send)) {
        self.switch_target(Target::Console(console));
    }

    #[cfg(feature = "serial-log")]
    pub fn attach_serial(&self) {
        self.switch_target(Target::Serial);
    }

    fn switch_target(&self, target: Target) {
        let mut guard = self.inner.lock();

        if let Some(logger) = guard.as_mut() {
            let previous = core::mem::replace(logger.sink_mut(), target);

            if let Target::Boot(boot) = previous {
                // ignore the result since we can't do anything
                let _ = logger.sink_mut().write_str(boot.as_str());
            }
        }
    }

    pub fn threshold(&self) -> Option<Severity> {
        self.inner.lock().as_ref().map(|logger| logger.threshold())
    }

    pub fn set_threshold(&self, threshold: Severity) {
        if let Some(logger) = self.inner.lock().as_mut() {
            logger.set_threshold(threshold);
        }
    }

    /// Runs `f` on the boot buffer, if output still goes there.
    pub fn with_boot_log<R, F: FnOnce(&BootLog) -> R>(&self, f: F) -> Option<R> {
        match self.inner.lock().as_ref().map(|logger| logger.sink()) {
            Some(Target::Boot(boot)) => Some(f(boot)),
            _ => None,
        }
    }
}

impl Default for DeviceLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for DeviceLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let severity = severity_of(metadata.level());

        self.inner
            .lock()
            .as_ref()
            .is_some_and(|logger| logger.enabled(severity))
    }

    fn log(&self, record: &Record) {
        let severity = severity_of(record.level());

        if let Some(logger) = self.inner.lock().as_mut() {
            logger.log(
                severity,
                record.file(),
                record.line().unwrap_or(0),
                (record.args(),),
            );
        }
    }

    fn flush(&self) {}
}

pub fn severity_of(level: Level) -> Severity {
    match level {
        Level::Error => Severity::Error,
        Level::Warn => Severity::Warning,
        Level::Info => Severity::Info,
        Level::Debug | Level::Trace => Severity::Debug,
    }
}

pub fn level_filter_of(threshold: Severity) -> LevelFilter {
    match threshold {
        Severity::Off => LevelFilter::Off,
        Severity::Error => LevelFilter::Error,
        Severity::Warning => LevelFilter::Warn,
        Severity::Info => LevelFilter::Info,
        Severity::Debug => LevelFilter::Trace,
    }
}

static LOGGER: DeviceLogger = DeviceLogger::new();

/// Installs the device logger as the global `log` backend.
///
/// Output is buffered until [`attach_console`] is called. Only the first
/// call succeeds, later ones return the error from [`log::set_logger`]
/// and leave the running logger untouched.
pub fn init(clock: ClockFn, config: LogConfig) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    LOGGER.install(clock, config);
    log::set_max_level(level_filter_of(config.threshold));

    log::info!("logger initialized with threshold {}", config.threshold);
    Ok(())
}

pub fn attach_console(console: &'static mut (dyn Write + Send)) {
    LOGGER.attach_console(console);
}

#[cfg(feature = "serial-log")]
pub fn attach_serial() {
    LOGGER.attach_serial();
}

pub fn set_threshold(threshold: Severity) {
    LOGGER.set_threshold(threshold);
    log::set_max_level(level_filter_of(threshold));
}

pub fn with_boot_log<R, F: FnOnce(&BootLog) -> R>(f: F) -> Option<R> {
    LOGGER.with_boot_log(f)
}
