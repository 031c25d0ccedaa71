use core::fmt::{self, Write};

use crate::{Clock, LogConfig, MessageParts, Severity, SourceLocation, Timestamp};

/// Formats log lines into a sink.
///
/// The logger owns neither the transport nor the notion of time, both are
/// handed in at construction. Writing is best effort: errors returned by the
/// sink are dropped, as there is nowhere left to report them.
pub struct Logger<S, C> {
    sink: S,
    clock: C,
    config: LogConfig,
}

impl<S: Write, C: Clock> Logger<S, C> {
    pub fn new(sink: S, clock: C, threshold: Severity) -> Self {
        Self::with_config(
            sink,
            clock,
            LogConfig {
                threshold,
                ..LogConfig::default()
            },
        )
    }

    pub fn with_config(sink: S, clock: C, config: LogConfig) -> Self {
        Self {
            sink,
            clock,
            config,
        }
    }

    pub fn enabled(&self, severity: Severity) -> bool {
        severity <= self.config.threshold
    }

    /// Writes one complete line, unless `severity` is more verbose than the
    /// threshold, in which case nothing happens at all.
    pub fn log<P: MessageParts>(
        &mut self,
        severity: Severity,
        file: Option<&str>,
        line: u32,
        parts: P,
    ) {
        if !self.enabled(severity) {
            return;
        }

        // a failed write must not swallow the terminator, or the next
        // line ends up glued to this one
        let _ = self.write_prefix(severity.as_raw(), file, line);
        let _ = parts.write_parts(&mut self.sink);
        let _ = self.sink.write_str(self.config.line_ending.as_str());
    }

    /// Writes `[HHHH:MM:SS.mmmm] [LEVEL] [file:line] ` for the current time.
    ///
    /// Takes the raw level so that values outside of [`Severity`] can still
    /// be printed; they show up as `???`.
    pub fn write_prefix(&mut self, raw_level: u8, file: Option<&str>, line: u32) -> fmt::Result {
        let now = Timestamp::from_millis(self.clock.millis());

        write!(
            self.sink,
            "[{}] [{}] [{}] ",
            now,
            Severity::label(raw_level),
            SourceLocation::new(file, line)
        )
    }

    pub fn threshold(&self) -> Severity {
        self.config.threshold
    }

    pub fn set_threshold(&mut self, threshold: Severity) {
        self.config.threshold = threshold;
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}
