//! Line formatter for device logs.
//!
//! Every line looks like
//!
//! ```text
//! [HHHH:MM:SS.mmmm] [LEVEL] [file.rs:42] message parts...
//! ```
//!
//! and is written straight into a [`core::fmt::Write`] sink without any
//! intermediate buffer. Lines more verbose than the configured threshold
//! are dropped before the clock is read or anything is written.
#![cfg_attr(not(test), no_std)]

mod clock;
mod config;
mod error;
mod location;
mod logger;
mod macros;
mod pad;
mod parts;
mod severity;
mod timestamp;

pub use clock::{Clock, ManualClock};
pub use config::{LineEnding, LogConfig};
pub use error::{ConfigError, ConfigResult};
pub use location::{short_file, SourceLocation, UNKNOWN_FILE};
pub use logger::Logger;
pub use pad::write_zero_padded;
pub use parts::MessageParts;
pub use severity::{Severity, UNKNOWN_LEVEL};
pub use timestamp::Timestamp;
