/// Logs a line through `$logger` with the current file and line number.
///
/// The level is given by name, one of `OFF`, `ERROR`, `WARNING`, `INFO` or
/// `DEBUG`, followed by any number of displayable message parts.
///
/// ```
/// use log_format::{log_at, Logger, Severity};
///
/// let mut logger = Logger::new(String::new(), || 1500u32, Severity::Info);
/// log_at!(logger, WARNING, "rssi ", -80, " below floor");
/// log_at!(logger, DEBUG, "not printed");
///
/// assert!(logger.sink().ends_with("] rssi -80 below floor\r\n"));
/// ```
#[macro_export]
macro_rules! log_at {
    (@severity OFF) => { $crate::Severity::Off };
    (@severity ERROR) => { $crate::Severity::Error };
    (@severity WARNING) => { $crate::Severity::Warning };
    (@severity INFO) => { $crate::Severity::Info };
    (@severity DEBUG) => { $crate::Severity::Debug };
    ($logger:expr, $level:ident $(, $part:expr)* $(,)?) => {
        $logger.log(
            $crate::log_at!(@severity $level),
            ::core::option::Option::Some(::core::file!()),
            ::core::line!(),
            ($($part,)*),
        )
    };
}
