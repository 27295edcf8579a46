// Logging macros that run the formatted message through the global redactor
#[macro_export]
macro_rules! redacted_info {
    ($($arg:tt)*) => {
        tracing::info!("{}", $crate::redact(&format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! redacted_warn {
    ($($arg:tt)*) => {
        tracing::warn!("{}", $crate::redact(&format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! redacted_debug {
    ($($arg:tt)*) => {
        tracing::debug!("{}", $crate::redact(&format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! redacted_error {
    ($($arg:tt)*) => {
        tracing::error!("{}", $crate::redact(&format!($($arg)*)))
    };
}
