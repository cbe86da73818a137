//! Diagnostic logging.
//!
//! Set `SEQUENCE_UTILS_DEBUG=1` to log short-circuited searches, empty folds
//! and sequence growth to stderr. Only available in debug builds; in release
//! builds `seq_debug!` expands to nothing.

/// Environment variable that enables diagnostic logging.
pub const DEBUG_ENV_VAR: &str = "SEQUENCE_UTILS_DEBUG";

/// Check if debug logging is enabled via `SEQUENCE_UTILS_DEBUG`.
#[cfg(debug_assertions)]
pub fn debug_enabled() -> bool {
    use once_cell::sync::Lazy;
    static ENABLED: Lazy<bool> = Lazy::new(|| std::env::var(DEBUG_ENV_VAR).is_ok());
    *ENABLED
}

/// Always disabled in release builds.
#[cfg(not(debug_assertions))]
pub fn debug_enabled() -> bool {
    false
}

/// Emit a debug line without relying on `eprintln!`.
#[cfg(debug_assertions)]
pub fn debug_log(args: std::fmt::Arguments<'_>) {
    let _ = write_debug_line(&mut std::io::stderr(), args);
}

#[cfg(debug_assertions)]
fn write_debug_line<W: std::io::Write>(
    out: &mut W,
    args: std::fmt::Arguments<'_>,
) -> std::io::Result<()> {
    writeln!(out, "[sequence_utils] {args}")
}

/// Log a formatted diagnostic line when `SEQUENCE_UTILS_DEBUG` is set.
macro_rules! seq_debug {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            if $crate::debug::debug_enabled() {
                $crate::debug::debug_log(format_args!($($arg)*));
            }
        }
    };
}

pub(crate) use seq_debug;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    fn test_debug_line_format() {
        let mut out: Vec<u8> = Vec::new();
        write_debug_line(&mut out, format_args!("length {} -> {}", 1, 2)).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[sequence_utils] length 1 -> 2\n");
    }

    #[test]
    fn test_seq_debug_expands() {
        seq_debug!("length {} -> {}", 1, 2);
    }
}
