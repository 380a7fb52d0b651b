//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Nothing stored under the requested key and tier.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments (bad tier, empty key, non-JSON input).
    pub const INVALID_INPUT: i32 = 4;

    /// Stored text could not be decoded.
    pub const CORRUPT_VALUE: i32 = 5;
}

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "STORABLE_LOG";
