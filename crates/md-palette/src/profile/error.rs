//! Error types for profile and fade-mode selection
//!
//! Both selectors are closed enumerations. Unknown names are configuration
//! errors and are never silently mapped to a default.

use thiserror::Error;

/// Error type for parsing a calibration profile name.
///
/// Returned by `Profile::from_str` when the name matches none of the
/// known profiles or their aliases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color profile '{name}' (expected sonmaped, skcollect or measured)")]
pub struct ParseProfileError {
    /// The rejected input, trimmed
    pub name: String,
}

/// Error type for parsing a fade mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown fade mode '{name}' \
     (expected current-to-black, black-to-current, current-to-white or white-to-current)"
)]
pub struct ParseFadeModeError {
    /// The rejected input, trimmed
    pub name: String,
}
