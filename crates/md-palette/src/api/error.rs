//! Unified error type for the md-palette public API.

use thiserror::Error;

use crate::lut::LutError;
use crate::profile::{ParseFadeModeError, ParseProfileError};
use crate::transform::TransformError;

/// Unified error type for the md-palette public API.
///
/// Wraps all error types from the crate into a single enum for
/// convenient `?` propagation in application code.
///
/// # Example
///
/// ```
/// use md_palette::{ColorConverter, MdError, Profile};
///
/// fn converter(from: &str, to: &str) -> Result<ColorConverter, MdError> {
///     let source: Profile = from.parse()?;
///     let destination: Profile = to.parse()?;
///     Ok(ColorConverter::new(source, destination))
/// }
///
/// assert!(converter("sme", "vdp").is_ok());
/// assert!(converter("sme", "cga").is_err());
/// ```
#[derive(Debug, Error)]
pub enum MdError {
    /// Unknown profile name
    #[error(transparent)]
    ParseProfile(#[from] ParseProfileError),
    /// Unknown fade mode name
    #[error(transparent)]
    ParseFadeMode(#[from] ParseFadeModeError),
    /// Lookup-table construction error
    #[error("lookup table error: {0}")]
    Lut(#[from] LutError),
    /// Buffer or geometry error in the transform engine
    #[error("transform error: {0}")]
    Transform(#[from] TransformError),
}
