//! Error types for LUT construction

use thiserror::Error;

/// Error type for LUT construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LutError {
    /// Fade step beyond the endpoint frame
    #[error("fade step {step} out of range (0..={max})")]
    FadeStepOutOfRange {
        /// Requested step
        step: u8,
        /// Largest accepted step (the endpoint frame)
        max: u8,
    },
}
