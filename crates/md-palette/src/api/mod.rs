//! Public API for the md-palette crate.
//!
//! This module provides the high-level API: the [`ColorConverter`] and
//! [`PaletteFader`] builders and the [`MdError`] unified error type.

mod builder;
mod error;

pub use builder::{ColorConverter, PaletteFader};
pub use error::MdError;
