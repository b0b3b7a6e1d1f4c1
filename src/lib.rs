//! mdcolors - Mega Drive colors for PNG images
//!
//! Command-line host around the `md-palette` crate.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
