//! Output types for the transform engine.
//!
//! This module provides [`FadeFrames`], the owned result of rendering a
//! fade over a raster.

mod fade_frames;

pub use fade_frames::FadeFrames;
