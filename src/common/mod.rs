//! Common types, traits, and utilities shared across the crate.
//!
//! This module provides the unified error type and the small helpers used by
//! the presentation model, the editor, and the PPTX writer alike.

// Submodule declarations
pub mod error;
pub mod id;
pub mod metadata;
pub mod style;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};
pub use id::new_id;
pub use metadata::Metadata;
pub use style::RGBColor;
