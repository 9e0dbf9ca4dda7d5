//! Unified error types for deckwright.
//!
//! This module provides a unified error type that encompasses errors from
//! catalog loading, package writing and exporting, presenting a consistent API
//! to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
