//! Common style and formatting types.
//!
//! Colors are authored as CSS-style hex strings (`#1e40af`) and written into
//! DrawingML as upper-case `RRGGBB` values.

// Submodule declarations
pub mod color;

// Re-exports
pub use color::{RGBColor, TRANSPARENT};
