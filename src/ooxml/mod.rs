//! Office Open XML (OOXML) output.
//!
//! Only PowerPoint (.pptx) writing is implemented: [`pptx::PptxDocument`]
//! is the [`DocumentSink`](crate::export::DocumentSink) the export translator
//! drives by default. Packages are assembled following the Open Packaging
//! Conventions (content types, relationships, parts) into a ZIP container.

pub mod error;
pub mod pptx;

pub use error::{OoxmlError, Result};
