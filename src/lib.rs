//! Deckwright - template-driven slide decks with PPTX export
//!
//! This library models presentations as immutable values, edits them with
//! pure operations, builds slides from template layouts and exports the
//! result to PowerPoint (.pptx).
//!
//! # Features
//!
//! - **Presentation model**: Slides and positioned elements (text, image, shape, chart)
//! - **Editing operations**: Every edit returns a new presentation; unchanged slides are shared
//! - **Templates**: Built-in catalog of templates and color themes, or load your own from YAML
//! - **Export**: Translator over a pluggable document sink, with a bundled PPTX writer
//! - **Graceful degradation**: Unusable images and chart data become visible placeholders
//!
//! # Example - Building and exporting a deck
//!
//! ```no_run
//! use deckwright::editor::EditorSession;
//! use deckwright::export::{ExportSettings, export_pptx};
//! use deckwright::presentation::ElementKind;
//! use deckwright::template::TemplateCatalog;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let template = TemplateCatalog::builtin()
//!     .by_id("business-corporate")
//!     .ok_or("unknown template")?;
//!
//! let mut session = EditorSession::default();
//! session.create_presentation(template);
//! session.add_slide(Some("title-slide"));
//!
//! let slide_id = session.presentation().ok_or("no deck")?.slides()[0].id.clone();
//! session.add_element(&slide_id, ElementKind::Shape);
//!
//! let prs = session.presentation().ok_or("no deck")?;
//! let outcome = export_pptx(prs, template, &ExportSettings::for_presentation(prs))?;
//! for degraded in outcome.report.degraded() {
//!     println!("placeholder for {}", degraded.element_id);
//! }
//! outcome.artifact.save_to(".")?;
//! # Ok(())
//! # }
//! ```

/// Shared error type, units, colors and XML helpers
pub mod common;

/// Presentation data model
pub mod presentation;

/// Template catalog, layouts and color themes
pub mod template;

/// Pure editing operations and the editor session
pub mod editor;

/// Export through a document sink
pub mod export;

/// OOXML (Office Open XML) package writing
///
/// This module provides the PowerPoint (.pptx) writer used by
/// [`export::export_pptx`].
#[cfg(feature = "pptx")]
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use presentation::{Element, ElementKind, Position, Presentation, Slide};
pub use template::{Template, TemplateCatalog};
