//! Export of a presentation through a document sink.
//!
//! The translator walks slides and elements in order and turns each into
//! calls on a [`DocumentSink`]. Elements that cannot be written (an image
//! whose source is unusable, a chart without usable data) are replaced by a
//! visible placeholder and listed in the [`ExportReport`]; the export as a
//! whole only fails when the finished document cannot be serialized.
//!
//! # Example
//!
//! ```rust,no_run
//! use deckwright::editor::ops;
//! use deckwright::export::{ExportSettings, export_pptx};
//! use deckwright::presentation::Presentation;
//! use deckwright::template::TemplateCatalog;
//!
//! let template = TemplateCatalog::builtin().by_id("business-corporate").unwrap();
//! let prs = ops::add_slide(&Presentation::new(&template.id), template, None);
//!
//! let outcome = export_pptx(&prs, template, &ExportSettings::for_presentation(&prs))?;
//! outcome.artifact.save_to(".")?;
//! # Ok::<(), deckwright::Error>(())
//! ```

mod controller;
mod error;
mod report;
mod settings;
mod sink;
mod translator;

#[cfg(test)]
pub(crate) mod testing;

pub use controller::{ExportController, ExportGuard, ExportStatus};
pub use error::ExportError;
pub use report::{ElementOutcome, EmittedElement, ExportOutcome, ExportReport, PlaceholderReason};
pub use settings::{ExportQuality, ExportSettings, SlideSize};
pub use sink::{
    ChartKind, ChartSeries, DocumentSink, Outline, ShapeKind, ShapeOptions, SinkError, SlideSink,
    TextOptions, VerticalAlign,
};
#[cfg(feature = "pptx")]
pub use translator::export_pptx;
pub use translator::{DOCUMENT_AUTHOR, DOCUMENT_COMPANY, translate};
