//! PowerPoint (.pptx) presentation writing.
//!
//! - [`PptxDocument`]: presentation under construction; implements
//!   [`DocumentSink`](crate::export::DocumentSink)
//! - [`PptxSlide`]: one slide; implements [`SlideSink`](crate::export::SlideSink)
//! - [`PptxArtifact`]: the serialized package bytes and file name
//!
//! # Example
//!
//! ```rust
//! use deckwright::export::{DocumentSink, ShapeKind, ShapeOptions, SlideSink};
//! use deckwright::ooxml::pptx::PptxDocument;
//! use deckwright::presentation::Position;
//!
//! let mut doc = PptxDocument::new();
//! let slide = doc.add_slide();
//! slide.set_background("#ffffff");
//! slide.add_shape(
//!     ShapeKind::Rectangle,
//!     &Position::new(10.0, 10.0, 30.0, 20.0),
//!     &ShapeOptions { fill: Some("#1e40af".to_string()), outline: None },
//! );
//!
//! let artifact = doc.serialize("shapes.pptx").unwrap();
//! assert_eq!(artifact.file_name, "shapes.pptx");
//! assert!(artifact.bytes.starts_with(b"PK"));
//! ```

mod format;
pub mod writer;

pub use format::ImageFormat;
pub use writer::{PptxArtifact, PptxDocument, PptxSlide};
