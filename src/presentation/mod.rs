//! In-memory presentation model.
//!
//! The model is a tree of presentation → slides → elements. Slides and
//! elements are held behind `Arc`, so the pure editing operations in
//! [`crate::editor`] can return a new tree that shares every node they did
//! not touch.
//!
//! # Architecture
//!
//! - `Presentation`: title, template reference, ordered slides, timestamps
//! - `Slide`: layout reference, ordered elements, `order`
//! - `Element`: id, [`ElementContent`] (the kind and its payload), style, position
//!
//! # Example
//!
//! ```rust
//! use deckwright::presentation::{Element, ElementContent, ElementStyle, Position};
//!
//! let title = Element::new(
//!     ElementContent::Text("Quarterly review".to_string()),
//!     ElementStyle::default(),
//!     Position::new(10.0, 10.0, 80.0, 15.0),
//! );
//! assert_eq!(title.kind().as_str(), "text");
//! ```

// Submodule declarations
mod content;
mod element;
mod prs;
pub(crate) mod slide;
mod types;

// Re-exports
pub use content::{
    ChartContent, ChartData, ChartDataset, ChartType, ElementContent, ImageContent, SeriesRef,
};
pub use element::Element;
pub use prs::{DEFAULT_TITLE, Presentation};
pub use slide::Slide;
pub use types::{ElementKind, ElementStyle, FontStyle, FontWeight, Position, TextAlign};
