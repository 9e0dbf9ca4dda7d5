//! PPTX package writer.
//!
//! [`PptxDocument`] and [`PptxSlide`] buffer what the translator sends them;
//! the package (presentation, master, layout, theme, slides, notes, media and
//! chart parts) is only assembled on serialization.

mod chart;
mod constants;
mod image;
mod package;
mod parts;
mod pres;
mod relmap;
mod shape;
mod slide;

pub use pres::{PptxArtifact, PptxDocument};
pub use slide::PptxSlide;
