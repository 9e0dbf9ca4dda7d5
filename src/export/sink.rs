//! The document-generation backend driven by the translator.
//!
//! Positions are passed as slide percentages and colors as authored
//! (`#rrggbb` or bare `RRGGBB`); converting both into the target format's
//! units is the sink's job.

use super::settings::SlideSize;
use crate::common::Metadata;
use crate::presentation::{Position, TextAlign};
use thiserror::Error;

/// A recoverable failure reported by a sink for one call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The image source could not be read or decoded
    #[error("Image source rejected: {0}")]
    ImageSource(String),

    /// The chart could not be built from the given series
    #[error("Chart rejected: {0}")]
    Chart(String),

    /// The document could not be serialized
    #[error("Serialization failed: {0}")]
    Serialize(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextOptions {
    /// Size in points
    pub font_size: f64,
    pub font_face: Option<String>,
    pub color: String,
    pub bold: bool,
    pub italic: bool,
    pub align: TextAlign,
    pub valign: VerticalAlign,
    /// Box fill; `None` leaves the box unfilled
    pub fill: Option<String>,
}

impl TextOptions {
    /// Centered, unstyled text used for placeholders.
    pub fn centered(font_size: f64, color: &str) -> Self {
        Self {
            font_size,
            font_face: None,
            color: color.to_string(),
            bold: false,
            italic: false,
            align: TextAlign::Center,
            valign: VerticalAlign::Middle,
            fill: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rectangle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub color: String,
    /// Width in points
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeOptions {
    pub fill: Option<String>,
    pub outline: Option<Outline>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
}

/// One named series of labelled values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

/// One slide of the document being built.
pub trait SlideSink {
    fn set_background(&mut self, color: &str);

    fn add_text(&mut self, text: &str, position: &Position, options: &TextOptions);

    /// Add an image from `source`; fails when the source cannot be used.
    fn add_image(&mut self, source: &str, position: &Position) -> Result<(), SinkError>;

    fn add_shape(&mut self, kind: ShapeKind, position: &Position, options: &ShapeOptions);

    fn add_chart(
        &mut self,
        kind: ChartKind,
        series: &ChartSeries,
        position: &Position,
        palette: &[&str],
    ) -> Result<(), SinkError>;

    fn add_notes(&mut self, text: &str);
}

/// A document under construction.
pub trait DocumentSink {
    type Slide: SlideSink;
    /// What a finished document serializes into
    type Artifact;

    fn set_layout(&mut self, size: SlideSize);

    fn set_metadata(&mut self, metadata: &Metadata);

    /// Append a slide and return it for filling.
    fn add_slide(&mut self) -> &mut Self::Slide;

    fn serialize(self, file_name: &str) -> Result<Self::Artifact, SinkError>;
}
