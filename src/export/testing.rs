//! A sink that records every call, for exercising the translator.

use super::settings::SlideSize;
use super::sink::{
    ChartKind, ChartSeries, DocumentSink, ShapeKind, ShapeOptions, SinkError, SlideSink,
    TextOptions,
};
use crate::common::Metadata;
use crate::presentation::Position;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Layout(SlideSize),
    Metadata(Metadata),
    Slide,
    Background(String),
    Text(String, Position, TextOptions),
    Image(String, Position),
    Shape(ShapeKind, Position, ShapeOptions),
    Chart(ChartKind, ChartSeries, Position, Vec<String>),
    Notes(String),
    Serialize(String),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSlide {
    calls: Vec<Call>,
    fail_images: bool,
}

impl SlideSink for RecordingSlide {
    fn set_background(&mut self, color: &str) {
        self.calls.push(Call::Background(color.to_string()));
    }

    fn add_text(&mut self, text: &str, position: &Position, options: &TextOptions) {
        self.calls
            .push(Call::Text(text.to_string(), *position, options.clone()));
    }

    fn add_image(&mut self, source: &str, position: &Position) -> Result<(), SinkError> {
        if self.fail_images {
            return Err(SinkError::ImageSource(format!("cannot read '{}'", source)));
        }
        self.calls.push(Call::Image(source.to_string(), *position));
        Ok(())
    }

    fn add_shape(&mut self, kind: ShapeKind, position: &Position, options: &ShapeOptions) {
        self.calls.push(Call::Shape(kind, *position, options.clone()));
    }

    fn add_chart(
        &mut self,
        kind: ChartKind,
        series: &ChartSeries,
        position: &Position,
        palette: &[&str],
    ) -> Result<(), SinkError> {
        self.calls.push(Call::Chart(
            kind,
            series.clone(),
            *position,
            palette.iter().map(|c| c.to_string()).collect(),
        ));
        Ok(())
    }

    fn add_notes(&mut self, text: &str) {
        self.calls.push(Call::Notes(text.to_string()));
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    fail_images: bool,
    fail_serialize: bool,
    header: Vec<Call>,
    slides: Vec<RecordingSlide>,
}

impl RecordingSink {
    /// A sink whose slides reject every image.
    pub fn failing_images() -> Self {
        Self {
            fail_images: true,
            ..Self::default()
        }
    }

    /// A sink whose `serialize` always fails.
    pub fn failing_serialize() -> Self {
        Self {
            fail_serialize: true,
            ..Self::default()
        }
    }
}

/// The flattened call log, in the order the calls were made.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Recording {
    pub calls: Vec<Call>,
}

impl Recording {
    pub fn texts(&self) -> Vec<(String, Position, TextOptions)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(text, position, options) => {
                    Some((text.clone(), *position, options.clone()))
                }
                _ => None,
            })
            .collect()
    }

    pub fn shapes(&self) -> Vec<(Position, ShapeOptions)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Shape(_, position, options) => Some((*position, options.clone())),
                _ => None,
            })
            .collect()
    }
}

impl DocumentSink for RecordingSink {
    type Slide = RecordingSlide;
    type Artifact = Recording;

    fn set_layout(&mut self, size: SlideSize) {
        self.header.push(Call::Layout(size));
    }

    fn set_metadata(&mut self, metadata: &Metadata) {
        self.header.push(Call::Metadata(metadata.clone()));
    }

    fn add_slide(&mut self) -> &mut RecordingSlide {
        let fail_images = self.fail_images;
        self.slides.push(RecordingSlide {
            calls: Vec::new(),
            fail_images,
        });
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    fn serialize(self, file_name: &str) -> Result<Recording, SinkError> {
        if self.fail_serialize {
            return Err(SinkError::Serialize("disk full".to_string()));
        }

        let mut calls = self.header;
        for slide in self.slides {
            calls.push(Call::Slide);
            calls.extend(slide.calls);
        }
        calls.push(Call::Serialize(file_name.to_string()));
        Ok(Recording { calls })
    }
}
