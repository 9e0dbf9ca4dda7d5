//! Translation from the presentation model to sink calls.

use super::error::ExportError;
use super::report::{EmittedElement, ExportOutcome, ExportReport, PlaceholderReason};
use super::settings::{ExportQuality, ExportSettings};
use super::sink::{
    ChartKind, ChartSeries, DocumentSink, Outline, ShapeKind, ShapeOptions, SlideSink,
    TextOptions, VerticalAlign,
};
use crate::common::Metadata;
use crate::common::style::color::is_transparent;
use crate::presentation::{
    ChartContent, ChartType, Element, ElementContent, Presentation, TextAlign,
};
use crate::template::{Template, ThemeColors};

pub const DOCUMENT_AUTHOR: &str = "Presentation Generator";
pub const DOCUMENT_COMPANY: &str = "AI Powered Presentations";

const DEFAULT_EXPORT_FONT_SIZE: f64 = 18.0;
const DEFAULT_EXPORT_FONT_FACE: &str = "Arial";

const IMAGE_PLACEHOLDER_TEXT: &str = "Image Placeholder";
const CHART_PLACEHOLDER_TEXT: &str = "Chart Placeholder";

fn document_metadata(prs: &Presentation) -> Metadata {
    Metadata {
        title: Some(prs.title.clone()),
        subject: Some(prs.title.clone()),
        author: Some(DOCUMENT_AUTHOR.to_string()),
        company: Some(DOCUMENT_COMPANY.to_string()),
        created: Some(prs.created_at),
        modified: Some(prs.updated_at),
    }
}

fn text_options(element: &Element, colors: &ThemeColors) -> TextOptions {
    let style = &element.style;
    TextOptions {
        font_size: style.font_size.unwrap_or(DEFAULT_EXPORT_FONT_SIZE),
        font_face: Some(
            style
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_EXPORT_FONT_FACE.to_string()),
        ),
        color: style.color.clone().unwrap_or_else(|| colors.text.clone()),
        bold: style.is_bold(),
        italic: style.is_italic(),
        align: style.text_align.unwrap_or(TextAlign::Left),
        valign: VerticalAlign::Top,
        fill: style
            .background_color
            .clone()
            .filter(|bg| !is_transparent(bg)),
    }
}

fn emit_chart<S: SlideSink>(
    slide: &mut S,
    element: &Element,
    chart: Option<&ChartContent>,
    colors: &ThemeColors,
) -> Result<EmittedElement, PlaceholderReason> {
    let chart = chart.ok_or(PlaceholderReason::ChartDataMissing)?;
    let series = chart
        .first_series()
        .map_err(PlaceholderReason::ChartDataMalformed)?;

    if chart.chart_type != ChartType::Bar {
        log::debug!(
            "chart '{}' of type {:?} exported as a bar chart",
            element.id,
            chart.chart_type
        );
    }

    let series = ChartSeries {
        name: series.name.to_string(),
        labels: series.labels.to_vec(),
        values: series.values.to_vec(),
    };
    slide
        .add_chart(ChartKind::Bar, &series, &element.position, &colors.chart_palette())
        .map_err(|e| PlaceholderReason::ChartDataMalformed(e.to_string()))?;

    Ok(EmittedElement::Chart)
}

fn emit_chart_placeholder<S: SlideSink>(slide: &mut S, element: &Element) {
    slide.add_shape(
        ShapeKind::Rectangle,
        &element.position,
        &ShapeOptions {
            fill: Some("F0F0F0".to_string()),
            outline: Some(Outline {
                color: "CCCCCC".to_string(),
                width: 1.0,
            }),
        },
    );
    slide.add_text(
        CHART_PLACEHOLDER_TEXT,
        &element.position,
        &TextOptions::centered(14.0, "666666"),
    );
}

/// Emit one element; a placeholder is written for any recoverable failure.
fn emit_element<S: SlideSink>(
    slide: &mut S,
    element: &Element,
    colors: &ThemeColors,
) -> Result<EmittedElement, PlaceholderReason> {
    match &element.content {
        ElementContent::Text(text) => {
            slide.add_text(text, &element.position, &text_options(element, colors));
            Ok(EmittedElement::Text)
        }
        ElementContent::Image(image) => {
            let Some(image) = image.as_ref().filter(|i| !i.src.trim().is_empty()) else {
                return Ok(EmittedElement::Skipped);
            };
            match slide.add_image(&image.src, &element.position) {
                Ok(()) => Ok(EmittedElement::Image),
                Err(err) => {
                    slide.add_text(
                        IMAGE_PLACEHOLDER_TEXT,
                        &element.position,
                        &TextOptions::centered(16.0, "999999"),
                    );
                    Err(PlaceholderReason::ImageUnavailable(err.to_string()))
                }
            }
        }
        ElementContent::Shape => {
            let fill = element
                .style
                .background_color
                .as_deref()
                .unwrap_or(colors.accent.as_str());
            slide.add_shape(
                ShapeKind::Rectangle,
                &element.position,
                &ShapeOptions {
                    fill: (!is_transparent(fill)).then(|| fill.to_string()),
                    outline: Some(Outline {
                        color: colors.primary.clone(),
                        width: 1.0,
                    }),
                },
            );
            Ok(EmittedElement::Shape)
        }
        ElementContent::Chart(chart) => {
            let result = emit_chart(slide, element, chart.as_ref(), colors);
            if result.is_err() {
                emit_chart_placeholder(slide, element);
            }
            result
        }
    }
}

/// Drive `sink` through the whole presentation and serialize it.
///
/// Slides and elements are emitted in list order. Elements that cannot be
/// written become placeholders and are reported in the returned
/// [`ExportReport`]; only a failure to serialize the finished document
/// aborts the export.
pub fn translate<S: DocumentSink>(
    prs: &Presentation,
    template: &Template,
    settings: &ExportSettings,
    mut sink: S,
) -> Result<ExportOutcome<S::Artifact>, ExportError> {
    log::info!(
        "exporting '{}' ({} slides, {})",
        prs.title,
        prs.slide_count(),
        settings.slide_size
    );
    if settings.quality != ExportQuality::High {
        log::debug!("quality {:?} has no effect on the output", settings.quality);
    }

    sink.set_layout(settings.slide_size);
    sink.set_metadata(&document_metadata(prs));

    let colors = &template.colors;
    let mut report = ExportReport::default();

    for (index, slide) in prs.slides().iter().enumerate() {
        let out = sink.add_slide();
        out.set_background(&colors.background);

        for element in slide.elements() {
            let result = emit_element(out, element, colors);
            if let Err(reason) = &result {
                log::warn!(
                    "slide {}: element '{}' exported as placeholder: {}",
                    index + 1,
                    element.id,
                    reason
                );
            }
            report.record(index, &element.id, result);
        }

        if settings.include_notes {
            out.add_notes(&format!("Slide {} notes", slide.order() + 1));
        }
    }

    let file_name = settings.output_file_name();
    let artifact = sink
        .serialize(&file_name)
        .map_err(ExportError::Serialization)?;

    log::info!("exported '{}'", file_name);
    Ok(ExportOutcome { artifact, report })
}

/// Export to a PPTX package with the bundled writer.
#[cfg(feature = "pptx")]
pub fn export_pptx(
    prs: &Presentation,
    template: &Template,
    settings: &ExportSettings,
) -> Result<ExportOutcome<crate::ooxml::pptx::PptxArtifact>, ExportError> {
    let sink = crate::ooxml::pptx::PptxDocument::with_theme(template.colors.clone());
    translate(prs, template, settings, sink)
}
