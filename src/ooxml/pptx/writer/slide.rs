/// Slide content collected from the translator and its PresentationML output.
use super::chart::ChartPart;
use super::constants::{XML_DECL, ns};
use super::image::{MediaBlob, resolve_image};
use super::shape::{Frame, PptxShape};
use crate::common::style::color::{is_transparent, normalize_hex};
use crate::common::xml::escape_xml;
use crate::export::{
    ChartKind, ChartSeries, ShapeKind, ShapeOptions, SinkError, SlideSink, TextOptions,
};
use crate::ooxml::error::{OoxmlError, Result};
use crate::presentation::Position;
use std::fmt::Write as FmtWrite;

/// A slide being written.
///
/// Positions are kept as slide percentages and only converted to EMU when the
/// package is serialized, once the slide size is final.
#[derive(Debug, Default)]
pub struct PptxSlide {
    background: Option<String>,
    shapes: Vec<PptxShape>,
    media: Vec<MediaBlob>,
    charts: Vec<ChartPart>,
    notes: Option<String>,
}

/// Relationship IDs of a slide's media and charts, in the order they were added.
#[derive(Debug, Default)]
pub(crate) struct SlideRelIds {
    pub media: Vec<String>,
    pub charts: Vec<String>,
}

impl PptxSlide {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Background fill as `RRGGBB`, if one was set.
    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }

    pub(crate) fn media(&self) -> &[MediaBlob] {
        &self.media
    }

    pub(crate) fn charts(&self) -> &[ChartPart] {
        &self.charts
    }

    /// Generate the slide part.
    pub(crate) fn to_xml(
        &self,
        slide_cx: i64,
        slide_cy: i64,
        rel_ids: &SlideRelIds,
    ) -> Result<String> {
        let mut xml = String::with_capacity(2048 + self.shapes.len() * 1024);

        xml.push_str(XML_DECL);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            ns::A,
            ns::R,
            ns::P
        )?;
        xml.push_str("<p:cSld>");

        // background must come before the shape tree
        if let Some(hex) = &self.background {
            write!(
                xml,
                r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#,
                hex
            )?;
        }

        xml.push_str("<p:spTree>");
        write_group_properties(&mut xml);

        for (idx, shape) in self.shapes.iter().enumerate() {
            let rel_id = match shape {
                PptxShape::Picture { media, .. } => Some(lookup(&rel_ids.media, *media, "image")?),
                PptxShape::Chart { chart, .. } => Some(lookup(&rel_ids.charts, *chart, "chart")?),
                _ => None,
            };
            let frame = Frame::from_position(shape.position(), slide_cx, slide_cy);
            // id 1 is the group shape
            shape.to_xml(&mut xml, idx as u32 + 2, frame, rel_id)?;
        }

        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");
        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }

    /// Generate the notes slide part, or `None` when the slide has no notes.
    pub(crate) fn notes_xml(&self) -> Option<Result<String>> {
        let notes = self.notes.as_ref()?;
        Some(write_notes(notes))
    }
}

fn lookup<'a>(ids: &'a [String], index: usize, what: &str) -> Result<&'a str> {
    ids.get(index)
        .map(String::as_str)
        .ok_or_else(|| OoxmlError::Other(format!("no relationship for {} {}", what, index)))
}

pub(crate) fn write_group_properties(xml: &mut String) {
    xml.push_str("<p:nvGrpSpPr>");
    xml.push_str(r#"<p:cNvPr id="1" name=""/>"#);
    xml.push_str("<p:cNvGrpSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGrpSpPr>");
    xml.push_str("<p:grpSpPr>");
    xml.push_str(r#"<a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#);
    xml.push_str(r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm>"#);
    xml.push_str("</p:grpSpPr>");
}

fn write_notes(notes: &str) -> Result<String> {
    let mut xml = String::with_capacity(1536 + notes.len());

    xml.push_str(XML_DECL);
    write!(
        xml,
        r#"<p:notes xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        ns::A,
        ns::R,
        ns::P
    )?;
    xml.push_str("<p:cSld>");
    xml.push_str("<p:spTree>");
    write_group_properties(&mut xml);

    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="2" name="Notes Placeholder"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    xml.push_str(r#"<p:nvPr><p:ph type="body" idx="1"/></p:nvPr>"#);
    xml.push_str("</p:nvSpPr>");
    xml.push_str("<p:spPr/>");

    xml.push_str("<p:txBody>");
    xml.push_str("<a:bodyPr/>");
    xml.push_str("<a:lstStyle/>");
    for line in notes.lines() {
        xml.push_str("<a:p>");
        if !line.is_empty() {
            write!(
                xml,
                r#"<a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r>"#,
                escape_xml(line)
            )?;
        }
        xml.push_str("</a:p>");
    }
    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");

    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:notes>");

    Ok(xml)
}

impl SlideSink for PptxSlide {
    fn set_background(&mut self, color: &str) {
        if is_transparent(color) {
            self.background = None;
            return;
        }
        self.background = normalize_hex(color);
        if self.background.is_none() {
            log::debug!("ignoring slide background '{}', not a hex color", color);
        }
    }

    fn add_text(&mut self, text: &str, position: &Position, options: &TextOptions) {
        self.shapes.push(PptxShape::TextBox {
            text: text.to_string(),
            position: *position,
            options: options.clone(),
        });
    }

    fn add_image(
        &mut self,
        source: &str,
        position: &Position,
    ) -> std::result::Result<(), SinkError> {
        let blob = resolve_image(source).map_err(|e| match e {
            OoxmlError::ImageSource(msg) => SinkError::ImageSource(msg),
            other => SinkError::ImageSource(other.to_string()),
        })?;

        self.media.push(blob);
        self.shapes.push(PptxShape::Picture {
            media: self.media.len() - 1,
            position: *position,
        });
        Ok(())
    }

    fn add_shape(&mut self, kind: ShapeKind, position: &Position, options: &ShapeOptions) {
        match kind {
            ShapeKind::Rectangle => self.shapes.push(PptxShape::Rectangle {
                position: *position,
                fill: options.fill.clone(),
                outline: options.outline.as_ref().map(|o| (o.color.clone(), o.width)),
            }),
        }
    }

    fn add_chart(
        &mut self,
        kind: ChartKind,
        series: &ChartSeries,
        position: &Position,
        palette: &[&str],
    ) -> std::result::Result<(), SinkError> {
        let part = ChartPart::new(kind, series, palette)?;

        self.charts.push(part);
        self.shapes.push(PptxShape::Chart {
            chart: self.charts.len() - 1,
            position: *position,
        });
        Ok(())
    }

    fn add_notes(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        match &mut self.notes {
            Some(notes) => {
                notes.push('\n');
                notes.push_str(text);
            }
            None => self.notes = Some(text.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::image::tests::png_data_uri;
    use super::*;
    use crate::common::unit::{SLIDE_HEIGHT_16X9_EMU, SLIDE_WIDTH_EMU};
    use crate::export::Outline;

    fn pos() -> Position {
        Position::new(10.0, 10.0, 50.0, 20.0)
    }

    #[test]
    fn test_background() {
        let mut slide = PptxSlide::new();
        slide.set_background("#f8fafc");
        assert_eq!(slide.background(), Some("F8FAFC"));

        slide.set_background("transparent");
        assert_eq!(slide.background(), None);

        slide.set_background("not a color");
        assert_eq!(slide.background(), None);
    }

    #[test]
    fn test_image_sources() {
        let mut slide = PptxSlide::new();
        slide.add_image(&png_data_uri(), &pos()).unwrap();
        assert_eq!(slide.media().len(), 1);

        let err = slide.add_image("https://example.com/logo.png", &pos()).unwrap_err();
        assert!(matches!(err, SinkError::ImageSource(_)));
        // nothing is added for a rejected image
        assert_eq!(slide.shape_count(), 1);
    }

    #[test]
    fn test_rejected_chart_adds_nothing() {
        let mut slide = PptxSlide::new();
        let series = ChartSeries {
            name: "Sales".to_string(),
            labels: vec!["A".to_string()],
            values: vec![1.0, 2.0],
        };
        assert!(slide.add_chart(ChartKind::Bar, &series, &pos(), &[]).is_err());
        assert_eq!(slide.shape_count(), 0);
        assert!(slide.charts().is_empty());
    }

    #[test]
    fn test_notes() {
        let mut slide = PptxSlide::new();
        slide.add_notes("   ");
        assert!(!slide.has_notes());
        assert!(slide.notes_xml().is_none());

        slide.add_notes("Speaker <note>");
        slide.add_notes("Second line");
        assert_eq!(slide.notes(), Some("Speaker <note>\nSecond line"));

        let xml = slide.notes_xml().unwrap().unwrap();
        assert!(xml.contains("<a:t>Speaker &lt;note&gt;</a:t>"));
        assert!(xml.contains("<a:t>Second line</a:t>"));
        assert!(xml.contains(r#"<p:ph type="body" idx="1"/>"#));
    }

    #[test]
    fn test_slide_xml() {
        let mut slide = PptxSlide::new();
        slide.set_background("#ffffff");
        slide.add_shape(
            ShapeKind::Rectangle,
            &pos(),
            &ShapeOptions {
                fill: Some("#3b82f6".to_string()),
                outline: Some(Outline {
                    color: "#1e40af".to_string(),
                    width: 1.0,
                }),
            },
        );
        slide.add_image(&png_data_uri(), &pos()).unwrap();

        let rel_ids = SlideRelIds {
            media: vec!["rId2".to_string()],
            charts: vec![],
        };
        let xml = slide
            .to_xml(SLIDE_WIDTH_EMU, SLIDE_HEIGHT_16X9_EMU, &rel_ids)
            .unwrap();

        assert!(xml.contains(r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="FFFFFF"/>"#));
        assert!(xml.find("<p:bg>").unwrap() < xml.find("<p:spTree>").unwrap());
        assert!(xml.contains(r#"<p:cNvPr id="2" name="Rectangle 2"/>"#));
        assert!(xml.contains(r#"<p:cNvPr id="3" name="Picture 3"/>"#));
        assert!(xml.contains(r#"r:embed="rId2""#));
        assert!(xml.ends_with("</p:sld>"));

        // a picture without a relationship is a writer bug, not silent output
        assert!(
            slide
                .to_xml(SLIDE_WIDTH_EMU, SLIDE_HEIGHT_16X9_EMU, &SlideRelIds::default())
                .is_err()
        );
    }
}
