/// Shapes placed on a slide and their DrawingML serialization.
use super::constants::ns;
use crate::common::style::color::normalize_hex;
use crate::common::unit::{percent_to_emu, pt_to_centipoints, pt_to_emu_f64};
use crate::common::xml::escape_xml;
use crate::export::{TextOptions, VerticalAlign};
use crate::ooxml::error::Result;
use crate::presentation::Position;
use std::fmt::Write as FmtWrite;

/// Absolute placement in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl Frame {
    /// Place a percentage position on a slide of the given size.
    pub fn from_position(position: &Position, slide_cx: i64, slide_cy: i64) -> Self {
        Self {
            x: percent_to_emu(position.x, slide_cx),
            y: percent_to_emu(position.y, slide_cy),
            cx: percent_to_emu(position.width, slide_cx).max(0),
            cy: percent_to_emu(position.height, slide_cy).max(0),
        }
    }

    fn write_xfrm(&self, xml: &mut String, prefix: &str) -> Result<()> {
        write!(
            xml,
            r#"<{p}:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></{p}:xfrm>"#,
            self.x,
            self.y,
            self.cx,
            self.cy,
            p = prefix
        )?;
        Ok(())
    }
}

/// A shape on a slide. Media and charts refer to the slide's part lists by index.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PptxShape {
    TextBox {
        text: String,
        position: Position,
        options: TextOptions,
    },
    Rectangle {
        position: Position,
        fill: Option<String>,
        outline: Option<(String, f64)>,
    },
    Picture {
        media: usize,
        position: Position,
    },
    Chart {
        chart: usize,
        position: Position,
    },
}

impl PptxShape {
    pub fn position(&self) -> &Position {
        match self {
            Self::TextBox { position, .. }
            | Self::Rectangle { position, .. }
            | Self::Picture { position, .. }
            | Self::Chart { position, .. } => position,
        }
    }

    /// Write the shape. `rel_id` is required for pictures and charts.
    pub fn to_xml(
        &self,
        xml: &mut String,
        shape_id: u32,
        frame: Frame,
        rel_id: Option<&str>,
    ) -> Result<()> {
        match self {
            Self::TextBox { text, options, .. } => {
                write_text_box(xml, shape_id, frame, text, options)
            }
            Self::Rectangle { fill, outline, .. } => {
                write_rectangle(xml, shape_id, frame, fill.as_deref(), outline.as_ref())
            }
            Self::Picture { .. } => {
                write_picture(xml, shape_id, frame, rel_id.unwrap_or_default())
            }
            Self::Chart { .. } => {
                write_chart_frame(xml, shape_id, frame, rel_id.unwrap_or_default())
            }
        }
    }
}

fn write_solid_fill(xml: &mut String, color: Option<&str>) -> Result<()> {
    match color.and_then(normalize_hex) {
        Some(hex) => write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, hex)?,
        None => xml.push_str("<a:noFill/>"),
    }
    Ok(())
}

fn anchor(valign: VerticalAlign) -> &'static str {
    match valign {
        VerticalAlign::Top => "t",
        VerticalAlign::Middle => "ctr",
        VerticalAlign::Bottom => "b",
    }
}

fn write_text_box(
    xml: &mut String,
    shape_id: u32,
    frame: Frame,
    text: &str,
    options: &TextOptions,
) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="Text Box {}"/>"#,
        shape_id, shape_id
    )?;
    xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    frame.write_xfrm(xml, "a")?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    write_solid_fill(xml, options.fill.as_deref())?;
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    write!(
        xml,
        r#"<a:bodyPr wrap="square" rtlCol="0" anchor="{}"><a:normAutofit/></a:bodyPr>"#,
        anchor(options.valign)
    )?;
    xml.push_str("<a:lstStyle/>");

    let color = normalize_hex(&options.color);
    // one paragraph per line
    for line in text.split('\n') {
        write!(xml, r#"<a:p><a:pPr algn="{}"/>"#, options.align.xml_value())?;
        let line = line.strip_suffix('\r').unwrap_or(line);
        if !line.is_empty() {
            xml.push_str("<a:r>");
            write_run_properties(xml, "a:rPr", options, color.as_deref())?;
            write!(xml, "<a:t>{}</a:t>", escape_xml(line))?;
            xml.push_str("</a:r>");
        }
        write_run_properties(xml, "a:endParaRPr", options, color.as_deref())?;
        xml.push_str("</a:p>");
    }

    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");
    Ok(())
}

fn write_run_properties(
    xml: &mut String,
    tag: &str,
    options: &TextOptions,
    color: Option<&str>,
) -> Result<()> {
    write!(
        xml,
        r#"<{} lang="en-US" sz="{}" dirty="0""#,
        tag,
        pt_to_centipoints(options.font_size)
    )?;
    if options.bold {
        xml.push_str(r#" b="1""#);
    }
    if options.italic {
        xml.push_str(r#" i="1""#);
    }
    xml.push('>');

    if let Some(hex) = color {
        write!(xml, r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, hex)?;
    }
    if let Some(face) = &options.font_face {
        let face = escape_xml(face);
        write!(xml, r#"<a:latin typeface="{}"/><a:cs typeface="{}"/>"#, face, face)?;
    }

    write!(xml, "</{}>", tag)?;
    Ok(())
}

fn write_rectangle(
    xml: &mut String,
    shape_id: u32,
    frame: Frame,
    fill: Option<&str>,
    outline: Option<&(String, f64)>,
) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="Rectangle {}"/>"#,
        shape_id, shape_id
    )?;
    xml.push_str("<p:cNvSpPr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    frame.write_xfrm(xml, "a")?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    write_solid_fill(xml, fill)?;
    match outline.and_then(|(color, width)| Some((normalize_hex(color)?, *width))) {
        Some((hex, width)) => write!(
            xml,
            r#"<a:ln w="{}"><a:solidFill><a:srgbClr val="{}"/></a:solidFill></a:ln>"#,
            pt_to_emu_f64(width),
            hex
        )?,
        None => xml.push_str("<a:ln><a:noFill/></a:ln>"),
    }
    xml.push_str("</p:spPr>");
    xml.push_str("</p:sp>");
    Ok(())
}

fn write_picture(xml: &mut String, shape_id: u32, frame: Frame, rel_id: &str) -> Result<()> {
    xml.push_str("<p:pic>");
    xml.push_str("<p:nvPicPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="Picture {}"/>"#,
        shape_id, shape_id
    )?;
    xml.push_str(r#"<p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvPicPr>");

    xml.push_str("<p:blipFill>");
    write!(xml, r#"<a:blip r:embed="{}"/>"#, rel_id)?;
    xml.push_str("<a:stretch><a:fillRect/></a:stretch>");
    xml.push_str("</p:blipFill>");

    xml.push_str("<p:spPr>");
    frame.write_xfrm(xml, "a")?;
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("</p:spPr>");
    xml.push_str("</p:pic>");
    Ok(())
}

fn write_chart_frame(xml: &mut String, shape_id: u32, frame: Frame, rel_id: &str) -> Result<()> {
    xml.push_str("<p:graphicFrame>");
    xml.push_str("<p:nvGraphicFramePr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="Chart {}"/>"#,
        shape_id, shape_id
    )?;
    xml.push_str("<p:cNvGraphicFramePr/>");
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvGraphicFramePr>");
    frame.write_xfrm(xml, "p")?;
    write!(
        xml,
        r#"<a:graphic><a:graphicData uri="{c}"><c:chart xmlns:c="{c}" xmlns:r="{r}" r:id="{}"/></a:graphicData></a:graphic>"#,
        rel_id,
        c = ns::C,
        r = ns::R
    )?;
    xml.push_str("</p:graphicFrame>");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::unit::{SLIDE_HEIGHT_16X9_EMU, SLIDE_WIDTH_EMU};
    use crate::presentation::TextAlign;

    fn frame() -> Frame {
        Frame::from_position(
            &Position::new(10.0, 50.0, 50.0, 10.0),
            SLIDE_WIDTH_EMU,
            SLIDE_HEIGHT_16X9_EMU,
        )
    }

    #[test]
    fn test_frame_from_position() {
        assert_eq!(
            frame(),
            Frame {
                x: 914_400,
                y: 2_571_750,
                cx: 4_572_000,
                cy: 514_350
            }
        );
    }

    #[test]
    fn test_text_box_xml() {
        let options = TextOptions {
            font_size: 24.0,
            font_face: Some("Inter".to_string()),
            color: "#1f2937".to_string(),
            bold: true,
            italic: false,
            align: TextAlign::Center,
            valign: VerticalAlign::Top,
            fill: Some("transparent".to_string()),
        };
        let shape = PptxShape::TextBox {
            text: "Q&A\nSecond".to_string(),
            position: Position::new(10.0, 50.0, 50.0, 10.0),
            options,
        };

        let mut xml = String::new();
        shape.to_xml(&mut xml, 2, frame(), None).unwrap();
        assert!(xml.contains(r#"<a:off x="914400" y="2571750"/>"#));
        assert!(xml.contains(r#"sz="2400""#));
        assert!(xml.contains(r#" b="1""#));
        assert!(!xml.contains(r#" i="1""#));
        assert!(xml.contains(r#"<a:srgbClr val="1F2937"/>"#));
        assert!(xml.contains(r#"<a:latin typeface="Inter"/>"#));
        assert!(xml.contains(r#"algn="ctr""#));
        assert!(xml.contains(r#"anchor="t""#));
        assert!(xml.contains("<a:t>Q&amp;A</a:t>"));
        assert_eq!(xml.matches("<a:p>").count(), 2);
        // transparent fill
        assert!(xml.contains("<a:noFill/>"));
    }

    #[test]
    fn test_rectangle_xml() {
        let shape = PptxShape::Rectangle {
            position: Position::new(0.0, 0.0, 100.0, 100.0),
            fill: Some("#60a5fa".to_string()),
            outline: Some(("#1e40af".to_string(), 1.0)),
        };
        let mut xml = String::new();
        shape.to_xml(&mut xml, 3, frame(), None).unwrap();
        assert!(xml.contains(r#"<a:solidFill><a:srgbClr val="60A5FA"/></a:solidFill>"#));
        assert!(xml.contains(r#"<a:ln w="12700"><a:solidFill><a:srgbClr val="1E40AF"/>"#));

        let bare = PptxShape::Rectangle {
            position: Position::new(0.0, 0.0, 100.0, 100.0),
            fill: Some("not-a-color".to_string()),
            outline: None,
        };
        let mut xml = String::new();
        bare.to_xml(&mut xml, 4, frame(), None).unwrap();
        assert!(xml.contains("<a:noFill/>"));
        assert!(!xml.contains("srgbClr"));
    }

    #[test]
    fn test_picture_and_chart_reference_relationship() {
        let pic = PptxShape::Picture {
            media: 0,
            position: Position::new(0.0, 0.0, 10.0, 10.0),
        };
        let mut xml = String::new();
        pic.to_xml(&mut xml, 5, frame(), Some("rId2")).unwrap();
        assert!(xml.contains(r#"<a:blip r:embed="rId2"/>"#));

        let chart = PptxShape::Chart {
            chart: 0,
            position: Position::new(0.0, 0.0, 10.0, 10.0),
        };
        let mut xml = String::new();
        chart.to_xml(&mut xml, 6, frame(), Some("rId3")).unwrap();
        assert!(xml.starts_with("<p:graphicFrame>"));
        assert!(xml.contains(r#"<p:xfrm><a:off"#));
        assert!(xml.contains(r#"r:id="rId3""#));
    }
}
