//! Chart parts (`ppt/charts/chartN.xml`).
//!
//! Chart data is written as literal caches (`c:strLit` / `c:numLit`); no
//! embedded workbook is produced.

use super::constants::{XML_DECL, ns};
use crate::common::style::color::normalize_hex;
use crate::common::xml::escape_xml;
use crate::export::{ChartKind, ChartSeries, SinkError};
use std::io::Write;

/// A validated chart waiting to be written as its own part.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartPart {
    kind: ChartKind,
    series: ChartSeries,
    /// Data point fills as `RRGGBB`, cycled over the points.
    palette: Vec<String>,
}

impl ChartPart {
    /// Check the series and capture the palette.
    pub fn new(kind: ChartKind, series: &ChartSeries, palette: &[&str]) -> Result<Self, SinkError> {
        if series.labels.len() != series.values.len() {
            return Err(SinkError::Chart(format!(
                "{} labels for {} values",
                series.labels.len(),
                series.values.len()
            )));
        }
        if series.values.is_empty() {
            return Err(SinkError::Chart("series has no values".to_string()));
        }
        if let Some(bad) = series.values.iter().find(|v| !v.is_finite()) {
            return Err(SinkError::Chart(format!("non-finite value {}", bad)));
        }

        Ok(Self {
            kind,
            series: series.clone(),
            palette: palette.iter().filter_map(|c| normalize_hex(c)).collect(),
        })
    }

    pub fn to_xml(&self) -> std::io::Result<Vec<u8>> {
        let mut writer = Vec::with_capacity(2048 + self.series.values.len() * 256);
        write_chart_space(&mut writer, self)?;
        Ok(writer)
    }
}

fn write_chart_space<W: Write>(writer: &mut W, chart: &ChartPart) -> std::io::Result<()> {
    write!(writer, "{}", XML_DECL)?;
    write!(
        writer,
        r#"<c:chartSpace xmlns:c="{}" xmlns:a="{}" xmlns:r="{}">"#,
        ns::C,
        ns::A,
        ns::R
    )?;
    write!(writer, r#"<c:date1904 val="0"/><c:lang val="en-US"/>"#)?;
    write!(writer, r#"<c:roundedCorners val="0"/>"#)?;

    write!(writer, "<c:chart>")?;
    write!(writer, r#"<c:autoTitleDeleted val="1"/>"#)?;
    write!(writer, "<c:plotArea><c:layout/>")?;
    match chart.kind {
        ChartKind::Bar => write_bar_chart(writer, chart)?,
    }
    write_category_axis(writer)?;
    write_value_axis(writer)?;
    write!(writer, "</c:plotArea>")?;
    write!(
        writer,
        r#"<c:legend><c:legendPos val="b"/><c:overlay val="0"/></c:legend>"#
    )?;
    write!(writer, r#"<c:plotVisOnly val="1"/><c:dispBlanksAs val="gap"/>"#)?;
    write!(writer, "</c:chart>")?;

    write!(writer, "</c:chartSpace>")?;
    Ok(())
}

fn write_bar_chart<W: Write>(writer: &mut W, chart: &ChartPart) -> std::io::Result<()> {
    write!(writer, "<c:barChart>")?;
    write!(writer, r#"<c:barDir val="col"/>"#)?;
    write!(writer, r#"<c:grouping val="clustered"/>"#)?;
    write!(writer, r#"<c:varyColors val="0"/>"#)?;

    write_series(writer, chart)?;

    write!(writer, r#"<c:gapWidth val="150"/>"#)?;
    write!(writer, r#"<c:axId val="1"/><c:axId val="2"/>"#)?;
    write!(writer, "</c:barChart>")?;
    Ok(())
}

fn write_series<W: Write>(writer: &mut W, chart: &ChartPart) -> std::io::Result<()> {
    let series = &chart.series;

    write!(writer, "<c:ser>")?;
    write!(writer, r#"<c:idx val="0"/><c:order val="0"/>"#)?;
    write!(writer, "<c:tx><c:v>{}</c:v></c:tx>", escape_xml(&series.name))?;

    if let Some(first) = chart.palette.first() {
        write_sp_pr(writer, first)?;
    }
    write!(writer, r#"<c:invertIfNegative val="0"/>"#)?;

    // one fill per bar when there is more than one color to cycle
    if chart.palette.len() > 1 {
        for (idx, color) in chart
            .palette
            .iter()
            .cycle()
            .take(series.values.len())
            .enumerate()
        {
            write!(writer, "<c:dPt>")?;
            write!(writer, r#"<c:idx val="{}"/>"#, idx)?;
            write!(writer, r#"<c:invertIfNegative val="0"/><c:bubble3D val="0"/>"#)?;
            write_sp_pr(writer, color)?;
            write!(writer, "</c:dPt>")?;
        }
    }

    write!(writer, "<c:cat><c:strLit>")?;
    write!(writer, r#"<c:ptCount val="{}"/>"#, series.labels.len())?;
    for (idx, label) in series.labels.iter().enumerate() {
        write!(
            writer,
            r#"<c:pt idx="{}"><c:v>{}</c:v></c:pt>"#,
            idx,
            escape_xml(label)
        )?;
    }
    write!(writer, "</c:strLit></c:cat>")?;

    write!(writer, "<c:val><c:numLit>")?;
    write!(writer, "<c:formatCode>General</c:formatCode>")?;
    write!(writer, r#"<c:ptCount val="{}"/>"#, series.values.len())?;
    for (idx, value) in series.values.iter().enumerate() {
        write!(writer, r#"<c:pt idx="{}"><c:v>{}</c:v></c:pt>"#, idx, value)?;
    }
    write!(writer, "</c:numLit></c:val>")?;

    write!(writer, "</c:ser>")?;
    Ok(())
}

fn write_sp_pr<W: Write>(writer: &mut W, hex: &str) -> std::io::Result<()> {
    write!(
        writer,
        r#"<c:spPr><a:solidFill><a:srgbClr val="{}"/></a:solidFill></c:spPr>"#,
        hex
    )
}

fn write_category_axis<W: Write>(writer: &mut W) -> std::io::Result<()> {
    write!(writer, "<c:catAx>")?;
    write!(writer, r#"<c:axId val="1"/>"#)?;
    write!(writer, r#"<c:scaling><c:orientation val="minMax"/></c:scaling>"#)?;
    write!(writer, r#"<c:delete val="0"/><c:axPos val="b"/>"#)?;
    write!(writer, r#"<c:numFmt formatCode="General" sourceLinked="0"/>"#)?;
    write!(
        writer,
        r#"<c:majorTickMark val="out"/><c:minorTickMark val="none"/><c:tickLblPos val="nextTo"/>"#
    )?;
    write!(writer, r#"<c:crossAx val="2"/><c:crosses val="autoZero"/>"#)?;
    write!(writer, r#"<c:auto val="1"/><c:lblAlgn val="ctr"/>"#)?;
    write!(writer, r#"<c:lblOffset val="100"/><c:noMultiLvlLbl val="0"/>"#)?;
    write!(writer, "</c:catAx>")?;
    Ok(())
}

fn write_value_axis<W: Write>(writer: &mut W) -> std::io::Result<()> {
    write!(writer, "<c:valAx>")?;
    write!(writer, r#"<c:axId val="2"/>"#)?;
    write!(writer, r#"<c:scaling><c:orientation val="minMax"/></c:scaling>"#)?;
    write!(writer, r#"<c:delete val="0"/><c:axPos val="l"/><c:majorGridlines/>"#)?;
    write!(writer, r#"<c:numFmt formatCode="General" sourceLinked="0"/>"#)?;
    write!(
        writer,
        r#"<c:majorTickMark val="out"/><c:minorTickMark val="none"/><c:tickLblPos val="nextTo"/>"#
    )?;
    write!(writer, r#"<c:crossAx val="1"/><c:crosses val="autoZero"/>"#)?;
    write!(writer, r#"<c:crossBetween val="between"/>"#)?;
    write!(writer, "</c:valAx>")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> ChartSeries {
        ChartSeries {
            name: "Revenue & Costs".to_string(),
            labels: vec!["Q1".to_string(), "Q2".to_string(), "Q3".to_string(), "Q4".to_string()],
            values: vec![12.0, 19.5, 3.0, 5.0],
        }
    }

    #[test]
    fn test_chart_xml() {
        let chart =
            ChartPart::new(ChartKind::Bar, &series(), &["#1e40af", "#3b82f6", "#60a5fa"]).unwrap();
        let xml = String::from_utf8(chart.to_xml().unwrap()).unwrap();

        assert!(xml.starts_with(XML_DECL));
        assert!(xml.contains(r#"<c:barDir val="col"/>"#));
        assert!(xml.contains("<c:v>Revenue &amp; Costs</c:v>"));
        assert!(xml.contains(r#"<c:pt idx="1"><c:v>Q2</c:v></c:pt>"#));
        assert!(xml.contains(r#"<c:pt idx="1"><c:v>19.5</c:v></c:pt>"#));
        assert!(xml.contains(r#"<c:pt idx="0"><c:v>12</c:v></c:pt>"#));
        assert_eq!(xml.matches("<c:dPt>").count(), 4);
        // the fourth bar wraps around to the first palette color
        assert!(xml.contains(
            r#"<c:idx val="3"/><c:invertIfNegative val="0"/><c:bubble3D val="0"/><c:spPr><a:solidFill><a:srgbClr val="1E40AF"/>"#
        ));
        assert!(xml.ends_with("</c:chartSpace>"));
    }

    #[test]
    fn test_single_color_palette_has_no_points() {
        let chart = ChartPart::new(ChartKind::Bar, &series(), &["#10b981", "bogus"]).unwrap();
        let xml = String::from_utf8(chart.to_xml().unwrap()).unwrap();
        assert_eq!(xml.matches("<c:dPt>").count(), 0);
        assert!(xml.contains(r#"<a:srgbClr val="10B981"/>"#));
    }

    #[test]
    fn test_rejects_malformed_series() {
        let mut mismatched = series();
        mismatched.values.pop();
        assert!(matches!(
            ChartPart::new(ChartKind::Bar, &mismatched, &[]),
            Err(SinkError::Chart(_))
        ));

        let mut nan = series();
        nan.values[0] = f64::NAN;
        assert!(ChartPart::new(ChartKind::Bar, &nan, &[]).is_err());

        let empty = ChartSeries {
            name: "Empty".to_string(),
            labels: vec![],
            values: vec![],
        };
        assert!(ChartPart::new(ChartKind::Bar, &empty, &[]).is_err());
    }
}
