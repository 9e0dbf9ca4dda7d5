/// Fixed package parts: document properties, theme, master and layout.
///
/// Every exported deck uses one slide master with one blank layout; all
/// content is placed as free shapes on the slides themselves.
use super::constants::{XML_DECL, ns};
use super::slide::write_group_properties;
use crate::common::Metadata;
use crate::common::style::color::normalize_hex;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::template::ThemeColors;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as FmtWrite;

pub(crate) const APPLICATION: &str = "deckwright";

const CLR_MAP: &str = r#"bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink""#;

fn push_element(xml: &mut String, tag: &str, value: Option<&str>) {
    if let Some(value) = value {
        xml.push('<');
        xml.push_str(tag);
        xml.push('>');
        xml.push_str(&escape_xml(value));
        xml.push_str("</");
        xml.push_str(tag);
        xml.push('>');
    }
}

/// `docProps/core.xml`. Missing timestamps are filled with `now`.
pub(crate) fn core_properties_xml(metadata: &Metadata, now: DateTime<Utc>) -> String {
    let mut xml = String::with_capacity(1024);

    xml.push_str(XML_DECL);
    xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

    push_element(&mut xml, "dc:title", metadata.title.as_deref());
    push_element(&mut xml, "dc:subject", metadata.subject.as_deref());
    push_element(&mut xml, "dc:creator", metadata.author.as_deref());
    push_element(&mut xml, "cp:lastModifiedBy", metadata.author.as_deref());
    xml.push_str("<cp:revision>1</cp:revision>");

    let created = metadata.created.unwrap_or(now);
    let modified = metadata.modified.unwrap_or(now);
    xml.push_str(r#"<dcterms:created xsi:type="dcterms:W3CDTF">"#);
    xml.push_str(&created.to_rfc3339_opts(SecondsFormat::Secs, true));
    xml.push_str("</dcterms:created>");
    xml.push_str(r#"<dcterms:modified xsi:type="dcterms:W3CDTF">"#);
    xml.push_str(&modified.to_rfc3339_opts(SecondsFormat::Secs, true));
    xml.push_str("</dcterms:modified>");

    xml.push_str("</cp:coreProperties>");
    xml
}

/// `docProps/app.xml`.
pub(crate) fn app_properties_xml(
    metadata: &Metadata,
    slides: usize,
    notes: usize,
) -> Result<String> {
    let mut xml = String::with_capacity(512);

    xml.push_str(XML_DECL);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    write!(xml, "<Application>{}</Application>", APPLICATION)?;
    xml.push_str("<PresentationFormat>On-screen Show</PresentationFormat>");
    write!(xml, "<Slides>{}</Slides><Notes>{}</Notes>", slides, notes)?;
    push_element(&mut xml, "Company", metadata.company.as_deref());
    xml.push_str("</Properties>");
    Ok(xml)
}

/// `ppt/theme/themeN.xml` built from a five-color palette.
///
/// Colors that are not hex values fall back to a neutral scheme.
pub(crate) fn theme_xml(colors: &ThemeColors) -> Result<String> {
    let hex =
        |value: &str, fallback: &str| normalize_hex(value).unwrap_or_else(|| fallback.to_string());
    let scheme = [
        ("dk1", hex(&colors.text, "1F2937")),
        ("lt1", hex(&colors.background, "FFFFFF")),
        ("dk2", hex(&colors.primary, "1E40AF")),
        ("lt2", hex(&colors.secondary, "E5E7EB")),
        ("accent1", hex(&colors.primary, "1E40AF")),
        ("accent2", hex(&colors.secondary, "3B82F6")),
        ("accent3", hex(&colors.accent, "60A5FA")),
        ("accent4", "10B981".to_string()),
        ("accent5", "F59E0B".to_string()),
        ("accent6", "EF4444".to_string()),
        ("hlink", hex(&colors.primary, "1E40AF")),
        ("folHlink", hex(&colors.secondary, "3B82F6")),
    ];

    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECL);
    write!(xml, r#"<a:theme xmlns:a="{}" name="Deck Theme">"#, ns::A)?;
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="Deck">"#);
    for (name, value) in &scheme {
        write!(xml, r#"<a:{n}><a:srgbClr val="{}"/></a:{n}>"#, value, n = name)?;
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(r#"<a:fontScheme name="Deck">"#);
    for group in ["majorFont", "minorFont"] {
        write!(
            xml,
            r#"<a:{g}><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:{g}>"#,
            g = group
        )?;
    }
    xml.push_str("</a:fontScheme>");

    xml.push_str(r#"<a:fmtScheme name="Deck">"#);
    xml.push_str("<a:fillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:fillStyleLst>");
    xml.push_str("<a:lnStyleLst>");
    for width in [6350, 12700, 19050] {
        write!(
            xml,
            r#"<a:ln w="{}"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>"#,
            width
        )?;
    }
    xml.push_str("</a:lnStyleLst>");
    xml.push_str("<a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst>");
    xml.push_str("<a:bgFillStyleLst>");
    for _ in 0..3 {
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    }
    xml.push_str("</a:bgFillStyleLst>");
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements>");
    xml.push_str("</a:theme>");
    Ok(xml)
}

/// `ppt/slideMasters/slideMaster1.xml`; its layout is `rId1`, its theme `rId2`.
pub(crate) fn slide_master_xml() -> Result<String> {
    let mut xml = String::with_capacity(1024);
    xml.push_str(XML_DECL);
    write!(
        xml,
        r#"<p:sldMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        ns::A,
        ns::R,
        ns::P
    )?;
    xml.push_str("<p:cSld>");
    xml.push_str(r#"<p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#);
    xml.push_str("<p:spTree>");
    write_group_properties(&mut xml);
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    write!(xml, "<p:clrMap {}/>", CLR_MAP)?;
    xml.push_str(
        r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
    );
    xml.push_str("</p:sldMaster>");
    Ok(xml)
}

/// `ppt/slideLayouts/slideLayout1.xml`, a blank layout.
pub(crate) fn slide_layout_xml() -> Result<String> {
    let mut xml = String::with_capacity(768);
    xml.push_str(XML_DECL);
    write!(
        xml,
        r#"<p:sldLayout xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" type="blank" preserve="1">"#,
        ns::A,
        ns::R,
        ns::P
    )?;
    xml.push_str(r#"<p:cSld name="Blank">"#);
    xml.push_str("<p:spTree>");
    write_group_properties(&mut xml);
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
    xml.push_str("</p:sldLayout>");
    Ok(xml)
}

/// `ppt/notesMasters/notesMaster1.xml`; its theme is `rId1`.
pub(crate) fn notes_master_xml() -> Result<String> {
    let mut xml = String::with_capacity(768);
    xml.push_str(XML_DECL);
    write!(
        xml,
        r#"<p:notesMaster xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        ns::A,
        ns::R,
        ns::P
    )?;
    xml.push_str("<p:cSld>");
    xml.push_str("<p:spTree>");
    write_group_properties(&mut xml);
    xml.push_str("</p:spTree>");
    xml.push_str("</p:cSld>");
    write!(xml, "<p:clrMap {}/>", CLR_MAP)?;
    xml.push_str("</p:notesMaster>");
    Ok(xml)
}
