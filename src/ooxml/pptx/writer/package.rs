/// ZIP assembly of an OPC package.
///
/// Parts are buffered until [`PackageWriter::finish`] so that
/// `[Content_Types].xml` can be written first, listing every part.
use super::constants::{XML_DECL, content_type as ct};
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use std::collections::BTreeMap;
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

pub(crate) const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

#[derive(Debug)]
pub(crate) struct PackageWriter {
    parts: Vec<(String, Vec<u8>)>,
    /// Default content types by extension
    defaults: BTreeMap<String, String>,
    /// Override content types by partname (with leading `/`)
    overrides: BTreeMap<String, String>,
}

impl PackageWriter {
    pub fn new() -> Self {
        let mut defaults = BTreeMap::new();
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            parts: Vec::new(),
            defaults,
            overrides: BTreeMap::new(),
        }
    }

    /// Add a part with its own content type override.
    pub fn add_part(&mut self, name: &str, content_type: &str, content: impl Into<Vec<u8>>) {
        self.overrides
            .insert(format!("/{}", name), content_type.to_string());
        self.parts.push((name.to_string(), content.into()));
    }

    /// Add a part typed by its extension (relationships, media).
    pub fn add_default_part(
        &mut self,
        name: &str,
        extension: &str,
        content_type: &str,
        content: impl Into<Vec<u8>>,
    ) {
        self.defaults
            .entry(extension.to_string())
            .or_insert_with(|| content_type.to_string());
        self.parts.push((name.to_string(), content.into()));
    }

    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    fn content_types_xml(&self) -> String {
        let mut xml = String::with_capacity(512 + self.overrides.len() * 160);

        xml.push_str(XML_DECL);
        xml.push_str(
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
        );
        for (ext, content_type) in &self.defaults {
            xml.push_str(&format!(
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            ));
        }
        for (part_name, content_type) in &self.overrides {
            xml.push_str(&format!(
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(part_name),
                escape_xml(content_type)
            ));
        }
        xml.push_str("</Types>");
        xml
    }

    /// Write the ZIP container and return its bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        zip.start_file(CONTENT_TYPES_PART, options)?;
        zip.write_all(self.content_types_xml().as_bytes())?;

        for (name, content) in &self.parts {
            zip.start_file(name.as_str(), options)?;
            zip.write_all(content)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}
