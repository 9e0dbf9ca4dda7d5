/// Presentation writer for PPTX.
use super::constants::{XML_DECL, content_type as ct, ns, rel_type};
use super::package::PackageWriter;
use super::parts;
use super::relmap::{Relationships, rels_part_name};
use super::slide::{PptxSlide, SlideRelIds};
use crate::common::Metadata;
use crate::common::unit::{SLIDE_HEIGHT_4X3_EMU, SLIDE_HEIGHT_16X9_EMU, SLIDE_WIDTH_EMU};
use crate::export::{DocumentSink, SinkError, SlideSize};
use crate::ooxml::error::Result;
use crate::template::ThemeColors;
use chrono::Utc;
use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};

/// A PowerPoint presentation being written.
///
/// Collects slides through the [`DocumentSink`] interface and assembles the
/// package on [`DocumentSink::serialize`].
#[derive(Debug)]
pub struct PptxDocument {
    slides: Vec<PptxSlide>,
    size: SlideSize,
    metadata: Metadata,
    theme: ThemeColors,
}

/// A finished `.pptx` package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PptxArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PptxArtifact {
    /// Write the package into `dir` under its file name.
    pub fn save_to(&self, dir: impl AsRef<Path>) -> crate::common::Result<PathBuf> {
        let path = dir.as_ref().join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        log::info!("saved {} ({} bytes)", path.display(), self.bytes.len());
        Ok(path)
    }
}

impl Default for PptxDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PptxDocument {
    /// Create an empty 16:9 presentation with a neutral theme.
    pub fn new() -> Self {
        Self::with_theme(ThemeColors::new(
            "#1e40af", "#3b82f6", "#60a5fa", "#ffffff", "#1f2937",
        ))
    }

    /// Create an empty presentation whose theme part carries `colors`.
    pub fn with_theme(colors: ThemeColors) -> Self {
        Self {
            slides: Vec::new(),
            size: SlideSize::default(),
            metadata: Metadata::default(),
            theme: colors,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[PptxSlide] {
        &self.slides
    }

    pub fn slide_size(&self) -> SlideSize {
        self.size
    }

    /// Slide width and height in EMU.
    pub fn dimensions(&self) -> (i64, i64) {
        match self.size {
            SlideSize::Widescreen => (SLIDE_WIDTH_EMU, SLIDE_HEIGHT_16X9_EMU),
            SlideSize::Standard => (SLIDE_WIDTH_EMU, SLIDE_HEIGHT_4X3_EMU),
        }
    }

    /// Generate presentation.xml content.
    ///
    /// `slide_rel_ids` holds one relationship ID per slide, in slide order.
    fn presentation_xml(
        &self,
        slide_rel_ids: &[String],
        notes_master_rel_id: Option<&str>,
    ) -> Result<String> {
        let (cx, cy) = self.dimensions();
        let mut xml = String::with_capacity(1024 + slide_rel_ids.len() * 48);

        xml.push_str(XML_DECL);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            ns::A,
            ns::R,
            ns::P
        )?;

        xml.push_str("<p:sldMasterIdLst>");
        xml.push_str(r#"<p:sldMasterId id="2147483648" r:id="rId1"/>"#);
        xml.push_str("</p:sldMasterIdLst>");

        if let Some(r_id) = notes_master_rel_id {
            write!(
                xml,
                r#"<p:notesMasterIdLst><p:notesMasterId r:id="{}"/></p:notesMasterIdLst>"#,
                r_id
            )?;
        }

        if !slide_rel_ids.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for (index, r_id) in slide_rel_ids.iter().enumerate() {
                // slide ids start at 256
                write!(xml, r#"<p:sldId id="{}" r:id="{}"/>"#, index + 256, r_id)?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        let size_type = match self.size {
            SlideSize::Widescreen => "screen16x9",
            SlideSize::Standard => "screen4x3",
        };
        write!(xml, r#"<p:sldSz cx="{}" cy="{}" type="{}"/>"#, cx, cy, size_type)?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");

        Ok(xml)
    }

    /// Assemble the complete package.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let (cx, cy) = self.dimensions();
        let mut pkg = PackageWriter::new();
        let has_notes = self.slides.iter().any(PptxSlide::has_notes);

        // package relationships
        let mut root_rels = Relationships::new();
        root_rels.add(rel_type::OFFICE_DOCUMENT, "ppt/presentation.xml");
        root_rels.add(rel_type::CORE_PROPERTIES, "docProps/core.xml");
        root_rels.add(rel_type::EXTENDED_PROPERTIES, "docProps/app.xml");
        pkg.add_default_part(
            &rels_part_name(""),
            "rels",
            ct::OPC_RELATIONSHIPS,
            root_rels.to_xml(),
        );

        pkg.add_part(
            "docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            parts::core_properties_xml(&self.metadata, Utc::now()),
        );
        let notes_count = self.slides.iter().filter(|s| s.has_notes()).count();
        pkg.add_part(
            "docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            parts::app_properties_xml(&self.metadata, self.slides.len(), notes_count)?,
        );

        // presentation relationships: master first, it is referenced as rId1
        let mut pres_rels = Relationships::new();
        pres_rels.add(rel_type::SLIDE_MASTER, "slideMasters/slideMaster1.xml");
        let slide_rel_ids: Vec<String> = (1..=self.slides.len())
            .map(|n| pres_rels.add(rel_type::SLIDE, format!("slides/slide{}.xml", n)))
            .collect();
        let notes_master_rel_id = has_notes
            .then(|| pres_rels.add(rel_type::NOTES_MASTER, "notesMasters/notesMaster1.xml"));
        pres_rels.add(rel_type::THEME, "theme/theme1.xml");

        let pres_part = "ppt/presentation.xml";
        pkg.add_part(
            pres_part,
            ct::PML_PRESENTATION_MAIN,
            self.presentation_xml(&slide_rel_ids, notes_master_rel_id.as_deref())?,
        );
        pkg.add_default_part(
            &rels_part_name(pres_part),
            "rels",
            ct::OPC_RELATIONSHIPS,
            pres_rels.to_xml(),
        );

        self.write_masters(&mut pkg, has_notes)?;

        let mut image_counter = 0;
        let mut chart_counter = 0;
        let mut notes_counter = 0;
        for (index, slide) in self.slides.iter().enumerate() {
            let slide_part = format!("ppt/slides/slide{}.xml", index + 1);
            let mut rels = Relationships::new();
            rels.add(rel_type::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");

            let mut rel_ids = SlideRelIds::default();
            for blob in slide.media() {
                image_counter += 1;
                let ext = blob.format.extension();
                let name = format!("image{}.{}", image_counter, ext);
                rel_ids
                    .media
                    .push(rels.add(rel_type::IMAGE, format!("../media/{}", name)));
                pkg.add_default_part(
                    &format!("ppt/media/{}", name),
                    ext,
                    blob.format.mime_type(),
                    blob.bytes.clone(),
                );
            }

            for chart in slide.charts() {
                chart_counter += 1;
                let name = format!("chart{}.xml", chart_counter);
                rel_ids
                    .charts
                    .push(rels.add(rel_type::CHART, format!("../charts/{}", name)));
                pkg.add_part(&format!("ppt/charts/{}", name), ct::DML_CHART, chart.to_xml()?);
            }

            if let Some(notes_xml) = slide.notes_xml() {
                notes_counter += 1;
                let notes_part = format!("ppt/notesSlides/notesSlide{}.xml", notes_counter);
                rels.add(
                    rel_type::NOTES_SLIDE,
                    format!("../notesSlides/notesSlide{}.xml", notes_counter),
                );

                let mut notes_rels = Relationships::new();
                notes_rels.add(rel_type::NOTES_MASTER, "../notesMasters/notesMaster1.xml");
                notes_rels.add(rel_type::SLIDE, format!("../slides/slide{}.xml", index + 1));
                pkg.add_part(&notes_part, ct::PML_NOTES_SLIDE, notes_xml?);
                pkg.add_default_part(
                    &rels_part_name(&notes_part),
                    "rels",
                    ct::OPC_RELATIONSHIPS,
                    notes_rels.to_xml(),
                );
            }

            pkg.add_part(&slide_part, ct::PML_SLIDE, slide.to_xml(cx, cy, &rel_ids)?);
            pkg.add_default_part(
                &rels_part_name(&slide_part),
                "rels",
                ct::OPC_RELATIONSHIPS,
                rels.to_xml(),
            );
        }

        log::debug!(
            "assembled package: {} parts, {} slides, {} images, {} charts, {} notes",
            pkg.part_count(),
            self.slides.len(),
            image_counter,
            chart_counter,
            notes_counter
        );
        pkg.finish()
    }

    fn write_masters(&self, pkg: &mut PackageWriter, has_notes: bool) -> Result<()> {
        let master_part = "ppt/slideMasters/slideMaster1.xml";
        let mut master_rels = Relationships::new();
        master_rels.add(rel_type::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml");
        master_rels.add(rel_type::THEME, "../theme/theme1.xml");
        pkg.add_part(master_part, ct::PML_SLIDE_MASTER, parts::slide_master_xml()?);
        pkg.add_default_part(
            &rels_part_name(master_part),
            "rels",
            ct::OPC_RELATIONSHIPS,
            master_rels.to_xml(),
        );

        let layout_part = "ppt/slideLayouts/slideLayout1.xml";
        let mut layout_rels = Relationships::new();
        layout_rels.add(rel_type::SLIDE_MASTER, "../slideMasters/slideMaster1.xml");
        pkg.add_part(layout_part, ct::PML_SLIDE_LAYOUT, parts::slide_layout_xml()?);
        pkg.add_default_part(
            &rels_part_name(layout_part),
            "rels",
            ct::OPC_RELATIONSHIPS,
            layout_rels.to_xml(),
        );

        let theme = parts::theme_xml(&self.theme)?;
        pkg.add_part("ppt/theme/theme1.xml", ct::OFC_THEME, theme.clone());

        if has_notes {
            // the notes master gets its own copy of the theme
            let notes_master_part = "ppt/notesMasters/notesMaster1.xml";
            let mut notes_master_rels = Relationships::new();
            notes_master_rels.add(rel_type::THEME, "../theme/theme2.xml");
            pkg.add_part(notes_master_part, ct::PML_NOTES_MASTER, parts::notes_master_xml()?);
            pkg.add_default_part(
                &rels_part_name(notes_master_part),
                "rels",
                ct::OPC_RELATIONSHIPS,
                notes_master_rels.to_xml(),
            );
            pkg.add_part("ppt/theme/theme2.xml", ct::OFC_THEME, theme);
        }

        Ok(())
    }
}

impl DocumentSink for PptxDocument {
    type Slide = PptxSlide;
    type Artifact = PptxArtifact;

    fn set_layout(&mut self, size: SlideSize) {
        self.size = size;
    }

    fn set_metadata(&mut self, metadata: &Metadata) {
        self.metadata = metadata.clone();
    }

    fn add_slide(&mut self) -> &mut PptxSlide {
        self.slides.push(PptxSlide::new());
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    fn serialize(self, file_name: &str) -> std::result::Result<PptxArtifact, SinkError> {
        let bytes = self
            .to_bytes()
            .map_err(|e| SinkError::Serialize(e.to_string()))?;

        Ok(PptxArtifact {
            file_name: file_name.to_string(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::image::tests::png_data_uri;
    use super::*;
    use crate::export::{ChartKind, ChartSeries, ShapeKind, ShapeOptions, SlideSink, TextOptions};
    use crate::presentation::Position;
    use std::io::{Cursor, Read};
    use zip::ZipArchive;

    fn read_part(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> String {
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    fn sample_document() -> PptxDocument {
        let mut doc = PptxDocument::with_theme(ThemeColors::new(
            "#059669", "#10b981", "#34d399", "#f0fdf4", "#064e3b",
        ));
        doc.set_metadata(&Metadata {
            title: Some("Growth Plan".to_string()),
            author: Some("deckwright".to_string()),
            company: Some("deckwright".to_string()),
            ..Default::default()
        });

        let pos = Position::new(10.0, 10.0, 80.0, 20.0);
        let first = doc.add_slide();
        first.set_background("#f0fdf4");
        first.add_text("Growth Plan", &pos, &TextOptions::centered(24.0, "#064e3b"));
        first.add_image(&png_data_uri(), &pos).unwrap();
        first.add_notes("Open with the headline number");

        let second = doc.add_slide();
        second
            .add_chart(
                ChartKind::Bar,
                &ChartSeries {
                    name: "Sales".to_string(),
                    labels: vec!["Q1".to_string(), "Q2".to_string()],
                    values: vec![10.0, 20.0],
                },
                &pos,
                &["#059669", "#10b981", "#34d399"],
            )
            .unwrap();
        second.add_shape(
            ShapeKind::Rectangle,
            &pos,
            &ShapeOptions {
                fill: Some("#34d399".to_string()),
                outline: None,
            },
        );
        doc
    }

    #[test]
    fn test_empty_document_is_a_valid_package() {
        let bytes = PptxDocument::new().to_bytes().unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let pres = read_part(&mut archive, "ppt/presentation.xml");
        assert!(!pres.contains("<p:sldIdLst>"));
        assert!(pres.contains(r#"<p:sldSz cx="9144000" cy="5143500" type="screen16x9"/>"#));
        assert!(archive.by_name("ppt/notesMasters/notesMaster1.xml").is_err());
        assert!(archive.by_name("_rels/.rels").is_ok());
    }

    #[test]
    fn test_package_parts() {
        let artifact = sample_document().serialize("growth.pptx").unwrap();
        assert_eq!(artifact.file_name, "growth.pptx");

        let mut archive = ZipArchive::new(Cursor::new(artifact.bytes)).unwrap();
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/core.xml",
            "docProps/app.xml",
            "ppt/presentation.xml",
            "ppt/_rels/presentation.xml.rels",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/theme/theme1.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/media/image1.png",
            "ppt/charts/chart1.xml",
            "ppt/notesSlides/notesSlide1.xml",
            "ppt/notesMasters/notesMaster1.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {}", name);
        }

        let types = read_part(&mut archive, "[Content_Types].xml");
        assert!(types.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(types.contains(r#"PartName="/ppt/charts/chart1.xml""#));
        assert!(types.contains(r#"PartName="/ppt/notesSlides/notesSlide1.xml""#));

        let pres = read_part(&mut archive, "ppt/presentation.xml");
        assert!(pres.contains(r#"<p:sldId id="256" r:id="rId2"/><p:sldId id="257" r:id="rId3"/>"#));
        assert!(pres.contains(r#"<p:notesMasterId r:id="rId4"/>"#));

        let slide1_rels = read_part(&mut archive, "ppt/slides/_rels/slide1.xml.rels");
        assert!(slide1_rels.contains(
            r#"Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="../media/image1.png""#
        ));
        assert!(slide1_rels.contains("../notesSlides/notesSlide1.xml"));

        let slide2 = read_part(&mut archive, "ppt/slides/slide2.xml");
        assert!(slide2.contains(r#"r:id="rId2""#));
        assert!(!slide2.contains("<p:bg>"));

        let theme = read_part(&mut archive, "ppt/theme/theme1.xml");
        assert!(theme.contains(r#"<a:accent1><a:srgbClr val="059669"/></a:accent1>"#));

        let core = read_part(&mut archive, "docProps/core.xml");
        assert!(core.contains("<dc:title>Growth Plan</dc:title>"));
        let app = read_part(&mut archive, "docProps/app.xml");
        assert!(app.contains("<Slides>2</Slides><Notes>1</Notes>"));
    }

    #[test]
    fn test_standard_layout() {
        let mut doc = PptxDocument::new();
        doc.set_layout(SlideSize::Standard);
        assert_eq!(doc.dimensions(), (9_144_000, 6_858_000));

        doc.add_slide().add_text(
            "Body",
            &Position::new(0.0, 50.0, 100.0, 10.0),
            &TextOptions::centered(18.0, "#000000"),
        );
        let mut archive = ZipArchive::new(Cursor::new(doc.to_bytes().unwrap())).unwrap();
        let slide = read_part(&mut archive, "ppt/slides/slide1.xml");
        assert!(slide.contains(r#"<a:off x="0" y="3429000"/>"#));
    }

    #[test]
    fn test_save_to() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = sample_document().serialize("deck.pptx").unwrap();
        let path = artifact.save_to(dir.path()).unwrap();

        assert_eq!(path, dir.path().join("deck.pptx"));
        assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
    }
}
