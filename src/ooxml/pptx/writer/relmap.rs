/// Relationship bookkeeping for the parts of a package being written.
///
/// Each part that references other parts owns one [`Relationships`] set.
/// Targets are added first and the returned relationship ID is then used in
/// the part's XML, so references are always backed by a relationship.
use super::constants::XML_DECL;
use crate::common::xml::escape_xml;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Relationship {
    r_id: String,
    reltype: &'static str,
    target: String,
}

/// The relationships of a single source part, numbered `rId1`, `rId2`, ...
#[derive(Debug, Default)]
pub(crate) struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its ID.
    pub fn add(&mut self, reltype: &'static str, target: impl Into<String>) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype,
            target: target.into(),
        });
        r_id
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Serialize to a `.rels` part.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(XML_DECL);
        xml.push('\n');
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for rel in &self.rels {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                rel.r_id,
                rel.reltype,
                escape_xml(&rel.target)
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}

/// Path of the `.rels` part belonging to `part_name`.
///
/// `ppt/slides/slide1.xml` becomes `ppt/slides/_rels/slide1.xml.rels`.
pub(crate) fn rels_part_name(part_name: &str) -> String {
    match part_name.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part_name),
    }
}

#[cfg(test)]
mod tests {
    use super::super::constants::rel_type;
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rel_type::SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml"), "rId1");
        assert_eq!(rels.add(rel_type::IMAGE, "../media/image1.png"), "rId2");
        assert_eq!(rels.len(), 2);

        let xml = rels.to_xml();
        assert!(xml.contains(r#"Id="rId2""#));
        assert!(xml.contains(r#"Target="../media/image1.png""#));
        assert!(xml.ends_with("</Relationships>"));
    }

    #[test]
    fn test_rels_part_name() {
        assert_eq!(
            rels_part_name("ppt/slides/slide1.xml"),
            "ppt/slides/_rels/slide1.xml.rels"
        );
        assert_eq!(rels_part_name(""), "_rels/.rels");
    }
}
