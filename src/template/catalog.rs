//! Templates and the template catalog.

use super::layout::{ElementPlaceholder, Layout, LayoutKind};
use super::theme::ThemeColors;
use crate::common::{Error, Result};
use crate::presentation::{ElementKind, ElementStyle, FontWeight, Position, TextAlign};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Template grouping shown in the template picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Business,
    Minimal,
    Creative,
    Academic,
}

/// A named visual style plus its layouts. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: TemplateCategory,
    pub colors: ThemeColors,
    #[serde(default)]
    pub layouts: Vec<Layout>,
}

impl Template {
    /// The layout with `layout_id`, falling back to the first layout.
    pub fn layout_or_first(&self, layout_id: Option<&str>) -> Option<&Layout> {
        layout_id
            .and_then(|id| self.layouts.iter().find(|l| l.id == id))
            .or_else(|| self.layouts.first())
    }
}

/// A read-only, ordered list of templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

static BUILTIN: Lazy<TemplateCatalog> = Lazy::new(|| TemplateCatalog {
    templates: builtin_templates(),
});

impl TemplateCatalog {
    pub fn new(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> &'static TemplateCatalog {
        &BUILTIN
    }

    /// Load a catalog from YAML: a `templates` sequence of template records.
    ///
    /// Template ids must be unique.
    ///
    /// ```rust
    /// use deckwright::template::TemplateCatalog;
    ///
    /// let yaml = r##"
    /// templates:
    ///   - id: plain
    ///     name: Plain
    ///     category: minimal
    ///     colors: { primary: "#000000", secondary: "#333333", accent: "#666666", background: "#ffffff", text: "#000000" }
    ///     layouts:
    ///       - id: title-slide
    ///         name: Title Slide
    ///         type: title
    ///         elements:
    ///           - id: title
    ///             type: text
    ///             position: { x: 10, y: 40, width: 80, height: 20 }
    ///             style: { fontSize: 40 }
    /// "##;
    /// let catalog = TemplateCatalog::from_yaml(yaml).unwrap();
    /// assert_eq!(catalog.by_id("plain").unwrap().layouts[0].placeholders.len(), 1);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let catalog: TemplateCatalog = serde_saphyr::from_str(yaml)?;

        for (i, template) in catalog.templates.iter().enumerate() {
            if catalog.templates[..i].iter().any(|t| t.id == template.id) {
                return Err(Error::ParseError(format!(
                    "duplicate template id '{}'",
                    template.id
                )));
            }
        }

        Ok(catalog)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn by_id(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    pub fn by_category(&self, category: TemplateCategory) -> impl Iterator<Item = &Template> {
        self.templates.iter().filter(move |t| t.category == category)
    }
}

fn text_slot(
    id: &str,
    (x, y, width, height): (f64, f64, f64, f64),
    font_size: f64,
    weight: Option<FontWeight>,
    align: Option<TextAlign>,
) -> ElementPlaceholder {
    ElementPlaceholder::new(
        id,
        ElementKind::Text,
        Position::new(x, y, width, height),
        ElementStyle {
            font_size: Some(font_size),
            font_weight: weight,
            text_align: align,
            ..Default::default()
        },
    )
}

fn title_layout(placeholders: Vec<ElementPlaceholder>) -> Layout {
    Layout {
        id: "title-slide".to_string(),
        name: "Title Slide".to_string(),
        kind: LayoutKind::Title,
        placeholders,
    }
}

fn template(
    id: &str,
    name: &str,
    description: &str,
    category: TemplateCategory,
    colors: ThemeColors,
    layouts: Vec<Layout>,
) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        colors,
        layouts,
    }
}

fn builtin_templates() -> Vec<Template> {
    use FontWeight::{Bold, Normal};
    use TemplateCategory::*;
    use TextAlign::{Center, Left};

    vec![
        template(
            "business-corporate",
            "Corporate Professional",
            "Clean and professional design perfect for business presentations",
            Business,
            ThemeColors::new("#1e40af", "#3b82f6", "#60a5fa", "#ffffff", "#1f2937"),
            vec![
                title_layout(vec![
                    text_slot("title", (10.0, 30.0, 80.0, 20.0), 44.0, Some(Bold), Some(Center)),
                    text_slot("subtitle", (10.0, 55.0, 80.0, 10.0), 20.0, None, Some(Center)),
                ]),
                Layout {
                    id: "content-slide".to_string(),
                    name: "Content Slide".to_string(),
                    kind: LayoutKind::Content,
                    placeholders: vec![
                        text_slot("title", (10.0, 10.0, 80.0, 15.0), 32.0, Some(Bold), None),
                        text_slot("content", (10.0, 30.0, 80.0, 60.0), 18.0, None, None),
                    ],
                },
            ],
        ),
        template(
            "business-modern",
            "Modern Business",
            "Contemporary design with bold colors for impactful presentations",
            Business,
            ThemeColors::new("#7c3aed", "#a855f7", "#c084fc", "#ffffff", "#374151"),
            vec![title_layout(vec![
                text_slot("title", (15.0, 35.0, 70.0, 20.0), 40.0, Some(Bold), None),
                text_slot("subtitle", (15.0, 60.0, 70.0, 10.0), 18.0, None, None),
            ])],
        ),
        template(
            "minimal-clean",
            "Clean Minimal",
            "Minimalist design focusing on content with clean typography",
            Minimal,
            ThemeColors::new("#374151", "#6b7280", "#9ca3af", "#ffffff", "#111827"),
            vec![title_layout(vec![
                text_slot("title", (20.0, 40.0, 60.0, 15.0), 36.0, Some(Normal), None),
                text_slot("subtitle", (20.0, 58.0, 60.0, 8.0), 16.0, None, None),
            ])],
        ),
        template(
            "minimal-typography",
            "Typography Focus",
            "Typography-centered design with elegant spacing and hierarchy",
            Minimal,
            ThemeColors::new("#000000", "#404040", "#808080", "#ffffff", "#000000"),
            vec![title_layout(vec![text_slot(
                "title",
                (10.0, 35.0, 80.0, 20.0),
                48.0,
                Some(Bold),
                Some(Left),
            )])],
        ),
        template(
            "creative-vibrant",
            "Vibrant Creative",
            "Bold and colorful design perfect for creative presentations",
            Creative,
            ThemeColors::new("#f59e0b", "#ef4444", "#8b5cf6", "#1f2937", "#ffffff"),
            vec![title_layout(vec![
                text_slot("title", (15.0, 30.0, 70.0, 25.0), 42.0, Some(Bold), None),
                text_slot("subtitle", (15.0, 60.0, 70.0, 12.0), 20.0, None, None),
            ])],
        ),
        template(
            "creative-artistic",
            "Artistic Expression",
            "Artistic and expressive design for creative storytelling",
            Creative,
            ThemeColors::new("#ec4899", "#06b6d4", "#84cc16", "#0f172a", "#f1f5f9"),
            vec![title_layout(vec![text_slot(
                "title",
                (10.0, 25.0, 80.0, 30.0),
                45.0,
                Some(Bold),
                Some(Center),
            )])],
        ),
        template(
            "academic-research",
            "Research Academic",
            "Professional academic template for research presentations",
            Academic,
            ThemeColors::new("#1e3a8a", "#3730a3", "#5b21b6", "#ffffff", "#1e293b"),
            vec![title_layout(vec![
                text_slot("title", (10.0, 25.0, 80.0, 20.0), 38.0, Some(Bold), Some(Center)),
                text_slot("subtitle", (10.0, 50.0, 80.0, 10.0), 18.0, None, Some(Center)),
                text_slot("author", (10.0, 70.0, 80.0, 8.0), 16.0, None, Some(Center)),
            ])],
        ),
        template(
            "academic-thesis",
            "Thesis Defense",
            "Formal template designed for thesis and dissertation presentations",
            Academic,
            ThemeColors::new("#0369a1", "#0284c7", "#0ea5e9", "#ffffff", "#0f172a"),
            vec![title_layout(vec![
                text_slot("title", (10.0, 20.0, 80.0, 25.0), 34.0, Some(Bold), Some(Center)),
                text_slot("institution", (10.0, 55.0, 80.0, 8.0), 16.0, None, Some(Center)),
                text_slot("date", (10.0, 75.0, 80.0, 6.0), 14.0, None, Some(Center)),
            ])],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.by_category(TemplateCategory::Academic).count(), 2);

        let corporate = catalog.by_id("business-corporate").unwrap();
        assert_eq!(corporate.layouts.len(), 2);
        assert_eq!(corporate.colors.accent, "#60a5fa");
    }

    #[test]
    fn test_builtin_ids_unique() {
        let catalog = TemplateCatalog::builtin();
        for (i, t) in catalog.templates().iter().enumerate() {
            assert!(catalog.templates()[..i].iter().all(|o| o.id != t.id));
        }
    }

    #[test]
    fn test_layout_fallback() {
        let corporate = TemplateCatalog::builtin().by_id("business-corporate").unwrap();
        assert_eq!(
            corporate.layout_or_first(Some("content-slide")).unwrap().id,
            "content-slide"
        );
        assert_eq!(
            corporate.layout_or_first(Some("missing")).unwrap().id,
            "title-slide"
        );
        assert_eq!(corporate.layout_or_first(None).unwrap().id, "title-slide");

        let empty = Template {
            layouts: Vec::new(),
            ..corporate.clone()
        };
        assert!(empty.layout_or_first(None).is_none());
    }

    #[test]
    fn test_from_yaml_rejects_duplicates() {
        let yaml = r##"
templates:
  - id: a
    name: A
    category: business
    colors: { primary: "#000000", secondary: "#000000", accent: "#000000", background: "#ffffff", text: "#000000" }
  - id: a
    name: A again
    category: creative
    colors: { primary: "#000000", secondary: "#000000", accent: "#000000", background: "#ffffff", text: "#000000" }
"##;
        let err = TemplateCatalog::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate template id"));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_category() {
        let yaml = r##"
templates:
  - id: a
    name: A
    category: corporate
    colors: { primary: "#000000", secondary: "#000000", accent: "#000000", background: "#ffffff", text: "#000000" }
"##;
        assert!(TemplateCatalog::from_yaml(yaml).is_err());
    }
}
