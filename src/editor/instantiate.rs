//! Slide instantiation from template layouts.
//!
//! A layout's placeholders become concrete elements: each gets a fresh id,
//! default content for its kind, and a fully resolved style. Positions are
//! copied verbatim.

use crate::common::style::TRANSPARENT;
use crate::presentation::{
    Element, ElementContent, ElementKind, ElementStyle, FontStyle, FontWeight, Position, Slide,
    TextAlign,
};
use crate::template::{ElementPlaceholder, Template, ThemeColors};

/// Text given to text elements created from a placeholder.
pub const PLACEHOLDER_TEXT: &str = "Click to edit text";
/// Text given to text elements added by the user.
pub const NEW_ELEMENT_TEXT: &str = "New text element";

pub const DEFAULT_FONT_SIZE: f64 = 18.0;
pub const DEFAULT_FONT_FAMILY: &str = "Inter";

/// Where every newly added element lands, regardless of what is already on the slide.
pub const NEW_ELEMENT_POSITION: Position = Position::new(20.0, 20.0, 40.0, 20.0);

/// Resolve a partial style against the global defaults.
///
/// Color always comes from the theme's text color and the background is
/// always `background`; the partial style's values for those are ignored.
fn resolve_style(partial: &ElementStyle, colors: &ThemeColors, background: &str) -> ElementStyle {
    ElementStyle {
        font_size: Some(partial.font_size.unwrap_or(DEFAULT_FONT_SIZE)),
        font_family: Some(
            partial
                .font_family
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_FAMILY.to_string()),
        ),
        color: Some(colors.text.clone()),
        background_color: Some(background.to_string()),
        text_align: Some(partial.text_align.unwrap_or(TextAlign::Left)),
        font_weight: Some(partial.font_weight.unwrap_or(FontWeight::Normal)),
        font_style: Some(partial.font_style.unwrap_or(FontStyle::Normal)),
    }
}

/// Materialize one placeholder into an element with a fresh id.
pub fn instantiate_element(placeholder: &ElementPlaceholder, colors: &ThemeColors) -> Element {
    Element::new(
        ElementContent::empty(placeholder.kind, PLACEHOLDER_TEXT),
        resolve_style(&placeholder.style, colors, TRANSPARENT),
        placeholder.position,
    )
}

/// Build a slide from `layout_id`, or from the template's first layout when
/// the id is absent or unknown.
///
/// A template without layouts yields a slide with no elements and no
/// layout reference.
///
/// ```rust
/// use deckwright::editor::instantiate_slide;
/// use deckwright::template::TemplateCatalog;
///
/// let template = TemplateCatalog::builtin().by_id("academic-thesis").unwrap();
/// let slide = instantiate_slide(template, None, 0);
/// assert_eq!(slide.element_count(), 3);
/// assert_eq!(slide.layout_id.as_deref(), Some("title-slide"));
/// ```
pub fn instantiate_slide(template: &Template, layout_id: Option<&str>, order: usize) -> Slide {
    let Some(layout) = template.layout_or_first(layout_id) else {
        log::debug!("template '{}' has no layouts, creating empty slide", template.id);
        return Slide::new(None, Vec::new(), order);
    };

    if let Some(requested) = layout_id
        && requested != layout.id
    {
        log::debug!(
            "layout '{}' not found in template '{}', using '{}'",
            requested,
            template.id,
            layout.id
        );
    }

    let elements = layout
        .placeholders
        .iter()
        .map(|p| instantiate_element(p, &template.colors))
        .collect();

    Slide::new(Some(layout.id.clone()), elements, order)
}

/// A freshly added element of `kind`, at the fixed default position.
///
/// Shapes are filled with the theme accent; everything else starts
/// transparent.
pub fn new_element(kind: ElementKind, colors: &ThemeColors) -> Element {
    let background = match kind {
        ElementKind::Shape => colors.accent.as_str(),
        ElementKind::Text | ElementKind::Image | ElementKind::Chart => TRANSPARENT,
    };

    Element::new(
        ElementContent::empty(kind, NEW_ELEMENT_TEXT),
        resolve_style(&ElementStyle::default(), colors, background),
        NEW_ELEMENT_POSITION,
    )
}
