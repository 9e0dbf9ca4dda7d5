//! Pure editing operations.
//!
//! Each operation takes a presentation by reference and returns the next
//! one. Slides and elements an operation does not touch are carried over as
//! the same `Arc`, and an operation whose target id does not exist returns
//! an unchanged copy without bumping `updated_at`.

use super::instantiate::{instantiate_slide, new_element};
use crate::presentation::slide::reindex;
use crate::presentation::{
    Element, ElementContent, ElementKind, ElementStyle, Position, Presentation, Slide,
};
use crate::template::{Template, ThemeColors};
use chrono::Utc;
use std::sync::Arc;

/// Copy of `prs` with new slides and a fresh modification time.
fn with_slides(prs: &Presentation, slides: Vec<Arc<Slide>>) -> Presentation {
    Presentation {
        slides,
        updated_at: Utc::now(),
        ..prs.clone()
    }
}

fn slide_index(prs: &Presentation, slide_id: &str) -> Option<usize> {
    let index = prs.slides.iter().position(|s| s.id == slide_id);
    if index.is_none() {
        log::debug!("slide '{}' not found", slide_id);
    }
    index
}

/// Replace one slide, produced by `edit` from the current one.
///
/// `edit` returning `None` leaves the presentation unchanged.
fn edit_slide(
    prs: &Presentation,
    slide_id: &str,
    edit: impl FnOnce(&Slide) -> Option<Slide>,
) -> Presentation {
    let Some(index) = slide_index(prs, slide_id) else {
        return prs.clone();
    };
    let Some(slide) = edit(&prs.slides[index]) else {
        return prs.clone();
    };

    let mut slides = prs.slides.clone();
    slides[index] = Arc::new(slide);
    with_slides(prs, slides)
}

/// Replace one element, produced by `edit` from the current one.
fn edit_element(
    prs: &Presentation,
    slide_id: &str,
    element_id: &str,
    edit: impl FnOnce(&Element) -> Option<Element>,
) -> Presentation {
    edit_slide(prs, slide_id, |slide| {
        let Some(index) = slide.elements.iter().position(|e| e.id == element_id) else {
            log::debug!("element '{}' not found on slide '{}'", element_id, slide_id);
            return None;
        };
        let element = edit(&slide.elements[index])?;

        let mut elements = slide.elements.clone();
        elements[index] = Arc::new(element);
        Some(Slide {
            elements,
            ..slide.clone()
        })
    })
}

/// Append a slide instantiated from `layout_id` (or the first layout).
pub fn add_slide(prs: &Presentation, template: &Template, layout_id: Option<&str>) -> Presentation {
    let slide = instantiate_slide(template, layout_id, prs.slides.len());
    let mut slides = prs.slides.clone();
    slides.push(Arc::new(slide));
    with_slides(prs, slides)
}

/// Remove a slide and close the gap in the ordering.
pub fn delete_slide(prs: &Presentation, slide_id: &str) -> Presentation {
    let Some(index) = slide_index(prs, slide_id) else {
        return prs.clone();
    };

    let mut slides = prs.slides.clone();
    slides.remove(index);
    reindex(&mut slides);
    with_slides(prs, slides)
}

/// Append a deep copy of a slide with fresh slide and element ids.
pub fn duplicate_slide(prs: &Presentation, slide_id: &str) -> Presentation {
    let Some(index) = slide_index(prs, slide_id) else {
        return prs.clone();
    };

    let copy = prs.slides[index].duplicate(prs.slides.len());
    let mut slides = prs.slides.clone();
    slides.push(Arc::new(copy));
    with_slides(prs, slides)
}

/// Move a slide to `to_index`, clamped to the last position.
pub fn move_slide(prs: &Presentation, slide_id: &str, to_index: usize) -> Presentation {
    let Some(from) = slide_index(prs, slide_id) else {
        return prs.clone();
    };
    let to = to_index.min(prs.slides.len() - 1);
    if from == to {
        return prs.clone();
    }

    let mut slides = prs.slides.clone();
    let slide = slides.remove(from);
    slides.insert(to, slide);
    reindex(&mut slides);
    with_slides(prs, slides)
}

/// Append a new element of `kind` to a slide.
///
/// Returns the new element's id, or `None` when the slide does not exist.
pub fn add_element(
    prs: &Presentation,
    slide_id: &str,
    kind: ElementKind,
    colors: &ThemeColors,
) -> (Presentation, Option<String>) {
    let element = new_element(kind, colors);
    let element_id = element.id.clone();
    let mut added = false;

    let next = edit_slide(prs, slide_id, |slide| {
        added = true;
        let mut elements = slide.elements.clone();
        elements.push(Arc::new(element));
        Some(Slide {
            elements,
            ..slide.clone()
        })
    });

    (next, added.then_some(element_id))
}

/// Replace an element's content.
///
/// Content of a different kind than the element is ignored; an element's
/// kind never changes after creation.
pub fn update_element_content(
    prs: &Presentation,
    slide_id: &str,
    element_id: &str,
    content: ElementContent,
) -> Presentation {
    edit_element(prs, slide_id, element_id, |element| {
        if element.kind() != content.kind() {
            log::debug!(
                "ignoring {} content for {} element '{}'",
                content.kind(),
                element.kind(),
                element_id
            );
            return None;
        }
        Some(Element {
            content,
            ..element.clone()
        })
    })
}

/// Replace an element's style wholesale.
pub fn update_element_style(
    prs: &Presentation,
    slide_id: &str,
    element_id: &str,
    style: ElementStyle,
) -> Presentation {
    edit_element(prs, slide_id, element_id, |element| {
        Some(Element {
            style,
            ..element.clone()
        })
    })
}

/// Replace an element's position. Values are stored as given.
pub fn update_element_position(
    prs: &Presentation,
    slide_id: &str,
    element_id: &str,
    position: Position,
) -> Presentation {
    edit_element(prs, slide_id, element_id, |element| {
        Some(Element {
            position,
            ..element.clone()
        })
    })
}

pub fn delete_element(prs: &Presentation, slide_id: &str, element_id: &str) -> Presentation {
    edit_slide(prs, slide_id, |slide| {
        let Some(index) = slide.elements.iter().position(|e| e.id == element_id) else {
            log::debug!("element '{}' not found on slide '{}'", element_id, slide_id);
            return None;
        };
        let mut elements = slide.elements.clone();
        elements.remove(index);
        Some(Slide {
            elements,
            ..slide.clone()
        })
    })
}

pub fn update_title(prs: &Presentation, title: &str) -> Presentation {
    Presentation {
        title: title.to_string(),
        updated_at: Utc::now(),
        ..prs.clone()
    }
}
