//! The active presentation, template and color theme.

use super::ops;
use crate::presentation::{ElementContent, ElementKind, ElementStyle, Position, Presentation};
use crate::template::{ColorTheme, Template};

/// Editor state: at most one presentation, bound to one template.
///
/// Every editing method is a no-op while no presentation is active. The
/// session owns the current value and swaps it for the result of the
/// matching pure operation in [`super::ops`], so a caller that keeps earlier
/// values has an undo history for free.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    presentation: Option<Presentation>,
    template: Option<Template>,
    theme: Option<ColorTheme>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        self.presentation.as_ref()
    }

    /// The active template, with any applied theme's colors.
    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    pub fn theme(&self) -> Option<&ColorTheme> {
        self.theme.as_ref()
    }

    /// Start an empty presentation from `template`, replacing any active one.
    pub fn create_presentation(&mut self, template: &Template) -> &Presentation {
        log::debug!("creating presentation from template '{}'", template.id);
        self.theme = Some(ColorTheme::template_default(template.colors.clone()));
        self.template = Some(template.clone());
        self.presentation.insert(Presentation::new(&template.id))
    }

    /// Drop the presentation, template and theme.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the active template's colors with `theme`'s.
    ///
    /// Colors already written into element styles are left as they are;
    /// only elements created afterwards pick up the new palette.
    pub fn apply_theme(&mut self, theme: &ColorTheme) {
        let Some(template) = self.template.as_mut() else {
            log::debug!("no active template, ignoring theme '{}'", theme.id);
            return;
        };
        template.colors = theme.colors.clone();
        self.theme = Some(theme.clone());
    }

    /// Replace the presentation with `edit`'s result.
    fn update(&mut self, edit: impl FnOnce(&Presentation) -> Presentation) {
        if let Some(prs) = self.presentation.as_ref() {
            let next = edit(prs);
            self.presentation = Some(next);
        }
    }

    pub fn add_slide(&mut self, layout_id: Option<&str>) {
        let Some(template) = self.template.as_ref() else {
            return;
        };
        if let Some(prs) = self.presentation.as_ref() {
            self.presentation = Some(ops::add_slide(prs, template, layout_id));
        }
    }

    pub fn delete_slide(&mut self, slide_id: &str) {
        self.update(|p| ops::delete_slide(p, slide_id));
    }

    pub fn duplicate_slide(&mut self, slide_id: &str) {
        self.update(|p| ops::duplicate_slide(p, slide_id));
    }

    pub fn move_slide(&mut self, slide_id: &str, to_index: usize) {
        self.update(|p| ops::move_slide(p, slide_id, to_index));
    }

    /// Add an element and return its id.
    pub fn add_element(&mut self, slide_id: &str, kind: ElementKind) -> Option<String> {
        let template = self.template.as_ref()?;
        let prs = self.presentation.as_ref()?;
        let (next, id) = ops::add_element(prs, slide_id, kind, &template.colors);
        self.presentation = Some(next);
        id
    }

    pub fn update_element_content(
        &mut self,
        slide_id: &str,
        element_id: &str,
        content: ElementContent,
    ) {
        self.update(|p| ops::update_element_content(p, slide_id, element_id, content));
    }

    pub fn update_element_style(&mut self, slide_id: &str, element_id: &str, style: ElementStyle) {
        self.update(|p| ops::update_element_style(p, slide_id, element_id, style));
    }

    pub fn update_element_position(
        &mut self,
        slide_id: &str,
        element_id: &str,
        position: Position,
    ) {
        self.update(|p| ops::update_element_position(p, slide_id, element_id, position));
    }

    pub fn delete_element(&mut self, slide_id: &str, element_id: &str) {
        self.update(|p| ops::delete_element(p, slide_id, element_id));
    }

    pub fn update_title(&mut self, title: &str) {
        self.update(|p| ops::update_title(p, title));
    }
}
