//! View state kept beside the model.
//!
//! Selection and panel visibility belong to whoever renders the editor; they
//! are passed around explicitly rather than stored in the presentation.

use crate::presentation::Presentation;
use serde::{Deserialize, Serialize};

/// Stage of the editing workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorStep {
    #[default]
    Template,
    Edit,
    Export,
}

/// Which side panels are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelFlags {
    pub slide_list: bool,
    pub properties: bool,
    pub theme_picker: bool,
}

impl Default for PanelFlags {
    fn default() -> Self {
        Self {
            slide_list: true,
            properties: true,
            theme_picker: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub step: EditorStep,
    pub selected_slide_id: Option<String>,
    pub selected_element_id: Option<String>,
    pub panels: PanelFlags,
}

impl ViewState {
    pub fn select_slide(&mut self, slide_id: impl Into<String>) {
        self.selected_slide_id = Some(slide_id.into());
        self.selected_element_id = None;
    }

    pub fn select_element(&mut self, element_id: impl Into<String>) {
        self.selected_element_id = Some(element_id.into());
    }

    /// Drop selections that no longer resolve in `prs`.
    ///
    /// An element selection only survives when it is on the selected slide.
    pub fn reconcile(&mut self, prs: &Presentation) {
        let slide = self
            .selected_slide_id
            .as_deref()
            .and_then(|id| prs.slide(id));

        match slide {
            None => {
                self.selected_slide_id = None;
                self.selected_element_id = None;
            }
            Some(slide) => {
                if let Some(element_id) = self.selected_element_id.as_deref()
                    && slide.element(element_id).is_none()
                {
                    self.selected_element_id = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::ops::{add_slide, delete_element, delete_slide};
    use crate::template::TemplateCatalog;

    fn deck() -> Presentation {
        let template = TemplateCatalog::builtin().by_id("minimal-clean").unwrap();
        let prs = Presentation::new(&template.id);
        let prs = add_slide(&prs, template, None);
        add_slide(&prs, template, None)
    }

    #[test]
    fn test_default_view() {
        let view = ViewState::default();
        assert_eq!(view.step, EditorStep::Template);
        assert!(view.panels.slide_list);
        assert!(!view.panels.theme_picker);
    }

    #[test]
    fn test_reconcile_keeps_live_selection() {
        let prs = deck();
        let slide = prs.slides()[0].clone();

        let mut view = ViewState::default();
        view.select_slide(slide.id.clone());
        view.select_element(slide.elements()[0].id.clone());
        view.reconcile(&prs);

        assert_eq!(view.selected_slide_id.as_deref(), Some(slide.id.as_str()));
        assert!(view.selected_element_id.is_some());
    }

    #[test]
    fn test_reconcile_after_deletes() {
        let prs = deck();
        let slide = prs.slides()[0].clone();
        let element_id = slide.elements()[0].id.clone();

        let mut view = ViewState::default();
        view.select_slide(slide.id.clone());
        view.select_element(element_id.clone());

        let prs = delete_element(&prs, &slide.id, &element_id);
        view.reconcile(&prs);
        assert!(view.selected_slide_id.is_some());
        assert!(view.selected_element_id.is_none());

        view.select_element(slide.elements()[1].id.clone());
        let prs = delete_slide(&prs, &slide.id);
        view.reconcile(&prs);
        assert!(view.selected_slide_id.is_none());
        assert!(view.selected_element_id.is_none());
    }
}
