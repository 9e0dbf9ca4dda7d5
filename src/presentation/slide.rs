use super::element::Element;
use crate::common::new_id;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A slide: an ordered stack of elements.
///
/// Elements later in the list draw on top of earlier ones. Elements are
/// shared behind `Arc` so that edits to one element leave every other
/// element the identical allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: String,
    /// Layout this slide was instantiated from; `None` for a template without layouts
    pub layout_id: Option<String>,
    pub(crate) elements: Vec<Arc<Element>>,
    pub(crate) order: usize,
}

/// Restore `order == index` for every slide.
///
/// Only slides whose order is out of step are reallocated.
pub(crate) fn reindex(slides: &mut [Arc<Slide>]) {
    for (index, slide) in slides.iter_mut().enumerate() {
        if slide.order != index {
            Arc::make_mut(slide).order = index;
        }
    }
}

impl Slide {
    /// Create a slide with a fresh id.
    pub fn new(layout_id: Option<String>, elements: Vec<Element>, order: usize) -> Self {
        Self {
            id: new_id(),
            layout_id,
            elements: elements.into_iter().map(Arc::new).collect(),
            order,
        }
    }

    /// Elements in stacking order.
    #[inline]
    pub fn elements(&self) -> &[Arc<Element>] {
        &self.elements
    }

    /// Position of the slide in its presentation.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn element(&self, element_id: &str) -> Option<&Arc<Element>> {
        self.elements.iter().find(|e| e.id == element_id)
    }

    /// Deep copy with a fresh slide id and fresh element ids.
    pub(crate) fn duplicate(&self, order: usize) -> Self {
        Self {
            id: new_id(),
            layout_id: self.layout_id.clone(),
            elements: self
                .elements
                .iter()
                .map(|e| Arc::new(e.duplicate()))
                .collect(),
            order,
        }
    }
}
