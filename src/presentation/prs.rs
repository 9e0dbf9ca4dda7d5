use super::slide::{Slide, reindex};
use crate::common::new_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Title given to a freshly created presentation.
pub const DEFAULT_TITLE: &str = "New Presentation";

/// An in-memory presentation.
///
/// A presentation is a value: editing operations take one by reference and
/// return a new one, sharing every untouched slide. Each slide's `order`
/// equals its index in [`Presentation::slides`] once an operation returns.
///
/// Deserializing renumbers the slides in list order and rejects duplicate
/// slide or element ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "PresentationData")]
pub struct Presentation {
    pub id: String,
    pub title: String,
    /// Template this presentation was created from; never changes
    pub template_id: String,
    pub(crate) slides: Vec<Arc<Slide>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Presentation {
    /// Create an empty presentation bound to a template.
    pub fn new(template_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: new_id(),
            title: DEFAULT_TITLE.to_string(),
            template_id: template_id.into(),
            slides: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Slides in presentation order.
    #[inline]
    pub fn slides(&self) -> &[Arc<Slide>] {
        &self.slides
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide(&self, slide_id: &str) -> Option<&Arc<Slide>> {
        self.slides.iter().find(|s| s.id == slide_id)
    }

    /// Whether every slide's `order` matches its index.
    pub fn is_sequenced(&self) -> bool {
        self.slides.iter().enumerate().all(|(i, s)| s.order == i)
    }
}

/// Serialized form of a [`Presentation`], checked before it becomes one.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PresentationData {
    id: String,
    title: String,
    template_id: String,
    #[serde(default)]
    slides: Vec<Arc<Slide>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PresentationData> for Presentation {
    type Error = String;

    fn try_from(data: PresentationData) -> Result<Self, Self::Error> {
        let mut slide_ids = HashSet::new();
        for slide in &data.slides {
            if !slide_ids.insert(slide.id.as_str()) {
                return Err(format!("duplicate slide id '{}'", slide.id));
            }
            let mut element_ids = HashSet::new();
            for element in &slide.elements {
                if !element_ids.insert(element.id.as_str()) {
                    return Err(format!(
                        "duplicate element id '{}' on slide '{}'",
                        element.id, slide.id
                    ));
                }
            }
        }

        let mut slides = data.slides;
        reindex(&mut slides);
        Ok(Self {
            id: data.id,
            title: data.title,
            template_id: data.template_id,
            slides,
            created_at: data.created_at,
            updated_at: data.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_presentation() {
        let prs = Presentation::new("business-corporate");
        assert_eq!(prs.title, "New Presentation");
        assert_eq!(prs.template_id, "business-corporate");
        assert_eq!(prs.slide_count(), 0);
        assert_eq!(prs.created_at, prs.updated_at);
        assert!(prs.is_sequenced());
    }

    fn two_slides() -> Presentation {
        let mut prs = Presentation::new("minimal-clean");
        prs.slides = vec![
            Arc::new(Slide::new(None, Vec::new(), 5)),
            Arc::new(Slide::new(None, Vec::new(), 9)),
        ];
        prs
    }

    #[test]
    fn test_deserialize_renumbers_slides() {
        let prs = two_slides();
        assert!(!prs.is_sequenced());

        let yaml = serde_saphyr::to_string(&prs).unwrap();
        let loaded: Presentation = serde_saphyr::from_str(&yaml).unwrap();
        assert!(loaded.is_sequenced());
        assert_eq!(loaded.slides()[0].id, prs.slides()[0].id);
        assert_eq!(loaded.slides()[1].order(), 1);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_slide_ids() {
        let mut prs = two_slides();
        let first = prs.slides[0].id.clone();
        Arc::make_mut(&mut prs.slides[1]).id = first;

        let yaml = serde_saphyr::to_string(&prs).unwrap();
        let err = serde_saphyr::from_str::<Presentation>(&yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate slide id"));
    }

    #[test]
    fn test_fresh_ids() {
        let a = Presentation::new("t");
        let b = Presentation::new("t");
        assert_ne!(a.id, b.id);
    }
}
