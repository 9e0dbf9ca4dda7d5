use super::content::ElementContent;
use super::types::{ElementKind, ElementStyle, Position};
use crate::common::new_id;
use serde::{Deserialize, Serialize};

/// One positioned, typed, styled content unit on a slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    #[serde(flatten)]
    pub content: ElementContent,
    pub style: ElementStyle,
    pub position: Position,
}

impl Element {
    /// Create an element with a fresh id.
    pub fn new(content: ElementContent, style: ElementStyle, position: Position) -> Self {
        Self {
            id: new_id(),
            content,
            style,
            position,
        }
    }

    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    /// Copy of this element under a fresh id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: new_id(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_changes_only_id() {
        let el = Element::new(
            ElementContent::Text("Hello".to_string()),
            ElementStyle::default(),
            Position::new(10.0, 10.0, 50.0, 10.0),
        );
        let copy = el.duplicate();
        assert_ne!(copy.id, el.id);
        assert_eq!(copy.content, el.content);
        assert_eq!(copy.position, el.position);
        assert_eq!(copy.kind(), ElementKind::Text);
    }
}
