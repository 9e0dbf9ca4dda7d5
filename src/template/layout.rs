//! Layouts and their element placeholders.

use crate::presentation::{ElementKind, ElementStyle, Position};
use serde::{Deserialize, Serialize};

/// What a layout is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Title,
    Content,
    Image,
    Chart,
    Split,
    Quote,
}

/// A typed, positioned slot in a layout.
///
/// The style is partial; missing fields are filled in when a slide is
/// instantiated, never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementPlaceholder {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub position: Position,
    #[serde(default)]
    pub style: ElementStyle,
}

impl ElementPlaceholder {
    pub fn new(id: &str, kind: ElementKind, position: Position, style: ElementStyle) -> Self {
        Self {
            id: id.to_string(),
            kind,
            position,
            style,
        }
    }
}

/// A reusable arrangement of placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LayoutKind,
    #[serde(default, rename = "elements")]
    pub placeholders: Vec<ElementPlaceholder>,
}
