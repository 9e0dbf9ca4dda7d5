//! Geometry and style value types shared by slides, elements and templates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rectangle in percentages of the slide bounds.
///
/// Each field is nominally in `0..=100`, but nothing enforces it: an element
/// may sit partly or wholly outside the slide and is then clipped or
/// overflowing when rendered or exported.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Position {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// The closed set of element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Shape,
    Chart,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Shape => "shape",
            Self::Chart => "chart",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = crate::common::Error;

    fn from_str(s: &str) -> crate::common::Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "shape" => Ok(Self::Shape),
            "chart" => Ok(Self::Chart),
            other => Err(crate::common::Error::InvalidValue(format!(
                "Unknown element type '{}'",
                other
            ))),
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// DrawingML `algn` attribute value.
    pub fn xml_value(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Visual style of an element.
///
/// Every field is optional and defaults independently. Template placeholders
/// carry a partial style; instantiated elements have every field resolved.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
}

impl ElementStyle {
    pub fn is_bold(&self) -> bool {
        self.font_weight == Some(FontWeight::Bold)
    }

    pub fn is_italic(&self) -> bool {
        self.font_style == Some(FontStyle::Italic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_kind_parse() {
        assert_eq!("chart".parse::<ElementKind>().unwrap(), ElementKind::Chart);
        assert!("video".parse::<ElementKind>().is_err());
        assert_eq!(ElementKind::Image.to_string(), "image");
    }

    #[test]
    fn test_style_flags() {
        let style = ElementStyle {
            font_weight: Some(FontWeight::Bold),
            ..Default::default()
        };
        assert!(style.is_bold());
        assert!(!style.is_italic());
    }

    #[test]
    fn test_align_xml_values() {
        assert_eq!(TextAlign::Left.xml_value(), "l");
        assert_eq!(TextAlign::Center.xml_value(), "ctr");
        assert_eq!(TextAlign::Right.xml_value(), "r");
    }
}
