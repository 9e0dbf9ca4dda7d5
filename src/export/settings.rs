//! Export configuration.

use crate::common::Result;
use crate::presentation::Presentation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Slide aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideSize {
    #[default]
    Widescreen,
    Standard,
}

impl SlideSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Widescreen => "16:9",
            Self::Standard => "4:3",
        }
    }

    /// Parse a ratio string; anything other than `"4:3"` is 16:9.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim() {
            "4:3" => Self::Standard,
            "16:9" => Self::Widescreen,
            other => {
                log::debug!("unrecognised slide size '{}', using 16:9", other);
                Self::Widescreen
            }
        }
    }
}

impl fmt::Display for SlideSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SlideSize {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl Serialize for SlideSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SlideSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse_lenient(&s))
    }
}

/// Requested output quality.
///
/// Carried through to the sink untouched; the PPTX writer has no quality
/// knob, so every value produces the same package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportQuality {
    #[default]
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportSettings {
    /// Base file name; the `.pptx` extension is appended on export
    pub file_name: String,
    pub include_notes: bool,
    pub slide_size: SlideSize,
    pub quality: ExportQuality,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            file_name: "presentation".to_string(),
            include_notes: false,
            slide_size: SlideSize::Widescreen,
            quality: ExportQuality::High,
        }
    }
}

impl ExportSettings {
    /// Defaults with the presentation title as file name.
    pub fn for_presentation(prs: &Presentation) -> Self {
        Self {
            file_name: prs.title.clone(),
            ..Self::default()
        }
    }

    /// Load settings from YAML. Missing keys take their defaults.
    ///
    /// ```rust
    /// use deckwright::export::{ExportSettings, SlideSize};
    ///
    /// let settings = ExportSettings::from_yaml("fileName: deck\nslideSize: \"4:3\"\n").unwrap();
    /// assert_eq!(settings.file_name, "deck");
    /// assert_eq!(settings.slide_size, SlideSize::Standard);
    /// assert!(!settings.include_notes);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_saphyr::from_str(yaml)?)
    }

    /// Output file name with extension.
    pub fn output_file_name(&self) -> String {
        format!("{}.pptx", self.file_name)
    }
}
