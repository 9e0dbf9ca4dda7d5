//! Color palettes.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Five-color palette shared by templates and themes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl ThemeColors {
    pub fn new(primary: &str, secondary: &str, accent: &str, background: &str, text: &str) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            text: text.to_string(),
        }
    }

    /// Chart palette: primary, secondary, accent.
    pub fn chart_palette(&self) -> [&str; 3] {
        [&self.primary, &self.secondary, &self.accent]
    }
}

/// A named palette that can be applied to the active template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTheme {
    pub id: String,
    pub name: String,
    pub colors: ThemeColors,
}

/// Id of the theme derived from a template's own colors.
pub const TEMPLATE_DEFAULT_THEME_ID: &str = "template-default";

impl ColorTheme {
    /// Theme carrying a template's own palette.
    pub fn template_default(colors: ThemeColors) -> Self {
        Self {
            id: TEMPLATE_DEFAULT_THEME_ID.to_string(),
            name: "Template Default".to_string(),
            colors,
        }
    }
}

static PREDEFINED_THEMES: Lazy<Vec<ColorTheme>> = Lazy::new(|| {
    let theme = |id: &str, name: &str, colors: ThemeColors| ColorTheme {
        id: id.to_string(),
        name: name.to_string(),
        colors,
    };

    vec![
        theme(
            "ocean",
            "Ocean Blue",
            ThemeColors::new("#0ea5e9", "#0284c7", "#38bdf8", "#ffffff", "#0f172a"),
        ),
        theme(
            "sunset",
            "Sunset Orange",
            ThemeColors::new("#f97316", "#ea580c", "#fb923c", "#ffffff", "#1c1917"),
        ),
        theme(
            "forest",
            "Forest Green",
            ThemeColors::new("#059669", "#047857", "#34d399", "#ffffff", "#0f172a"),
        ),
        theme(
            "purple",
            "Royal Purple",
            ThemeColors::new("#7c3aed", "#6d28d9", "#a78bfa", "#ffffff", "#1e1b4b"),
        ),
        theme(
            "dark",
            "Dark Mode",
            ThemeColors::new("#6366f1", "#4f46e5", "#818cf8", "#1e293b", "#f1f5f9"),
        ),
        theme(
            "monochrome",
            "Monochrome",
            ThemeColors::new("#374151", "#4b5563", "#9ca3af", "#ffffff", "#111827"),
        ),
    ]
});

/// The predefined themes offered next to a template's own palette.
pub fn predefined_themes() -> &'static [ColorTheme] {
    &PREDEFINED_THEMES
}

/// Look up a predefined theme by id.
pub fn predefined_theme(id: &str) -> Option<&'static ColorTheme> {
    PREDEFINED_THEMES.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_themes() {
        assert_eq!(predefined_themes().len(), 6);
        let dark = predefined_theme("dark").unwrap();
        assert_eq!(dark.colors.background, "#1e293b");
        assert!(predefined_theme("neon").is_none());
    }

    #[test]
    fn test_template_default() {
        let colors = ThemeColors::new("#000000", "#111111", "#222222", "#ffffff", "#333333");
        let theme = ColorTheme::template_default(colors.clone());
        assert_eq!(theme.id, "template-default");
        assert_eq!(theme.colors, colors);
        assert_eq!(colors.chart_palette(), ["#000000", "#111111", "#222222"]);
    }
}
