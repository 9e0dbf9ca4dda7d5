//! Template catalog: templates, layouts, placeholders and color themes.
//!
//! Templates are static, read-only data. The built-in catalog is available
//! through [`TemplateCatalog::builtin`]; additional catalogs can be loaded
//! from YAML with [`TemplateCatalog::from_yaml`].

// Submodule declarations
mod catalog;
mod layout;
mod theme;

// Re-exports
pub use catalog::{Template, TemplateCatalog, TemplateCategory};
pub use layout::{ElementPlaceholder, Layout, LayoutKind};
pub use theme::{
    ColorTheme, TEMPLATE_DEFAULT_THEME_ID, ThemeColors, predefined_theme, predefined_themes,
};
