//! Slide instantiation and editing.
//!
//! - [`instantiate`]: turns template layouts into slides
//! - [`ops`]: pure `(&Presentation, ..) -> Presentation` editing operations
//! - [`EditorSession`]: the active presentation, template and theme
//! - [`ViewState`]: selection and panel state, kept outside the model
//!
//! # Example
//!
//! ```rust
//! use deckwright::editor::{EditorSession, ops};
//! use deckwright::presentation::ElementKind;
//! use deckwright::template::TemplateCatalog;
//!
//! let template = TemplateCatalog::builtin().by_id("business-corporate").unwrap();
//! let mut session = EditorSession::new();
//! session.create_presentation(template);
//! session.add_slide(None);
//!
//! let prs = session.presentation().unwrap().clone();
//! let slide_id = prs.slides()[0].id.clone();
//! let (next, element_id) = ops::add_element(&prs, &slide_id, ElementKind::Shape, &template.colors);
//! assert!(element_id.is_some());
//! assert_eq!(next.slides()[0].element_count(), 3);
//! // the earlier value is untouched
//! assert_eq!(prs.slides()[0].element_count(), 2);
//! ```

pub mod instantiate;
pub mod ops;
mod session;
mod view;

pub use instantiate::{instantiate_slide, new_element};
pub use session::EditorSession;
pub use view::{EditorStep, PanelFlags, ViewState};
