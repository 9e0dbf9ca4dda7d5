/// Document metadata written into the exported package properties.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Document-level properties.
///
/// Mirrors the subset of OPC core/extended properties a presentation export
/// sets: the title and subject describe the deck, author and company identify
/// the producing application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document author/creator
    pub author: Option<String>,
    /// Company/organization
    pub company: Option<String>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Check if the metadata contains any actual data.
    ///
    /// Returns true if at least one field is populated.
    pub fn has_data(&self) -> bool {
        self.title.is_some()
            || self.subject.is_some()
            || self.author.is_some()
            || self.company.is_some()
            || self.created.is_some()
            || self.modified.is_some()
    }
}
