//! Per-element export outcomes.

use thiserror::Error;

/// What an element turned into in the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmittedElement {
    Text,
    Image,
    Shape,
    Chart,
    /// An image element with no source; nothing is written
    Skipped,
}

/// Why an element was replaced by a visible placeholder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlaceholderReason {
    #[error("image unavailable: {0}")]
    ImageUnavailable(String),

    #[error("chart has no data")]
    ChartDataMissing,

    #[error("chart data malformed: {0}")]
    ChartDataMalformed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementOutcome {
    pub slide_index: usize,
    pub element_id: String,
    pub result: Result<EmittedElement, PlaceholderReason>,
}

/// Everything that happened to every element during one export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub outcomes: Vec<ElementOutcome>,
}

impl ExportReport {
    pub(crate) fn record(
        &mut self,
        slide_index: usize,
        element_id: &str,
        result: Result<EmittedElement, PlaceholderReason>,
    ) {
        self.outcomes.push(ElementOutcome {
            slide_index,
            element_id: element_id.to_string(),
            result,
        });
    }

    /// Outcomes that fell back to a placeholder.
    pub fn degraded(&self) -> impl Iterator<Item = &ElementOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }

    pub fn is_clean(&self) -> bool {
        self.degraded().next().is_none()
    }

    pub fn outcome(&self, element_id: &str) -> Option<&ElementOutcome> {
        self.outcomes.iter().find(|o| o.element_id == element_id)
    }
}

/// A finished export: the sink's artifact plus the per-element report.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome<A> {
    pub artifact: A,
    pub report: ExportReport,
}
