//! Element content: the tagged variant that carries both kind and payload.

use super::types::ElementKind;
use serde::{Deserialize, Serialize};

/// Content of an element.
///
/// The variant is the element's kind; there is no separate type tag that
/// could disagree with the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum ElementContent {
    /// Plain text
    Text(String),
    /// Image reference, absent until the user picks a source
    Image(Option<ImageContent>),
    /// Filled rectangle; carries no content
    Shape,
    /// Chart data, absent until the user supplies a series
    Chart(Option<ChartContent>),
}

impl ElementContent {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Text(_) => ElementKind::Text,
            Self::Image(_) => ElementKind::Image,
            Self::Shape => ElementKind::Shape,
            Self::Chart(_) => ElementKind::Chart,
        }
    }

    /// Empty content of the given kind, with `text` used for text elements.
    pub fn empty(kind: ElementKind, text: &str) -> Self {
        match kind {
            ElementKind::Text => Self::Text(text.to_string()),
            ElementKind::Image => Self::Image(None),
            ElementKind::Shape => Self::Shape,
            ElementKind::Chart => Self::Chart(None),
        }
    }

    /// Text of a text element.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Image source and alternative text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageContent {
    /// File path or `data:` URI
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

impl ImageContent {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Chart flavour chosen by the author.
///
/// Export always renders a bar chart; the authored type is kept for the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Pie,
    Doughnut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartContent {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub data: ChartData,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub background_color: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub border_color: Vec<String>,
}

/// The one series a bar chart export uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesRef<'a> {
    pub name: &'a str,
    pub labels: &'a [String],
    pub values: &'a [f64],
}

impl ChartContent {
    /// Sample content used when a chart is first inserted.
    pub fn sample(chart_type: ChartType) -> Self {
        let labels = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
        Self {
            chart_type,
            data: ChartData {
                labels: labels.iter().map(|l| l.to_string()).collect(),
                datasets: vec![ChartDataset {
                    label: "Sample Dataset".to_string(),
                    data: vec![65.0, 59.0, 80.0, 81.0, 56.0, 55.0],
                    background_color: [
                        "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
                    ]
                    .iter()
                    .map(|c| c.to_string())
                    .collect(),
                    border_color: vec!["#FFFFFF".to_string()],
                }],
            },
        }
    }

    /// The first series, or a description of why the data cannot be charted.
    ///
    /// Data is malformed when there is no dataset, the first dataset has no
    /// values, or labels and values differ in length.
    pub fn first_series(&self) -> Result<SeriesRef<'_>, String> {
        let dataset = self
            .data
            .datasets
            .first()
            .ok_or_else(|| "chart has no datasets".to_string())?;

        if dataset.data.is_empty() {
            return Err("first dataset has no values".to_string());
        }

        if dataset.data.len() != self.data.labels.len() {
            return Err(format!(
                "{} labels for {} values",
                self.data.labels.len(),
                dataset.data.len()
            ));
        }

        if dataset.data.iter().any(|v| !v.is_finite()) {
            return Err("first dataset contains non-finite values".to_string());
        }

        Ok(SeriesRef {
            name: &dataset.label,
            labels: &self.data.labels,
            values: &dataset.data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_variant() {
        assert_eq!(ElementContent::Shape.kind(), ElementKind::Shape);
        assert_eq!(
            ElementContent::empty(ElementKind::Text, "hi"),
            ElementContent::Text("hi".to_string())
        );
        assert_eq!(
            ElementContent::empty(ElementKind::Chart, "ignored"),
            ElementContent::Chart(None)
        );
    }

    #[test]
    fn test_sample_is_well_formed() {
        let chart = ChartContent::sample(ChartType::Line);
        let series = chart.first_series().unwrap();
        assert_eq!(series.labels.len(), 6);
        assert_eq!(series.values[2], 80.0);
        assert_eq!(series.name, "Sample Dataset");
    }

    #[test]
    fn test_malformed_chart_data() {
        let mut chart = ChartContent::sample(ChartType::Bar);
        chart.data.labels.pop();
        assert!(chart.first_series().is_err());

        chart.data.datasets.clear();
        assert_eq!(chart.first_series().unwrap_err(), "chart has no datasets");

        let empty = ChartContent {
            chart_type: ChartType::Bar,
            data: ChartData {
                labels: Vec::new(),
                datasets: vec![ChartDataset::default()],
            },
        };
        assert!(empty.first_series().is_err());
    }
}
